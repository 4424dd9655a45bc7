//! Course generation: endpoint client, local templates and the trigger
//! that chooses between them

pub mod client;
pub mod duration;
pub mod fallback;
pub mod trigger;

pub use client::{
    ContentGenerator, CourseGenerationRequest, CourseGenerationResponse, GenerationError,
    HttpContentGenerator,
};
pub use fallback::generate_local_course;
pub use trigger::{build_request, GenerationTrigger};
