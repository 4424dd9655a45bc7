//! Four-step course wizard: Basic Info → Learning Objectives →
//! Specialized Content → Review & Generate

pub mod controller;
pub mod sessions;
pub mod steps;
pub mod validators;

pub use controller::{WizardController, WizardData, WizardError};
pub use sessions::{SessionStore, DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_SESSIONS};
pub use steps::{WizardStep, FIRST_STEP, LAST_STEP, REVIEW_STEP};
