//! HTTP API handlers for qaqf-cg

pub mod catalog;
pub mod extract;
pub mod health;
pub mod qaqf;
pub mod wizard;

pub use catalog::catalog_routes;
pub use extract::{ApiJson, ApiPath};
pub use health::health_routes;
pub use qaqf::qaqf_routes;
pub use wizard::wizard_routes;
