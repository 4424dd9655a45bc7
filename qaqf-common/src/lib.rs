//! # QAQF Common Library
//!
//! Shared code for the QAQF course services including:
//! - Error types
//! - TOML configuration loading and precedence resolution
//! - QAQF framework reference data and compliance scoring
//! - British-English terminology checks

pub mod config;
pub mod error;
pub mod qaqf;
pub mod terminology;

pub use error::{Error, Result};
pub use qaqf::{QaqfCharacteristic, QaqfLevel, QaqfLevelCategory};
