//! Error handling module
//!
//! Defines the validation error taxonomy and exit codes

pub mod types;

pub use types::*;
