//! Operations module
//!
//! Coordinates validation of the merged inputs and rendering of the result

pub mod check;
pub mod report;

pub use check::*;
pub use report::*;
