//! System abstraction for filesystem operations
//!
//! Validation only ever stats the repository path and reads the optional
//! input file. Both go through the [`System`] trait so the rules can be
//! tested against an in-memory filesystem.

use std::io;
use std::path::Path;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for system operations
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::fs`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if a path exists
    ///
    /// Returns `Ok(false)` when the path is absent and an error only when
    /// existence cannot be determined (e.g. permission denied).
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Check if a path points to a regular file
    fn is_file(&self, path: &Path) -> io::Result<bool>;
}
