//! `RepoCheck` - A CLI tool for validating a package name and repository reference
//!
//! This library validates a package name, classifies a repository
//! reference as a URL or a local file path, normalizes the test repository
//! mode, and reports the resulting configuration.

pub mod cli;
pub mod config;
pub mod error;
pub mod operations;
pub mod system;

use anyhow::Result;
use cli::Args;
use operations::CheckOperation;
use system::System;

/// Main entry point for the repocheck library
///
/// Returns the rendered summary; printing is left to the caller.
///
/// # Errors
///
/// Returns an error if the input file cannot be loaded, validation fails,
/// or the summary cannot be rendered. The error downcasts to
/// [`error::RepocheckError`] for the exit code.
pub fn run(args: Args, system: &dyn System) -> Result<String> {
    let operation = CheckOperation::new(args, system)?;
    Ok(operation.execute()?)
}
