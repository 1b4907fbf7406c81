//! Check operation coordination

use crate::cli::Args;
use crate::config::{Configuration, DEFAULT_MODE, InputFile};
use crate::error::RepocheckError;
use crate::operations::report::{OutputFormat, render_summary};
use crate::system::System;
use tracing::debug;

/// Merges inputs, validates them, and renders the summary
#[non_exhaustive]
pub struct CheckOperation<'src> {
    input: InputFile,
    format: OutputFormat,
    system: &'src dyn System,
}

impl<'src> CheckOperation<'src> {
    /// Create a new check operation from CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output format is not recognized
    /// - The input file given with `--config` cannot be loaded or parsed
    #[inline]
    pub fn new(args: Args, system: &'src dyn System) -> Result<Self, RepocheckError> {
        let format = args
            .format
            .parse::<OutputFormat>()
            .map_err(RepocheckError::output)?;

        let file = match args.config.as_deref() {
            Some(path) => InputFile::load(system, path)?,
            None => InputFile::default(),
        };
        let input = file.merge(args.package_name, args.repository, args.mode);

        Ok(Self {
            input,
            format,
            system,
        })
    }

    /// Validate the merged inputs
    ///
    /// Missing values are validated as empty strings, so they fail with the
    /// same message as an explicitly empty argument.
    ///
    /// # Errors
    ///
    /// Returns a validation error for the first rule that fails
    #[inline]
    pub fn validate(&self) -> Result<Configuration, RepocheckError> {
        let package_name = self.input.package_name.as_deref().unwrap_or_default();
        let repository = self.input.repository.as_deref().unwrap_or_default();
        let mode = self.input.test_repo_mode.as_deref().unwrap_or(DEFAULT_MODE);

        debug!(
            "Validating package '{}' against repository '{}' (mode '{}')",
            package_name, repository, mode
        );

        Ok(Configuration::new(
            self.system,
            package_name,
            repository,
            mode,
        )?)
    }

    /// Validate and render the summary
    ///
    /// # Errors
    ///
    /// Returns an error if validation or rendering fails
    #[inline]
    pub fn execute(&self) -> Result<String, RepocheckError> {
        let config = self.validate()?;
        render_summary(&config.summary(), self.format)
    }
}
