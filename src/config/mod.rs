//! Configuration management module
//!
//! Validates the raw package name, repository reference and mode flag,
//! and loads them from an optional YAML input file

pub mod input;
pub mod mode;
pub mod repository;
pub mod summary;
pub mod validation;

pub use input::InputFile;
pub use mode::{DEFAULT_MODE, Mode};
pub use repository::{Repository, RepositoryType};
pub use summary::ConfigSummary;

use crate::error::ValidationError;
use crate::system::System;
use tracing::info;

/// A fully validated configuration
///
/// Only obtainable through [`Configuration::new`], so every instance
/// satisfies all validation rules as of construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    package_name: String,
    repository: Repository,
    mode: Mode,
}

impl Configuration {
    /// Validate raw inputs and build a configuration
    ///
    /// Checks run in order package name, repository, mode; the first
    /// failure is returned. Pass [`DEFAULT_MODE`] when the caller has no
    /// mode of its own.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] wrapping the first failed rule.
    #[inline]
    pub fn new(
        system: &dyn System,
        package_name: &str,
        repository: &str,
        mode: &str,
    ) -> Result<Self, ValidationError> {
        validation::validate_package_name(package_name)?;
        let repository = validation::validate_repository(system, repository)?;
        let mode = validation::validate_mode(mode)?;

        info!("Configuration for package '{}' is valid", package_name);

        Ok(Self {
            package_name: package_name.to_owned(),
            repository,
            mode,
        })
    }

    #[must_use]
    #[inline]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    #[must_use]
    #[inline]
    pub const fn repository(&self) -> &Repository {
        &self.repository
    }

    #[must_use]
    #[inline]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    #[inline]
    pub const fn is_url(&self) -> bool {
        self.repository.is_url()
    }

    /// Derived flat view for reporting
    #[must_use]
    #[inline]
    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            package_name: self.package_name.clone(),
            repository: self.repository.as_str().to_owned(),
            test_repo_mode: self.mode,
            repository_type: self.repository.repository_type(),
        }
    }
}
