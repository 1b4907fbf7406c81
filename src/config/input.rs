//! YAML input file loading
//!
//! The input file supplies defaults for the three raw values; anything
//! given on the command line takes precedence.

use crate::error::RepocheckError;
use crate::system::System;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Raw, unvalidated values read from a YAML input file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_repo_mode: Option<String>,
}

impl InputFile {
    /// Load and parse an input file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file is not valid YAML of the expected shape
    pub fn load(system: &dyn System, path: &str) -> Result<Self, RepocheckError> {
        let path_obj = Path::new(path);

        let exists = system.exists(path_obj).map_err(|e| {
            RepocheckError::input_file(format!("Cannot access input file {path}: {e}"))
        })?;
        if !exists {
            return Err(RepocheckError::input_file(format!(
                "Input file not found: {path}"
            )));
        }

        let content = system.read_to_string(path_obj).map_err(|e| {
            RepocheckError::input_file(format!("Failed to read input file {path}: {e}"))
        })?;

        let input = Self::load_from_string(&content).map_err(|e| {
            RepocheckError::input_file(format!("Failed to parse YAML input file {path}: {e}"))
        })?;

        debug!("Loaded input file {}", path);
        Ok(input)
    }

    /// Parse input file contents
    ///
    /// An empty document yields an input with every field unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or has unknown keys
    pub fn load_from_string(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Overlay explicitly given values on top of this file's values
    #[must_use]
    pub fn merge(
        self,
        package_name: Option<String>,
        repository: Option<String>,
        test_repo_mode: Option<String>,
    ) -> Self {
        Self {
            package_name: package_name.or(self.package_name),
            repository: repository.or(self.repository),
            test_repo_mode: test_repo_mode.or(self.test_repo_mode),
        }
    }
}
