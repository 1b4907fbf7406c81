//! Custom error types with exit codes

use thiserror::Error;

/// A single failed validation rule
///
/// Each variant is produced only by the check for its own field and never
/// leaves the library unwrapped; see [`ValidationError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Package name is empty, too long, or contains disallowed characters
    #[error("Package name error: {message}")]
    PackageName { message: String },

    /// Repository is empty, malformed, uses a disallowed scheme, or points
    /// at something that is not an existing regular file
    #[error("Repository error: {message}")]
    Repository { message: String },

    /// Test repository mode is not one of the allowed values
    #[error("Test mode error: {message}")]
    TestMode { message: String },
}

impl ConfigError {
    /// Create a package name error
    #[inline]
    pub fn package_name<S: Into<String>>(message: S) -> Self {
        Self::PackageName {
            message: message.into(),
        }
    }

    /// Create a repository error
    #[inline]
    pub fn repository<S: Into<String>>(message: S) -> Self {
        Self::Repository {
            message: message.into(),
        }
    }

    /// Create a test mode error
    #[inline]
    pub fn test_mode<S: Into<String>>(message: S) -> Self {
        Self::TestMode {
            message: message.into(),
        }
    }

    /// The message without the kind prefix
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Self::PackageName { message }
            | Self::Repository { message }
            | Self::TestMode { message } => message,
        }
    }
}

/// The only failure kind returned by configuration construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration validation failed: {source}")]
pub struct ValidationError {
    #[from]
    source: ConfigError,
}

impl ValidationError {
    /// The rule that failed
    #[must_use]
    #[inline]
    pub const fn config_error(&self) -> &ConfigError {
        &self.source
    }
}

/// Top-level error type for the repocheck command
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RepocheckError {
    /// Validation Error - one of the inputs was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Input File Error - the YAML input file is missing or unreadable
    #[error("Input file error: {message}")]
    InputFile { message: String },

    /// Output Error - the summary could not be rendered
    #[error("Output error: {message}")]
    Output { message: String },
}

impl RepocheckError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Validation(_) => 1,
            Self::InputFile { .. } => 2,
            Self::Output { .. } => 3,
        }
    }

    /// Create an input file error
    #[inline]
    pub fn input_file<S: Into<String>>(message: S) -> Self {
        Self::InputFile {
            message: message.into(),
        }
    }

    /// Create an output error
    #[inline]
    pub fn output<S: Into<String>>(message: S) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}
