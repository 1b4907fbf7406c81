//! Test repository mode flag

use core::fmt;
use core::str::FromStr;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Accepted spellings of the mode flag, after lowercasing
pub const VALID_MODES: [&str; 2] = ["on", "off"];

/// Mode used when the caller does not supply one
pub const DEFAULT_MODE: &str = "off";

/// Whether collaborators should use the test repository pathway
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Mode {
    On,
    #[default]
    Off,
}

impl Mode {
    /// Normalized lowercase name
    #[must_use]
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            _ => Err(ConfigError::test_mode(format!(
                "Invalid test repo mode: '{s}'. Allowed values: {}",
                VALID_MODES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for Mode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
