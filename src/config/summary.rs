//! Flat view of a validated configuration

use core::fmt;

use crate::config::mode::Mode;
use crate::config::repository::RepositoryType;
use serde::{Deserialize, Serialize};

/// Field-to-value view of a [`Configuration`](crate::config::Configuration)
///
/// Field order is the rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSummary {
    pub package_name: String,
    pub repository: String,
    pub test_repo_mode: Mode,
    pub repository_type: RepositoryType,
}

/// One `key: value` line per field, without a trailing newline
impl fmt::Display for ConfigSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "package_name: {}", self.package_name)?;
        writeln!(f, "repository: {}", self.repository)?;
        writeln!(f, "test_repo_mode: {}", self.test_repo_mode)?;
        write!(f, "repository_type: {}", self.repository_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConfigSummary {
        ConfigSummary {
            package_name: "my-pkg_1.0".to_owned(),
            repository: "https://example.com/repo".to_owned(),
            test_repo_mode: Mode::On,
            repository_type: RepositoryType::Url,
        }
    }

    #[test]
    fn test_text_rendering_is_line_per_field() {
        assert_eq!(
            sample().to_string(),
            "package_name: my-pkg_1.0\n\
             repository: https://example.com/repo\n\
             test_repo_mode: on\n\
             repository_type: URL"
        );
    }

    #[test]
    fn test_serialized_field_values() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "package_name": "my-pkg_1.0",
                "repository": "https://example.com/repo",
                "test_repo_mode": "on",
                "repository_type": "URL"
            })
        );
    }
}
