//! Render a configuration summary for output

use core::str::FromStr;

use crate::config::ConfigSummary;
use crate::error::RepocheckError;

/// Output format for the summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum OutputFormat {
    /// `key: value`, one field per line
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
    /// YAML mapping
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(format!("Invalid format: {s}. Use 'text', 'json' or 'yaml'")),
        }
    }
}

/// Render a summary in the requested format
///
/// # Errors
///
/// Returns an error if the summary cannot be serialized
#[inline]
pub fn render_summary(
    summary: &ConfigSummary,
    format: OutputFormat,
) -> Result<String, RepocheckError> {
    match format {
        OutputFormat::Text => Ok(summary.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(summary)
            .map_err(|e| RepocheckError::output(format!("Failed to serialize to JSON: {e}"))),
        OutputFormat::Yaml => serde_yaml::to_string(summary)
            .map(|yaml| yaml.trim_end().to_owned())
            .map_err(|e| RepocheckError::output(format!("Failed to serialize to YAML: {e}"))),
    }
}
