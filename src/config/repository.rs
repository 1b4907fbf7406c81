//! Repository reference parsing and classification

use core::fmt;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// A repository reference, classified once at parse time
///
/// A reference is a URL only when it carries both a scheme and a non-empty
/// network location (`scheme://netloc...`). The network location is not
/// validated beyond bracket balance: ports, hosts and user info are taken
/// as written. Everything else, including `file:///abs/path` and `C:/path`,
/// is treated as a filesystem path using the raw string unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Repository {
    Url {
        scheme: String,
        netloc: String,
        raw: String,
    },
    Path {
        raw: String,
    },
}

/// Human-readable classification label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RepositoryType {
    #[serde(rename = "URL")]
    Url,
    #[serde(rename = "file")]
    File,
}

impl RepositoryType {
    #[must_use]
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Url => "URL",
            Self::File => "file",
        }
    }
}

impl fmt::Display for RepositoryType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Repository {
    /// Parse and classify a raw repository reference
    ///
    /// This is purely syntactic; no filesystem or network access happens
    /// here.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The reference is empty
    /// - The network location has unbalanced IPv6 brackets
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        if raw.is_empty() {
            return Err(ConfigError::repository("Repository cannot be empty"));
        }

        let (scheme, netloc) = split_reference(raw)?;
        if scheme.is_empty() || netloc.is_empty() {
            return Ok(Self::Path {
                raw: raw.to_owned(),
            });
        }

        Ok(Self::Url {
            scheme,
            netloc,
            raw: raw.to_owned(),
        })
    }

    #[must_use]
    #[inline]
    pub const fn is_url(&self) -> bool {
        matches!(self, Self::Url { .. })
    }

    /// The reference exactly as the caller supplied it
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Url { raw, .. } | Self::Path { raw } => raw,
        }
    }

    #[must_use]
    #[inline]
    pub const fn repository_type(&self) -> RepositoryType {
        match self {
            Self::Url { .. } => RepositoryType::Url,
            Self::Path { .. } => RepositoryType::File,
        }
    }
}

impl fmt::Display for Repository {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split `raw` into a lowercase scheme and a network location
///
/// Either part is empty when absent. Leading control characters and spaces
/// are dropped, and tab, CR and LF are removed anywhere before splitting.
fn split_reference(raw: &str) -> Result<(String, String), ConfigError> {
    let cleaned: String = raw
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let (scheme, rest) = match cleaned.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => (scheme.to_ascii_lowercase(), rest),
        _ => (String::new(), cleaned.as_str()),
    };

    let netloc = rest.strip_prefix("//").map_or("", |after| {
        let end = after.find(['/', '?', '#']).unwrap_or(after.len());
        &after[..end]
    });

    if netloc.contains('[') != netloc.contains(']') {
        return Err(ConfigError::repository(format!(
            "Malformed repository format: '{raw}': invalid IPv6 URL"
        )));
    }

    Ok((scheme, netloc.to_owned()))
}

/// `[A-Za-z][A-Za-z0-9+.-]*`
fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
