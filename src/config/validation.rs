//! Validation rules for each configuration field
//!
//! Every check returns the specific [`ConfigError`] for its field; the
//! wrapping into `ValidationError` happens in `Configuration::new`.

use std::path::Path;
use std::sync::LazyLock;

use crate::config::mode::Mode;
use crate::config::repository::Repository;
use crate::error::ConfigError;
use crate::system::System;
use regex::Regex;
use tracing::debug;

/// Longest accepted package name, in characters
pub const MAX_PACKAGE_NAME_LEN: usize = 100;

/// URL schemes accepted for URL-classified repositories
pub const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "ftp", "file"];

static PACKAGE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.\-]+$").expect("package name pattern is a valid regex")
});

/// Validate a package name
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The name contains characters outside `[a-zA-Z0-9_.-]`
/// - The name is longer than [`MAX_PACKAGE_NAME_LEN`]
#[inline]
pub fn validate_package_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::package_name("Package name cannot be empty"));
    }

    if !PACKAGE_NAME_REGEX.is_match(name) {
        return Err(ConfigError::package_name(format!(
            "Invalid package name: '{name}'. \
            Only letters, digits, dots, hyphens and underscores are allowed"
        )));
    }

    // The pattern only admits ASCII, so bytes == characters here
    if name.len() > MAX_PACKAGE_NAME_LEN {
        return Err(ConfigError::package_name(format!(
            "Package name is too long: {} characters (maximum {MAX_PACKAGE_NAME_LEN})",
            name.len()
        )));
    }

    debug!("Package name '{}' is valid", name);
    Ok(())
}

/// Parse, classify and validate a repository reference
///
/// URLs are checked syntactically only. Anything else must name an
/// existing regular file; the check is a single stat through `system`.
///
/// # Errors
///
/// Returns an error if:
/// - The reference is empty or malformed
/// - A URL uses a scheme outside [`ALLOWED_SCHEMES`]
/// - A path does not exist, or exists but is not a regular file
#[inline]
pub fn validate_repository(system: &dyn System, raw: &str) -> Result<Repository, ConfigError> {
    let repository = Repository::parse(raw)?;
    debug!(
        "Repository '{}' classified as {}",
        raw,
        repository.repository_type()
    );

    match &repository {
        Repository::Url { scheme, .. } => validate_url_scheme(scheme)?,
        Repository::Path { raw } => validate_repository_file(system, raw)?,
    }

    Ok(repository)
}

/// Validate that a URL scheme is one of [`ALLOWED_SCHEMES`]
///
/// # Errors
///
/// Returns an error if the scheme is not allowed
#[inline]
pub fn validate_url_scheme(scheme: &str) -> Result<(), ConfigError> {
    if ALLOWED_SCHEMES.contains(&scheme) {
        return Ok(());
    }

    Err(ConfigError::repository(format!(
        "Invalid scheme: '{scheme}'. Allowed URL schemes: {}",
        ALLOWED_SCHEMES.join(", ")
    )))
}

fn validate_repository_file(system: &dyn System, raw: &str) -> Result<(), ConfigError> {
    let path = Path::new(raw);
    let access_error =
        |e: std::io::Error| ConfigError::repository(format!("Cannot access '{raw}': {e}"));

    if !system.exists(path).map_err(access_error)? {
        return Err(ConfigError::repository(format!(
            "File does not exist: {raw}"
        )));
    }

    if !system.is_file(path).map_err(access_error)? {
        return Err(ConfigError::repository(format!(
            "Path is not a file: {raw}"
        )));
    }

    Ok(())
}

/// Validate and normalize the test repository mode
///
/// # Errors
///
/// Returns an error if the value is not `on` or `off` (any case)
#[inline]
pub fn validate_mode(raw: &str) -> Result<Mode, ConfigError> {
    let mode = raw.parse::<Mode>()?;
    debug!("Test repo mode '{}' normalized to '{}'", raw, mode);
    Ok(mode)
}
