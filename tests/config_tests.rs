//! End-to-end configuration validation tests

use repocheck::config::{Configuration, DEFAULT_MODE, Mode, RepositoryType};
use repocheck::error::ConfigError;
use repocheck::system::{MockSystem, RealSystem};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_url_repository_with_uppercase_mode() {
    let system = RealSystem;
    let config =
        Configuration::new(&system, "my-pkg_1.0", "https://example.com/repo", "ON").unwrap();

    let summary = config.summary();
    assert_eq!(summary.package_name, "my-pkg_1.0");
    assert_eq!(summary.repository, "https://example.com/repo");
    assert_eq!(summary.test_repo_mode, Mode::On);
    assert_eq!(summary.repository_type, RepositoryType::Url);
}

#[test]
fn test_empty_package_name() {
    let system = RealSystem;
    let err = Configuration::new(&system, "", "https://example.com/repo", "off").unwrap_err();

    assert!(matches!(err.config_error(), ConfigError::PackageName { .. }));
    assert!(err.to_string().contains("empty"));
}

#[test]
fn test_nonexistent_repository_file() {
    let system = RealSystem;
    let err = Configuration::new(&system, "pkg", "/nonexistent/path.txt", "off").unwrap_err();

    assert!(matches!(err.config_error(), ConfigError::Repository { .. }));
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_disallowed_url_scheme() {
    let system = RealSystem;
    let err = Configuration::new(&system, "pkg", "gopher://x.com", "off").unwrap_err();

    assert!(matches!(err.config_error(), ConfigError::Repository { .. }));
    assert!(err.to_string().contains("Invalid scheme"));
}

#[test]
fn test_existing_file_repository() {
    let temp_dir = TempDir::new().unwrap();
    let repo_path = temp_dir.path().join("packages.txt");
    fs::write(&repo_path, "requests==2.31.0\n").unwrap();

    let system = RealSystem;
    let config =
        Configuration::new(&system, "requests", repo_path.to_str().unwrap(), DEFAULT_MODE)
            .unwrap();

    assert!(!config.is_url());
    assert_eq!(config.mode(), Mode::Off);
    assert_eq!(config.summary().repository_type, RepositoryType::File);
    assert_eq!(config.summary().repository, repo_path.to_str().unwrap());
}

#[test]
fn test_directory_repository_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    let system = RealSystem;
    let err = Configuration::new(&system, "pkg", temp_dir.path().to_str().unwrap(), "off")
        .unwrap_err();

    assert!(matches!(err.config_error(), ConfigError::Repository { .. }));
    assert!(err.to_string().contains("not a file"));
}

#[test]
fn test_file_url_without_host_is_checked_as_path() {
    // No network location, so the raw string is looked up on disk
    let system = MockSystem::new().with_file("/tmp/deps.txt", b"").unwrap();
    let err = Configuration::new(&system, "pkg", "file:///tmp/deps.txt", "off").unwrap_err();

    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_every_allowed_scheme() {
    let system = MockSystem::new();
    for repo in [
        "http://example.com/pkg",
        "https://example.com/pkg",
        "ftp://example.com/pkg",
        "file://fileserver/pkg",
    ] {
        let config = Configuration::new(&system, "pkg", repo, "off").unwrap();
        assert!(config.is_url(), "{repo}");
    }
}

#[test]
fn test_netloc_is_taken_as_written() {
    // Ports, hosts and user info are not validated; only scheme + netloc matter
    let system = MockSystem::new();
    for repo in [
        "https://example.com:99999/repo",
        "https://exa mple.com/repo",
        "http://host:abc/repo",
        "http://:80/repo",
        "https://user@/repo",
        "ht\ttps://example.com/repo",
    ] {
        let config = Configuration::new(&system, "pkg", repo, "off").unwrap();
        assert!(config.is_url(), "{repo:?}");
        assert_eq!(config.summary().repository, repo);
        assert_eq!(config.summary().repository_type, RepositoryType::Url);
    }
}

#[test]
fn test_unbalanced_ipv6_brackets_are_malformed() {
    let system = MockSystem::new();
    let err = Configuration::new(&system, "pkg", "http://[::1/repo", "off").unwrap_err();

    assert!(matches!(err.config_error(), ConfigError::Repository { .. }));
    assert!(err.to_string().contains("Malformed repository format"));
}

#[test]
fn test_mode_normalization() {
    let system = MockSystem::new();
    for mode in ["ON", "On", "on"] {
        let config = Configuration::new(&system, "pkg", "https://example.com", mode).unwrap();
        assert_eq!(config.summary().test_repo_mode.to_string(), "on");
    }

    let err = Configuration::new(&system, "pkg", "https://example.com", "maybe").unwrap_err();
    assert!(matches!(err.config_error(), ConfigError::TestMode { .. }));
}

#[test]
fn test_identical_inputs_give_equal_summaries() {
    let system = MockSystem::new()
        .with_file("/srv/index.txt", b"pkg")
        .unwrap();

    let first = Configuration::new(&system, "pkg", "/srv/index.txt", "On").unwrap();
    let second = Configuration::new(&system, "pkg", "/srv/index.txt", "On").unwrap();

    assert_eq!(first.summary(), second.summary());
    assert_eq!(first, second);
}

#[test]
fn test_validation_from_many_threads() {
    let system = MockSystem::new()
        .with_file("/srv/index.txt", b"pkg")
        .unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let system = &system;
                scope.spawn(move || {
                    let name = format!("pkg-{i}");
                    Configuration::new(system, &name, "/srv/index.txt", "off")
                        .unwrap()
                        .summary()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap().package_name, format!("pkg-{i}"));
        }
    });
}
