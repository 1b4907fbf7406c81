//! # `RepoCheck`
//!
//! `RepoCheck` validates the inputs of a package analysis run before any
//! work is done: a package name, a repository reference, and a test
//! repository mode flag.
//!
//! ## Rules
//! - Package names are 1-100 characters of `[a-zA-Z0-9_.-]`.
//! - A repository with a scheme and a host is a URL and must use `http`,
//!   `https`, `ftp` or `file`. Anything else must be an existing regular file.
//! - The mode is `on` or `off`, in any case.
//!
//! ## Usage
//!
//! ```sh
//! repocheck my-pkg_1.0 https://example.com/repo --mode ON
//! repocheck pkg ./deps.txt --format json
//! repocheck --config repocheck.yaml
//! ```

use anyhow::Result;
use clap::Parser as _;
use repocheck::cli::Args;
use repocheck::error::RepocheckError;
use repocheck::system::RealSystem;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the summary, so logs stay quiet unless asked for
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let system = RealSystem::new();
    match repocheck::run(args, &system) {
        Ok(summary) => {
            println!("{summary}");
            std::process::exit(0);
        }
        Err(err) => {
            error!("{}", err);
            std::process::exit(
                err.downcast_ref::<RepocheckError>()
                    .map_or(1, RepocheckError::exit_code),
            );
        }
    }
}
