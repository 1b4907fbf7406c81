use clap::Parser;

/// Command-line arguments for repocheck
#[derive(Parser, Debug, Clone)]
#[command(name = "repocheck")]
#[command(about = "A CLI tool for validating a package name and repository reference")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Name of the package to analyze
    #[arg(value_name = "PACKAGE_NAME")]
    pub package_name: Option<String>,

    /// Repository URL (http, https, ftp, file) or path to a local file
    #[arg(value_name = "REPOSITORY")]
    pub repository: Option<String>,

    /// Test repository mode: on or off (case-insensitive, defaults to off)
    #[arg(long, value_name = "MODE", env = "REPOCHECK_MODE")]
    pub mode: Option<String>,

    /// YAML input file providing package_name, repository and test_repo_mode
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Output format: text, json or yaml
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub format: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let args = Args::parse_from(["repocheck", "pkg", "https://example.com/repo"]);

        assert_eq!(args.package_name.as_deref(), Some("pkg"));
        assert_eq!(args.repository.as_deref(), Some("https://example.com/repo"));
        assert_eq!(args.format, "text");
        assert!(args.config.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::parse_from([
            "repocheck",
            "--config",
            "repocheck.yaml",
            "--mode",
            "ON",
            "--format",
            "json",
            "-v",
        ]);

        assert!(args.package_name.is_none());
        assert_eq!(args.mode.as_deref(), Some("ON"));
        assert_eq!(args.config.as_deref(), Some("repocheck.yaml"));
        assert_eq!(args.format, "json");
        assert!(args.verbose);
    }
}
