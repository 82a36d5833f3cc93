//! Run configuration.
//!
//! Built from the command line (see [`crate::cli::Args`]); the size limit can
//! also come from the environment or a `.env` file.

use crate::cli::Args;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Networks with more addresses than this are refused by default.
pub const DEFAULT_MAX_ADDRESSES: u64 = 1024;
/// Environment variable overriding [`DEFAULT_MAX_ADDRESSES`].
pub const MAX_ADDRESSES_ENV: &str = "CIDR_REGEX_MAX_ADDRESSES";
/// Default output file.
pub const DEFAULT_OUTPUT: &str = "output_regex.txt";

/// Output record layout.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<cidr>:` line, regex line, blank line.
    #[default]
    Text,
    /// One JSON array of `{cidr, regex|error}` objects.
    Json,
}

/// Where records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    /// `-` means stdout, anything else is a file path.
    pub fn parse(out: &str) -> Output {
        match out {
            "-" => Output::Stdout,
            path => Output::File(PathBuf::from(path)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// CIDR texts in the order they will be converted.
    pub cidrs: Vec<String>,
    pub output: Output,
    pub format: OutputFormat,
    /// `None` disables the size limit.
    pub max_addresses: Option<u64>,
}

impl Config {
    /// Build the run configuration, reading `--input` if given.
    pub fn from_args(args: Args) -> Result<Config, Box<dyn Error>> {
        let mut cidrs = args.cidr;
        if let Some(path) = &args.input {
            let from_file = read_cidr_file(path)?;
            log::info!("Read {} CIDR(s) from {}", from_file.len(), path.display());
            cidrs.extend(from_file);
        }
        // clap guarantees a CIDR or --input, the file may still be empty
        if cidrs.is_empty() {
            return Err("No CIDR given, the input file has no CIDR lines".into());
        }

        Ok(Config {
            cidrs,
            output: Output::parse(&args.out),
            format: args.format,
            max_addresses: if args.no_limit {
                None
            } else {
                Some(args.max_addresses)
            },
        })
    }
}

/// Load `KEY=value` pairs from `path`, or from `.env` in the working
/// directory, into the environment. Variables already set are kept.
///
/// Returns the file that was loaded, `None` when there was none.
pub fn load_dotenv(path: Option<&Path>) -> Option<PathBuf> {
    match path {
        Some(path) => dotenv::from_path(path).ok().map(|_| path.to_path_buf()),
        None => dotenv::dotenv().ok(),
    }
}

/// Read CIDRs from a file, one per line.
///
/// Blank lines and `#` comments are skipped.
pub fn read_cidr_file(path: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading input file {}: {e}", path.display()))?;
    Ok(parse_cidr_lines(&text))
}

fn parse_cidr_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CidrRegexError;
    use crate::processing::CidrRegexBuilder;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("args should parse")
    }

    fn build_config(argv: &[&str]) -> Config {
        Config::from_args(args(argv)).expect("config should build")
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("cidr_compact_regex_{}_{name}", std::process::id()))
    }

    #[test]
    fn test_parse_cidr_lines() {
        let text = "# office\n10.0.0.0/30\n\n  192.168.1.0/29  \n#192.168.2.0/24\n";
        assert_eq!(parse_cidr_lines(text), vec!["10.0.0.0/30", "192.168.1.0/29"]);
    }

    #[test]
    fn test_from_args_defaults() {
        let config = Config::from_args(args(&[
            "cidr-compact-regex",
            "--max-addresses",
            "1024",
            "10.0.0.0/30",
        ]))
        .unwrap();
        assert_eq!(config.cidrs, vec!["10.0.0.0/30"]);
        assert_eq!(config.output, Output::File(PathBuf::from(DEFAULT_OUTPUT)));
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.max_addresses, Some(DEFAULT_MAX_ADDRESSES));
    }

    #[test]
    fn test_from_args_overrides() {
        let config = Config::from_args(args(&[
            "cidr-compact-regex",
            "--out",
            "-",
            "--format",
            "json",
            "--no-limit",
            "10.0.0.0/16",
        ]))
        .unwrap();
        assert_eq!(config.output, Output::Stdout);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.max_addresses, None);
    }

    #[test]
    fn test_args_require_cidr_or_input() {
        let err = Args::try_parse_from(["cidr-compact-regex"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("Usage:"));

        let parsed = Args::try_parse_from(["cidr-compact-regex", "--input", "cidrs.txt"]);
        assert!(parsed.is_ok());
    }

    #[test]
    fn test_from_args_empty_input_file() {
        let path = temp_path("empty.txt");
        std::fs::write(&path, "# nothing here\n\n").unwrap();
        let input = path.to_string_lossy().to_string();
        let err = Config::from_args(args(&["cidr-compact-regex", "--input", &input]))
            .unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(err.to_string().contains("No CIDR given"));
    }

    #[test]
    fn test_from_args_missing_input_file() {
        let err = Config::from_args(args(&[
            "cidr-compact-regex",
            "--input",
            "does/not/exist.txt",
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("does/not/exist.txt"));
    }

    // The only test touching MAX_ADDRESSES_ENV, every other test passes the
    // limit explicitly or with --no-limit.
    #[test]
    fn test_max_addresses_from_env_and_dotenv() {
        let env_file = temp_path("limit.env");
        let line = format!("{MAX_ADDRESSES_ENV}=4\n");
        std::fs::write(&env_file, line).unwrap();
        std::env::remove_var(MAX_ADDRESSES_ENV);

        assert_eq!(load_dotenv(Some(&env_file)), Some(env_file.clone()));
        std::fs::remove_file(&env_file).ok();
        let config = build_config(&["cidr-compact-regex", "10.0.0.0/29"]);
        assert_eq!(config.max_addresses, Some(4));
        assert_eq!(
            CidrRegexBuilder::from_config(&config).build("10.0.0.0/29"),
            Err(CidrRegexError::TooLargeToCompact(6))
        );

        std::env::set_var(MAX_ADDRESSES_ENV, "8");
        let config = build_config(&["cidr-compact-regex", "10.0.0.0/28"]);
        assert_eq!(config.max_addresses, Some(8));
        assert_eq!(
            CidrRegexBuilder::from_config(&config).build("10.0.0.0/28"),
            Err(CidrRegexError::TooLargeToCompact(14))
        );

        let config = build_config(&[
            "cidr-compact-regex",
            "--max-addresses",
            "16",
            "10.0.0.0/28",
        ]);
        assert_eq!(config.max_addresses, Some(16));

        let config = build_config(&["cidr-compact-regex", "--no-limit", "10.0.0.0/28"]);
        assert_eq!(config.max_addresses, None);
        assert!(CidrRegexBuilder::from_config(&config)
            .build("10.0.0.0/28")
            .is_ok());

        std::env::remove_var(MAX_ADDRESSES_ENV);
        assert_eq!(load_dotenv(Some(&temp_path("missing.env"))), None);
    }
}
