//! Configuration types for recursion-tasks
//!
//! This module defines:
//! - CLI argument parsing using clap derive macros
//! - Runtime configuration for the directory walker with validation

use crate::error::ConfigError;
use crate::parity::DEFAULT_RECURSION_LIMIT;
use crate::sum::MAX_DEMO_THREADS;
use clap::{Parser, Subcommand};
use regex::Regex;
use std::path::PathBuf;

/// Extensions skipped by the directory walker unless overridden
pub const DEFAULT_EXCLUDED_SUFFIXES: [&str; 2] = [".tmp", ".log"];

/// Recursion exercises behind a numbered menu or subcommands
#[derive(Parser, Debug, Clone)]
#[command(
    name = "recursion-tasks",
    version,
    about = "Recursion exercises: base conversion, directory size, even/odd, reentrant sum",
    long_about = "Four independent recursion exercises.\n\n\
                  Run without a subcommand for the interactive numbered menu, or call\n\
                  each exercise directly through its subcommand.",
    after_help = "EXAMPLES:\n    \
        recursion-tasks convert 255 --base 16\n    \
        recursion-tasks dir-size ./target --exclude-ext .rlib -d 3\n    \
        recursion-tasks parity -- -7\n    \
        recursion-tasks sum 10 20 30 --threads 4\n    \
        recursion-tasks sum --non-reentrant --threads 8"
)]
pub struct CliArgs {
    /// Exercise to run (interactive menu if omitted)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Quiet mode - suppress header and progress output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Verbose output (debug logging)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert an integer to a string in base 2 to 36
    Convert {
        /// Integer to convert
        #[arg(value_name = "N", allow_negative_numbers = true)]
        value: i64,

        /// Target base
        #[arg(short = 'b', long, default_value = "10", value_name = "BASE")]
        base: u32,
    },

    /// Total size of the files under a directory
    DirSize {
        /// Directory to measure
        #[arg(value_name = "PATH")]
        path: PathBuf,

        #[command(flatten)]
        walk: WalkArgs,
    },

    /// Even/odd check by mutual recursion
    Parity {
        /// Integer to check
        #[arg(value_name = "N", allow_negative_numbers = true)]
        value: i64,

        /// Largest magnitude checked recursively before switching to a loop
        #[arg(long, default_value_t = DEFAULT_RECURSION_LIMIT, value_name = "NUM")]
        recursion_limit: u64,
    },

    /// Recursive array sum on several threads at once
    Sum {
        /// Values to sum (defaults to 1 2 3 4 5)
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Number of threads summing concurrently
        #[arg(short = 't', long, default_value = "2", value_name = "NUM")]
        threads: usize,

        /// Use the shared-index summer to show the race
        #[arg(long)]
        non_reentrant: bool,
    },

    /// Interactive numbered menu
    Menu,
}

/// Directory walk options
#[derive(clap::Args, Debug, Clone, Default)]
pub struct WalkArgs {
    /// Skip files ending with this extension (can be repeated; replaces .tmp and .log)
    #[arg(long = "exclude-ext", value_name = "EXT", action = clap::ArgAction::Append)]
    pub excluded_suffixes: Vec<String>,

    /// Skip paths matching pattern (can be repeated)
    #[arg(long = "exclude", value_name = "PATTERN", action = clap::ArgAction::Append)]
    pub exclude_patterns: Vec<String>,

    /// Maximum directory depth (unlimited if not set)
    #[arg(short = 'd', long, value_name = "NUM")]
    pub max_depth: Option<usize>,
}

/// Validated directory walker configuration
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// File name suffixes that are not counted
    pub excluded_suffixes: Vec<String>,

    /// Compiled exclude patterns, matched against full paths
    pub exclude_patterns: Vec<Regex>,

    /// Maximum traversal depth (root is 0)
    pub max_depth: Option<usize>,

    /// Show progress indicator
    pub show_progress: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            excluded_suffixes: DEFAULT_EXCLUDED_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            exclude_patterns: Vec::new(),
            max_depth: None,
            show_progress: false,
        }
    }
}

impl WalkConfig {
    /// Create and validate configuration from CLI arguments
    pub fn from_args(args: &WalkArgs, quiet: bool) -> Result<Self, ConfigError> {
        let excluded_suffixes = if args.excluded_suffixes.is_empty() {
            Self::default().excluded_suffixes
        } else {
            args.excluded_suffixes
                .iter()
                .map(|s| normalize_suffix(s))
                .collect::<Result<Vec<_>, _>>()?
        };

        // Compile exclude patterns
        let exclude_patterns = args
            .exclude_patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| ConfigError::InvalidExcludePattern {
                    pattern: p.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            excluded_suffixes,
            exclude_patterns,
            max_depth: args.max_depth,
            show_progress: !quiet,
        })
    }

    /// Check if a file name carries an excluded suffix
    pub fn has_excluded_suffix(&self, name: &str) -> bool {
        self.excluded_suffixes
            .iter()
            .any(|suffix| name.ends_with(suffix.as_str()))
    }

    /// Check if a path matches any exclude pattern
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclude_patterns.iter().any(|re| re.is_match(path))
    }
}

/// Trim the suffix and make sure it starts with a dot
fn normalize_suffix(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "." {
        return Err(ConfigError::InvalidSuffix {
            suffix: raw.to_string(),
            reason: "extension must not be empty".into(),
        });
    }

    if trimmed.starts_with('.') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!(".{}", trimmed))
    }
}

/// Validate the thread count for the summation demo
pub fn validate_thread_count(count: usize) -> Result<usize, ConfigError> {
    if count == 0 || count > MAX_DEMO_THREADS {
        return Err(ConfigError::InvalidThreadCount {
            count,
            max: MAX_DEMO_THREADS,
        });
    }
    Ok(count)
}

/// Validate the parity recursion limit
pub fn validate_recursion_limit(limit: u64) -> Result<u64, ConfigError> {
    if limit == 0 {
        return Err(ConfigError::InvalidRecursionLimit { limit });
    }
    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_suffixes() {
        let config = WalkConfig::from_args(&WalkArgs::default(), true).unwrap();
        assert_eq!(config.excluded_suffixes, vec![".tmp", ".log"]);
        assert!(!config.show_progress);
        assert!(config.has_excluded_suffix("scratch.tmp"));
        assert!(config.has_excluded_suffix("server.log"));
        assert!(!config.has_excluded_suffix("notes.txt"));
    }

    #[test]
    fn test_custom_suffixes_replace_defaults() {
        let args = WalkArgs {
            excluded_suffixes: vec!["bak".into(), " .swp ".into()],
            ..Default::default()
        };
        let config = WalkConfig::from_args(&args, false).unwrap();
        assert_eq!(config.excluded_suffixes, vec![".bak", ".swp"]);
        assert!(!config.has_excluded_suffix("server.log"));
        assert!(config.has_excluded_suffix("main.rs.bak"));
    }

    #[test]
    fn test_empty_suffix_rejected() {
        let args = WalkArgs {
            excluded_suffixes: vec![".".into()],
            ..Default::default()
        };
        assert!(matches!(
            WalkConfig::from_args(&args, false),
            Err(ConfigError::InvalidSuffix { .. })
        ));
    }

    #[test]
    fn test_exclude_pattern() {
        let args = WalkArgs {
            exclude_patterns: vec![r"/\.git(/|$)".into()],
            ..Default::default()
        };
        let config = WalkConfig::from_args(&args, false).unwrap();
        assert!(config.is_excluded("/repo/.git/objects"));
        assert!(!config.is_excluded("/repo/src/main.rs"));
    }

    #[test]
    fn test_invalid_exclude_pattern() {
        let args = WalkArgs {
            exclude_patterns: vec!["(unclosed".into()],
            ..Default::default()
        };
        assert!(matches!(
            WalkConfig::from_args(&args, false),
            Err(ConfigError::InvalidExcludePattern { .. })
        ));
    }

    #[test]
    fn test_thread_count_bounds() {
        assert!(validate_thread_count(0).is_err());
        assert_eq!(validate_thread_count(2).unwrap(), 2);
        assert!(validate_thread_count(MAX_DEMO_THREADS + 1).is_err());
    }

    #[test]
    fn test_recursion_limit() {
        assert!(validate_recursion_limit(0).is_err());
        assert_eq!(validate_recursion_limit(5).unwrap(), 5);
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let args = CliArgs::parse_from(["recursion-tasks", "convert", "-42", "-b", "2"]);
        assert!(matches!(
            args.command,
            Some(Command::Convert { value: -42, base: 2 })
        ));

        let args = CliArgs::parse_from([
            "recursion-tasks",
            "dir-size",
            "/tmp",
            "--exclude-ext",
            ".bak",
            "-d",
            "2",
        ]);
        match args.command {
            Some(Command::DirSize { path, walk }) => {
                assert_eq!(path, PathBuf::from("/tmp"));
                assert_eq!(walk.excluded_suffixes, vec![".bak"]);
                assert_eq!(walk.max_depth, Some(2));
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let args = CliArgs::parse_from(["recursion-tasks", "-q"]);
        assert!(args.command.is_none());
        assert!(args.quiet);
    }
}
