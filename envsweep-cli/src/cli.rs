//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use envsweep_core::Severity;

#[derive(Parser)]
#[command(
    name = "envsweep",
    version,
    about = "Scan a source tree for env var usage and hardcoded secrets",
    long_about = "envsweep finds where configuration is already read from the environment and flags hardcoded identifiers and literals that look like they should have been environment variables, ranked LOW/MEDIUM/HIGH/CRITICAL.\n\nConfiguration precedence: CLI > envsweep.toml > defaults.",
    after_help = "Examples:\n  envsweep scan\n  envsweep scan src --format json\n  envsweep scan --fail-on high --ignore-dir fixtures\n  envsweep template --out .env.example\n  envsweep ignore NODE_ENV buildTarget",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Scan a directory tree and print the report
    #[command(
        about = "Scan a directory tree",
        long_about = "Walk the tree, collect confirmed environment reads and hardcoded candidates, and print a per-identifier report sorted by severity.",
        after_help = "Examples:\n  envsweep scan\n  envsweep scan services/api --format json\n  envsweep scan --min-severity high\n  envsweep scan --fail-on critical"
    )]
    Scan {
        /// Root directory to scan (default: current dir)
        path: Option<PathBuf>,
        #[arg(long, help = "Output mode: text|json (default: text)")]
        format: Option<String>,
        #[arg(long, value_parser = parse_severity, help = "Hide suggestions below this level in text output")]
        min_severity: Option<Severity>,
        #[arg(long, value_parser = parse_severity, help = "Exit 1 if any suggestion at or above this level exists")]
        fail_on: Option<Severity>,
        #[arg(long, help = "Directory name to skip (repeatable)")]
        ignore_dir: Vec<String>,
    },
    /// Write a .env template from scan results
    #[command(
        about = "Write a .env template",
        long_about = "Scan the tree and write an env template listing every confirmed usage name and every suggested name at or above the threshold, annotated with severity and source files.",
        after_help = "Examples:\n  envsweep template\n  envsweep template --out deploy/.env.example --force"
    )]
    Template {
        /// Root directory to scan (default: current dir)
        path: Option<PathBuf>,
        #[arg(long, help = "Output file (default: <path>/.env.example)")]
        out: Option<PathBuf>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Overwrite the output file if it exists")]
        force: bool,
        #[arg(long, value_parser = parse_severity, help = "Leave out suggestions below this level")]
        min_severity: Option<Severity>,
    },
    /// Manage the persisted ignore-list in envsweep.toml
    #[command(
        about = "Manage ignored names",
        long_about = "With names: append them to the ignore-list persisted in envsweep.toml. Without: print the current list."
    )]
    Ignore {
        /// Identifier names to add to the ignore-list
        names: Vec<String>,
    },
}

/// Parser for severity-valued flags.
pub fn parse_severity(label: &str) -> Result<Severity, String> {
    Severity::parse(label)
        .ok_or_else(|| format!("unknown severity '{label}' (use low|medium|high|critical)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_severity_labels() {
        assert_eq!(parse_severity("medium"), Ok(Severity::Medium));
        assert_eq!(parse_severity("CRITICAL"), Ok(Severity::Critical));
        assert!(parse_severity("urgent").is_err());
    }

    #[test]
    fn test_scan_args() {
        let cli = Cli::parse_from([
            "envsweep",
            "scan",
            "src",
            "--fail-on",
            "high",
            "--ignore-dir",
            "fixtures",
            "--ignore-dir",
            "demos",
        ]);
        match cli.cmd {
            Commands::Scan {
                path,
                fail_on,
                ignore_dir,
                ..
            } => {
                assert_eq!(path, Some(PathBuf::from("src")));
                assert_eq!(fail_on, Some(Severity::High));
                assert_eq!(ignore_dir, vec!["fixtures", "demos"]);
            }
            _ => panic!("expected scan subcommand"),
        }
    }
}
