//! Command-line argument parsing

use crate::commands::Command;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// pisces - PISCES CulledPDB membership filter
///
/// Selects PDB structures and chains that belong to a PISCES CulledPDB
/// representative set, chosen by sequence identity and resolution cutoff.
#[derive(Parser, Debug)]
#[command(name = "pisces")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true, env = "PISCES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format for logs
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Log file path
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<String>,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// Compact format
    Compact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_args() {
        let args = Args::parse_from(["pisces", "check", "1ABC", "2XYZ.A", "--seq-id", "40"]);
        match args.command {
            Command::Check(check) => {
                assert_eq!(check.ids, vec!["1ABC", "2XYZ.A"]);
                assert_eq!(check.source.seq_id, Some(40));
                assert_eq!(check.source.resolution, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::parse_from(["pisces", "sets", "-vv", "--quiet"]);
        assert_eq!(args.verbose, 2);
        assert!(args.quiet);
    }

    #[test]
    fn test_check_requires_ids() {
        assert!(Args::try_parse_from(["pisces", "check"]).is_err());
    }

    #[test]
    fn test_filter_defaults() {
        let args = Args::parse_from(["pisces", "filter"]);
        match args.command {
            Command::Filter(filter) => {
                assert!(filter.input.is_none());
                assert!(!filter.invert);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_completions_shell() {
        let args = Args::parse_from(["pisces", "completions", "powershell"]);
        match args.command {
            Command::Completions(comp) => {
                assert_eq!(comp.shell, clap_complete::Shell::PowerShell);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(Args::try_parse_from(["pisces", "completions", "tcsh"]).is_err());
    }
}
