//! CLI commands

pub mod check;
pub mod completions;
pub mod config;
pub mod filter;
pub mod list;
pub mod sets;
pub mod source;

use clap::Subcommand;

/// CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether PDB or chain identifiers are in the culled set
    Check(check::CheckArgs),

    /// Pass through records whose first column is in the culled set
    Filter(filter::FilterArgs),

    /// Print the chain identifiers of the culled set
    List(list::ListArgs),

    /// Show the published sequence identity / resolution grid
    Sets,

    /// Configuration management
    Config(config::ConfigArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
