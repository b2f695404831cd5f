//! Check command - membership of individual identifiers

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pisces_core::RecordFilter;
use std::path::Path;

use super::source::SourceArgs;

/// Check command arguments
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Structure (1ABC) or chain (1ABC.A) identifiers to check
    #[arg(required = true)]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Execute check command; returns whether every identifier is a member
pub fn execute(args: CheckArgs, config_path: Option<&Path>) -> Result<bool> {
    let filter = args.source.build_filter(config_path)?;

    let mut all_members = true;
    for id in &args.ids {
        if filter.test(&(id.as_str(),)) {
            println!("{} {}", "✓".green(), id.cyan());
        } else {
            all_members = false;
            println!("{} {} {}", "✗".red(), id, "(not in culled set)".dimmed());
        }
    }

    Ok(all_members)
}
