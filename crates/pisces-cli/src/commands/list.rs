//! List command - dump the culled set

use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;

use super::source::SourceArgs;

/// List command arguments
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Include bare structure identifiers, not only chains
    #[arg(long)]
    pub structures: bool,

    /// Print a JSON array instead of one identifier per line
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Execute list command
pub fn execute(args: ListArgs, config_path: Option<&Path>) -> Result<()> {
    let filter = args.source.build_filter(config_path)?;

    let ids: Vec<String> = filter
        .ids()
        .into_iter()
        .filter(|id| args.structures || id.chars().count() > 4)
        .collect();

    if args.json {
        let json = serde_json::to_string_pretty(&ids).context("Failed to serialize identifiers")?;
        println!("{json}");
    } else {
        for id in &ids {
            println!("{id}");
        }
    }

    Ok(())
}
