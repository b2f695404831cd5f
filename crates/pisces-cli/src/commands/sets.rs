//! Sets command - the published parameter grid

use anyhow::Result;
use colored::Colorize;
use pisces_core::culled::{RESOLUTIONS, SEQUENCE_IDENTITIES};

/// Execute sets command
pub fn execute() -> Result<()> {
    println!("{}", "═".repeat(50).bright_blue());
    println!("{}", " PISCES CulledPDB sets".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());

    let seq_ids: Vec<String> = SEQUENCE_IDENTITIES.iter().map(u32::to_string).collect();
    let resolutions: Vec<String> = RESOLUTIONS.iter().map(|r| format!("{r:.1}")).collect();

    println!("Sequence identity (%): {}", seq_ids.join(", ").cyan());
    println!("Resolution cutoff (Å): {}", resolutions.join(", ").cyan());
    println!(
        "Sets: {}",
        (SEQUENCE_IDENTITIES.len() * RESOLUTIONS.len()).to_string().green()
    );
    println!("{}", "─".repeat(50).bright_black());
    println!("Example: pisces check 4HHB --seq-id 30 --resolution 2.5");
    println!();
    println!("{}", "Please cite: G. Wang and R. L. Dunbrack, Jr. PISCES: a protein".dimmed());
    println!("{}", "sequence culling server. Bioinformatics, 19:1589-1591, 2003.".dimmed());

    Ok(())
}
