//! Shell completions generator

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

use crate::args::Args as CliArgs;

/// Completions command arguments
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write completions for the `pisces` binary to stdout
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = CliArgs::command();
    generate(args.shell, &mut cmd, "pisces", &mut io::stdout());
    Ok(())
}
