//! pisces CLI
//!
//! Command-line interface for PISCES CulledPDB membership filtering.

mod args;
mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::error;

use args::Args;
use commands::Command;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(&args) {
        eprintln!("Failed to initialize logging: {e:#}");
        return ExitCode::from(2);
    }

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            error!("Fatal error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config_path = args.config.as_deref();

    match args.command {
        Command::Check(check_args) => {
            let all_members = commands::check::execute(check_args, config_path)?;
            Ok(if all_members {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Filter(filter_args) => {
            commands::filter::execute(filter_args, config_path).map(|()| ExitCode::SUCCESS)
        }
        Command::List(list_args) => {
            commands::list::execute(list_args, config_path).map(|()| ExitCode::SUCCESS)
        }
        Command::Sets => commands::sets::execute().map(|()| ExitCode::SUCCESS),
        Command::Config(config_args) => {
            commands::config::execute(config_args, config_path).map(|()| ExitCode::SUCCESS)
        }
        Command::Completions(comp_args) => {
            commands::completions::execute(comp_args).map(|()| ExitCode::SUCCESS)
        }
    }
}
