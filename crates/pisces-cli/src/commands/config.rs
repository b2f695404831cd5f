//! Config command - configuration management

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use pisces_core::Config;
use std::path::{Path, PathBuf};
use tracing::info;

const CONFIG_FILE_NAME: &str = "pisces.toml";

/// Config command arguments
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Generate a configuration file with default values
    Generate {
        /// Output file path
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Config file to validate
        file: PathBuf,
    },

    /// Show config file locations
    Paths,
}

/// Execute config command
pub fn execute(args: ConfigArgs, config_path: Option<&Path>) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(config_path),
        ConfigAction::Generate { output, force } => generate_config(&output, force),
        ConfigAction::Validate { file } => validate_config(&file),
        ConfigAction::Paths => show_paths(),
    }
}

/// Load the configuration from an explicit path, the search path, or defaults
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(),
    };

    match path {
        Some(path) => {
            info!("Using configuration {}", path.display());
            Config::load(&path).with_context(|| format!("Failed to load config from {:?}", path))
        }
        None => Ok(Config::default()),
    }
}

fn show_config(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;

    let toml_str = config.to_toml().context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

fn generate_config(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "{} already exists, use --force to overwrite",
            output.display()
        );
    }

    let toml_str = Config::default()
        .to_toml()
        .context("Failed to serialize config")?;

    let content = format!(
        "# PISCES CulledPDB filter configuration\n\
         # sequence_identity: 20, 25, 30, 40, 50, 60, 70, 80, 90\n\
         # resolution: 1.6, 1.8, 2.0, 2.2, 2.5, 3.0\n\
         # Set source.listing_file to use a downloaded listing offline\n\n\
         {}",
        toml_str
    );

    std::fs::write(output, content)
        .with_context(|| format!("Failed to write config to {:?}", output))?;

    info!("Generated config file: {:?}", output);
    println!("Configuration file generated: {}", output.display());
    Ok(())
}

fn validate_config(file: &Path) -> Result<()> {
    let config = Config::load(file)
        .with_context(|| format!("Failed to load config from {:?}", file))?;

    config.validate().context("Configuration validation failed")?;

    println!("✓ Configuration is valid");
    println!(
        "  Culled set: pc{} / {:.1}Å",
        config.culled.sequence_identity, config.culled.resolution
    );
    match config.source.listing_file {
        Some(ref path) => println!("  Listing file: {}", path),
        None => println!("  Download from: {}", config.source.base_url),
    }

    Ok(())
}

fn show_paths() -> Result<()> {
    println!("Configuration file search paths:");
    println!();
    println!("  0. --config <FILE> or $PISCES_CONFIG");
    println!("  1. ./{}", CONFIG_FILE_NAME);

    if let Some(dirs) = project_dirs() {
        println!("  2. {}", dirs.config_dir().join("config.toml").display());
    }

    Ok(())
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "pisces")
}

fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    let path = project_dirs()?.config_dir().join("config.toml");
    path.exists().then_some(path)
}
