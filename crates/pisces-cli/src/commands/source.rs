//! Culled set selection shared by the data commands

use anyhow::{Context, Result};
use clap::Args;
use pisces_core::{Config, PiscesFilter};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::config::load_config;

/// Overrides for the `[culled]` and `[source]` configuration sections
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Maximum sequence identity: 20, 25, 30, 40, 50, 60, 70, 80 or 90
    #[arg(short = 's', long, value_name = "PERCENT")]
    pub seq_id: Option<u32>,

    /// Resolution cutoff in Å: 1.6, 1.8, 2.0, 2.2, 2.5 or 3.0
    #[arg(short = 'r', long, value_name = "ANGSTROM")]
    pub resolution: Option<f64>,

    /// Read the listing from a local file instead of downloading it
    #[arg(short = 'l', long, value_name = "FILE")]
    pub listing_file: Option<PathBuf>,

    /// PISCES download index URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

impl SourceArgs {
    /// Apply the overrides on top of a loaded configuration
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(seq_id) = self.seq_id {
            config.culled.sequence_identity = seq_id;
        }
        if let Some(resolution) = self.resolution {
            config.culled.resolution = resolution;
        }
        if let Some(ref path) = self.listing_file {
            config.source.listing_file = Some(path.display().to_string());
        }
        if let Some(ref url) = self.base_url {
            config.source.base_url = url.clone();
        }
        config
    }

    /// Load the configuration, apply overrides and build the filter
    pub fn build_filter(&self, config_path: Option<&Path>) -> Result<PiscesFilter> {
        let config = self.apply(load_config(config_path)?);
        debug!("Effective configuration: {:?}", config);

        let provider = config.provider().context("Failed to set up listing source")?;
        PiscesFilter::new(
            provider.as_ref(),
            config.culled.sequence_identity,
            config.culled.resolution,
        )
        .with_context(|| {
            format!(
                "Failed to load CulledPDB set pc{} / {:.1}",
                config.culled.sequence_identity, config.culled.resolution
            )
        })
    }
}
