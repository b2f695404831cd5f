//! Configuration management
//!
//! Strongly-typed TOML configuration selecting the CulledPDB set and where
//! its listing comes from.

use crate::culled::{CulledSet, RESOLUTIONS, SEQUENCE_IDENTITIES};
use crate::error::{Error, Result};
use crate::provider::{FileListing, ListingProvider, PiscesClient, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CulledPDB set selection
    pub culled: CulledConfig,

    /// Listing source settings
    pub source: SourceConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| Error::ConfigNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(Error::from)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !SEQUENCE_IDENTITIES.contains(&self.culled.sequence_identity) {
            return Err(Error::config_value(
                "culled.sequence_identity",
                format!("must be one of {SEQUENCE_IDENTITIES:?}"),
            ));
        }

        if CulledSet::new(self.culled.sequence_identity, self.culled.resolution).is_err() {
            return Err(Error::config_value(
                "culled.resolution",
                format!("must be one of {RESOLUTIONS:?}"),
            ));
        }

        if self.source.timeout_secs == 0 {
            return Err(Error::config_value("source.timeout_secs", "Must be greater than 0"));
        }

        if self.source.max_retries == 0 {
            return Err(Error::config_value("source.max_retries", "Must be at least 1"));
        }

        let url = self.source.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::config_value(
                "source.base_url",
                "Must be an http:// or https:// URL",
            ));
        }

        Ok(())
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Build the listing provider described by the `[source]` section.
    ///
    /// A configured `listing_file` takes precedence over the download server.
    pub fn provider(&self) -> Result<Box<dyn ListingProvider>> {
        match self.source.listing_file {
            Some(ref path) => Ok(Box::new(FileListing::new(path))),
            None => Ok(Box::new(PiscesClient::from_config(&self.source)?)),
        }
    }
}

/// CulledPDB set selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CulledConfig {
    /// Maximum pairwise sequence identity (percent)
    pub sequence_identity: u32,
    /// Resolution cutoff (Å)
    pub resolution: f64,
}

impl Default for CulledConfig {
    fn default() -> Self {
        Self {
            sequence_identity: 30,
            resolution: 2.5,
        }
    }
}

/// Listing source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// PISCES download index URL
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Attempts per request, including the first one
    pub max_retries: u32,
    /// User-Agent header sent to the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Read the listing from this file instead of downloading it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_file: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 60,
            max_retries: 3,
            user_agent: Some(format!("pisces-filter/{}", env!("CARGO_PKG_VERSION"))),
            listing_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========== Default Config Tests ===========

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.culled.sequence_identity, 30);
        assert!((config.culled.resolution - 2.5).abs() < f64::EPSILON);
        assert_eq!(config.source.base_url, DEFAULT_BASE_URL);
        assert!(config.source.listing_file.is_none());
    }

    #[test]
    fn test_default_source_config() {
        let config = SourceConfig::default();
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.max_retries, 3);
        assert!(config.user_agent.unwrap().starts_with("pisces-filter/"));
    }

    // =========== Validation Tests ===========

    #[test]
    fn test_config_validation() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_sequence_identity() {
        let mut config = Config::default();
        config.culled.sequence_identity = 35;
        match config.validate() {
            Err(Error::ConfigValue { key, .. }) => assert_eq!(key, "culled.sequence_identity"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_validation_invalid_resolution() {
        let mut config = Config::default();
        config.culled.resolution = 1.7;
        match config.validate() {
            Err(Error::ConfigValue { key, .. }) => assert_eq!(key, "culled.resolution"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_validation_zero_timeout() {
        let mut config = Config::default();
        config.source.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_retries() {
        let mut config = Config::default();
        config.source.max_retries = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_url() {
        let mut config = Config::default();
        config.source.base_url = "ftp://dunbrack.fccc.edu/".to_string();
        assert!(config.validate().is_err());
    }

    // =========== TOML Tests ===========

    #[test]
    fn test_toml_parse_minimal() {
        let toml_content = r#"
[culled]
sequence_identity = 90
resolution = 3.0

[source]
listing_file = "cullpdb.txt"
"#;
        let config = Config::from_toml(toml_content).unwrap();
        assert_eq!(config.culled.sequence_identity, 90);
        assert_eq!(config.source.listing_file.as_deref(), Some("cullpdb.txt"));
        // Unset keys fall back to defaults
        assert_eq!(config.source.max_retries, 3);
    }

    #[test]
    fn test_toml_custom_roundtrip() {
        let mut config = Config::default();
        config.culled.sequence_identity = 50;
        config.source.user_agent = None;

        let toml = config.to_toml().unwrap();
        assert!(!toml.contains("user_agent"));

        let parsed = Config::from_toml(&toml).unwrap();
        assert_eq!(parsed.culled.sequence_identity, 50);
    }

    #[test]
    fn test_toml_parse_invalid() {
        assert!(Config::from_toml("this is not [valid toml").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/pisces.toml").unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }
}
