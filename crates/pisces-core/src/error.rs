//! Error types for pisces-core
//!
//! Centralized error handling using `thiserror` for ergonomic error definitions.

use thiserror::Error;

/// Main error type for pisces-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// The listing provider could not be reached or answered with a failure
    #[error("Listing provider '{source_name}' unavailable: {reason}")]
    ProviderUnavailable {
        /// URL or path of the provider that failed
        source_name: String,
        /// Failure reason
        reason: String,
    },

    /// The parameter pair does not name a published CulledPDB set
    #[error("Invalid CulledPDB parameters: {message}")]
    InvalidParameters {
        /// Error message
        message: String,
    },

    /// A listing body could not be parsed
    #[error("Malformed CulledPDB listing: {message}")]
    MalformedListing {
        /// Error message
        message: String,
        /// 1-based line number where parsing gave up
        line: Option<usize>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path to the missing config file
        path: String,
    },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    ConfigValue {
        /// Configuration key
        key: String,
        /// Error message
        message: String,
    },

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a provider-unavailable error
    pub fn provider_unavailable(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-parameters error
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }

    /// Create a malformed-listing error
    pub fn malformed_listing(message: impl Into<String>) -> Self {
        Self::MalformedListing {
            message: message.into(),
            line: None,
        }
    }

    /// Create a malformed-listing error pointing at a line
    pub fn malformed_listing_at(message: impl Into<String>, line: usize) -> Self {
        Self::MalformedListing {
            message: message.into(),
            line: Some(line),
        }
    }

    /// Create a config value error
    pub fn config_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValue {
            key: key.into(),
            message: message.into(),
        }
    }
}
