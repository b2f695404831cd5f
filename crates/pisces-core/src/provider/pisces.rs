//! HTTP provider backed by the PISCES download server

use super::listing::{find_listing_file_name, parse_chain_ids};
use super::ListingProvider;
use crate::config::SourceConfig;
use crate::culled::CulledSet;
use crate::error::{Error, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default PISCES download index
pub const DEFAULT_BASE_URL: &str = "https://dunbrack.fccc.edu/pisces/download/";

const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

/// Downloads CulledPDB listings from the PISCES server.
///
/// Two requests per fetch: the download index, to resolve the dated file
/// name of the requested set, then the listing file itself.
#[derive(Debug, Clone)]
pub struct PiscesClient {
    http: Client,
    base_url: String,
    max_retries: u32,
    initial_backoff: Duration,
}

impl PiscesClient {
    /// Create a client with default settings
    pub fn new() -> Result<Self> {
        Self::from_config(&SourceConfig::default())
    }

    /// Create a client from the `[source]` configuration section
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout_secs));
        if let Some(ref agent) = config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        let mut base_url = config.base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            http,
            base_url,
            max_retries: config.max_retries.max(1),
            initial_backoff: INITIAL_BACKOFF,
        })
    }

    /// Override the delay before the first retry; it doubles on every retry after that
    #[must_use]
    pub fn with_initial_backoff(mut self, delay: Duration) -> Self {
        self.initial_backoff = delay;
        self
    }

    /// Download index URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_text(&self, url: &str) -> Result<String> {
        let mut delay = self.initial_backoff;
        let mut failure = String::from("no attempt made");

        for attempt in 1..=self.max_retries {
            debug!("GET {} (attempt {}/{})", url, attempt, self.max_retries);

            match self.http.get(url).send() {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return resp
                            .text()
                            .map_err(|e| Error::provider_unavailable(url, e.to_string()));
                    }
                    if status == StatusCode::NOT_FOUND {
                        return Err(Error::provider_unavailable(url, "404 Not Found"));
                    }
                    if !status.is_server_error() {
                        return Err(Error::provider_unavailable(
                            url,
                            format!("request failed with status {status}"),
                        ));
                    }
                    failure = format!("server error {status}");
                }
                Err(e) => failure = e.to_string(),
            }

            if attempt < self.max_retries {
                warn!("Fetching {} failed ({}), retrying in {:?}", url, failure, delay);
                std::thread::sleep(delay);
                delay *= 2;
            }
        }

        Err(Error::provider_unavailable(
            url,
            format!("{failure} after {} attempt(s)", self.max_retries),
        ))
    }
}

impl ListingProvider for PiscesClient {
    fn fetch_chain_ids(&self, sequence_identity: u32, resolution: f64) -> Result<Vec<String>> {
        let set = CulledSet::new(sequence_identity, resolution)?;

        let index = self.get_text(&self.base_url)?;
        let file_name = find_listing_file_name(&index, &set).ok_or_else(|| {
            Error::invalid_parameters(format!(
                "no CulledPDB listing for {set} published at {}",
                self.base_url
            ))
        })?;

        let url = format!("{}{}", self.base_url, file_name);
        let body = self.get_text(&url)?;
        let ids = parse_chain_ids(&body)?;

        info!("Downloaded {} chain identifiers for {} from {}", ids.len(), set, url);
        Ok(ids)
    }
}
