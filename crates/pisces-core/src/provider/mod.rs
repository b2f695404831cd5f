//! Listing providers for CulledPDB chain identifiers
//!
//! A provider answers one question: which chains belong to the CulledPDB set
//! selected by a (sequence identity, resolution) pair. The filter consumes
//! providers through [`ListingProvider`] so that the download, a file on disk
//! or an in-memory list are interchangeable.
//!
//! - [`PiscesClient`] - downloads the listing from the PISCES server
//! - [`FileListing`] - reads a listing saved earlier
//! - [`StaticListing`] - a fixed list held in memory

mod file;
mod listing;
mod pisces;

pub use file::FileListing;
pub use listing::{find_listing_file_name, parse_chain_ids};
pub use pisces::{PiscesClient, DEFAULT_BASE_URL};

use crate::error::Result;

/// Source of CulledPDB chain identifiers
#[cfg_attr(test, mockall::automock)]
pub trait ListingProvider: Send + Sync {
    /// Fetch the chain identifiers of the set selected by the parameter pair.
    ///
    /// Fails with `InvalidParameters` when the pair names no published set and
    /// with `ProviderUnavailable` when the listing cannot be obtained.
    fn fetch_chain_ids(&self, sequence_identity: u32, resolution: f64) -> Result<Vec<String>>;
}

/// In-memory provider returning the same identifiers for every request
#[derive(Debug, Clone, Default)]
pub struct StaticListing {
    ids: Vec<String>,
}

impl StaticListing {
    /// Create a provider over the given identifiers
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl ListingProvider for StaticListing {
    fn fetch_chain_ids(&self, _sequence_identity: u32, _resolution: f64) -> Result<Vec<String>> {
        Ok(self.ids.clone())
    }
}

impl<P: ListingProvider + ?Sized> ListingProvider for Box<P> {
    fn fetch_chain_ids(&self, sequence_identity: u32, resolution: f64) -> Result<Vec<String>> {
        (**self).fetch_chain_ids(sequence_identity, resolution)
    }
}
