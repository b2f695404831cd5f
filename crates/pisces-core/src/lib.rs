//! # PISCES Core
//!
//! Membership filtering against PISCES CulledPDB representative sets.
//!
//! ## Architecture
//!
//! This crate provides:
//! - **CulledPDB parameters** - the published (sequence identity, resolution) grid
//! - **Listing providers** - download, file and in-memory sources of chain ids
//! - **Filtering** - an immutable membership set tested per record
//! - **Configuration** - TOML configuration of the set and its source
//!
//! ## Example
//!
//! ```rust,no_run
//! use pisces_core::filter::{PiscesFilter, RecordFilter};
//! use pisces_core::provider::PiscesClient;
//!
//! let client = PiscesClient::new()?;
//! let filter = PiscesFilter::new(&client, 30, 2.5)?;
//!
//! let records = vec![("4HHB.A", "hemoglobin"), ("1CRN", "crambin")];
//! let representative: Vec<_> = records.iter().filter(|r| filter.test(*r)).collect();
//! # Ok::<(), pisces_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod culled;
pub mod error;
pub mod filter;
pub mod provider;

// Re-exports for convenience
pub use config::Config;
pub use culled::CulledSet;
pub use error::{Error, Result};
pub use filter::{KeyedRecord, PiscesFilter, RecordFilter};
pub use provider::{FileListing, ListingProvider, PiscesClient, StaticListing};
