//! PISCES CulledPDB membership filter
//!
//! Please cite PISCES in work that uses its lists:
//! G. Wang and R. L. Dunbrack, Jr. PISCES: a protein sequence culling server.
//! Bioinformatics, 19:1589-1591, 2003.

use super::{KeyedRecord, RecordFilter};
use crate::error::Result;
use crate::provider::ListingProvider;
use std::collections::HashSet;
use tracing::{debug, info};

const STRUCTURE_ID_LEN: usize = 4;

/// Passes records whose identifier belongs to a CulledPDB set.
///
/// Every chain identifier of the set is stored together with its 4-character
/// structure identifier, so both `"1ABC.A"` and `"1ABC"` pass when chain A of
/// 1ABC is in the set. The set is fixed at construction and the filter can
/// be shared between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiscesFilter {
    ids: HashSet<String>,
}

impl PiscesFilter {
    /// Build the filter for a CulledPDB set from a listing provider.
    ///
    /// Parameter validation is left to the provider; any provider error
    /// aborts construction.
    pub fn new<P>(provider: &P, sequence_identity: u32, resolution: f64) -> Result<Self>
    where
        P: ListingProvider + ?Sized,
    {
        let chain_ids = provider.fetch_chain_ids(sequence_identity, resolution)?;
        let filter = Self::from_chain_ids(chain_ids);

        info!(
            "Built PISCES filter pc{} / {:.1}: {} identifiers",
            sequence_identity,
            resolution,
            filter.len()
        );
        Ok(filter)
    }

    /// Build the filter directly from chain identifiers
    pub fn from_chain_ids<I, S>(chain_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ids = HashSet::new();
        for chain_id in chain_ids {
            let chain_id = chain_id.as_ref();
            ids.insert(structure_id(chain_id).to_string());
            ids.insert(chain_id.to_string());
        }
        Self { ids }
    }

    /// Whether an identifier is a member, at chain or structure granularity
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of distinct identifiers in the membership set
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the membership set is empty
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Sorted snapshot of the membership set
    pub fn ids(&self) -> Vec<String> {
        let mut result: Vec<String> = self.ids.iter().cloned().collect();
        result.sort();
        result
    }

    /// The filter as a closure, for `Iterator::filter` and friends
    pub fn predicate<R: KeyedRecord>(&self) -> impl Fn(&R) -> bool + '_ {
        move |record: &R| self.test(record)
    }
}

impl RecordFilter for PiscesFilter {
    fn test(&self, record: &dyn KeyedRecord) -> bool {
        match record.key() {
            Some(key) => self.contains(key),
            None => {
                debug!("Record without identifier rejected");
                false
            }
        }
    }
}

/// Leading structure identifier of a chain identifier; shorter ids are kept whole
fn structure_id(chain_id: &str) -> &str {
    match chain_id.char_indices().nth(STRUCTURE_ID_LEN) {
        Some((end, _)) => &chain_id[..end],
        None => chain_id,
    }
}
