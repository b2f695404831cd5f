//! Record filtering against CulledPDB sets
//!
//! This module provides:
//! - [`RecordFilter`] - a pass/fail predicate over pipeline records
//! - [`KeyedRecord`] - how a record exposes the identifier it is tested by
//! - [`PiscesFilter`] - membership in a PISCES CulledPDB set, at chain or
//!   structure granularity

mod pisces_filter;
mod record;

pub use pisces_filter::PiscesFilter;
pub use record::KeyedRecord;

/// Pass/fail predicate over records
pub trait RecordFilter {
    /// Whether `record` passes the filter.
    ///
    /// Never fails: a record without a usable key does not pass.
    fn test(&self, record: &dyn KeyedRecord) -> bool;
}
