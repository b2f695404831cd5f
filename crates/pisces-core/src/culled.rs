//! CulledPDB set parameters
//!
//! PISCES publishes one culled list per (sequence identity, resolution) pair.
//! Only the pairs drawn from [`SEQUENCE_IDENTITIES`] x [`RESOLUTIONS`] exist.

use crate::error::{Error, Result};
use std::fmt;

/// Published maximum pairwise sequence identity thresholds (percent)
pub const SEQUENCE_IDENTITIES: [u32; 9] = [20, 25, 30, 40, 50, 60, 70, 80, 90];

/// Published resolution cutoffs (Å)
pub const RESOLUTIONS: [f64; 6] = [1.6, 1.8, 2.0, 2.2, 2.5, 3.0];

const RESOLUTION_TOLERANCE: f64 = 1e-6;

/// A validated CulledPDB set selector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CulledSet {
    sequence_identity: u32,
    resolution: f64,
}

impl CulledSet {
    /// Validate a parameter pair against the published grid
    pub fn new(sequence_identity: u32, resolution: f64) -> Result<Self> {
        if !SEQUENCE_IDENTITIES.contains(&sequence_identity) {
            return Err(Error::invalid_parameters(format!(
                "sequence identity {sequence_identity} is not published, expected one of {SEQUENCE_IDENTITIES:?}"
            )));
        }

        let Some(&resolution) = RESOLUTIONS
            .iter()
            .find(|&&r| (r - resolution).abs() < RESOLUTION_TOLERANCE)
        else {
            return Err(Error::invalid_parameters(format!(
                "resolution {resolution} is not published, expected one of {RESOLUTIONS:?}"
            )));
        };

        Ok(Self {
            sequence_identity,
            resolution,
        })
    }

    /// Sequence identity threshold
    pub fn sequence_identity(&self) -> u32 {
        self.sequence_identity
    }

    /// Resolution cutoff
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// File name prefixes under which PISCES publishes this set.
    ///
    /// The server has used two naming schemes over time:
    /// - `cullpdb_pc30_res2.5_R0.3_d180315_chains12345`
    /// - `cullpdb_pc30.0_res0.0-2.5_noBrks_len40-10000_R0.3_Xray_d2024_05_10_chains31594`
    pub fn file_name_prefixes(&self) -> [String; 2] {
        let seq = self.sequence_identity;
        let res = self.resolution;
        [
            format!("cullpdb_pc{seq}_res{res:.1}_"),
            format!("cullpdb_pc{seq}.0_res0.0-{res:.1}_"),
        ]
    }

    /// Whether a published file name belongs to this set.
    ///
    /// FASTA variants and compressed copies of the same list are skipped.
    pub fn matches_file_name(&self, file_name: &str) -> bool {
        if file_name.contains(".fasta") || file_name.ends_with(".gz") {
            return false;
        }
        self.file_name_prefixes()
            .iter()
            .any(|prefix| file_name.starts_with(prefix.as_str()))
    }

    /// Every published set, ordered by sequence identity then resolution
    pub fn all() -> impl Iterator<Item = CulledSet> {
        SEQUENCE_IDENTITIES.iter().flat_map(|&sequence_identity| {
            RESOLUTIONS.iter().map(move |&resolution| CulledSet {
                sequence_identity,
                resolution,
            })
        })
    }
}

impl fmt::Display for CulledSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pc{} / {:.1}Å", self.sequence_identity, self.resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pair() {
        let set = CulledSet::new(30, 2.5).unwrap();
        assert_eq!(set.sequence_identity(), 30);
        assert!((set.resolution() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_sequence_identity() {
        let err = CulledSet::new(35, 2.5).unwrap_err();
        assert!(matches!(err, Error::InvalidParameters { .. }));
    }

    #[test]
    fn test_invalid_resolution() {
        assert!(CulledSet::new(30, 2.4).is_err());
        assert!(CulledSet::new(30, 0.0).is_err());
    }

    #[test]
    fn test_resolution_tolerance() {
        // 1.6 written as a computed value still selects the published cutoff
        let set = CulledSet::new(20, 0.8 * 2.0).unwrap();
        assert_eq!(set.to_string(), "pc20 / 1.6Å");
    }

    #[test]
    fn test_file_name_prefixes() {
        let set = CulledSet::new(30, 2.0).unwrap();
        let [legacy, current] = set.file_name_prefixes();
        assert_eq!(legacy, "cullpdb_pc30_res2.0_");
        assert_eq!(current, "cullpdb_pc30.0_res0.0-2.0_");
    }

    #[test]
    fn test_matches_file_name() {
        let set = CulledSet::new(25, 1.8).unwrap();
        assert!(set.matches_file_name("cullpdb_pc25_res1.8_R0.25_d180315_chains6789"));
        assert!(set.matches_file_name(
            "cullpdb_pc25.0_res0.0-1.8_noBrks_len40-10000_R0.25_Xray_d2024_05_10_chains9876"
        ));
        assert!(!set.matches_file_name("cullpdb_pc25_res1.8_R0.25_d180315_chains6789.fasta"));
        assert!(!set.matches_file_name("cullpdb_pc25_res1.8_R0.25_d180315_chains6789.gz"));
        assert!(!set.matches_file_name("cullpdb_pc25_res2.8_R0.25_d180315_chains6789"));
        assert!(!set.matches_file_name("cullpdb_pc20_res1.8_R0.25_d180315_chains6789"));
    }

    #[test]
    fn test_all_sets() {
        let sets: Vec<_> = CulledSet::all().collect();
        assert_eq!(sets.len(), SEQUENCE_IDENTITIES.len() * RESOLUTIONS.len());
        assert_eq!(sets[0].to_string(), "pc20 / 1.6Å");
        assert_eq!(sets[sets.len() - 1].to_string(), "pc90 / 3.0Å");
    }
}
