//! Provider reading a CulledPDB listing from disk

use super::listing::parse_chain_ids;
use super::ListingProvider;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// A listing file downloaded earlier, either raw from PISCES or as written by
/// `pisces list`.
///
/// The file holds exactly one set, so the requested parameters are only
/// reported, never checked against its contents.
#[derive(Debug, Clone)]
pub struct FileListing {
    path: PathBuf,
}

impl FileListing {
    /// Create a provider for the listing at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the listing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ListingProvider for FileListing {
    fn fetch_chain_ids(&self, sequence_identity: u32, resolution: f64) -> Result<Vec<String>> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::provider_unavailable(self.path.display().to_string(), e.to_string()))?;

        let ids = parse_chain_ids(&content)?;

        info!(
            "Loaded {} chain identifiers from {} (requested pc{} / {:.1})",
            ids.len(),
            self.path.display(),
            sequence_identity,
            resolution
        );
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_listing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "IDs         length  Exptl.  resolution  R-factor FreeRvalue").unwrap();
        writeln!(file, "4HHBA        141     XRAY       1.74     0.135   1.000").unwrap();
        writeln!(file, "4HHBB        146     XRAY       1.74     0.135   1.000").unwrap();

        let provider = FileListing::new(file.path());
        let ids = provider.fetch_chain_ids(30, 2.5).unwrap();
        assert_eq!(ids, vec!["4HHB.A", "4HHB.B"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileListing::new(dir.path().join("absent.txt"));
        let err = provider.fetch_chain_ids(30, 2.5).unwrap_err();
        assert!(matches!(err, Error::ProviderUnavailable { .. }));
    }
}
