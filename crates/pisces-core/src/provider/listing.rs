//! Parsing of PISCES download pages and CulledPDB listing files
//!
//! A listing file looks like:
//!
//! ```text
//! IDs         length  Exptl.  resolution  R-factor FreeRvalue
//! 101MA        154     XRAY       2.07     0.202   0.235
//! 102LA        165     XRAY       1.74     0.187   1.000
//! ```
//!
//! The first column is the structure id immediately followed by the chain id.

use crate::culled::CulledSet;
use crate::error::{Error, Result};
use tracing::debug;

const HEADER_TOKEN: &str = "IDs";
const STRUCTURE_ID_LEN: usize = 4;
const FILE_NAME_MARKER: &str = "cullpdb_pc";

/// Parse a listing body into `XXXX.C` chain identifiers.
///
/// Also accepts files with one identifier per line that already carry a
/// `.` or `_` separator, or bare 4-character structure ids, so the output of
/// a previous download can be read back.
pub fn parse_chain_ids(body: &str) -> Result<Vec<String>> {
    let mut ids = Vec::new();
    let mut saw_header = false;
    let mut saw_content = false;

    for (index, line) in body.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        saw_content = true;

        let Some(token) = line.split_whitespace().next() else {
            continue;
        };

        if token == HEADER_TOKEN {
            saw_header = true;
            continue;
        }

        match normalize_identifier(token) {
            Some(id) => ids.push(id),
            None => {
                return Err(Error::malformed_listing_at(
                    format!("'{token}' is not a structure or chain identifier"),
                    index + 1,
                ))
            }
        }
    }

    if saw_content && ids.is_empty() && !saw_header {
        return Err(Error::malformed_listing("no chain identifiers found"));
    }

    debug!("Parsed {} chain identifiers", ids.len());
    Ok(ids)
}

fn normalize_identifier(token: &str) -> Option<String> {
    if !token.is_ascii() || token.len() < STRUCTURE_ID_LEN {
        return None;
    }

    let (structure, chain) = token.split_at(STRUCTURE_ID_LEN);
    if !structure.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    if chain.is_empty() {
        return Some(token.to_string());
    }

    if let Some(rest) = chain.strip_prefix('.').or_else(|| chain.strip_prefix('_')) {
        return (!rest.is_empty()).then(|| token.to_string());
    }

    Some(format!("{structure}.{chain}"))
}

/// Locate the listing file for `set` in a PISCES download index page.
///
/// The page is HTML, but only the file names matter: every run of characters
/// starting at `cullpdb_pc` up to a quote, bracket, slash or whitespace is a
/// candidate. The first candidate in page order that belongs to `set` wins.
pub fn find_listing_file_name(index_page: &str, set: &CulledSet) -> Option<String> {
    let mut rest = index_page;

    while let Some(start) = rest.find(FILE_NAME_MARKER) {
        let candidate = &rest[start..];
        let end = candidate
            .find(|c: char| matches!(c, '"' | '\'' | '<' | '>' | '/') || c.is_whitespace())
            .unwrap_or(candidate.len());
        let name = &candidate[..end];

        if set.matches_file_name(name) {
            debug!("Selected listing file {} for {}", name, set);
            return Some(name.to_string());
        }

        rest = &candidate[end.max(FILE_NAME_MARKER.len())..];
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "\
IDs         length  Exptl.  resolution  R-factor FreeRvalue
101MA        154     XRAY       2.07     0.202   0.235
102LA        165     XRAY       1.74     0.187   1.000
1A0BAB       223     XRAY       1.90     0.180   0.220
";

    #[test]
    fn test_parse_raw_listing() {
        let ids = parse_chain_ids(LISTING).unwrap();
        assert_eq!(ids, vec!["101M.A", "102L.A", "1A0B.AB"]);
    }

    #[test]
    fn test_parse_separated_ids() {
        let ids = parse_chain_ids("# saved\n1ABC.A\n1ABC_B\n\n2XYZ.A\n").unwrap();
        assert_eq!(ids, vec!["1ABC.A", "1ABC_B", "2XYZ.A"]);
    }

    #[test]
    fn test_parse_structure_ids() {
        let ids = parse_chain_ids("1ABC\n1ABC.A\n2XYZ\n2XYZ.A\n").unwrap();
        assert_eq!(ids, vec!["1ABC", "1ABC.A", "2XYZ", "2XYZ.A"]);
        assert!(parse_chain_ids("1A-C\n").is_err());
    }

    #[test]
    fn test_parse_header_only() {
        let ids = parse_chain_ids("IDs length Exptl. resolution R-factor FreeRvalue\n").unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_parse_empty_body() {
        assert!(parse_chain_ids("").unwrap().is_empty());
        assert!(parse_chain_ids("\n# nothing yet\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_short_token() {
        let err = parse_chain_ids("IDs\n1AB\n").unwrap_err();
        match err {
            Error::MalformedListing { line, .. } => assert_eq!(line, Some(2)),
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_parse_rejects_html() {
        assert!(parse_chain_ids("<html><body>Not Found</body></html>").is_err());
    }

    #[test]
    fn test_parse_rejects_dangling_separator() {
        assert!(parse_chain_ids("1ABC.\n").is_err());
    }

    #[test]
    fn test_find_file_name_legacy() {
        let page = r#"
<a href="cullpdb_pc25_res2.0_R0.3_d180315_chains9000">cullpdb_pc25_res2.0_R0.3_d180315_chains9000</a>
<a href="cullpdb_pc30_res2.0_R0.25_d180315_chains11000.fasta">fasta</a>
<a href="cullpdb_pc30_res2.0_R0.25_d180315_chains11000">cullpdb_pc30_res2.0_R0.25_d180315_chains11000</a>
"#;
        let set = CulledSet::new(30, 2.0).unwrap();
        assert_eq!(
            find_listing_file_name(page, &set).as_deref(),
            Some("cullpdb_pc30_res2.0_R0.25_d180315_chains11000")
        );
    }

    #[test]
    fn test_find_file_name_current() {
        let page = "<td><a href='cullpdb_pc90.0_res0.0-3.0_noBrks_len40-10000_R0.3_Xray_d2024_05_10_chains41000'>x</a></td>";
        let set = CulledSet::new(90, 3.0).unwrap();
        assert_eq!(
            find_listing_file_name(page, &set).as_deref(),
            Some("cullpdb_pc90.0_res0.0-3.0_noBrks_len40-10000_R0.3_Xray_d2024_05_10_chains41000")
        );
    }

    #[test]
    fn test_find_file_name_missing() {
        let page = "<a href=\"cullpdb_pc20_res1.6_R0.25_d180315_chains3000\">x</a>";
        let set = CulledSet::new(20, 1.8).unwrap();
        assert!(find_listing_file_name(page, &set).is_none());
        assert!(find_listing_file_name("", &set).is_none());
    }
}
