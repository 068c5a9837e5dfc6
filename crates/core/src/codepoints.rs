//! Codepoint extraction and per-family aggregation.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::{catalog::IconRecord, family::Family};

/// Codepoints to keep, grouped by source family. `BTreeMap`/`BTreeSet` give
/// the fixed family order and sorted codepoints for free.
pub type FamilyCodepoints = BTreeMap<Family, BTreeSet<u32>>;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid codepoint escape: '{0}'")]
pub struct BadEscape(pub String);

/// Convert a stylesheet codepoint escape like `\f09b` to its integer value.
pub fn escape_to_codepoint(escape: &str) -> Result<u32, BadEscape> {
    let hex: String = escape.chars().filter(|c| *c != '\\').collect();
    if hex.is_empty() {
        return Err(BadEscape(escape.to_string()));
    }
    u32::from_str_radix(&hex, 16).map_err(|_| BadEscape(escape.to_string()))
}

/// Group resolved icons into per-family codepoint sets.
pub fn group_codepoints(records: &[IconRecord]) -> Result<FamilyCodepoints, BadEscape> {
    let mut grouped = FamilyCodepoints::new();
    for record in records {
        let codepoint = escape_to_codepoint(&record.escape)?;
        grouped.entry(record.family).or_default().insert(codepoint);
    }
    Ok(grouped)
}
