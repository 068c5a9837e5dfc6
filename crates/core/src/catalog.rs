//! Icon catalog lookup over the pre-built stylesheet corpus.
//!
//! The distribution ships one generated stylesheet per family; each icon
//! appears as a rule of the form `.fa-github { --fa: "\f09b"; }`. The catalog
//! scans the candidate documents for a family in order and extracts the
//! codepoint escape from the first match.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use regex::Regex;
use thiserror::Error;

use crate::{config::CLASS_PREFIX, family::Family, spec::IconRequest};

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("icons not found in stylesheet corpus: {}", .0.join(", "))]
    MissingIcons(Vec<String>),
    #[error("invalid icon rule pattern")]
    Pattern(#[from] regex::Error),
}

/// A resolved icon: the spec entry plus the codepoint escape found in the
/// corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRecord {
    pub family: Family,
    pub icon: String,
    /// Codepoint escape exactly as it appears in the corpus, e.g. `\f09b`.
    pub escape: String,
}

impl IconRecord {
    /// Full CSS class name, e.g. `fa-github`.
    pub fn class_name(&self) -> String {
        format!("{CLASS_PREFIX}{}", self.icon)
    }

    /// The per-icon rule emitted into the minimized stylesheet.
    pub fn css_rule(&self) -> String {
        format!(".{} {{\n  --fa: \"{}\";\n}}", self.class_name(), self.escape)
    }
}

/// Lookup table over the stylesheet corpus in one directory.
pub struct Catalog {
    assets_dir: PathBuf,
}

impl Catalog {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self { assets_dir: assets_dir.into() }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Look up one icon in the family's candidate documents.
    ///
    /// Documents are scanned in the family's fixed candidate order; documents
    /// that are missing or unreadable are skipped. Returns `None` when no
    /// document contains a rule for the icon.
    pub fn lookup(&self, family: Family, icon: &str) -> Result<Option<IconRecord>, LookupError> {
        let pattern = format!(
            r#"\.{}\s*\{{\s*--fa:\s*"([^"]+)";?\s*\}}"#,
            regex::escape(&format!("{CLASS_PREFIX}{icon}"))
        );
        let rule = Regex::new(&pattern)?;

        for document in family.stylesheet_candidates() {
            let path = self.assets_dir.join(document);
            let Ok(content) = fs::read_to_string(&path) else {
                debug!("Skipping unreadable document: {}", path.display());
                continue;
            };

            if let Some(captures) = rule.captures(&content) {
                let escape = captures[1].to_string();
                return Ok(Some(IconRecord { family, icon: icon.to_string(), escape }));
            }
        }

        Ok(None)
    }

    /// Resolve every request, aggregating all misses into a single error.
    pub fn resolve(&self, requests: &[IconRequest]) -> Result<Vec<IconRecord>, LookupError> {
        let mut records = Vec::with_capacity(requests.len());
        let mut missing = Vec::new();

        for request in requests {
            match self.lookup(request.family, &request.icon)? {
                Some(record) => records.push(record),
                None => missing.push(format!("{}:{}", request.family, request.icon)),
            }
        }

        if !missing.is_empty() {
            return Err(LookupError::MissingIcons(missing));
        }

        Ok(records)
    }
}
