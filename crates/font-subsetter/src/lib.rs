//! Font subsetting wrapper around hb-subset with builder pattern.
//!
//! This crate provides a high-level interface for subsetting icon fonts using
//! HarfBuzz's hb-subset library. It operates purely on byte slices with no
//! file I/O dependencies.
//!
//! # Example
//!
//! ```no_run
//! use icontrim_font_subsetter::Subsetter;
//!
//! let font_data: &[u8] = &[];
//! let subset = Subsetter::icon()
//!     .with_codepoints([0xF09B, 0xF015])
//!     .subset(font_data);
//! ```

use anyhow::Result;
use hb_subset::{Blob, FontFace, SubsetInput, Tag};

/// Layout tables to drop during subsetting.
///
/// Icon glyphs are addressed by codepoint alone, so substitution and
/// positioning tables only add weight to the output.
pub const LAYOUT_TABLES_TO_DROP: &[&[u8; 4]] = &[b"GSUB", b"GPOS", b"GDEF"];

/// Font subsetter with builder pattern.
///
/// Configure the codepoints to keep and the reduction options before
/// performing the subset operation.
#[derive(Default)]
pub struct Subsetter {
    codepoints: Vec<u32>,
    drop_layout_tables: bool,
    desubroutinize: bool,
    keep_notdef_outline: bool,
}

impl Subsetter {
    /// Creates a new subsetter with default settings.
    ///
    /// Default settings keep every table and sub-outline; only the
    /// codepoint set restricts the output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a subsetter pre-configured for static icon display.
    ///
    /// This preset:
    /// - Drops [`LAYOUT_TABLES_TO_DROP`]
    /// - Flattens callable sub-outlines (desubroutinize)
    /// - Keeps the `.notdef` fallback outline
    pub fn icon() -> Self {
        Self {
            codepoints: Vec::new(),
            drop_layout_tables: true,
            desubroutinize: true,
            keep_notdef_outline: true,
        }
    }

    /// Adds individual Unicode codepoints to include in the subset.
    pub fn with_codepoints(mut self, codepoints: impl IntoIterator<Item = u32>) -> Self {
        self.codepoints.extend(codepoints);
        self
    }

    /// Sets whether to drop glyph substitution and positioning tables.
    pub fn drop_layout_tables(mut self, drop: bool) -> Self {
        self.drop_layout_tables = drop;
        self
    }

    /// Sets whether to flatten callable sub-outlines into their call sites.
    pub fn desubroutinize(mut self, desubroutinize: bool) -> Self {
        self.desubroutinize = desubroutinize;
        self
    }

    /// Sets whether to keep the outline of the `.notdef` glyph.
    pub fn keep_notdef_outline(mut self, keep: bool) -> Self {
        self.keep_notdef_outline = keep;
        self
    }

    /// Subsets the font data and returns the result.
    ///
    /// # Arguments
    ///
    /// * `data` - The raw font file data
    ///
    /// # Returns
    ///
    /// The subset font data as a byte vector, or an error if subsetting fails.
    pub fn subset(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut input = SubsetInput::new()?;

        if self.desubroutinize {
            input.flags().remove_subroutines();
        }
        if self.keep_notdef_outline {
            input.flags().retain_notdef_outline();
        }

        {
            let mut unicode_set = input.unicode_set();
            for cp in &self.codepoints {
                if let Some(c) = char::from_u32(*cp) {
                    unicode_set.insert(c);
                }
            }
        }

        if self.drop_layout_tables {
            let mut drop_tables = input.drop_table_tag_set();
            for table in LAYOUT_TABLES_TO_DROP {
                drop_tables.insert(Tag::new(*table));
            }
        }

        let font = FontFace::new(Blob::from_bytes(data)?)?;
        let subset_font = input.subset_font(&font)?;
        Ok(subset_font.underlying_blob().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_tables_count() {
        assert_eq!(LAYOUT_TABLES_TO_DROP.len(), 3);
    }

    #[test]
    fn test_builder_chain() {
        let subsetter = Subsetter::new()
            .with_codepoints([0xF09B, 0xF015])
            .drop_layout_tables(true)
            .desubroutinize(true)
            .keep_notdef_outline(true);

        assert!(subsetter.drop_layout_tables);
        assert!(subsetter.desubroutinize);
        assert!(subsetter.keep_notdef_outline);
        assert_eq!(subsetter.codepoints.len(), 2);
    }

    #[test]
    fn test_icon_preset() {
        let subsetter = Subsetter::icon();
        assert!(subsetter.drop_layout_tables);
        assert!(subsetter.desubroutinize);
        assert!(subsetter.keep_notdef_outline);
        assert!(subsetter.codepoints.is_empty());
    }

    #[test]
    fn test_invalid_font_data() {
        let result = Subsetter::icon().with_codepoints([0x41]).subset(b"not a font");
        assert!(result.is_err());
    }
}
