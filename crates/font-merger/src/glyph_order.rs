//! Merged glyph numbering.

use read_fonts::{FontRef, TableProvider};

use crate::{MergeError, Result};

/// Glyph numbering for the merged font.
///
/// The first font contributes all of its glyphs in order, keeping `.notdef`
/// at GID 0. Every later font contributes its glyphs from GID 1 onward; its
/// own `.notdef` is dropped and any reference to it remaps to the shared
/// GID 0. Icon subsets address glyphs by codepoint only, so no name-based
/// deduplication is attempted.
pub struct GlyphOrder {
    starts: Vec<u32>,
    counts: Vec<u16>,
    total: u16,
}

impl GlyphOrder {
    pub fn compute(fonts: &[FontRef]) -> Result<Self> {
        let mut starts = Vec::with_capacity(fonts.len());
        let mut counts = Vec::with_capacity(fonts.len());
        let mut total: u32 = 0;

        for (idx, font) in fonts.iter().enumerate() {
            let num_glyphs = font.maxp()?.num_glyphs();
            starts.push(total);
            counts.push(num_glyphs);
            let contributed =
                if idx == 0 { num_glyphs as u32 } else { (num_glyphs as u32).saturating_sub(1) };
            total += contributed;
        }

        if total > u16::MAX as u32 {
            return Err(MergeError::TooManyGlyphs(total));
        }

        Ok(Self { starts, counts, total: total as u16 })
    }

    pub fn total_glyphs(&self) -> u16 {
        self.total
    }

    /// Remap a GID of `font_idx` into the merged order.
    pub fn remap(&self, font_idx: usize, gid: u16) -> u16 {
        if font_idx == 0 {
            gid
        } else if gid == 0 {
            0
        } else {
            (self.starts[font_idx] + gid as u32 - 1) as u16
        }
    }

    /// Iterate the (old GID, new GID) pairs contributed by one font.
    ///
    /// For fonts after the first, GID 0 is not contributed.
    pub fn font_glyphs(&self, font_idx: usize) -> impl Iterator<Item = (u16, u16)> + '_ {
        let first = if font_idx == 0 { 0 } else { 1 };
        (first..self.counts[font_idx]).map(move |gid| (gid, self.remap(font_idx, gid)))
    }
}
