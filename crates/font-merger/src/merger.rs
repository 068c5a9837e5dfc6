//! Main Merger implementation

use std::collections::HashSet;

use log::info;
use read_fonts::{FontRef, TableProvider, types::Tag};
use write_fonts::FontBuilder;

use crate::{
    MergeError, Result,
    glyph_order::GlyphOrder,
    tables::{
        cmap::merge_cmap, glyf::merge_glyf, head::merge_head, hhea::merge_hhea, hmtx::merge_hmtx,
        maxp::merge_maxp, post::merge_post,
    },
};

/// Tables rebuilt by the merger; anything else is copied from the first font.
const HANDLED_TABLES: &[[u8; 4]] = &[
    *b"head", *b"maxp", *b"cmap", *b"hmtx", *b"hhea", *b"post", *b"glyf", *b"loca",
];

/// Layout tables are never carried into the merged font. Inputs are expected
/// to have them stripped already; this guards against ones that slipped
/// through, whose glyph indices would be stale after remapping.
const DROPPED_TABLES: &[[u8; 4]] = &[*b"GSUB", *b"GPOS", *b"GDEF"];

/// Font merger that combines multiple static TrueType fonts into one
#[derive(Default)]
pub struct Merger;

impl Merger {
    pub fn new() -> Self {
        Self
    }

    /// Merge multiple font files into one
    pub fn merge(&self, font_data: &[&[u8]]) -> Result<Vec<u8>> {
        if font_data.is_empty() {
            return Err(MergeError::NoFonts);
        }

        let fonts: Vec<_> = font_data
            .iter()
            .map(|data| FontRef::new(data))
            .collect::<std::result::Result<_, _>>()?;

        self.merge_fonts(&fonts)
    }

    /// Merge multiple FontRef instances
    pub fn merge_fonts(&self, fonts: &[FontRef]) -> Result<Vec<u8>> {
        if fonts.is_empty() {
            return Err(MergeError::NoFonts);
        }

        self.validate_units_per_em(fonts)?;

        let order = GlyphOrder::compute(fonts)?;
        let total_glyphs = order.total_glyphs();

        info!("Merging {} fonts with {total_glyphs} total glyphs", fonts.len());

        let cmap = merge_cmap(fonts, &order)?;
        let mut head = merge_head(fonts)?;
        let maxp = merge_maxp(fonts, total_glyphs)?;
        let hmtx = merge_hmtx(fonts, &order)?;
        let hhea = merge_hhea(fonts, total_glyphs)?;
        let post = merge_post(fonts, total_glyphs)?;
        let (glyf, loca, loca_format) = merge_glyf(fonts, &order)?;

        head.index_to_loc_format = match loca_format {
            write_fonts::tables::loca::LocaFormat::Short => 0,
            write_fonts::tables::loca::LocaFormat::Long => 1,
        };

        let mut builder = FontBuilder::new();
        builder.add_table(&head)?;
        builder.add_table(&maxp)?;
        builder.add_table(&cmap)?;
        builder.add_table(&hmtx)?;
        builder.add_table(&hhea)?;
        builder.add_table(&post)?;
        builder.add_table(&glyf)?;
        builder.add_table(&loca)?;

        self.copy_first_font_tables(&mut builder, &fonts[0])?;

        Ok(builder.build())
    }

    fn validate_units_per_em(&self, fonts: &[FontRef]) -> Result<()> {
        let (first, rest) = fonts.split_first().ok_or(MergeError::NoFonts)?;
        let first_upem = first.head()?.units_per_em();
        rest.iter().try_for_each(|font| {
            let upem = font.head()?.units_per_em();
            if upem == first_upem {
                Ok(())
            } else {
                Err(MergeError::IncompatibleUnitsPerEm { expected: first_upem, actual: upem })
            }
        })
    }

    /// Copy OS/2, name, and any other unhandled tables verbatim from the
    /// first font.
    fn copy_first_font_tables(&self, builder: &mut FontBuilder, font: &FontRef) -> Result<()> {
        let handled: HashSet<Tag> = HANDLED_TABLES.iter().map(Tag::new).collect();
        let dropped: HashSet<Tag> = DROPPED_TABLES.iter().map(Tag::new).collect();

        for record in font.table_directory.table_records() {
            let tag = record.tag();
            if handled.contains(&tag) || dropped.contains(&tag) || builder.contains(tag) {
                continue;
            }
            if let Some(data) = font.table_data(tag) {
                builder.add_raw(tag, data.as_bytes().to_vec());
            }
        }

        Ok(())
    }
}
