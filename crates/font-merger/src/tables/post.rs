//! post table merging

use std::result;

use font_types::Version16Dot16;
use read_fonts::{FontRef, TableProvider, tables::post::Post as ReadPost};
use write_fonts::tables::post::Post;

use crate::{MergeError, Result, strategies::first};

/// Version 3.0 - no glyph names stored
const POST_VERSION_3: Version16Dot16 = Version16Dot16::new(3, 0);

/// Merge post tables from multiple fonts.
///
/// The output is always version 3.0: icon subsets are addressed by codepoint
/// and carry no glyph names worth preserving.
pub fn merge_post(fonts: &[FontRef], total_glyphs: u16) -> Result<Post> {
    let tables: Vec<ReadPost> =
        fonts.iter().map(|f| f.post()).collect::<result::Result<Vec<_>, _>>()?;

    if tables.is_empty() {
        return Err(MergeError::NoFonts);
    }

    let italic_angles: Vec<i32> = tables.iter().map(|t| t.italic_angle().to_bits()).collect();
    let underline_positions: Vec<i16> =
        tables.iter().map(|t| t.underline_position().to_i16()).collect();
    let underline_thicknesses: Vec<i16> =
        tables.iter().map(|t| t.underline_thickness().to_i16()).collect();
    let is_fixed_pitches: Vec<u32> = tables.iter().map(|t| t.is_fixed_pitch()).collect();

    Ok(Post {
        version: POST_VERSION_3,
        num_glyphs: Some(total_glyphs),
        glyph_name_index: None,
        string_data: None,
        italic_angle: font_types::Fixed::from_bits(first(&italic_angles)?),
        underline_position: font_types::FWord::new(first(&underline_positions)?),
        underline_thickness: font_types::FWord::new(first(&underline_thicknesses)?),
        is_fixed_pitch: first(&is_fixed_pitches)?,
        min_mem_type42: first(&tables.iter().map(|t| t.min_mem_type42()).collect::<Vec<_>>())?,
        max_mem_type42: first(&tables.iter().map(|t| t.max_mem_type42()).collect::<Vec<_>>())?,
        min_mem_type1: first(&tables.iter().map(|t| t.min_mem_type1()).collect::<Vec<_>>())?,
        max_mem_type1: first(&tables.iter().map(|t| t.max_mem_type1()).collect::<Vec<_>>())?,
    })
}
