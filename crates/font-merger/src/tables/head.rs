//! head table merging

use std::result;

use read_fonts::{FontRef, TableProvider, tables::head::Head as ReadHead};
use write_fonts::tables::head::Head;

use crate::{
    MergeError, Result,
    strategies::{equal, max, merge_bits, min},
};

/// Per-bit merge mode for head.flags (see [`merge_bits`]).
const HEAD_FLAGS_BIT_MAP: [Option<bool>; 16] = [
    Some(true), // baseline at y=0
    Some(true), // left sidebearing at x=0
    None,       // instructions depend on point size
    Some(true), // force ppem to integer
    Some(true), // instructions alter advance width
    None,       // bits 5-10 reserved
    None,
    None,
    None,
    None,
    None,
    Some(true), // lossless font data
    Some(true), // font converted
    Some(true), // optimized for ClearType
    Some(true), // last resort font
    None,       // reserved
];

/// Per-bit merge mode for head.macStyle. Bold/italic/condensed/extended
/// only survive when every input carries them.
const MAC_STYLE_BIT_MAP: [Option<bool>; 16] = [
    Some(false), // bold
    Some(false), // italic
    Some(true),  // underline
    Some(true),  // outline
    Some(true),  // shadow
    Some(false), // condensed
    Some(false), // extended
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
];

/// Merge head tables. unitsPerEm must agree across inputs, the bounding
/// box widens to cover every input, and timestamps follow the first font.
/// The caller overwrites `index_to_loc_format` once loca is rebuilt.
pub fn merge_head(fonts: &[FontRef]) -> Result<Head> {
    let tables: Vec<ReadHead> =
        fonts.iter().map(|f| f.head()).collect::<result::Result<Vec<_>, _>>()?;

    let head = tables.first().ok_or(MergeError::NoFonts)?;

    let upems: Vec<u16> = tables.iter().map(|t| t.units_per_em()).collect();
    let flag_words: Vec<u16> = tables.iter().map(|t| t.flags().bits()).collect();
    let style_words: Vec<u16> = tables.iter().map(|t| t.mac_style().bits()).collect();
    let revisions: Vec<i32> = tables.iter().map(|t| t.font_revision().to_bits()).collect();

    let units_per_em = equal(&upems, "head", "unitsPerEm")?;
    let flags = merge_bits(&flag_words, &HEAD_FLAGS_BIT_MAP)?;
    let mac_style = merge_bits(&style_words, &MAC_STYLE_BIT_MAP)?;
    let font_revision = max(&revisions)?;

    Ok(Head {
        font_revision: font_types::Fixed::from_bits(font_revision),
        checksum_adjustment: 0, // recomputed on write
        magic_number: 0x5F0F3CF5,
        flags: write_fonts::tables::head::Flags::from_bits_truncate(flags),
        units_per_em,
        created: head.created(),
        modified: head.modified(),
        x_min: min(&tables.iter().map(|t| t.x_min()).collect::<Vec<_>>())?,
        y_min: min(&tables.iter().map(|t| t.y_min()).collect::<Vec<_>>())?,
        x_max: max(&tables.iter().map(|t| t.x_max()).collect::<Vec<_>>())?,
        y_max: max(&tables.iter().map(|t| t.y_max()).collect::<Vec<_>>())?,
        mac_style: write_fonts::tables::head::MacStyle::from_bits_truncate(mac_style),
        lowest_rec_ppem: max(&tables.iter().map(|t| t.lowest_rec_ppem()).collect::<Vec<_>>())?,
        font_direction_hint: head.font_direction_hint(),
        index_to_loc_format: head.index_to_loc_format(),
    })
}
