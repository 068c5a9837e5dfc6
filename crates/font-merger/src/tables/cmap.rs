//! cmap table merging

use indexmap::IndexMap;
use read_fonts::{
    FontRef, TableProvider,
    tables::cmap::{Cmap as ReadCmap, CmapSubtable, PlatformId},
    types,
};
use write_fonts::tables::cmap::Cmap;

use crate::{MergeError, Result, glyph_order::GlyphOrder};

/// Merge cmap tables from multiple fonts.
///
/// When two fonts map the same codepoint, the earlier font wins. This gives
/// the caller a deterministic rule for overlapping subsets: order the inputs
/// by priority.
pub fn merge_cmap(fonts: &[FontRef], order: &GlyphOrder) -> Result<Cmap> {
    let mut codepoint_to_gid: IndexMap<u32, u16> = IndexMap::new();

    for (font_idx, font) in fonts.iter().enumerate() {
        let cmap = font.cmap()?;
        if let Some(subtable) = find_best_subtable(&cmap) {
            for (codepoint, gid) in subtable_mappings(&subtable) {
                codepoint_to_gid.entry(codepoint).or_insert_with(|| order.remap(font_idx, gid));
            }
        }
    }

    let mut mappings: Vec<(char, types::GlyphId)> = codepoint_to_gid
        .iter()
        .filter_map(|(cp, gid)| {
            let ch = char::from_u32(*cp)?;
            Some((ch, types::GlyphId::new(*gid as u32)))
        })
        .collect();

    mappings.sort_by_key(|(ch, _)| *ch);

    Cmap::from_mappings(mappings).map_err(|_| MergeError::CmapBuildError)
}

/// Find the preferred cmap subtable: format 12 (full Unicode) if present,
/// otherwise format 4 (BMP), otherwise whatever the font offers.
fn find_best_subtable<'a>(cmap: &'a ReadCmap<'a>) -> Option<CmapSubtable<'a>> {
    let records = cmap.encoding_records();

    for record in records {
        if record.platform_id() == PlatformId::Unicode
            || (record.platform_id() == PlatformId::Windows && record.encoding_id() == 10)
        {
            if let Ok(subtable) = record.subtable(cmap.offset_data()) {
                if matches!(subtable, CmapSubtable::Format12(_)) {
                    return Some(subtable);
                }
            }
        }
    }

    for record in records {
        if record.platform_id() == PlatformId::Unicode
            || (record.platform_id() == PlatformId::Windows && record.encoding_id() == 1)
        {
            if let Ok(subtable) = record.subtable(cmap.offset_data()) {
                if matches!(subtable, CmapSubtable::Format4(_)) {
                    return Some(subtable);
                }
            }
        }
    }

    records.iter().find_map(|r| r.subtable(cmap.offset_data()).ok())
}

/// Decode every (codepoint, GID) pair of a subtable, skipping unmapped
/// codepoints (GID 0).
fn subtable_mappings(subtable: &CmapSubtable) -> Vec<(u32, u16)> {
    let mut mappings = Vec::new();

    match subtable {
        CmapSubtable::Format4(f4) => {
            let end_codes = f4.end_code();
            let start_codes = f4.start_code();
            let id_deltas = f4.id_delta();
            let id_range_offsets = f4.id_range_offsets();
            let glyph_id_array = f4.glyph_id_array();

            let seg_count = f4.seg_count_x2() as usize / 2;
            for seg in 0..seg_count {
                let end_code = end_codes.get(seg).map(|v| v.get()).unwrap_or(0xFFFF);
                let start_code = start_codes.get(seg).map(|v| v.get()).unwrap_or(0);
                let id_delta = id_deltas.get(seg).map(|v| v.get()).unwrap_or(0);
                let id_range_offset = id_range_offsets.get(seg).map(|v| v.get()).unwrap_or(0);

                if start_code == 0xFFFF {
                    continue;
                }

                for cp in start_code..=end_code {
                    let gid = if id_range_offset == 0 {
                        ((cp as i32 + id_delta as i32) & 0xFFFF) as u16
                    } else {
                        let glyph_idx = (id_range_offset as usize / 2) + (cp - start_code) as usize
                            - (seg_count - seg);
                        match glyph_id_array.get(glyph_idx).map(|v| v.get()) {
                            Some(gid) if gid != 0 => ((gid as i32 + id_delta as i32) & 0xFFFF) as u16,
                            _ => 0,
                        }
                    };

                    if gid != 0 {
                        mappings.push((cp as u32, gid));
                    }
                }
            }
        }
        CmapSubtable::Format12(f12) => {
            for group in f12.groups() {
                let start = group.start_char_code();
                let end = group.end_char_code();
                let mut gid = group.start_glyph_id();
                for cp in start..=end {
                    if gid != 0 {
                        mappings.push((cp, gid as u16));
                    }
                    gid += 1;
                }
            }
        }
        _ => {}
    }

    mappings
}
