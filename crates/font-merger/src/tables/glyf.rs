//! glyf table merging (TrueType outlines)
//!
//! Per-glyph hinting instructions are stripped from all fonts except the
//! first. Instructions may reference functions in `fpgm` or values in `cvt`,
//! which are only carried over from the first font; keeping them would risk
//! rendering errors on incompatible function numbers or CVT indices.

use std::collections::HashSet;

use read_fonts::{TableProvider, tables::glyf::Glyph as ReadGlyph};
use write_fonts::tables::{
    glyf::{
        Anchor, Bbox, Component, ComponentFlags, CompositeGlyph, Contour, Glyf, GlyfLocaBuilder,
        Glyph, SimpleGlyph, Transform,
    },
    loca::{Loca, LocaFormat},
};

use crate::{MergeError, Result, glyph_order::GlyphOrder};

/// Merge glyf tables from multiple fonts.
///
/// Returns the glyf table, loca table, and loca format. Component GIDs of
/// composite glyphs are remapped into the merged order.
pub fn merge_glyf(
    fonts: &[read_fonts::FontRef],
    order: &GlyphOrder,
) -> Result<(Glyf, Loca, LocaFormat)> {
    let total = order.total_glyphs() as usize;
    let mut glyphs: Vec<Glyph> = (0..total).map(|_| Glyph::Empty).collect();

    for (font_idx, font) in fonts.iter().enumerate() {
        let glyf = font.glyf().map_err(|_| MergeError::MissingTable("glyf"))?;
        let loca = font.loca(None).map_err(|_| MergeError::MissingTable("loca"))?;

        for (old_gid, new_gid) in order.font_glyphs(font_idx) {
            let glyph = match loca.get_glyf(read_fonts::types::GlyphId::new(old_gid as u32), &glyf)
            {
                Ok(Some(g)) => convert_glyph(&g, font_idx, order, font_idx > 0),
                _ => Glyph::Empty,
            };
            glyphs[new_gid as usize] = glyph;
        }
    }

    // OTS (used by Firefox) rejects composites referencing empty glyphs
    let empty_gids: HashSet<u16> = glyphs
        .iter()
        .enumerate()
        .filter_map(|(gid, g)| matches!(g, Glyph::Empty).then_some(gid as u16))
        .collect();

    for glyph in &mut glyphs {
        if let Glyph::Composite(composite) = glyph {
            let references_empty = composite
                .components()
                .iter()
                .any(|comp| empty_gids.contains(&comp.glyph.to_u16()));
            if references_empty {
                *glyph = Glyph::Empty;
            }
        }
    }

    let mut builder = GlyfLocaBuilder::new();
    for glyph in &glyphs {
        // Ignore validation errors for empty/invalid glyphs
        let _ = builder.add_glyph(glyph);
    }

    Ok(builder.build())
}

/// Convert a read-fonts glyph to a write-fonts glyph, remapping component
/// GIDs and optionally stripping per-glyph instructions.
fn convert_glyph(
    glyph: &ReadGlyph,
    font_idx: usize,
    order: &GlyphOrder,
    strip_hinting: bool,
) -> Glyph {
    match glyph {
        ReadGlyph::Simple(simple) => {
            let mut contours: Vec<Contour> = Vec::new();

            let end_pts = simple.end_pts_of_contours();
            let mut points_iter = simple.points();
            let mut current_point = 0usize;

            for end_pt in end_pts {
                let end = end_pt.get() as usize;
                let mut contour_points = Vec::new();

                while current_point <= end {
                    if let Some(pt) = points_iter.next() {
                        contour_points.push(read_fonts::tables::glyf::CurvePoint {
                            x: pt.x,
                            y: pt.y,
                            on_curve: pt.on_curve,
                        });
                    }
                    current_point += 1;
                }

                contours.push(contour_points.into());
            }

            let bbox = Bbox {
                x_min: simple.x_min(),
                y_min: simple.y_min(),
                x_max: simple.x_max(),
                y_max: simple.y_max(),
            };

            let instructions = if strip_hinting { vec![] } else { simple.instructions().to_vec() };

            Glyph::Simple(SimpleGlyph { bbox, contours, instructions })
        }
        ReadGlyph::Composite(composite) => {
            let mut components: Vec<Component> = Vec::new();

            for comp in composite.components() {
                let new_gid = order.remap(font_idx, comp.glyph.to_u32() as u16);

                let anchor = match comp.anchor {
                    read_fonts::tables::glyf::Anchor::Offset { x, y } => Anchor::Offset { x, y },
                    read_fonts::tables::glyf::Anchor::Point { base, component } => {
                        Anchor::Point { base, component }
                    }
                };

                let transform = Transform {
                    xx: comp.transform.xx,
                    yx: comp.transform.yx,
                    xy: comp.transform.xy,
                    yy: comp.transform.yy,
                };

                let flags: ComponentFlags = comp.flags.into();

                components.push(Component {
                    glyph: font_types::GlyphId16::new(new_gid),
                    anchor,
                    transform,
                    flags,
                });
            }

            if components.is_empty() {
                return Glyph::Empty;
            }

            let bbox = Bbox {
                x_min: composite.x_min(),
                y_min: composite.y_min(),
                x_max: composite.x_max(),
                y_max: composite.y_max(),
            };

            let first_component = components.remove(0);
            let mut composite_glyph = CompositeGlyph::new(first_component, bbox);

            for comp in components {
                composite_glyph.add_component(comp, bbox);
            }

            Glyph::Composite(composite_glyph)
        }
    }
}
