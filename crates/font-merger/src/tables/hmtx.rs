//! hmtx table merging

use read_fonts::{FontRef, TableProvider};
use write_fonts::tables::hmtx::{Hmtx, LongMetric};

use crate::{Result, glyph_order::GlyphOrder};

/// Merge hmtx tables from multiple fonts.
///
/// Every glyph gets a full long metric in the merged order; the side-bearing
/// run-length optimization is left to downstream tooling.
pub fn merge_hmtx(fonts: &[FontRef], order: &GlyphOrder) -> Result<Hmtx> {
    let total = order.total_glyphs() as usize;
    let mut h_metrics = vec![LongMetric { advance: 0, side_bearing: 0 }; total];

    for (font_idx, font) in fonts.iter().enumerate() {
        let hhea = font.hhea()?;
        let hmtx = font.hmtx()?;
        let num_h_metrics = hhea.number_of_h_metrics() as usize;

        for (old_gid, new_gid) in order.font_glyphs(font_idx) {
            let gid = old_gid as usize;

            let (advance, side_bearing) = if gid < num_h_metrics {
                match hmtx.h_metrics().get(gid) {
                    Some(lm) => (lm.advance.get(), lm.side_bearing.get()),
                    None => (0, 0),
                }
            } else {
                // Glyphs past numberOfHMetrics reuse the last advance width
                let last_advance = if num_h_metrics > 0 {
                    hmtx.h_metrics()
                        .get(num_h_metrics - 1)
                        .map(|lm| lm.advance.get())
                        .unwrap_or(0)
                } else {
                    0
                };
                let lsb_idx = gid - num_h_metrics;
                let lsb =
                    hmtx.left_side_bearings().get(lsb_idx).map(|b| b.get()).unwrap_or(0);
                (last_advance, lsb)
            };

            h_metrics[new_gid as usize] = LongMetric { advance, side_bearing };
        }
    }

    Ok(Hmtx { h_metrics, left_side_bearings: Vec::new() })
}
