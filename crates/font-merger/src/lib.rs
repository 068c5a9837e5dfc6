mod error;
mod glyph_order;
mod merger;
mod strategies;
mod tables;

pub use error::{MergeError, Result};
pub use glyph_order::GlyphOrder;
pub use merger::Merger;
