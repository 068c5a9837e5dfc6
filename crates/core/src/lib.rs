//! Icontrim Core - reusable minimization pipeline for icon fonts.

pub mod catalog;
pub mod codepoints;
pub mod combine;
pub mod config;
pub mod family;
pub mod io;
pub mod pipeline;
pub mod spec;
pub mod stylesheet;

pub use catalog::{Catalog, IconRecord, LookupError};
pub use codepoints::{FamilyCodepoints, escape_to_codepoint, group_codepoints};
pub use combine::FontCombiner;
pub use family::Family;
pub use pipeline::{Artifacts, MinimizeOptions, run};
pub use spec::{IconRequest, SpecError, parse_spec};
pub use stylesheet::generate_stylesheet;
