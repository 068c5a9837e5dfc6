use std::result;

use read_fonts::ReadError;
use thiserror::Error;
use write_fonts::{BuilderError, error};

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("failed to read font: {0}")]
    ReadError(#[from] ReadError),

    #[error("failed to write font: {0}")]
    WriteError(#[from] error::Error),

    #[error("failed to build font: {0}")]
    BuilderError(#[from] BuilderError),

    #[error("no fonts provided for merging")]
    NoFonts,

    #[error("fonts have incompatible unitsPerEm: expected {expected}, got {actual}")]
    IncompatibleUnitsPerEm { expected: u16, actual: u16 },

    #[error("merged font would exceed the glyph limit ({0} glyphs)")]
    TooManyGlyphs(u32),

    #[error("table values must be equal for '{table}' field '{field}'")]
    NotEqual { table: &'static str, field: &'static str },

    #[error("required table '{0}' not found")]
    MissingTable(&'static str),

    #[error("failed to build cmap table")]
    CmapBuildError,
}

pub type Result<T> = result::Result<T, MergeError>;
