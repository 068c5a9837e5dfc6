//! End-to-end minimization pipeline.
//!
//! Runs spec parsing, catalog resolution, codepoint aggregation, font
//! combination, and stylesheet generation. Both artifacts are produced in
//! memory before either file is written, so a failure anywhere leaves no
//! partial output behind.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::{
    catalog::Catalog,
    codepoints::group_codepoints,
    combine::FontCombiner,
    io::{ensure_parent_dir, read_text, write_font, write_text},
    spec::parse_spec,
    stylesheet::generate_stylesheet,
};

/// Which output files to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Artifacts {
    #[default]
    Both,
    CssOnly,
    FontOnly,
}

impl Artifacts {
    pub fn wants_css(self) -> bool {
        matches!(self, Artifacts::Both | Artifacts::CssOnly)
    }

    pub fn wants_font(self) -> bool {
        matches!(self, Artifacts::Both | Artifacts::FontOnly)
    }
}

#[derive(Debug, Clone)]
pub struct MinimizeOptions {
    pub spec_path: PathBuf,
    /// Directory holding the stylesheet corpus and the source fonts.
    pub assets_dir: PathBuf,
    /// Output file prefix; defaults to the spec file's stem.
    pub output_prefix: Option<String>,
    /// Font URL written into the stylesheet; defaults to `<prefix>.woff2`.
    pub font_url: Option<String>,
    pub artifacts: Artifacts,
}

impl MinimizeOptions {
    pub fn new(spec_path: impl Into<PathBuf>) -> Self {
        Self {
            spec_path: spec_path.into(),
            assets_dir: PathBuf::from("."),
            output_prefix: None,
            font_url: None,
            artifacts: Artifacts::default(),
        }
    }

    fn output_prefix(&self) -> String {
        match &self.output_prefix {
            Some(prefix) => prefix.clone(),
            None => self
                .spec_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "icons".to_string()),
        }
    }
}

/// Run the full minimization pipeline.
pub fn run(options: &MinimizeOptions) -> Result<()> {
    let content = read_text(&options.spec_path)
        .with_context(|| format!("Failed to read spec file: {}", options.spec_path.display()))?;
    let requests = parse_spec(&content)?;
    info!("Parsed {} icon specifications", requests.len());

    let catalog = Catalog::new(&options.assets_dir);
    let records = catalog.resolve(&requests)?;
    info!("Resolved {} icons from the stylesheet corpus", records.len());

    let output_prefix = options.output_prefix();

    let css = options
        .artifacts
        .wants_css()
        .then(|| generate_stylesheet(&records, options.font_url.as_deref(), &output_prefix));

    let font = if options.artifacts.wants_font() {
        let family_codepoints = group_codepoints(&records)?;
        for (family, codepoints) in &family_codepoints {
            info!("{family}: {} icons", codepoints.len());
        }
        Some(FontCombiner::new(&options.assets_dir).combine(&family_codepoints)?)
    } else {
        None
    };

    if let Some(data) = font {
        let path = output_path(&output_prefix, "woff2");
        ensure_parent_dir(&path)?;
        write_font(&path, &data)?;
        info!("Generated: {} ({} bytes)", path.display(), data.len());
    }

    if let Some(content) = css {
        let path = output_path(&output_prefix, "css");
        ensure_parent_dir(&path)?;
        write_text(&path, &content)?;
        info!("Generated: {}", path.display());
    }

    Ok(())
}

fn output_path(prefix: &str, extension: &str) -> PathBuf {
    Path::new(prefix).with_extension(extension)
}
