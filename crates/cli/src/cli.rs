//! CLI definitions and dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use icontrim_core::{Artifacts, MinimizeOptions, run};

#[derive(Debug, Parser)]
#[command(name = "icontrim")]
#[command(about = "Create minimal icon font and CSS files from a spec file")]
pub struct Cli {
    /// Spec file containing CSS class pairs, one per line
    pub spec_file: PathBuf,

    /// Output file prefix (default: spec file name without extension)
    #[arg(long)]
    pub output_prefix: Option<String>,

    /// Generate only the CSS file, not the font file
    #[arg(long, conflicts_with = "font_only")]
    pub css_only: bool,

    /// Generate only the font file, not the CSS file
    #[arg(long)]
    pub font_only: bool,

    /// Custom URL for the font file in the CSS (default: output prefix + .woff2)
    #[arg(long)]
    pub url: Option<String>,

    /// Directory holding the stylesheet corpus and source fonts
    #[arg(long, default_value = ".")]
    pub assets_dir: PathBuf,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let artifacts = if self.css_only {
            Artifacts::CssOnly
        } else if self.font_only {
            Artifacts::FontOnly
        } else {
            Artifacts::Both
        };

        let options = MinimizeOptions {
            spec_path: self.spec_file,
            assets_dir: self.assets_dir,
            output_prefix: self.output_prefix,
            font_url: self.url,
            artifacts,
        };

        run(&options)
    }
}
