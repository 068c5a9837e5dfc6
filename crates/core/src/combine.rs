//! Font subset and merge engine.
//!
//! Produces one combined font containing exactly the requested codepoints.
//! A single-family request is a direct subset of that family's source font.
//! A multi-family request first measures how many of the union codepoints
//! each candidate source covers; full coverage by one source collapses to a
//! single subset, otherwise per-family subsets are built in memory and
//! merged.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use icontrim_font_merger::Merger;
use icontrim_font_subsetter::Subsetter;
use log::{debug, info};
use read_fonts::{FontRef, TableProvider};

use crate::{codepoints::FamilyCodepoints, family::Family, io::read_font};

/// Combines per-family codepoint sets into one font binary.
pub struct FontCombiner {
    assets_dir: PathBuf,
}

impl FontCombiner {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self { assets_dir: assets_dir.into() }
    }

    fn font_path(&self, family: Family) -> PathBuf {
        self.assets_dir.join(family.font_filename())
    }

    /// Produce the combined font for the given codepoint sets.
    pub fn combine(&self, family_codepoints: &FamilyCodepoints) -> Result<Vec<u8>> {
        if family_codepoints.is_empty() {
            bail!("No icons provided for font generation");
        }

        if family_codepoints.len() == 1 {
            let (family, codepoints) =
                family_codepoints.iter().next().context("No font families provided")?;
            return self.subset_family(*family, codepoints);
        }

        let all_codepoints: BTreeSet<u32> =
            family_codepoints.values().flatten().copied().collect();

        let (best_family, best_coverage) =
            self.best_source(family_codepoints, &all_codepoints)?;

        let data = if best_coverage == all_codepoints.len() {
            // One source covers everything; no merge needed
            self.subset_family(best_family, &all_codepoints)?
        } else {
            self.merge_family_subsets(family_codepoints)?
        };

        info!(
            "Combined {} icons from {} families: {}",
            all_codepoints.len(),
            family_codepoints.len(),
            family_codepoints
                .keys()
                .map(|f| f.name())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(data)
    }

    /// Greedily pick the candidate source font covering the most of the
    /// union codepoints. Missing or unparsable fonts are skipped here; ties
    /// keep the earlier family in fixed order.
    fn best_source(
        &self,
        family_codepoints: &FamilyCodepoints,
        all_codepoints: &BTreeSet<u32>,
    ) -> Result<(Family, usize)> {
        let mut best: Option<(Family, usize)> = None;

        for family in family_codepoints.keys() {
            let path = self.font_path(*family);
            let Some(coverage) = measure_coverage(&path, all_codepoints) else {
                debug!("Skipping unusable source font: {}", path.display());
                continue;
            };
            debug!("{family} covers {coverage}/{} codepoints", all_codepoints.len());

            if coverage > best.map_or(0, |(_, c)| c) {
                best = Some((*family, coverage));
            }
        }

        match best {
            Some(found) => Ok(found),
            None => bail!("No suitable source font found"),
        }
    }

    fn subset_family(&self, family: Family, codepoints: &BTreeSet<u32>) -> Result<Vec<u8>> {
        let path = self.font_path(family);
        let data = read_font(&path)?;

        info!("Subsetting {} to {} codepoints", path.display(), codepoints.len());
        Subsetter::icon()
            .with_codepoints(codepoints.iter().copied())
            .subset(&data)
            .with_context(|| format!("Failed to subset font: {}", path.display()))
    }

    fn merge_family_subsets(&self, family_codepoints: &FamilyCodepoints) -> Result<Vec<u8>> {
        let subsets: Vec<Vec<u8>> = family_codepoints
            .iter()
            .map(|(family, codepoints)| self.subset_family(*family, codepoints))
            .collect::<Result<_>>()?;

        let slices: Vec<&[u8]> = subsets.iter().map(Vec::as_slice).collect();
        Merger::default().merge(&slices).context("Failed to merge family subsets")
    }
}

/// Count how many of the wanted codepoints a font's cmap maps.
///
/// Returns `None` when the font cannot be read or parsed, so callers can
/// fall through to other candidates.
fn measure_coverage(path: &Path, codepoints: &BTreeSet<u32>) -> Option<usize> {
    let data = std::fs::read(path).ok()?;
    let font = FontRef::new(&data).ok()?;
    let cmap = font.cmap().ok()?;
    Some(codepoints.iter().filter(|cp| cmap.map_codepoint(**cp).is_some()).count())
}
