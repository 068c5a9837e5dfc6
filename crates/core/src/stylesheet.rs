//! Minimized stylesheet generation.

use std::collections::BTreeMap;

use crate::{
    catalog::IconRecord,
    config::{
        BASE_BRANDS_STYLES, BASE_REGULAR_STYLES, BASE_SOLID_STYLES, BASE_STYLES,
        COMBINED_FAMILY_NAME,
    },
    family::Family,
};

/// Generate the minimized stylesheet for the resolved icons.
///
/// Output is fully deterministic: families are emitted in the fixed
/// brands/regular/solid order and icons are sorted by identifier within
/// each family. An empty record list yields an empty string.
pub fn generate_stylesheet(
    records: &[IconRecord],
    font_url: Option<&str>,
    output_prefix: &str,
) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut families: BTreeMap<Family, Vec<&IconRecord>> = BTreeMap::new();
    for record in records {
        families.entry(record.family).or_default().push(record);
    }

    let default_url = format!("{output_prefix}.woff2");
    let font_url = font_url.unwrap_or(&default_url);

    let mut parts: Vec<String> = Vec::new();

    parts.push("/*!".into());
    parts.push(" * Minimal FontAwesome CSS - generated by icontrim".into());
    parts.push(" * Contains only the icons named in the spec file".into());
    parts.push(" */".into());
    parts.push(String::new());

    parts.push("/* CSS Variables */".into());
    parts.push(":root, :host {".into());
    parts.push(format!("  --fa-family-combined: \"{COMBINED_FAMILY_NAME}\";"));
    parts.push("  --fa-font: normal 400 1em/1 var(--fa-family-combined);".into());
    parts.push("}".into());
    parts.push(String::new());

    parts.push(BASE_STYLES.into());
    parts.push(String::new());

    for family in families.keys() {
        parts.push("@font-face {".into());
        parts.push(format!("  font-family: \"{COMBINED_FAMILY_NAME}\";"));
        parts.push("  font-style: normal;".into());
        parts.push(format!("  font-weight: {};", family.font_face_weight()));
        parts.push("  font-display: block;".into());
        parts.push(format!("  src: url(\"{font_url}\");"));
        parts.push("}".into());
        parts.push(String::new());
    }

    for family in families.keys() {
        let block = match family {
            Family::Brands => BASE_BRANDS_STYLES,
            Family::Regular => BASE_REGULAR_STYLES,
            Family::Solid => BASE_SOLID_STYLES,
        };
        parts.push(block.into());
        parts.push(String::new());
    }

    parts.push("/* Individual icon definitions */".into());
    for (family, family_records) in &families {
        parts.push(format!("/* {} icons */", family.heading()));

        let mut sorted = family_records.clone();
        sorted.sort_by(|a, b| a.icon.cmp(&b.icon));
        for record in sorted {
            parts.push(record.css_rule());
        }
        parts.push(String::new());
    }

    parts.join("\n")
}
