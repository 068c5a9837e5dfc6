//! Configuration constants for the minimized stylesheet.

/// Prefix shared by every icon CSS class.
pub const CLASS_PREFIX: &str = "fa-";

/// Family name of the combined output font.
pub const COMBINED_FAMILY_NAME: &str = "Font Awesome 7 Combined";

/// Generic selector rules shared by every family.
pub const BASE_STYLES: &str = r#".fa-solid,
.fa-regular,
.fa-brands,
.fa-classic,
.fas,
.far,
.fab,
.fa {
  --_fa-family: var(--fa-family, var(--fa-style-family, inherit));
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
  display: var(--fa-display, inline-block);
  font-family: var(--_fa-family);
  font-feature-settings: normal;
  font-style: normal;
  font-synthesis: none;
  font-variant: normal;
  font-weight: var(--fa-style, 900);
  line-height: 1;
  text-align: center;
  text-rendering: auto;
  width: var(--fa-width, 1.25em);
}

:is(.fas,
.far,
.fab,
.fa-solid,
.fa-regular,
.fa-brands,
.fa-classic,
.fa)::before {
  content: var(--fa);
  content: var(--fa)/"";
}"#;

/// Family-selector block for brand icons.
pub const BASE_BRANDS_STYLES: &str = r#"/* Brand icon family */
.fab, .fa-brands {
  --fa-family: var(--fa-family-combined);
}"#;

/// Family-selector block for regular icons.
pub const BASE_REGULAR_STYLES: &str = r#"/* Regular icon family */
.far, .fa-regular {
  --fa-family: var(--fa-family-combined);
  --fa-style: 400;
}"#;

/// Family-selector block for solid icons.
pub const BASE_SOLID_STYLES: &str = r#"/* Solid icon family */
.fas, .fa-solid {
  --fa-family: var(--fa-family-combined);
  --fa-style: 900;
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_prefix_matches_base_selectors() {
        // Every long-form selector in the shared block carries the prefix
        assert!(BASE_STYLES.starts_with(&format!(".{CLASS_PREFIX}solid")));
        assert!(BASE_BRANDS_STYLES.contains(&format!(".{CLASS_PREFIX}brands")));
    }
}
