//! Icon spec file parsing.
//!
//! A spec file lists one icon per line as a pair of CSS classes, e.g.
//! `fa-brands fa-github`. Blank lines and `#` comments are skipped.

use thiserror::Error;

use crate::{config::CLASS_PREFIX, family::Family};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("invalid format at line {line}: '{text}'. Expected 'fa-family fa-icon'")]
    InvalidLine { line: usize, text: String },
    #[error("invalid family class at line {line}: '{text}'")]
    InvalidFamily { line: usize, text: String },
    #[error("invalid icon class at line {line}: '{text}'. Must start with 'fa-'")]
    InvalidIcon { line: usize, text: String },
}

/// One requested icon, as named in the spec file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRequest {
    pub family: Family,
    pub icon: String,
}

/// Parse spec file content into icon requests.
///
/// Input order is preserved and duplicates are kept; downstream stages
/// deduplicate where it matters.
pub fn parse_spec(content: &str) -> Result<Vec<IconRequest>, SpecError> {
    let mut requests = Vec::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let line_num = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let [family_class, icon_class] = parts[..] else {
            return Err(SpecError::InvalidLine { line: line_num, text: line.to_string() });
        };

        let family = parse_family_class(family_class).ok_or_else(|| {
            SpecError::InvalidFamily { line: line_num, text: family_class.to_string() }
        })?;

        let icon = icon_class.strip_prefix(CLASS_PREFIX).ok_or_else(|| SpecError::InvalidIcon {
            line: line_num,
            text: icon_class.to_string(),
        })?;
        if icon.is_empty() {
            return Err(SpecError::InvalidIcon { line: line_num, text: icon_class.to_string() });
        }

        requests.push(IconRequest { family, icon: icon.to_string() });
    }

    Ok(requests)
}

fn parse_family_class(class: &str) -> Option<Family> {
    match class.strip_prefix(CLASS_PREFIX) {
        Some(name) => Family::from_name(name),
        None => Family::from_alias(class),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_spec() {
        let content = "fa-brands fa-github\nfa-solid fa-house\n";
        let requests = parse_spec(content).unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], IconRequest { family: Family::Brands, icon: "github".into() });
        assert_eq!(requests[1], IconRequest { family: Family::Solid, icon: "house".into() });
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let content = "# header\n\nfa-regular fa-heart\n   \n# trailing\n";
        let requests = parse_spec(content).unwrap();
        assert_eq!(requests, vec![IconRequest { family: Family::Regular, icon: "heart".into() }]);
    }

    #[test]
    fn test_legacy_aliases() {
        let content = "fab fa-github\nfar fa-heart\nfas fa-house\n";
        let requests = parse_spec(content).unwrap();
        assert_eq!(requests[0].family, Family::Brands);
        assert_eq!(requests[1].family, Family::Regular);
        assert_eq!(requests[2].family, Family::Solid);
    }

    #[test]
    fn test_hyphenated_icon_names() {
        let requests = parse_spec("fa-solid fa-circle-check\n").unwrap();
        assert_eq!(requests[0].icon, "circle-check");
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let content = "fa-solid fa-house\nfa-brands fa-github\nfa-solid fa-house\n";
        let requests = parse_spec(content).unwrap();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].icon, "house");
        assert_eq!(requests[1].icon, "github");
        assert_eq!(requests[2].icon, "house");
    }

    #[test]
    fn test_invalid_line_reports_position() {
        let err = parse_spec("fa-brands fa-github\nfa-solid\n").unwrap_err();
        assert_eq!(err, SpecError::InvalidLine { line: 2, text: "fa-solid".into() });
    }

    #[test]
    fn test_invalid_family_class() {
        let err = parse_spec("fa-duotone fa-house\n").unwrap_err();
        assert_eq!(err, SpecError::InvalidFamily { line: 1, text: "fa-duotone".into() });

        let err = parse_spec("fx fa-house\n").unwrap_err();
        assert_eq!(err, SpecError::InvalidFamily { line: 1, text: "fx".into() });
    }

    #[test]
    fn test_invalid_icon_class() {
        let err = parse_spec("fa-solid house\n").unwrap_err();
        assert_eq!(err, SpecError::InvalidIcon { line: 1, text: "house".into() });
    }

    #[test]
    fn test_empty_spec() {
        assert!(parse_spec("").unwrap().is_empty());
    }
}
