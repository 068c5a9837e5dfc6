//! The fixed icon family table.

use std::fmt;

/// Icon families known to the minimizer.
///
/// The declaration order is the fixed emission order used everywhere a
/// deterministic family sequence is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    Brands,
    Regular,
    Solid,
}

impl Family {
    pub const ALL: &[Family] = &[Family::Brands, Family::Regular, Family::Solid];

    /// Resolve a canonical family name (`brands`, `regular`, `solid`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "brands" => Some(Family::Brands),
            "regular" => Some(Family::Regular),
            "solid" => Some(Family::Solid),
            _ => None,
        }
    }

    /// Resolve a legacy short class (`fab`, `far`, `fas`).
    pub fn from_alias(alias: &str) -> Option<Self> {
        match alias {
            "fab" => Some(Family::Brands),
            "far" => Some(Family::Regular),
            "fas" => Some(Family::Solid),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Family::Brands => "brands",
            Family::Regular => "regular",
            Family::Solid => "solid",
        }
    }

    /// Long-form CSS class, e.g. `fa-brands`.
    pub const fn class_name(self) -> &'static str {
        match self {
            Family::Brands => "fa-brands",
            Family::Regular => "fa-regular",
            Family::Solid => "fa-solid",
        }
    }

    /// Legacy short CSS class, e.g. `fab`.
    pub const fn alias(self) -> &'static str {
        match self {
            Family::Brands => "fab",
            Family::Regular => "far",
            Family::Solid => "fas",
        }
    }

    /// Comment heading used above the family's icon rules.
    pub const fn heading(self) -> &'static str {
        match self {
            Family::Brands => "Brands",
            Family::Regular => "Regular",
            Family::Solid => "Solid",
        }
    }

    /// Stylesheet documents to scan for this family's icon rules, in
    /// lookup order.
    pub const fn stylesheet_candidates(self) -> &'static [&'static str] {
        match self {
            Family::Brands => &["brands.css"],
            Family::Regular => &["fontawesome.css", "regular.css"],
            Family::Solid => &["fontawesome.css", "solid.css"],
        }
    }

    /// Canonical source font filename for this family.
    pub const fn font_filename(self) -> &'static str {
        match self {
            Family::Brands => "fa-brands-400.woff2",
            Family::Regular => "fa-regular-400.woff2",
            Family::Solid => "fa-solid-900.woff2",
        }
    }

    /// The weight declared in this family's `@font-face` block.
    pub const fn font_face_weight(self) -> u16 {
        match self {
            Family::Brands => 400,
            Family::Regular => 400,
            Family::Solid => 900,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
