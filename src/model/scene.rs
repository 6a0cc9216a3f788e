//! Decorative scene variants.
//!
//! The content set tags sections and projects with a scene identifier;
//! the view picks line art by variant. Parsing from the raw content tags
//! is a total lookup with an explicit default, not a conditional chain:
//! an unknown tag falls back to [`SceneKind::Cad`].

/// Tagged variant selecting a decorative scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    /// CAD assembly (base plate, cylinder, ring).
    Cad,
    /// 3D printer mid-print.
    Printing,
    /// Industrial tooling (gears, press).
    Tooling,
    /// Academy campus motif.
    Academy,
    /// Company/office motif.
    Company,
    /// Abstract engineering grid.
    Engineering,
}

impl SceneKind {
    /// All variants, in display order.
    pub const ALL: [SceneKind; 6] = [
        SceneKind::Cad,
        SceneKind::Printing,
        SceneKind::Tooling,
        SceneKind::Academy,
        SceneKind::Company,
        SceneKind::Engineering,
    ];

    /// Resolve a content tag to a variant. Unknown tags fall back to the
    /// default CAD scene rather than failing.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "cad" => SceneKind::Cad,
            "printing" => SceneKind::Printing,
            "tooling" => SceneKind::Tooling,
            "academy" => SceneKind::Academy,
            "company" => SceneKind::Company,
            "engineering" => SceneKind::Engineering,
            _ => SceneKind::Cad,
        }
    }

    /// Caption rendered under the scene.
    pub fn caption(&self) -> &'static str {
        match self {
            SceneKind::Cad => "CAD assembly",
            SceneKind::Printing => "additive manufacturing",
            SceneKind::Tooling => "industrial tooling",
            SceneKind::Academy => "academy",
            SceneKind::Company => "innovant",
            SceneKind::Engineering => "engineering",
        }
    }
}
