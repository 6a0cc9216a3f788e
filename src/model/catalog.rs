//! Search catalog.
//!
//! A small static list of course and page records backing the search
//! overlay. Filtering is case-insensitive substring matching on titles.
//! Record paths point at real route-table entries; a few home-page
//! records target `/` since their content lives in home sections.

/// Record category, shown as a badge next to each result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A full course page.
    Course,
    /// A site page or home-page section.
    Page,
}

impl RecordKind {
    /// Badge text.
    pub fn badge(&self) -> &'static str {
        match self {
            RecordKind::Course => "course",
            RecordKind::Page => "page",
        }
    }
}

/// One searchable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRecord {
    /// Display title.
    pub title: &'static str,
    /// Record category.
    pub kind: RecordKind,
    /// Route path navigated to when the record is chosen.
    pub path: &'static str,
}

/// The fixed catalog.
static CATALOG: [SearchRecord; 10] = [
    SearchRecord {
        title: "Post Graduate Program in CAD",
        kind: RecordKind::Course,
        path: "/courses/post-graduation",
    },
    SearchRecord {
        title: "PTC Creo",
        kind: RecordKind::Course,
        path: "/courses/PTCCreo",
    },
    SearchRecord {
        title: "Solid Body",
        kind: RecordKind::Course,
        path: "/courses/SolidBody",
    },
    SearchRecord {
        title: "AutoCAD",
        kind: RecordKind::Course,
        path: "/courses/AutoCAD",
    },
    SearchRecord {
        title: "GD&T",
        kind: RecordKind::Course,
        path: "/courses/GD&T",
    },
    SearchRecord {
        title: "CATIA",
        kind: RecordKind::Course,
        path: "/courses/CATIA",
    },
    SearchRecord {
        title: "About Us",
        kind: RecordKind::Page,
        path: "/about",
    },
    SearchRecord {
        title: "Services",
        kind: RecordKind::Page,
        path: "/services",
    },
    SearchRecord {
        title: "Portfolio",
        kind: RecordKind::Page,
        path: "/portfolio",
    },
    SearchRecord {
        title: "Contact",
        kind: RecordKind::Page,
        path: "/contact",
    },
];

/// The full catalog, in display order.
pub fn catalog() -> &'static [SearchRecord] {
    &CATALOG
}

/// Filter the catalog by case-insensitive substring match on titles.
///
/// An empty or whitespace-only term yields no results; the overlay shows
/// its idle state instead of the full list.
pub fn search_catalog(term: &str) -> Vec<&'static SearchRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    CATALOG
        .iter()
        .filter(|record| record.title.to_lowercase().contains(&needle))
        .collect()
}
