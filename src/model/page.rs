//! Renderable page model.
//!
//! A [`PageUnit`] is a self-contained content block associated with one
//! route: a title plus an ordered list of sections. Sections carry stable
//! ids so per-section UI state (reveal, accordion, category tabs) can
//! survive re-renders without pointing into the content tree.

use crate::model::scene::SceneKind;
use chrono::NaiveDate;

// ===== SectionId =====

/// Stable identifier for a section within a page.
///
/// Ids are compile-time constants ("hero", "services", ...) so reveal and
/// widget state can be keyed without allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(&'static str);

impl SectionId {
    /// Wrap a static section name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The section name.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

// ===== PageUnit =====

/// A renderable, self-contained page: title plus ordered sections.
///
/// Page units are plain data. Each resolve of a distinct route yields an
/// independent unit; units never share mutable state across routes.
#[derive(Debug, Clone, PartialEq)]
pub struct PageUnit {
    title: String,
    sections: Vec<Section>,
}

impl PageUnit {
    /// Empty page with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Append a section, builder-style.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Page title, shown in the header bar.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sections in render order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

// ===== Section =====

/// One content section of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    id: SectionId,
    heading: Option<String>,
    blocks: Vec<ContentBlock>,
    revealed_on_view: bool,
}

impl Section {
    /// Section that participates in reveal-on-view: its body stays hidden
    /// until the section first scrolls into the viewport.
    pub fn revealing(id: SectionId, heading: impl Into<String>) -> Self {
        Self {
            id,
            heading: Some(heading.into()),
            blocks: Vec::new(),
            revealed_on_view: true,
        }
    }

    /// Section that renders immediately (page heroes, notices).
    pub fn immediate(id: SectionId, heading: Option<String>) -> Self {
        Self {
            id,
            heading,
            blocks: Vec::new(),
            revealed_on_view: false,
        }
    }

    /// Append a block, builder-style.
    pub fn with_block(mut self, block: ContentBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// The section's stable id.
    pub fn id(&self) -> SectionId {
        self.id
    }

    /// Optional heading line.
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    /// Content blocks in render order.
    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    /// Whether this section's body waits for its first viewport
    /// intersection before rendering.
    pub fn revealed_on_view(&self) -> bool {
        self.revealed_on_view
    }
}

// ===== ContentBlock =====

/// One renderable block inside a section.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    /// Prose paragraph, word-wrapped to the viewport.
    Paragraph(String),
    /// Bulleted list.
    Bullets(Vec<String>),
    /// Key-value fact rows (duration, level, prerequisites, ...).
    Facts(Vec<(String, String)>),
    /// Call-to-action line pointing at another route.
    Cta {
        /// Button label.
        label: String,
        /// Target route path. Resolved through the route table at
        /// navigation time, so a dead link degrades to the not-found unit.
        target: String,
    },
    /// Decorative scene rendered as terminal line art.
    Scene(SceneKind),
    /// Portfolio project grid, filterable by category.
    Projects(Vec<Project>),
    /// Course card row (academy section, course listings).
    Courses(Vec<CourseCard>),
    /// Accordion of question/answer pairs; at most one open at a time.
    Faq(Vec<FaqItem>),
    /// Dated blog entries, newest first.
    Posts(Vec<BlogPost>),
}

// ===== ProjectCategory =====

/// Portfolio filter categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectCategory {
    /// Show every project.
    #[default]
    All,
    /// CAD design work.
    CadDesign,
    /// Additive manufacturing work.
    Printing,
    /// Engineering and tooling design work.
    EngineeringDesign,
}

impl ProjectCategory {
    /// Tab order for the portfolio filter.
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::All,
        ProjectCategory::CadDesign,
        ProjectCategory::Printing,
        ProjectCategory::EngineeringDesign,
    ];

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::All => "All",
            ProjectCategory::CadDesign => "CAD Design",
            ProjectCategory::Printing => "3D Printing",
            ProjectCategory::EngineeringDesign => "Engineering Design",
        }
    }

    /// Whether a project belongs under this tab.
    pub fn admits(&self, project: &Project) -> bool {
        match self {
            ProjectCategory::All => true,
            other => project.category == *other,
        }
    }
}

// ===== Supporting records =====

/// One portfolio project.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Project title.
    pub title: String,
    /// Filter category (never `All`).
    pub category: ProjectCategory,
    /// One-line description.
    pub description: String,
    /// Decorative scene shown with the project.
    pub scene: SceneKind,
}

/// One course card.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseCard {
    /// Course title.
    pub title: String,
    /// Duration line ("3 months", "6 weeks").
    pub duration: String,
    /// Difficulty level.
    pub level: String,
    /// Full course page, when one exists.
    pub path: Option<String>,
}

/// One FAQ accordion item.
#[derive(Debug, Clone, PartialEq)]
pub struct FaqItem {
    /// The question, always visible.
    pub question: String,
    /// The answer, visible while the item is open.
    pub answer: String,
}

/// One blog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    /// Post title.
    pub title: String,
    /// Publication date.
    pub date: NaiveDate,
    /// Teaser paragraph.
    pub summary: String,
}
