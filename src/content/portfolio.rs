//! Portfolio section and page.

use crate::model::{
    ContentBlock, LoadFailure, PageUnit, Project, ProjectCategory, SceneKind, Section, SectionId,
};

/// The standalone portfolio page.
pub fn portfolio_page() -> Result<PageUnit, LoadFailure> {
    Ok(PageUnit::new("Portfolio").with_section(portfolio_section()))
}

/// The portfolio section, shared between `/` and `/portfolio`.
/// The project grid is filtered by the page's active category tab.
pub fn portfolio_section() -> Section {
    Section::revealing(SectionId::new("portfolio"), "Our Work")
        .with_block(ContentBlock::Paragraph(
            "A cross-section of recent engineering deliveries.".to_string(),
        ))
        .with_block(ContentBlock::Projects(projects()))
}

/// The fixed project list.
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Automotive Component Design".to_string(),
            category: ProjectCategory::CadDesign,
            description: "Precision-engineered automotive parts designed with advanced CAD tools."
                .to_string(),
            scene: SceneKind::Cad,
        },
        Project {
            title: "Medical Device Prototype".to_string(),
            category: ProjectCategory::Printing,
            description:
                "Rapid prototyping for innovative medical devices using biocompatible materials."
                    .to_string(),
            scene: SceneKind::Printing,
        },
        Project {
            title: "Industrial Tooling Solution".to_string(),
            category: ProjectCategory::EngineeringDesign,
            description: "Custom tooling designed for specialized manufacturing processes."
                .to_string(),
            scene: SceneKind::Tooling,
        },
        Project {
            title: "Aerospace Component Optimization".to_string(),
            category: ProjectCategory::CadDesign,
            description: "Lightweight aerospace components optimized through advanced simulation."
                .to_string(),
            scene: SceneKind::Cad,
        },
        Project {
            title: "Consumer Product Prototype".to_string(),
            category: ProjectCategory::Printing,
            description: "Functional prototypes for consumer products with complex geometries."
                .to_string(),
            scene: SceneKind::Printing,
        },
        Project {
            title: "Production Line Automation".to_string(),
            category: ProjectCategory::EngineeringDesign,
            description: "End-to-end design of automated production systems for increased \
                          efficiency."
                .to_string(),
            scene: SceneKind::Tooling,
        },
    ]
}
