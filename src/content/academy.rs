//! Academy section and page.

use crate::model::{ContentBlock, CourseCard, LoadFailure, PageUnit, SceneKind, Section, SectionId};

/// The standalone academy page.
pub fn academy_page() -> Result<PageUnit, LoadFailure> {
    Ok(PageUnit::new("Academy").with_section(academy_section()))
}

/// The academy section, shared between `/` and `/academy`.
pub fn academy_section() -> Section {
    Section::revealing(SectionId::new("academy"), "Innovant Academy")
        .with_block(ContentBlock::Paragraph(
            "Industry-aligned training developed by practicing engineering \
             professionals: expert instructors, recognized certification, and \
             hands-on projects against real engineering challenges."
                .to_string(),
        ))
        .with_block(ContentBlock::Scene(SceneKind::Academy))
        .with_block(ContentBlock::Courses(vec![
            CourseCard {
                title: "CAD Fundamentals".to_string(),
                duration: "6 weeks".to_string(),
                level: "Beginner".to_string(),
                path: Some("/courses/AutoCAD".to_string()),
            },
            CourseCard {
                title: "Advanced 3D Modeling".to_string(),
                duration: "8 weeks".to_string(),
                level: "Intermediate".to_string(),
                path: Some("/courses/SolidBody".to_string()),
            },
            CourseCard {
                title: "3D Printing Mastery".to_string(),
                duration: "10 weeks".to_string(),
                level: "Advanced".to_string(),
                path: Some("/components/ThreeDPrinting".to_string()),
            },
        ]))
        .with_block(ContentBlock::Cta {
            label: "Full course catalog".to_string(),
            target: "/courses/post-graduation".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn academy_course_cards_link_to_real_pages() {
        let section = academy_section();
        let cards = section
            .blocks()
            .iter()
            .find_map(|b| match b {
                ContentBlock::Courses(cards) => Some(cards),
                _ => None,
            })
            .expect("academy lists courses");
        assert_eq!(cards.len(), 3);
        assert!(cards.iter().all(|c| c.path.is_some()));
    }
}
