//! Landing page and contact content.

use crate::model::{ContentBlock, LoadFailure, PageUnit, SceneKind, Section, SectionId};

/// The landing page: every home section composed in-page.
pub fn home() -> Result<PageUnit, LoadFailure> {
    Ok(PageUnit::new("Innovant")
        .with_section(hero_section())
        .with_section(super::services::services_section())
        .with_section(super::portfolio::portfolio_section())
        .with_section(super::about::about_section())
        .with_section(super::academy::academy_section())
        .with_section(contact_section()))
}

/// The contact page.
pub fn contact_page() -> Result<PageUnit, LoadFailure> {
    Ok(PageUnit::new("Contact").with_section(contact_section()))
}

/// Hero banner. Renders immediately - it is the first thing on screen,
/// there is nothing to reveal into.
fn hero_section() -> Section {
    Section::immediate(SectionId::new("hero"), None)
        .with_block(ContentBlock::Scene(SceneKind::Engineering))
        .with_block(ContentBlock::Paragraph(
            "Transform Your Engineering Career".to_string(),
        ))
        .with_block(ContentBlock::Paragraph("Master Mechanical Design".to_string()))
        .with_block(ContentBlock::Paragraph(
            "Industry-aligned courses in CAD, GD&T, and advanced mechanical \
             engineering. Learn from experts and get placed in top companies."
                .to_string(),
        ))
        .with_block(ContentBlock::Cta {
            label: "Explore Courses".to_string(),
            target: "/academy".to_string(),
        })
        .with_block(ContentBlock::Cta {
            label: "Get Started".to_string(),
            target: "/contact".to_string(),
        })
}

fn contact_section() -> Section {
    Section::revealing(SectionId::new("contact"), "Get In Touch")
        .with_block(ContentBlock::Paragraph(
            "Have a project in mind or want to enquire about a course? Reach \
             out and our team will respond promptly."
                .to_string(),
        ))
        .with_block(ContentBlock::Facts(vec![
            ("Location".to_string(), "Greater Noida, India".to_string()),
            ("Email".to_string(), "hello@innovant.example".to_string()),
            ("Phone".to_string(), "+91 120 000 0000".to_string()),
            ("Hours".to_string(), "Mon-Sat, 9:00-18:00".to_string()),
        ]))
        .with_block(ContentBlock::Cta {
            label: "Browse the FAQ".to_string(),
            target: "/components/FAQ".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_composes_all_six_sections_in_order() {
        let page = home().expect("home builds");
        let ids: Vec<&str> = page.sections().iter().map(|s| s.id().as_str()).collect();
        assert_eq!(
            ids,
            vec!["hero", "services", "portfolio", "about", "academy", "contact"]
        );
    }

    #[test]
    fn hero_renders_immediately_later_sections_reveal() {
        let page = home().expect("home builds");
        assert!(!page.sections()[0].revealed_on_view());
        assert!(page.sections()[1..].iter().all(Section::revealed_on_view));
    }
}
