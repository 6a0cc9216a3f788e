//! Services section and the two service deep-dive pages.

use crate::model::{ContentBlock, LoadFailure, PageUnit, SceneKind, Section, SectionId};

/// The standalone services page.
pub fn services_page() -> Result<PageUnit, LoadFailure> {
    Ok(PageUnit::new("Services").with_section(services_section()))
}

/// The services section, shared between `/` and `/services`.
pub fn services_section() -> Section {
    Section::revealing(SectionId::new("services"), "Our Services")
        .with_block(ContentBlock::Paragraph(
            "End-to-end engineering capability, from first sketch to staffed \
             delivery team."
                .to_string(),
        ))
        .with_block(ContentBlock::Facts(vec![
            (
                "3D Printing".to_string(),
                "Rapid prototyping and production services using advanced \
                 additive manufacturing technologies."
                    .to_string(),
            ),
            (
                "CAD Design".to_string(),
                "Comprehensive computer-aided design services transforming \
                 concepts into detailed digital models."
                    .to_string(),
            ),
            (
                "Engineering & Tooling".to_string(),
                "End-to-end engineering design solutions including tool design \
                 and prototype development."
                    .to_string(),
            ),
            (
                "Technology Staffing".to_string(),
                "Customized staffing solutions connecting businesses with \
                 skilled professionals in engineering."
                    .to_string(),
            ),
        ]))
        .with_block(ContentBlock::Scene(SceneKind::Tooling))
        .with_block(ContentBlock::Cta {
            label: "Engineering Design in depth".to_string(),
            target: "/courses/EngineeringDesign".to_string(),
        })
        .with_block(ContentBlock::Cta {
            label: "Technology Staffing in depth".to_string(),
            target: "/courses/TechnologyStaffing".to_string(),
        })
}

/// Technology staffing deep dive.
pub fn technology_staffing() -> Result<PageUnit, LoadFailure> {
    Ok(PageUnit::new("Technology Staffing")
        .with_section(
            Section::immediate(
                SectionId::new("staffing-hero"),
                Some("Technology Staffing Solutions".to_string()),
            )
            .with_block(ContentBlock::Paragraph(
                "Rapid deployment of skilled engineering professionals, matched \
                 to your stack and your timeline."
                    .to_string(),
            )),
        )
        .with_section(
            Section::revealing(SectionId::new("staffing-approach"), "How We Staff")
                .with_block(ContentBlock::Bullets(vec![
                    "Role profiling with your technical leads".to_string(),
                    "Screened candidates from our engineering talent pool".to_string(),
                    "Trial engagements before long-term commitment".to_string(),
                    "Ongoing support and replacement guarantees".to_string(),
                ]))
                .with_block(ContentBlock::Paragraph(
                    "Our technology staffing solutions are tailored to your \
                     specific needs, offering rapid deployment, ongoing \
                     support, and access to skilled professionals."
                        .to_string(),
                )),
        )
        .with_section(cta_section("Need a team next month?")))
}

/// Engineering design deep dive.
pub fn engineering_design() -> Result<PageUnit, LoadFailure> {
    Ok(PageUnit::new("Engineering Design")
        .with_section(
            Section::immediate(
                SectionId::new("design-hero"),
                Some("Engineering Design Services".to_string()),
            )
            .with_block(ContentBlock::Paragraph(
                "From napkin sketch to production drawing: mechanical design, \
                 simulation, and tooling under one roof."
                    .to_string(),
            ))
            .with_block(ContentBlock::Scene(SceneKind::Cad)),
        )
        .with_section(
            Section::revealing(SectionId::new("design-capabilities"), "Capabilities")
                .with_block(ContentBlock::Bullets(vec![
                    "Concept development and feasibility studies".to_string(),
                    "Detailed CAD modeling and drafting".to_string(),
                    "Design for manufacturing and assembly".to_string(),
                    "Fixture and tooling design".to_string(),
                    "Prototype iteration with in-house 3D printing".to_string(),
                ])),
        )
        .with_section(cta_section("Have a design challenge?")))
}

fn cta_section(heading: &str) -> Section {
    Section::revealing(SectionId::new("cta"), heading).with_block(ContentBlock::Cta {
        label: "Contact Us".to_string(),
        target: "/contact".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_pages_end_with_a_contact_cta() {
        for page in [
            technology_staffing().expect("staffing builds"),
            engineering_design().expect("design builds"),
        ] {
            let last = page.sections().last().expect("has sections");
            assert_eq!(last.id().as_str(), "cta");
            assert!(last
                .blocks()
                .iter()
                .any(|b| matches!(b, ContentBlock::Cta { target, .. } if target == "/contact")));
        }
    }

    #[test]
    fn services_section_links_to_both_deep_dives() {
        let section = services_section();
        let targets: Vec<&str> = section
            .blocks()
            .iter()
            .filter_map(|b| match b {
                ContentBlock::Cta { target, .. } => Some(target.as_str()),
                _ => None,
            })
            .collect();
        assert!(targets.contains(&"/courses/EngineeringDesign"));
        assert!(targets.contains(&"/courses/TechnologyStaffing"));
    }
}
