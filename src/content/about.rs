//! About section and page.

use crate::model::{ContentBlock, LoadFailure, PageUnit, SceneKind, Section, SectionId};

/// The standalone about page.
pub fn about_page() -> Result<PageUnit, LoadFailure> {
    Ok(PageUnit::new("About").with_section(about_section()))
}

/// The about section, shared between `/` and `/about`.
pub fn about_section() -> Section {
    Section::revealing(SectionId::new("about"), "About Innovant")
        .with_block(ContentBlock::Paragraph(
            "Established in 2021, we're a team of passionate engineers \
             dedicated to delivering excellence in engineering services."
                .to_string(),
        ))
        .with_block(ContentBlock::Paragraph(
            "Innovant was founded with a clear vision: to provide integrated \
             solutions in engineering that empower businesses to innovate and \
             grow. Based in Greater Noida, we've quickly established ourselves \
             as a trusted partner for engineering services."
                .to_string(),
        ))
        .with_block(ContentBlock::Paragraph(
            "Our team comprises experts from diverse backgrounds, enabling us \
             to address complex challenges with innovative strategies. We \
             believe in a collaborative and client-centric approach, tailoring \
             solutions to meet specific needs."
                .to_string(),
        ))
        .with_block(ContentBlock::Facts(vec![
            ("Founded".to_string(), "2021".to_string()),
            ("Projects Completed".to_string(), "50+".to_string()),
            ("Team Members".to_string(), "20+".to_string()),
            ("Location".to_string(), "Greater Noida".to_string()),
        ]))
        .with_block(ContentBlock::Scene(SceneKind::Company))
}
