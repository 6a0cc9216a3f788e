//! Auxiliary pages: FAQ, blogs, case studies, 3D printing.

use crate::model::{
    BlogPost, ContentBlock, FaqItem, LoadFailure, PageUnit, SceneKind, Section, SectionId,
};
use chrono::NaiveDate;

/// The FAQ page. The question list renders as an accordion; at most one
/// answer is open at a time.
pub fn faq_page() -> Result<PageUnit, LoadFailure> {
    Ok(PageUnit::new("FAQ")
        .with_section(
            Section::immediate(
                SectionId::new("faq-hero"),
                Some("Frequently Asked Questions".to_string()),
            )
            .with_block(ContentBlock::Paragraph(
                "Find answers to common questions about our services and \
                 solutions."
                    .to_string(),
            )),
        )
        .with_section(
            Section::immediate(SectionId::new("faq-list"), None).with_block(ContentBlock::Faq(
                vec![
                    FaqItem {
                        question: "What services does Innovant offer?".to_string(),
                        answer: "Innovant offers a range of engineering and technology \
                                 services including engineering design, CAD modeling, rapid \
                                 prototyping, technology staffing, and project-based learning \
                                 solutions."
                            .to_string(),
                    },
                    FaqItem {
                        question: "How do I get started with your engineering design services?"
                            .to_string(),
                        answer: "You can get started by contacting us through our website. \
                                 Our team will discuss your requirements and guide you through \
                                 the process."
                            .to_string(),
                    },
                    FaqItem {
                        question: "What makes your technology staffing solutions unique?"
                            .to_string(),
                        answer: "Our technology staffing solutions are tailored to your \
                                 specific needs, offering rapid deployment, ongoing support, \
                                 and access to skilled professionals."
                            .to_string(),
                    },
                    FaqItem {
                        question: "Do you provide training or courses?".to_string(),
                        answer: "Yes, we offer various training programs and courses in areas \
                                 such as PTC Creo, AutoCAD, and other engineering design tools."
                            .to_string(),
                    },
                    FaqItem {
                        question: "How can I contact Innovant for more information?".to_string(),
                        answer: "You can reach us via phone, email, or by filling out the \
                                 contact form on our website. Our team will respond promptly \
                                 to your inquiry."
                            .to_string(),
                    },
                ],
            )),
        )
        .with_section(
            Section::revealing(SectionId::new("faq-contact"), "Still Have Questions?").with_block(
                ContentBlock::Cta {
                    label: "Contact Us".to_string(),
                    target: "/contact".to_string(),
                },
            ),
        ))
}

/// The blog index, newest post first.
pub fn blogs_page() -> Result<PageUnit, LoadFailure> {
    let posts = vec![
        BlogPost {
            title: "The Future of Engineering Design".to_string(),
            date: date(2025, 6, 12),
            summary: "Simulation-led workflows and generative tools are changing \
                      what a design team looks like."
                .to_string(),
        },
        BlogPost {
            title: "Top Trends in Technology Staffing".to_string(),
            date: date(2025, 4, 3),
            summary: "The technology staffing landscape is evolving rapidly, with \
                      new hiring models and remote work becoming standard."
                .to_string(),
        },
        BlogPost {
            title: "Best Practices for CAD Modeling".to_string(),
            date: date(2025, 2, 18),
            summary: "Effective CAD modeling requires attention to detail and a \
                      structured approach."
                .to_string(),
        },
    ];
    Ok(PageUnit::new("Blogs").with_section(
        Section::immediate(SectionId::new("blogs"), Some("Engineering Notes".to_string()))
            .with_block(ContentBlock::Posts(posts)),
    ))
}

/// The case studies page.
pub fn case_studies_page() -> Result<PageUnit, LoadFailure> {
    Ok(PageUnit::new("Case Studies")
        .with_section(
            Section::immediate(
                SectionId::new("cases-hero"),
                Some("Case Studies".to_string()),
            )
            .with_block(ContentBlock::Paragraph(
                "Selected projects, from brief to delivery.".to_string(),
            )),
        )
        .with_section(
            Section::revealing(SectionId::new("cases-list"), "Recent Engagements").with_block(
                ContentBlock::Facts(vec![
                    (
                        "Offshore GCC Setup for SaaS Firm".to_string(),
                        "Staffed and ramped a twelve-engineer capability center \
                         in under a quarter."
                            .to_string(),
                    ),
                    (
                        "IoT-Based Energy Monitoring for SmartGrid".to_string(),
                        "Sensor enclosure design, prototyping, and small-batch \
                         production."
                            .to_string(),
                    ),
                    (
                        "AI-Driven Financial Risk Assessment".to_string(),
                        "Embedded a staffed data-engineering pod inside the \
                         client's risk team."
                            .to_string(),
                    ),
                ]),
            ),
        ))
}

/// The 3D printing services page.
pub fn three_d_printing_page() -> Result<PageUnit, LoadFailure> {
    Ok(PageUnit::new("3D Printing")
        .with_section(
            Section::immediate(
                SectionId::new("printing-hero"),
                Some("3D Printing Services".to_string()),
            )
            .with_block(ContentBlock::Scene(SceneKind::Printing))
            .with_block(ContentBlock::Paragraph(
                "Additive manufacturing from one-off prototypes to bridge \
                 production runs."
                    .to_string(),
            )),
        )
        .with_section(
            Section::revealing(SectionId::new("printing-services"), "What We Print")
                .with_block(ContentBlock::Facts(vec![
                    (
                        "Rapid Prototyping".to_string(),
                        "Accelerate product development with our rapid prototyping \
                         solutions, turning ideas into physical models quickly."
                            .to_string(),
                    ),
                    (
                        "Custom Manufacturing".to_string(),
                        "Produce custom parts and components tailored to your \
                         specifications with our 3D printing expertise."
                            .to_string(),
                    ),
                    (
                        "Design for Additive Manufacturing".to_string(),
                        "Optimize your designs for additive manufacturing to unlock \
                         the full potential of 3D printing."
                            .to_string(),
                    ),
                ])),
        )
        .with_section(
            Section::revealing(SectionId::new("printing-cta"), "Print With Us").with_block(
                ContentBlock::Cta {
                    label: "Request a Quote".to_string(),
                    target: "/contact".to_string(),
                },
            ),
        ))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Fixed editorial dates; always valid.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
