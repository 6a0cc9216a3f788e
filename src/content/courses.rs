//! Full-page course descriptions.
//!
//! All six pages share one shape: a hero with an enrollment call, an
//! overview, a "why choose" feature list, the module syllabus, and a
//! closing call-to-action. The shape lives in [`course_page`]; each
//! public builder supplies its course's data.

use crate::model::{ContentBlock, LoadFailure, PageUnit, Section, SectionId};

struct CourseOutline {
    title: &'static str,
    tagline: &'static str,
    overview: &'static str,
    features: [(&'static str, &'static str); 3],
    modules: &'static [&'static str],
    duration: &'static str,
    level: &'static str,
}

fn course_page(outline: &CourseOutline) -> PageUnit {
    let features = outline
        .features
        .iter()
        .map(|(title, detail)| (title.to_string(), detail.to_string()))
        .collect();
    let modules = outline.modules.iter().map(|m| m.to_string()).collect();

    PageUnit::new(outline.title)
        .with_section(
            Section::immediate(SectionId::new("course-hero"), Some(outline.title.to_string()))
                .with_block(ContentBlock::Paragraph(outline.tagline.to_string()))
                .with_block(ContentBlock::Facts(vec![
                    ("Duration".to_string(), outline.duration.to_string()),
                    ("Level".to_string(), outline.level.to_string()),
                ]))
                .with_block(ContentBlock::Cta {
                    label: "Enroll Now".to_string(),
                    target: "/contact".to_string(),
                }),
        )
        .with_section(
            Section::revealing(SectionId::new("course-overview"), "About This Course")
                .with_block(ContentBlock::Paragraph(outline.overview.to_string())),
        )
        .with_section(
            Section::revealing(SectionId::new("course-features"), "Why Choose This Course")
                .with_block(ContentBlock::Facts(features)),
        )
        .with_section(
            Section::revealing(SectionId::new("course-modules"), "Course Modules")
                .with_block(ContentBlock::Bullets(modules)),
        )
        .with_section(
            Section::revealing(SectionId::new("course-cta"), "Ready to Get Started?")
                .with_block(ContentBlock::Cta {
                    label: "Talk to an Advisor".to_string(),
                    target: "/contact".to_string(),
                }),
        )
}

/// Post Graduation Program in CAD.
pub fn post_graduation() -> Result<PageUnit, LoadFailure> {
    Ok(course_page(&CourseOutline {
        title: "Post Graduation Program",
        tagline: "Advanced mechanical engineering concepts for working \
                  professionals and fresh graduates alike.",
        overview: "A twelve-month, industry-recognized program covering the \
                   full mechanical design workflow: CAD mastery across multiple \
                   tools, tolerancing, simulation, and a capstone project \
                   delivered with an industry partner.",
        features: [
            ("Industry Recognized", "Certification accepted by hiring partners."),
            ("Placement Support", "Interview preparation and company referrals."),
            ("Capstone Project", "A portfolio piece built with a real client."),
        ],
        modules: &[
            "Engineering Drawing Foundations",
            "Parametric CAD (Creo, CATIA, SolidWorks)",
            "GD&T and Tolerance Stack-Up",
            "Simulation and Validation Basics",
            "Design for Manufacturing",
            "Capstone Project",
        ],
        duration: "12 months",
        level: "Graduate",
    }))
}

/// PTC Creo course.
pub fn ptc_creo() -> Result<PageUnit, LoadFailure> {
    Ok(course_page(&CourseOutline {
        title: "PTC Creo",
        tagline: "Learn industry-standard CAD modeling to design and engineer \
                  products with precision.",
        overview: "Our PTC Creo course provides a strong foundation in 3D CAD, \
                   enabling you to create, analyze, and optimize product \
                   designs. Perfect for aspiring mechanical engineers, product \
                   designers, and anyone looking to enhance their CAD skills.",
        features: [
            ("Parametric Modeling", "Master core 3D modeling techniques."),
            ("Assembly Design", "Learn to build complex product structures."),
            ("Project-Based Learning", "Apply skills with practical, real-world projects."),
        ],
        modules: &[
            "Creo Interface & Navigation",
            "2D Sketching & 3D Feature Creation",
            "Part & Assembly Modeling",
            "Basic Drawing & Documentation",
            "Introduction to Surfacing",
            "Project Work & Portfolio Development",
        ],
        duration: "3 months",
        level: "Beginner",
    }))
}

/// SolidWorks solid-body modeling course.
pub fn solid_body() -> Result<PageUnit, LoadFailure> {
    Ok(course_page(&CourseOutline {
        title: "Solid Body",
        tagline: "Advanced solid modeling for production-ready parts.",
        overview: "Deep practice in solid modeling: multi-body parts, \
                   configurations, weldments, and drawing packages that \
                   survive contact with the shop floor.",
        features: [
            ("Production Focus", "Models built the way manufacturing consumes them."),
            ("Design Intent", "Feature trees that survive change requests."),
            ("Drawing Packages", "Complete, unambiguous documentation."),
        ],
        modules: &[
            "Sketching Discipline & Reference Geometry",
            "Multi-Body Part Strategies",
            "Configurations & Design Tables",
            "Weldments & Sheet Metal",
            "Assemblies at Scale",
            "Drawing & Detailing",
        ],
        duration: "4 months",
        level: "Intermediate",
    }))
}

/// AutoCAD course.
pub fn autocad() -> Result<PageUnit, LoadFailure> {
    Ok(course_page(&CourseOutline {
        title: "AutoCAD",
        tagline: "2D and 3D design fundamentals on the industry's most \
                  widely deployed drafting tool.",
        overview: "From first line to plotted drawing set: precision drafting, \
                   annotation standards, layouts, and an introduction to 3D \
                   modeling inside AutoCAD.",
        features: [
            ("Drafting Speed", "Command fluency and keyboard-first workflows."),
            ("Standards", "Layers, styles, and templates done properly."),
            ("Real Drawings", "Course work built on actual fabrication drawings."),
        ],
        modules: &[
            "Interface & Draw Commands",
            "Precision Tools & Object Snaps",
            "Blocks, Layers & Annotation",
            "Layouts & Plotting",
            "Introduction to 3D",
            "Capstone Drawing Set",
        ],
        duration: "2 months",
        level: "Beginner",
    }))
}

/// GD&T course.
pub fn gdt() -> Result<PageUnit, LoadFailure> {
    Ok(course_page(&CourseOutline {
        title: "GD&T",
        tagline: "Geometric dimensioning and tolerancing, from symbols to \
                  stack-ups.",
        overview: "A rigorous treatment of ASME Y14.5: datums, feature control \
                   frames, material condition modifiers, and the tolerance \
                   stack-up analysis that makes drawings defensible.",
        features: [
            ("Y14.5 Grounding", "The standard itself, not folklore."),
            ("Inspection View", "How a CMM programmer reads your callouts."),
            ("Stack-Up Practice", "Worst-case and statistical analysis."),
        ],
        modules: &[
            "Limits, Fits & Fundamentals",
            "Datums & Datum Reference Frames",
            "Form, Orientation & Location Controls",
            "Material Condition Modifiers",
            "Tolerance Stack-Up Analysis",
            "Drawing Review Workshop",
        ],
        duration: "2 months",
        level: "Intermediate",
    }))
}

/// CATIA course.
pub fn catia() -> Result<PageUnit, LoadFailure> {
    Ok(course_page(&CourseOutline {
        title: "CATIA",
        tagline: "Advanced 3D modeling and surface design for aerospace and \
                  automotive work.",
        overview: "Part design, generative shape design, and assembly \
                   management in CATIA V5, with the surfacing depth that \
                   aerospace and automotive suppliers expect.",
        features: [
            ("Surfacing Depth", "Class-A adjacent generative shape design."),
            ("Industry Workflows", "Skeleton modeling and top-down assemblies."),
            ("Portfolio Output", "Models worth showing an interviewer."),
        ],
        modules: &[
            "Sketcher & Part Design",
            "Assembly Design",
            "Generative Shape Design",
            "Surface-Solid Hybrid Modeling",
            "Drafting Workbench",
            "Industry Project",
        ],
        duration: "4 months",
        level: "Advanced",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_courses() -> Vec<PageUnit> {
        [
            post_graduation(),
            ptc_creo(),
            solid_body(),
            autocad(),
            gdt(),
            catia(),
        ]
        .into_iter()
        .map(|page| page.expect("course builds"))
        .collect()
    }

    #[test]
    fn every_course_has_the_shared_shape() {
        for page in all_courses() {
            let ids: Vec<&str> = page.sections().iter().map(|s| s.id().as_str()).collect();
            assert_eq!(
                ids,
                vec![
                    "course-hero",
                    "course-overview",
                    "course-features",
                    "course-modules",
                    "course-cta"
                ],
                "{} deviates from the course shape",
                page.title()
            );
        }
    }

    #[test]
    fn course_heroes_render_immediately() {
        for page in all_courses() {
            assert!(!page.sections()[0].revealed_on_view());
        }
    }

    #[test]
    fn every_course_links_enrollment_to_contact() {
        for page in all_courses() {
            let hero = &page.sections()[0];
            assert!(hero.blocks().iter().any(
                |b| matches!(b, ContentBlock::Cta { label, target } if label == "Enroll Now" && target == "/contact")
            ));
        }
    }
}
