//! Hard-coded site content.
//!
//! One builder function per page unit, grouped by area. Builders are the
//! route producers: eager pages run at startup, deferred pages on first
//! navigation. Content is plain data - no IO, no formatting logic.

pub mod about;
pub mod academy;
pub mod courses;
pub mod home;
pub mod portfolio;
pub mod resources;
pub mod services;

use crate::model::{LoadStrategy, RouteError, RouteTable};

/// The site's fixed route specification.
///
/// Registration order matches the original navigation shell. Built once
/// at startup; a duplicate path here is a programming error and aborts.
pub fn site_routes() -> Result<RouteTable, RouteError> {
    use LoadStrategy::{Deferred, Eager};

    let mut table = RouteTable::new();

    // The landing page composes every home section in-page.
    table.register("/", Eager, home::home)?;

    // Course pages, fetched on first visit.
    table.register("/courses/post-graduation", Deferred, courses::post_graduation)?;
    table.register("/courses/PTCCreo", Deferred, courses::ptc_creo)?;
    table.register("/courses/SolidBody", Deferred, courses::solid_body)?;
    table.register("/courses/AutoCAD", Deferred, courses::autocad)?;
    table.register("/courses/GD&T", Deferred, courses::gdt)?;
    table.register("/courses/CATIA", Deferred, courses::catia)?;

    // Service deep dives live under /courses/ in the original shell.
    table.register(
        "/courses/TechnologyStaffing",
        Deferred,
        services::technology_staffing,
    )?;
    table.register(
        "/courses/EngineeringDesign",
        Deferred,
        services::engineering_design,
    )?;

    // Standalone section pages, available immediately.
    table.register("/about", Eager, about::about_page)?;
    table.register("/contact", Eager, home::contact_page)?;
    table.register("/academy", Eager, academy::academy_page)?;
    table.register("/portfolio", Eager, portfolio::portfolio_page)?;
    table.register("/services", Eager, services::services_page)?;

    // Auxiliary pages.
    table.register("/components/FAQ", Deferred, resources::faq_page)?;
    table.register("/components/Blogs", Deferred, resources::blogs_page)?;
    table.register("/components/CaseStudies", Deferred, resources::case_studies_page)?;
    table.register(
        "/components/ThreeDPrinting",
        Deferred,
        resources::three_d_printing_page,
    )?;

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RouteLookup;

    #[test]
    fn site_routes_build_without_duplicates() {
        let table = site_routes().expect("fixed route table is valid");
        assert_eq!(table.len(), 18);
    }

    #[test]
    fn landing_page_is_eager_and_courses_are_deferred() {
        let table = site_routes().expect("table");
        match table.lookup("/") {
            RouteLookup::Found(entry) => assert_eq!(entry.strategy(), LoadStrategy::Eager),
            RouteLookup::NotFound => panic!("/ must be registered"),
        }
        match table.lookup("/courses/AutoCAD") {
            RouteLookup::Found(entry) => assert_eq!(entry.strategy(), LoadStrategy::Deferred),
            RouteLookup::NotFound => panic!("/courses/AutoCAD must be registered"),
        }
    }

    #[test]
    fn every_producer_yields_a_nonempty_page() {
        let table = site_routes().expect("table");
        for entry in table.iter() {
            let unit = entry
                .produce()
                .unwrap_or_else(|e| panic!("{} failed: {e}", entry.path()));
            assert!(
                !unit.sections().is_empty(),
                "{} produced an empty page",
                entry.path()
            );
            assert!(!unit.title().is_empty());
        }
    }

    #[test]
    fn search_catalog_paths_resolve_against_the_route_table() {
        let table = site_routes().expect("table");
        for record in crate::model::catalog::catalog() {
            assert!(
                table.lookup(record.path).entry().is_some(),
                "search record {} points at unregistered {}",
                record.title,
                record.path
            );
        }
    }
}
