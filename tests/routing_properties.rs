//! Property-based tests for the route table and path validation.

use innovant::model::{
    LoadFailure, LoadStrategy, PageUnit, RouteError, RouteLookup, RoutePath, RouteTable,
};
use proptest::prelude::*;

fn blank_page() -> Result<PageUnit, LoadFailure> {
    Ok(PageUnit::new("blank"))
}

proptest! {
    #[test]
    fn route_path_accepts_exactly_absolute_nonempty(s in any::<String>()) {
        let result = RoutePath::new(s.clone());
        if s.is_empty() {
            prop_assert_eq!(result, Err(RouteError::EmptyPath));
        } else if !s.starts_with('/') {
            prop_assert!(
                matches!(result, Err(RouteError::MissingLeadingSlash { .. })),
                "expected MissingLeadingSlash"
            );
        } else {
            let path = result.expect("absolute path accepted");
            prop_assert_eq!(path.as_str(), s.as_str());
        }
    }

    #[test]
    fn lookup_never_panics_and_never_invents_routes(query in any::<String>()) {
        let mut table = RouteTable::new();
        table.register("/", LoadStrategy::Eager, blank_page).expect("register");
        table.register("/about", LoadStrategy::Eager, blank_page).expect("register");

        match table.lookup(&query) {
            RouteLookup::Found(entry) => {
                // Exact-match only: a hit means the query is a registered path.
                prop_assert!(query == "/" || query == "/about");
                prop_assert_eq!(entry.path().as_str(), query.as_str());
            }
            RouteLookup::NotFound => {
                prop_assert!(query != "/" && query != "/about");
            }
        }
    }

    #[test]
    fn every_registered_path_is_found(paths in proptest::collection::hash_set("/[a-z]{1,12}", 1..20)) {
        let mut table = RouteTable::new();
        for path in &paths {
            table.register(path, LoadStrategy::Deferred, blank_page).expect("unique paths register");
        }
        for path in &paths {
            prop_assert!(table.lookup(path).entry().is_some());
        }
        prop_assert_eq!(table.len(), paths.len());
    }

    #[test]
    fn duplicate_registration_always_fails(path in "/[a-z]{1,12}") {
        let mut table = RouteTable::new();
        table.register(&path, LoadStrategy::Eager, blank_page).expect("first");
        let err = table.register(&path, LoadStrategy::Deferred, blank_page)
            .expect_err("duplicate rejected");
        prop_assert_eq!(err, RouteError::DuplicatePath { path: path.clone() });
        // The rejected duplicate never clobbers the original strategy.
        let entry = table.lookup(&path).entry().expect("still present");
        prop_assert_eq!(entry.strategy(), LoadStrategy::Eager);
    }
}
