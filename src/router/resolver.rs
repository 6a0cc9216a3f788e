//! Path-to-page resolution.
//!
//! Given a concrete path, produce exactly one unit to render: the route's
//! page, the shared placeholder while a deferred production is pending,
//! a failure notice, or the not-found unit when no route matches.
//!
//! Latest navigation wins: resolution always answers for the path it is
//! asked about, so a production that settles after the user has moved on
//! stays cached but is never rendered for the stale navigation. Stale
//! productions are not aborted - there is no cancellation primitive and
//! none is needed.

use crate::model::{
    ContentBlock, LoadFailure, LoadStrategy, PageUnit, RouteLookup, RouteTable, Section, SectionId,
};
use crate::router::loader::{DeferredLoader, LoadState, Resolution};
use tracing::info;

// ===== Resolved =====

/// Render-time resolution for a path.
#[derive(Debug)]
pub enum Resolved<'a> {
    /// The unit for this path, ready to render.
    Ready(&'a PageUnit),
    /// Production pending; render the shared placeholder.
    Pending,
    /// Production failed; render the failure notice. Retried on the next
    /// navigation to the path.
    Failed(&'a LoadFailure),
    /// No route matches; render the not-found unit.
    NotFound(&'a PageUnit),
}

impl<'a> Resolved<'a> {
    /// Whether the placeholder is currently active for this path.
    pub fn placeholder_active(&self) -> bool {
        matches!(self, Resolved::Pending)
    }
}

// ===== PageResolver =====

/// Owns the route table and the deferred loader.
///
/// Constructed once at startup: eager routes are produced immediately,
/// deferred routes get empty slots. The running shell uses three
/// operations - [`PageResolver::activate`] on navigation events,
/// [`PageResolver::poll`] on ticks, and [`PageResolver::resolve`] at
/// render time.
#[derive(Debug)]
pub struct PageResolver {
    table: RouteTable,
    loader: DeferredLoader,
    not_found: PageUnit,
}

impl PageResolver {
    /// Build a resolver over a finished route table, producing all eager
    /// units up front.
    pub fn new(table: RouteTable, settle_delay: u64) -> Result<Self, LoadFailure> {
        let mut loader = DeferredLoader::new(settle_delay);
        for entry in table.iter() {
            if entry.strategy() == LoadStrategy::Eager {
                loader.preload(entry)?;
            }
        }
        Ok(Self {
            table,
            loader,
            not_found: not_found_unit(),
        })
    }

    /// The route table (read-only).
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Handle a navigation event for `path`.
    ///
    /// Starts deferred production on first activation, attaches to an
    /// in-flight production on re-activation, and retries a previously
    /// failed production - a failed load is not a fatal condition, the
    /// user re-navigating is the retry trigger.
    pub fn activate(&mut self, path: &str, now: u64) {
        let entry = match self.table.lookup(path) {
            RouteLookup::Found(entry) => entry,
            RouteLookup::NotFound => {
                info!(path, "navigation to unmatched path");
                return;
            }
        };
        if matches!(self.loader.status(path), Some(LoadState::Failed(_))) {
            self.loader.clear_failure(path);
        }
        match self.loader.activate(entry, now) {
            Resolution::Pending => info!(path, "navigation pending deferred production"),
            Resolution::Ready(_) => info!(path, "navigation resolved"),
            Resolution::Failed(_) => {}
        }
    }

    /// Resolve `path` for rendering. Idempotent: repeated calls for a
    /// settled path return the same cached unit.
    pub fn resolve(&self, path: &str) -> Resolved<'_> {
        let entry = match self.table.lookup(path) {
            RouteLookup::Found(entry) => entry,
            RouteLookup::NotFound => return Resolved::NotFound(&self.not_found),
        };
        match self.loader.status(entry.path().as_str()) {
            Some(LoadState::Ready(unit)) => Resolved::Ready(unit),
            Some(LoadState::Pending { .. }) => Resolved::Pending,
            Some(LoadState::Failed(failure)) => Resolved::Failed(failure),
            // Deferred route never activated (e.g. resolve before the
            // first navigation event lands). Treat as pending; the
            // activation follows on the same event-loop turn.
            None => Resolved::Pending,
        }
    }

    /// Drive pending productions. Returns settled paths so the caller can
    /// redraw when the current page just became available.
    pub fn poll(&mut self, now: u64) -> Vec<String> {
        let entries: Vec<&crate::model::RouteEntry> = self.table.iter().collect();
        self.loader.poll(&entries, now)
    }
}

/// The designated not-found unit.
///
/// The observed site had no catch-all route and rendered an empty content
/// area for unmatched paths; an explicit page is friendlier and costs one
/// builder.
fn not_found_unit() -> PageUnit {
    PageUnit::new("Not Found").with_section(
        Section::immediate(SectionId::new("not-found"), Some("Page not found".to_string()))
            .with_block(ContentBlock::Paragraph(
                "The address you followed does not match any page in this catalog.".to_string(),
            ))
            .with_block(ContentBlock::Cta {
                label: "Back to home".to_string(),
                target: "/".to_string(),
            }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PageProducer, RouteError};

    fn home_page() -> Result<PageUnit, LoadFailure> {
        Ok(PageUnit::new("Home"))
    }

    fn academy_page() -> Result<PageUnit, LoadFailure> {
        Ok(PageUnit::new("Academy"))
    }

    fn about_page() -> Result<PageUnit, LoadFailure> {
        Ok(PageUnit::new("About"))
    }

    fn failing_page() -> Result<PageUnit, LoadFailure> {
        Err(LoadFailure::new("/flaky", "network down"))
    }

    fn resolver_with(
        routes: &[(&str, LoadStrategy, PageProducer)],
        settle_delay: u64,
    ) -> PageResolver {
        let mut table = RouteTable::new();
        for (path, strategy, producer) in routes {
            table.register(path, *strategy, *producer).expect("register");
        }
        PageResolver::new(table, settle_delay).expect("eager production")
    }

    #[test]
    fn eager_route_resolves_immediately() {
        let resolver = resolver_with(&[("/", LoadStrategy::Eager, home_page)], 0);
        assert!(matches!(resolver.resolve("/"), Resolved::Ready(u) if u.title() == "Home"));
    }

    #[test]
    fn unmatched_path_resolves_to_not_found_unit() {
        let resolver = resolver_with(&[("/", LoadStrategy::Eager, home_page)], 0);
        match resolver.resolve("/does-not-exist") {
            Resolved::NotFound(unit) => assert_eq!(unit.title(), "Not Found"),
            other => panic!("expected not-found unit, got {other:?}"),
        }
    }

    #[test]
    fn deferred_route_shows_placeholder_then_unit() {
        let mut resolver = resolver_with(&[("/academy", LoadStrategy::Deferred, academy_page)], 0);

        resolver.activate("/academy", 0);
        assert!(resolver.resolve("/academy").placeholder_active());

        let settled = resolver.poll(1);
        assert_eq!(settled, vec!["/academy".to_string()]);
        assert!(matches!(resolver.resolve("/academy"), Resolved::Ready(u) if u.title() == "Academy"));

        // Re-activation after settle: immediate, no new placeholder.
        resolver.activate("/academy", 2);
        assert!(!resolver.resolve("/academy").placeholder_active());
    }

    #[test]
    fn resolution_is_idempotent_for_settled_path() {
        let mut resolver = resolver_with(&[("/academy", LoadStrategy::Deferred, academy_page)], 0);
        resolver.activate("/academy", 0);
        resolver.poll(1);

        let first = match resolver.resolve("/academy") {
            Resolved::Ready(unit) => unit as *const PageUnit,
            other => panic!("expected ready, got {other:?}"),
        };
        let second = match resolver.resolve("/academy") {
            Resolved::Ready(unit) => unit as *const PageUnit,
            other => panic!("expected ready, got {other:?}"),
        };
        // Same cached instance, not a reproduction.
        assert_eq!(first, second);
    }

    #[test]
    fn latest_navigation_wins_over_stale_production() {
        let mut resolver = resolver_with(
            &[
                ("/courses/AutoCAD", LoadStrategy::Deferred, academy_page),
                ("/about", LoadStrategy::Eager, about_page),
            ],
            2,
        );

        // Navigate to AutoCAD, then to /about before the production settles.
        resolver.activate("/courses/AutoCAD", 0);
        let current_path = "/about";

        // AutoCAD settles later; the render still answers for /about.
        resolver.poll(5);
        assert!(matches!(
            resolver.resolve(current_path),
            Resolved::Ready(u) if u.title() == "About"
        ));
        // The stale production is cached, not discarded from the slot map.
        assert!(matches!(resolver.resolve("/courses/AutoCAD"), Resolved::Ready(_)));
    }

    #[test]
    fn failed_production_is_retried_on_next_activation() {
        let mut resolver = resolver_with(&[("/flaky", LoadStrategy::Deferred, failing_page)], 0);

        resolver.activate("/flaky", 0);
        resolver.poll(1);
        assert!(matches!(resolver.resolve("/flaky"), Resolved::Failed(_)));

        // Next navigation clears the failure and starts a new production.
        resolver.activate("/flaky", 2);
        assert!(resolver.resolve("/flaky").placeholder_active());
    }

    #[test]
    fn failure_is_local_to_its_route() {
        let mut resolver = resolver_with(
            &[
                ("/flaky", LoadStrategy::Deferred, failing_page),
                ("/academy", LoadStrategy::Deferred, academy_page),
            ],
            0,
        );
        resolver.activate("/flaky", 0);
        resolver.activate("/academy", 0);
        resolver.poll(1);

        assert!(matches!(resolver.resolve("/flaky"), Resolved::Failed(_)));
        assert!(matches!(resolver.resolve("/academy"), Resolved::Ready(_)));
    }

    #[test]
    fn duplicate_route_aborts_table_construction() {
        let mut table = RouteTable::new();
        table
            .register("/", LoadStrategy::Eager, home_page)
            .expect("first");
        let err = table
            .register("/", LoadStrategy::Eager, home_page)
            .expect_err("duplicate");
        assert!(matches!(err, RouteError::DuplicatePath { .. }));
    }
}
