//! AppState transition tests.

use super::AppState;
use crate::model::{LoadFailure, LoadStrategy, PageUnit, RouteTable};
use crate::router::{PageResolver, Resolved};

fn home_page() -> Result<PageUnit, LoadFailure> {
    Ok(PageUnit::new("Home"))
}

fn academy_page() -> Result<PageUnit, LoadFailure> {
    Ok(PageUnit::new("Academy"))
}

fn about_page() -> Result<PageUnit, LoadFailure> {
    Ok(PageUnit::new("About"))
}

/// Home eager, academy and about deferred, settling after `delay` ticks.
fn app(delay: u64, splash: u64) -> AppState {
    let mut table = RouteTable::new();
    table
        .register("/", LoadStrategy::Eager, home_page)
        .expect("register /");
    table
        .register("/academy", LoadStrategy::Deferred, academy_page)
        .expect("register /academy");
    table
        .register("/about", LoadStrategy::Deferred, about_page)
        .expect("register /about");
    let resolver = PageResolver::new(table, delay).expect("eager production");
    AppState::new(resolver, splash, "/")
}

#[test]
fn start_route_is_resolved_at_mount() {
    let state = app(0, 0);
    assert!(matches!(state.resolve_current(), Resolved::Ready(u) if u.title() == "Home"));
}

#[test]
fn splash_gate_opens_once_and_reports_dirty() {
    let mut state = app(0, 3);
    assert!(!state.splash.is_ready());
    assert!(!state.tick(1));
    assert!(state.tick(3), "gate opening is a visible change");
    assert!(state.splash.is_ready());
    assert!(!state.tick(4), "nothing pending, nothing visible changed");
}

#[test]
fn deferred_navigation_shows_placeholder_until_settle() {
    let mut state = app(2, 0);
    state.navigate("/academy", 1);
    assert!(state.resolve_current().placeholder_active());

    assert!(!state.tick(2), "not due yet");
    assert!(state.tick(3), "settle of the current page is visible");
    assert!(matches!(state.resolve_current(), Resolved::Ready(u) if u.title() == "Academy"));
}

#[test]
fn stale_settle_does_not_mark_dirty() {
    let mut state = app(2, 0);
    state.navigate("/academy", 1);
    // Move on before the academy production settles.
    state.navigate("/", 2);
    // Academy settles, but we render "/" - not a visible change.
    assert!(!state.tick(5));
    assert!(matches!(state.resolve_current(), Resolved::Ready(u) if u.title() == "Home"));
}

#[test]
fn latest_navigation_wins_after_both_settle() {
    let mut state = app(2, 0);
    state.navigate("/academy", 1);
    state.navigate("/about", 2);
    state.tick(10);
    assert!(matches!(state.resolve_current(), Resolved::Ready(u) if u.title() == "About"));
}

#[test]
fn view_state_is_per_route_and_persists() {
    let mut state = app(0, 0);
    state.current_view_mut().scroll_down(7, 100);
    state.navigate("/academy", 1);
    assert_eq!(state.current_view().map(|v| v.scroll), Some(0));

    state.navigate_back(2);
    assert_eq!(state.current_view().map(|v| v.scroll), Some(7));
}

#[test]
fn unmatched_navigation_resolves_to_not_found() {
    let mut state = app(0, 0);
    state.navigate("/success/placements", 1);
    assert!(matches!(state.resolve_current(), Resolved::NotFound(_)));
    // Other routes keep working afterwards.
    state.navigate("/", 2);
    assert!(matches!(state.resolve_current(), Resolved::Ready(_)));
}
