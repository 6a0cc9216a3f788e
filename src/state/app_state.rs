//! Application state and transitions.
//!
//! `AppState` is the root state type: the resolver (domain), navigation,
//! the splash gate, overlay state, and per-page view state. All
//! transitions are synchronous with respect to the event loop; the only
//! thing that "suspends" is deferred page production, driven by
//! [`AppState::tick`].

use crate::router::{PageResolver, Resolved};
use crate::state::menu::MenuState;
use crate::state::nav::NavigationState;
use crate::state::page_view::PageViewState;
use crate::state::search::SearchOverlayState;
use crate::state::splash::SplashState;
use std::collections::HashMap;
use tracing::info;

/// Root application state. Pure data, no terminal concerns.
#[derive(Debug)]
pub struct AppState {
    resolver: PageResolver,
    /// Navigation position and history.
    pub nav: NavigationState,
    /// Startup splash gate.
    pub splash: SplashState,
    /// Search overlay.
    pub search: SearchOverlayState,
    /// Header menu focus.
    pub menu: MenuState,
    /// Whether the key-hints overlay is showing.
    pub help_visible: bool,
    views: HashMap<String, PageViewState>,
}

impl AppState {
    /// Assemble the state and activate the start route at tick zero.
    pub fn new(resolver: PageResolver, splash_ticks: u64, start_path: &str) -> Self {
        let mut state = Self {
            resolver,
            nav: NavigationState::new(start_path),
            splash: SplashState::new(splash_ticks),
            search: SearchOverlayState::Closed,
            menu: MenuState::Closed,
            help_visible: false,
            views: HashMap::new(),
        };
        state.resolver.activate(start_path, 0);
        state.views.insert(start_path.to_string(), PageViewState::new());
        state
    }

    /// The resolver (read-only), for render-time resolution.
    pub fn resolver(&self) -> &PageResolver {
        &self.resolver
    }

    /// Handle a navigation event: record it and activate the route.
    pub fn navigate(&mut self, path: &str, now: u64) {
        info!(path, "navigate");
        self.nav.navigate(path);
        self.resolver.activate(path, now);
        self.views
            .entry(path.to_string())
            .or_insert_with(PageViewState::new);
    }

    /// Step back through history. The revisited route is re-activated so
    /// a previously failed production gets its retry.
    pub fn navigate_back(&mut self, now: u64) {
        if self.nav.back() {
            let path = self.nav.current_path().to_string();
            self.resolver.activate(&path, now);
            self.views.entry(path).or_insert_with(PageViewState::new);
        }
    }

    /// Resolve the current path for rendering.
    pub fn resolve_current(&self) -> Resolved<'_> {
        self.resolver.resolve(self.nav.current_path())
    }

    /// View state for the current page.
    pub fn current_view(&self) -> Option<&PageViewState> {
        self.views.get(self.nav.current_path())
    }

    /// Mutable view state for the current page, created on demand.
    pub fn current_view_mut(&mut self) -> &mut PageViewState {
        self.views
            .entry(self.nav.current_path().to_string())
            .or_insert_with(PageViewState::new)
    }

    /// Advance timers and pending productions by one tick.
    ///
    /// Returns true when something visible changed: the splash gate
    /// opened, or a production settled for the page currently being
    /// rendered. Settles for routes the user has already left change
    /// nothing on screen - latest navigation wins.
    pub fn tick(&mut self, now: u64) -> bool {
        let gate_opened = self.splash.tick(now);
        let settled = self.resolver.poll(now);
        let current_settled = settled.iter().any(|path| path == self.nav.current_path());
        gate_opened || current_settled
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
