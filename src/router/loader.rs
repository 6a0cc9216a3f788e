//! Deferred page production.
//!
//! Wraps route producers so that a deferred route's work happens only on
//! first activation, with the result memoized for the process lifetime.
//! Production is cooperative: activation marks a slot pending, and the
//! event loop's tick calls [`DeferredLoader::poll`], which runs producers
//! whose settle delay has elapsed. Everything runs on the single UI
//! thread, so slot mutation needs no locking - a write in one event-loop
//! turn is fully visible before the next turn begins.
//!
//! Guarantees:
//! - at most one in-flight production per route: re-activating a pending
//!   route attaches to the existing slot instead of starting a duplicate;
//! - a settled `Ready` slot is terminal - the producer never runs again;
//! - a `Failed` slot is retryable: the next navigation to that route
//!   clears it and starts a fresh production.

use crate::model::{LoadFailure, LoadStrategy, PageUnit, RouteEntry};
use std::collections::HashMap;
use tracing::{debug, warn};

// ===== LoadState =====

/// Per-route slot state. `Ready` is terminal; `Failed` is retryable.
#[derive(Debug)]
pub enum LoadState {
    /// Production started at `since` (tick count) and has not settled.
    Pending {
        /// Tick at which production was started.
        since: u64,
    },
    /// Production settled successfully; the unit is cached for the
    /// process lifetime and never reproduced or invalidated.
    Ready(PageUnit),
    /// Production failed; kept so the failure can be rendered, cleared on
    /// the next activation.
    Failed(LoadFailure),
}

// ===== Resolution =====

/// What an activation observed. Borrowed views into the slot map.
#[derive(Debug)]
pub enum Resolution<'a> {
    /// The unit is available now (eager, or previously settled).
    Ready(&'a PageUnit),
    /// Production is in flight; render the shared placeholder.
    Pending,
    /// The most recent production failed; render the failure notice.
    Failed(&'a LoadFailure),
}

// ===== DeferredLoader =====

/// Memoizing loader with per-route slots.
///
/// The slot map is the application's only shared mutable resource. Each
/// slot is write-once on the success path: empty -> pending -> ready.
#[derive(Debug)]
pub struct DeferredLoader {
    slots: HashMap<String, LoadState>,
    /// Ticks a pending production waits before its producer runs. Stands
    /// in for module-fetch latency; zero settles on the next poll.
    settle_delay: u64,
}

impl DeferredLoader {
    /// Loader with the given settle delay in ticks.
    pub fn new(settle_delay: u64) -> Self {
        Self {
            slots: HashMap::new(),
            settle_delay,
        }
    }

    /// Produce an eager entry immediately and seed its slot.
    ///
    /// Called once per eager route at startup. A failure here is fatal to
    /// startup and propagates.
    pub fn preload(&mut self, entry: &RouteEntry) -> Result<(), LoadFailure> {
        debug_assert_eq!(entry.strategy(), LoadStrategy::Eager);
        let unit = entry.produce()?;
        self.slots
            .insert(entry.path().as_str().to_string(), LoadState::Ready(unit));
        Ok(())
    }

    /// Activate a route at navigation time.
    ///
    /// - Eager or settled routes resolve to `Ready` synchronously.
    /// - An unproduced deferred route begins production and resolves to
    ///   `Pending`; the caller renders the placeholder.
    /// - A pending route stays pending - the second caller attaches to
    ///   the in-flight production rather than starting another.
    /// - A failed route reports `Failed`; whether to retry is the
    ///   caller's decision (see [`DeferredLoader::clear_failure`]).
    pub fn activate(&mut self, entry: &RouteEntry, now: u64) -> Resolution<'_> {
        let key = entry.path().as_str();
        if !self.slots.contains_key(key) {
            debug!(route = key, "starting deferred production");
            self.slots
                .insert(key.to_string(), LoadState::Pending { since: now });
            return Resolution::Pending;
        }
        match &self.slots[key] {
            LoadState::Pending { .. } => Resolution::Pending,
            LoadState::Ready(unit) => Resolution::Ready(unit),
            LoadState::Failed(failure) => Resolution::Failed(failure),
        }
    }

    /// Read-only view of a route's slot, for render-time resolution.
    /// `None` means production has never been started.
    pub fn status(&self, path: &str) -> Option<&LoadState> {
        self.slots.get(path)
    }

    /// Drop a failed slot so the next activation retries production.
    /// No-op for pending or ready slots - a settled unit is never
    /// invalidated and an in-flight production is never restarted.
    pub fn clear_failure(&mut self, path: &str) {
        if matches!(self.slots.get(path), Some(LoadState::Failed(_))) {
            debug!(route = path, "clearing failed slot for retry");
            self.slots.remove(path);
        }
    }

    /// Run producers for pending slots whose settle delay has elapsed.
    ///
    /// Called from the event loop tick. Returns the paths that settled
    /// (successfully or not) so the caller can decide whether the current
    /// navigation is affected; stale settles are simply never rendered.
    pub fn poll(&mut self, entries: &[&RouteEntry], now: u64) -> Vec<String> {
        let mut settled = Vec::new();
        for entry in entries {
            let key = entry.path().as_str();
            let due = matches!(
                self.slots.get(key),
                Some(LoadState::Pending { since }) if now.saturating_sub(*since) >= self.settle_delay
            );
            if !due {
                continue;
            }
            let next = match entry.produce() {
                Ok(unit) => {
                    debug!(route = key, "deferred production settled");
                    LoadState::Ready(unit)
                }
                Err(failure) => {
                    warn!(route = key, %failure, "deferred production failed");
                    LoadState::Failed(failure)
                }
            };
            self.slots.insert(key.to_string(), next);
            settled.push(key.to_string());
        }
        settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RouteLookup, RouteTable};
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Separate counters per test: tests run in parallel and must not
    // share producer state.
    static ACADEMY_RUNS: AtomicUsize = AtomicUsize::new(0);
    static CONCURRENT_RUNS: AtomicUsize = AtomicUsize::new(0);

    fn academy_page() -> Result<PageUnit, LoadFailure> {
        ACADEMY_RUNS.fetch_add(1, Ordering::SeqCst);
        Ok(PageUnit::new("Academy"))
    }

    fn concurrent_page() -> Result<PageUnit, LoadFailure> {
        CONCURRENT_RUNS.fetch_add(1, Ordering::SeqCst);
        Ok(PageUnit::new("Academy"))
    }

    fn plain_page() -> Result<PageUnit, LoadFailure> {
        Ok(PageUnit::new("Plain"))
    }

    fn failing_page() -> Result<PageUnit, LoadFailure> {
        Err(LoadFailure::new("/components/Blogs", "fetch failed"))
    }

    fn table_with(path: &str, producer: crate::model::PageProducer) -> RouteTable {
        let mut table = RouteTable::new();
        table
            .register(path, LoadStrategy::Deferred, producer)
            .expect("register");
        table
    }

    fn entry<'a>(table: &'a RouteTable, path: &str) -> &'a RouteEntry {
        match table.lookup(path) {
            RouteLookup::Found(e) => e,
            RouteLookup::NotFound => panic!("entry must exist"),
        }
    }

    #[test]
    fn first_activation_is_pending_then_settles_once() {
        let table = table_with("/academy-test", academy_page);
        let entry = entry(&table, "/academy-test");
        let mut loader = DeferredLoader::new(0);

        assert!(matches!(loader.activate(entry, 0), Resolution::Pending));
        // Producer has not run yet - production settles on poll.
        assert_eq!(ACADEMY_RUNS.load(Ordering::SeqCst), 0);

        let settled = loader.poll(&[entry], 1);
        assert_eq!(settled, vec!["/academy-test".to_string()]);
        assert_eq!(ACADEMY_RUNS.load(Ordering::SeqCst), 1);

        // Subsequent activations and polls reuse the cached unit.
        assert!(matches!(loader.activate(entry, 2), Resolution::Ready(_)));
        assert!(loader.poll(&[entry], 3).is_empty());
        assert_eq!(ACADEMY_RUNS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn concurrent_activations_share_one_production() {
        let table = table_with("/academy-concurrent", concurrent_page);
        let entry = entry(&table, "/academy-concurrent");
        let mut loader = DeferredLoader::new(0);

        // Two activations before any poll: second attaches, nothing runs twice.
        assert!(matches!(loader.activate(entry, 0), Resolution::Pending));
        assert!(matches!(loader.activate(entry, 0), Resolution::Pending));
        loader.poll(&[entry], 1);
        assert_eq!(CONCURRENT_RUNS.load(Ordering::SeqCst), 1);

        // Both callers observe the same eventual unit.
        assert!(matches!(loader.activate(entry, 2), Resolution::Ready(u) if u.title() == "Academy"));
        assert!(
            matches!(loader.status("/academy-concurrent"), Some(LoadState::Ready(u)) if u.title() == "Academy")
        );
    }

    #[test]
    fn settle_delay_holds_production_until_due() {
        let table = table_with("/delayed", plain_page);
        let entry = entry(&table, "/delayed");
        let mut loader = DeferredLoader::new(3);

        loader.activate(entry, 10);
        assert!(loader.poll(&[entry], 11).is_empty());
        assert!(loader.poll(&[entry], 12).is_empty());
        assert_eq!(loader.poll(&[entry], 13), vec!["/delayed".to_string()]);
    }

    #[test]
    fn failure_is_reported_and_retry_clears_it() {
        let table = table_with("/components/Blogs", failing_page);
        let entry = entry(&table, "/components/Blogs");
        let mut loader = DeferredLoader::new(0);

        loader.activate(entry, 0);
        loader.poll(&[entry], 1);
        assert!(matches!(
            loader.activate(entry, 2),
            Resolution::Failed(f) if f.reason == "fetch failed"
        ));

        // Retry path: clearing the failure makes the next activation pend again.
        loader.clear_failure("/components/Blogs");
        assert!(matches!(loader.activate(entry, 3), Resolution::Pending));
    }

    #[test]
    fn clear_failure_never_drops_ready_or_pending_slots() {
        let table = table_with("/sticky", plain_page);
        let entry = entry(&table, "/sticky");
        let mut loader = DeferredLoader::new(5);

        loader.activate(entry, 0);
        loader.clear_failure("/sticky");
        assert!(matches!(loader.status("/sticky"), Some(LoadState::Pending { .. })));

        loader.poll(&[entry], 5);
        loader.clear_failure("/sticky");
        assert!(matches!(loader.status("/sticky"), Some(LoadState::Ready(_))));
    }
}
