//! Static route table.
//!
//! A route maps an absolute path to a page-producing function plus a load
//! strategy. The table is built once at startup from a fixed specification
//! and is immutable afterwards; there is no dynamic registration at
//! navigation time.

use crate::model::error::{LoadFailure, RouteError};
use crate::model::page::PageUnit;
use std::collections::HashMap;
use std::fmt;

// ===== RoutePath =====

/// Validated absolute route path. Never empty, always starts with `/`.
///
/// Smart constructor enforces the invariants; everything downstream can
/// rely on them without re-checking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePath(String);

impl RoutePath {
    /// Validate and wrap a raw path.
    pub fn new(raw: impl Into<String>) -> Result<Self, RouteError> {
        let s = raw.into();
        if s.is_empty() {
            return Err(RouteError::EmptyPath);
        }
        if !s.starts_with('/') {
            return Err(RouteError::MissingLeadingSlash { raw: s });
        }
        Ok(Self(s))
    }

    /// The path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== LoadStrategy =====

/// When a route's page unit is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStrategy {
    /// Produced at startup, before the shell becomes interactive.
    Eager,
    /// Production postponed until the route is first activated; the shared
    /// placeholder is rendered while production is pending.
    Deferred,
}

/// Zero-argument producer of a renderable page unit.
///
/// Eager entries run their producer at resolver construction; deferred
/// entries run it on first activation, driven by the event loop tick.
pub type PageProducer = fn() -> Result<PageUnit, LoadFailure>;

// ===== RouteEntry =====

/// One registered route: path, strategy, and producer.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    path: RoutePath,
    strategy: LoadStrategy,
    producer: PageProducer,
}

impl RouteEntry {
    /// The route's path.
    pub fn path(&self) -> &RoutePath {
        &self.path
    }

    /// The route's load strategy.
    pub fn strategy(&self) -> LoadStrategy {
        self.strategy
    }

    /// Run the producer. Deliberately not memoized here; caching is the
    /// deferred loader's job.
    pub fn produce(&self) -> Result<PageUnit, LoadFailure> {
        (self.producer)()
    }
}

// ===== RouteLookup =====

/// Result of a table lookup. Total: lookup never fails, it either finds
/// the unique matching entry or reports that none exists.
#[derive(Debug)]
pub enum RouteLookup<'a> {
    /// The entry registered for the queried path.
    Found(&'a RouteEntry),
    /// No entry matches; the caller renders the not-found unit.
    NotFound,
}

impl<'a> RouteLookup<'a> {
    /// The entry, if one matched.
    pub fn entry(&self) -> Option<&'a RouteEntry> {
        match self {
            RouteLookup::Found(entry) => Some(entry),
            RouteLookup::NotFound => None,
        }
    }
}

// ===== RouteTable =====

/// Ordered set of routes with unique paths.
///
/// Insertion order is preserved for iteration (menus, diagnostics); the
/// path index enforces the one-entry-per-path invariant and gives O(1)
/// exact-match lookup. All registration happens at startup; the running
/// application only reads.
#[derive(Debug, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    index: HashMap<String, usize>,
}

impl RouteTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route. Fails with [`RouteError::DuplicatePath`] if the
    /// path is already present; path validation errors pass through.
    pub fn register(
        &mut self,
        path: &str,
        strategy: LoadStrategy,
        producer: PageProducer,
    ) -> Result<(), RouteError> {
        let path = RoutePath::new(path)?;
        if self.index.contains_key(path.as_str()) {
            return Err(RouteError::DuplicatePath {
                path: path.as_str().to_string(),
            });
        }
        self.index.insert(path.as_str().to_string(), self.entries.len());
        self.entries.push(RouteEntry {
            path,
            strategy,
            producer,
        });
        Ok(())
    }

    /// Exact-match lookup. No pattern or wildcard matching; an unknown
    /// path returns [`RouteLookup::NotFound`], never an error.
    pub fn lookup(&self, path: &str) -> RouteLookup<'_> {
        match self.index.get(path) {
            Some(&i) => RouteLookup::Found(&self.entries[i]),
            None => RouteLookup::NotFound,
        }
    }

    /// Iterate entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
