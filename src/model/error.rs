//! Error types for the innovant application.
//!
//! Hierarchical taxonomy built on `thiserror`, composing via `From` and the
//! `?` operator.
//!
//! # Recovery strategy
//!
//! - [`RouteError`] is a startup-time programming error (a broken route
//!   table) and is **fatal**: it aborts startup rather than being ignored.
//! - [`LoadFailure`] is scoped to a single route and **recoverable**: the
//!   affected page shows a failure notice and the next navigation to that
//!   route retries production. It never takes down navigation for other
//!   routes.
//! - Terminal errors are fatal; the shell attempts cleanup and exits.

use thiserror::Error;

/// Top-level application error.
///
/// Unified error type returned from main application logic. Domain errors
/// convert into it via `From`, so `?` propagates cleanly to the top-level
/// handler.
#[derive(Debug, Error)]
pub enum AppError {
    /// The route table could not be constructed.
    ///
    /// Indicates a duplicate or malformed path in the fixed route
    /// specification. Fatal: there is no sensible way to run with a
    /// broken table, so startup aborts with this error.
    #[error("Broken route table: {0}")]
    Route(#[from] RouteError),

    /// An eager page failed to produce at startup.
    ///
    /// Eager units are constructed while building the resolver; a failure
    /// here means the application has no home page to show and exits.
    /// Deferred-route failures never surface as this variant - they are
    /// handled in-shell with a retryable failure notice.
    #[error("Failed to produce startup page: {0}")]
    Load(#[from] LoadFailure),

    /// Terminal or rendering error from the crossterm/ratatui layer.
    ///
    /// Fatal: without a working terminal the shell cannot run. The caller
    /// restores the terminal before reporting it.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors raised while constructing the route table.
///
/// All variants indicate a broken fixed route specification, which is a
/// programming error, not a runtime condition. They are raised at startup
/// and must not be silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Two entries claimed the same path.
    ///
    /// The table invariant is exactly one entry per concrete path; a
    /// duplicate registration would make lookup ambiguous.
    #[error("Duplicate route path: {path}")]
    DuplicatePath {
        /// The path registered more than once.
        path: String,
    },

    /// A route path was empty.
    #[error("Route path must not be empty")]
    EmptyPath,

    /// A route path did not start with `/`.
    ///
    /// Paths are absolute by construction; a relative path would never be
    /// matched by lookup and indicates a typo in the route specification.
    #[error("Route path must start with '/': {raw}")]
    MissingLeadingSlash {
        /// The malformed path as given.
        raw: String,
    },
}

/// A deferred page unit's production failed.
///
/// Recoverable: the resolver keeps the failure in the route's slot and
/// renders a failure notice instead of the page; navigating to the route
/// again clears the slot and retries production.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Page production failed for {route}: {reason}")]
pub struct LoadFailure {
    /// The route whose production failed.
    pub route: String,
    /// Human-readable reason, shown in the failure notice and logged.
    pub reason: String,
}

impl LoadFailure {
    /// Convenience constructor.
    pub fn new(route: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_path_display_names_the_path() {
        let err = RouteError::DuplicatePath {
            path: "/courses/CATIA".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Duplicate route path"));
        assert!(msg.contains("/courses/CATIA"));
    }

    #[test]
    fn missing_leading_slash_display_shows_raw_path() {
        let err = RouteError::MissingLeadingSlash {
            raw: "about".to_string(),
        };
        assert!(err.to_string().contains("about"));
    }

    #[test]
    fn load_failure_display_names_route_and_reason() {
        let err = LoadFailure::new("/components/Blogs", "producer panicked");
        let msg = err.to_string();
        assert!(msg.contains("/components/Blogs"));
        assert!(msg.contains("producer panicked"));
    }

    #[test]
    fn app_error_from_route_error() {
        let route_err = RouteError::EmptyPath;
        let app_err: AppError = route_err.into();
        assert!(app_err.to_string().contains("Broken route table"));
    }

    #[test]
    fn app_error_from_load_failure() {
        let load_err = LoadFailure::new("/", "hero content missing");
        let app_err: AppError = load_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Failed to produce startup page"));
        assert!(msg.contains("hero content missing"));
    }

    #[test]
    fn app_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe broken");
        let app_err: AppError = io_err.into();
        assert!(app_err.to_string().contains("Terminal error"));
    }
}
