//! Innovant terminal catalog browser.
//!
//! Renders the Innovant Engineering & Academy content set as navigable
//! terminal pages: a persistent shell (header menu + status bar), a home
//! page composed of in-page sections, and full-page course and service
//! descriptions reached through a static route table.
//!
//! The crate follows a Pure Core / Impure Shell split: everything under
//! [`model`], [`router`], and [`state`] is pure and testable without a
//! terminal; [`view`] owns the terminal and the event loop.

pub mod config;
pub mod content;
pub mod logging;
pub mod model;
pub mod router;
pub mod state;
pub mod view;
