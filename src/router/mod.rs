//! Route resolution (pure).
//!
//! Composes the static route table with the deferred loader: navigation
//! events activate routes, the event loop tick drives pending productions,
//! and render-time resolution is a read-only view of the current slot
//! state. No terminal concerns.

pub mod loader;
pub mod resolver;

pub use loader::{DeferredLoader, LoadState, Resolution};
pub use resolver::{PageResolver, Resolved};
