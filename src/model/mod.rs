//! Domain types (pure).
//!
//! Everything here is plain data plus total functions: the route table,
//! the renderable page model, the decorative scene variants, and the
//! search catalog. No terminal or IO concerns.

pub mod catalog;
pub mod error;
pub mod page;
pub mod route;
pub mod scene;

pub use catalog::{search_catalog, RecordKind, SearchRecord};
pub use error::{AppError, LoadFailure, RouteError};
pub use page::{
    BlogPost, ContentBlock, CourseCard, FaqItem, PageUnit, Project, ProjectCategory, Section,
    SectionId,
};
pub use route::{LoadStrategy, PageProducer, RouteEntry, RouteLookup, RoutePath, RouteTable};
pub use scene::SceneKind;
