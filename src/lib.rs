//! Review Page Renderer
//!
//! Turns structured product records into complete review pages: metadata,
//! JSON-LD and nine ordered content sections.
//!
//! - `review/`: record types, validation, section builders, formatters
//! - `catalog`: JSON-backed content source
//! - `config`: site and server settings
//! - `api_server` (feature `api`): axum page host

pub mod config;
pub mod error;
pub mod catalog;
pub mod review;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use catalog::{ContentSource, ProductCatalog};
pub use config::{CtaCopy, ServerConfig, SiteConfig, SocialCard};
pub use error::{CatalogError, InvalidRecordError, NotFoundError};
pub use review::{
    HtmlFormatter, JsonFormatter, MarkdownFormatter, PageSections, ProductRecord, RenderedPage,
    ReviewPageRenderer, SectionKind,
};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
