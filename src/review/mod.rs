//! Review Page Module
//!
//! Renders software product review pages from a single `ProductRecord`.
//!
//! ## Sections
//! 1. Hero - "{name} Review", summary, rating stars, primary link
//! 2. Quick Overview - key facts and in-page navigation
//! 3. Key Features - one card per feature, record order
//! 4. Pricing Plans - "$n/month" or "Custom"
//! 5. Use Cases - primary uses and target users
//! 6. Pros & Cons - two independent lists
//! 7. Performance Benchmarks - "{score}/10" per metric
//! 8. FAQ - `{name}` / `{category}` substituted at render time
//! 9. Call to Action - always present, links to the product website
//!
//! Metadata (title, description, canonical, Open Graph, JSON-LD) is built
//! alongside the sections by `metadata`.

pub mod types;
pub mod utils;
pub mod validation;
pub mod view_models;
pub mod sections;
pub mod metadata;
pub mod generator;
pub mod formatters;

pub use generator::ReviewPageRenderer;
pub use types::{
    Faq, Feature, PageSections, Price, PricingPlan, ProductRecord, ProsAndCons, SectionKind, UseCases,
};
pub use view_models::{PageMetadata, RenderedPage, SectionBlock, SectionBody};
pub use formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter};
