//! Output formatters for a `RenderedPage`.
//!
//! The page is already final display text; formatters only lay it out.

pub mod html;
pub mod json;
pub mod markdown;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
