//! JSON output

use crate::review::view_models::RenderedPage;

pub struct JsonFormatter;

impl JsonFormatter {
    /// Pretty-printed, for files and API responses.
    pub fn format(page: &RenderedPage) -> serde_json::Result<String> {
        serde_json::to_string_pretty(page)
    }

    pub fn format_compact(page: &RenderedPage) -> serde_json::Result<String> {
        serde_json::to_string(page)
    }
}
