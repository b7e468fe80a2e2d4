//! Error types for review page rendering.
//!
//! - `InvalidRecordError`: a product record breaks an invariant; no page is produced.
//! - `NotFoundError`: the content source has no record for a slug (HTTP 404 at the host).
//! - `CatalogError`: loading a catalog file failed.

use std::path::PathBuf;
use thiserror::Error;

/// A product record is missing a required field or has one out of bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid product record '{slug}': {field} {reason}")]
pub struct InvalidRecordError {
    /// Slug of the offending record (may be empty when the slug itself is invalid)
    pub slug: String,
    /// Field path, e.g. `pricingPlans[1].planName`
    pub field: String,
    pub reason: String,
}

impl InvalidRecordError {
    pub fn new(slug: &str, field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            slug: slug.to_string(),
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// No product record exists for the requested slug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no product record for slug '{slug}'")]
pub struct NotFoundError {
    pub slug: String,
}

impl NotFoundError {
    pub fn new(slug: &str) -> Self {
        Self { slug: slug.to_string() }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate product slug '{0}'")]
    DuplicateSlug(String),

    #[error(transparent)]
    InvalidRecord(#[from] InvalidRecordError),
}
