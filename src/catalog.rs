//! Content source for product records.
//!
//! `ProductCatalog` is loaded once from a JSON file (either a bare array of
//! records or `{ "products": [...] }`) and serves lookups by slug.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::{CatalogError, NotFoundError};
use crate::review::types::ProductRecord;
use crate::review::validation;

/// Anything that can hand out a product record by slug.
pub trait ContentSource: Send + Sync {
    fn fetch_product_record(&self, slug: &str) -> Result<ProductRecord, NotFoundError>;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<ProductRecord>),
    Wrapped { products: Vec<ProductRecord> },
}

impl CatalogDocument {
    fn into_records(self) -> Vec<ProductRecord> {
        match self {
            CatalogDocument::List(records) | CatalogDocument::Wrapped { products: records } => records,
        }
    }
}

/// In-memory catalog keyed by slug. File order is kept for listings.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    records: Vec<ProductRecord>,
    by_slug: FxHashMap<String, usize>,
}

impl ProductCatalog {
    /// Build from records, rejecting invalid records and duplicate slugs.
    pub fn from_records(records: Vec<ProductRecord>) -> Result<Self, CatalogError> {
        let mut by_slug = FxHashMap::default();
        by_slug.reserve(records.len());

        for (idx, record) in records.iter().enumerate() {
            validation::validate_record(record)?;
            if by_slug.insert(record.slug.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateSlug(record.slug.clone()));
            }
        }

        Ok(Self { records, by_slug })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_records(document.into_records())
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        tracing::info!("Loading product catalog from {}", path.display());

        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;

        tracing::info!("Loaded {} product records", catalog.len());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Slugs in file order.
    pub fn slugs(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.slug.as_str()).collect()
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn get(&self, slug: &str) -> Option<&ProductRecord> {
        self.by_slug.get(slug).map(|&idx| &self.records[idx])
    }
}

impl ContentSource for ProductCatalog {
    fn fetch_product_record(&self, slug: &str) -> Result<ProductRecord, NotFoundError> {
        self.get(slug).cloned().ok_or_else(|| NotFoundError::new(slug))
    }
}
