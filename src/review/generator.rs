//! Review Page Generator
//!
//! Main entry point for rendering a product review page.
//! Validates the record, then builds metadata and every enabled section
//! (S1-S9) into a `RenderedPage`.
//!
//! Public API (consumed by api_server.rs and generate_review_pages.rs):
//! - ReviewPageRenderer::new(site) -> Self
//! - ReviewPageRenderer::render(record, sections) -> Result<RenderedPage, InvalidRecordError>
//! - ReviewPageRenderer::render_batch(records, sections) -> Vec<Result<...>>

use rayon::prelude::*;

use crate::config::SiteConfig;
use crate::error::InvalidRecordError;
use crate::review::metadata;
use crate::review::sections::{
    s1_hero,
    s2_overview,
    s3_features,
    s4_pricing,
    s5_use_cases,
    s6_pros_cons,
    s7_benchmarks,
    s8_faq,
    s9_call_to_action,
};
use crate::review::types::{PageSections, ProductRecord, SectionKind};
use crate::review::utils::Placeholders;
use crate::review::validation;
use crate::review::view_models::RenderedPage;

/// Review page renderer - stateless apart from the site configuration.
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct ReviewPageRenderer {
    site: SiteConfig,
}

impl ReviewPageRenderer {
    pub fn new(site: SiteConfig) -> Self {
        Self { site }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Render one product review page.
    ///
    /// # Arguments
    /// * `record` - Product data (validated before anything is built)
    /// * `sections` - Which sections to include; the call to action is always included
    ///
    /// # Returns
    /// The complete page, or the first invariant the record violates.
    pub fn render(
        &self,
        record: &ProductRecord,
        sections: &PageSections,
    ) -> Result<RenderedPage, InvalidRecordError> {
        validation::validate(record, sections)?;

        // FAQ placeholders resolved once; section and FAQPage schema share the result
        let placeholders = Placeholders {
            name: &record.name,
            category: &record.category,
        };
        let faqs = s8_faq::substitute_faqs(&record.faqs, &placeholders);

        let blocks = sections
            .iter()
            .map(|kind| match kind {
                SectionKind::Hero => s1_hero::generate(record),
                SectionKind::Overview => s2_overview::generate(record, sections),
                SectionKind::Features => s3_features::generate(record),
                SectionKind::Pricing => s4_pricing::generate(record),
                SectionKind::UseCases => s5_use_cases::generate(record),
                SectionKind::ProsCons => s6_pros_cons::generate(record),
                SectionKind::Benchmarks => s7_benchmarks::generate(record),
                SectionKind::Faq => s8_faq::generate(&faqs),
                SectionKind::CallToAction => s9_call_to_action::generate(record, &self.site.cta),
            })
            .collect();

        Ok(RenderedPage {
            slug: record.slug.clone(),
            metadata: metadata::generate(record, &self.site, sections, &faqs),
            sections: blocks,
        })
    }

    /// Render with every section enabled.
    pub fn render_default(&self, record: &ProductRecord) -> Result<RenderedPage, InvalidRecordError> {
        self.render(record, &PageSections::all())
    }

    /// Render many records in parallel. Results keep input order.
    pub fn render_batch(
        &self,
        records: &[ProductRecord],
        sections: &PageSections,
    ) -> Vec<Result<RenderedPage, InvalidRecordError>> {
        records
            .par_iter()
            .map(|record| self.render(record, sections))
            .collect()
    }
}

impl Default for ReviewPageRenderer {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}
