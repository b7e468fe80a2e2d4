//! Record validation.
//!
//! Runs before any output is built, so a failed render never yields a partial page.
//! Two layers:
//! - `validate_record`: invariants that hold regardless of section selection
//!   (checked by the catalog at load time too)
//! - `validate_for_sections`: invariants that only matter when a section is rendered

use crate::error::InvalidRecordError;
use crate::review::types::{PageSections, Price, ProductRecord, SectionKind};
use crate::review::utils::{format_metric_label, is_url_safe_slug};

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;
pub const MAX_BENCHMARK_SCORE: u8 = 10;

/// Full validation for one render.
pub fn validate(record: &ProductRecord, sections: &PageSections) -> Result<(), InvalidRecordError> {
    validate_record(record)?;
    validate_for_sections(record, sections)
}

/// Section-independent invariants.
pub fn validate_record(record: &ProductRecord) -> Result<(), InvalidRecordError> {
    let slug = record.slug.as_str();

    require_text(slug, "name", &record.name)?;
    if !is_url_safe_slug(slug) {
        return Err(InvalidRecordError::new(
            slug,
            "slug",
            "must be lowercase letters, digits and single hyphens",
        ));
    }
    require_text(slug, "category", &record.category)?;
    require_text(slug, "description", &record.description)?;

    let website = record.website.trim();
    if !(website.starts_with("https://") || website.starts_with("http://"))
        || website.len() <= "https://".len()
    {
        return Err(InvalidRecordError::new(slug, "website", "must be an absolute http(s) URL"));
    }

    validate_rating(slug, record.rating)?;

    for (i, feature) in record.features.iter().enumerate() {
        require_text(slug, &format!("features[{}].title", i), &feature.title)?;
        require_text(slug, &format!("features[{}].description", i), &feature.description)?;
    }

    for (i, plan) in record.pricing_plans.iter().enumerate() {
        require_text(slug, &format!("pricingPlans[{}].planName", i), &plan.plan_name)?;
        match &plan.price {
            Price::Amount(n) if !n.is_finite() || *n < 0.0 => {
                return Err(InvalidRecordError::new(
                    slug,
                    format!("pricingPlans[{}].price", i),
                    format!("must be a non-negative number (got {})", n),
                ));
            }
            Price::Label(label) if label != Price::CUSTOM => {
                return Err(InvalidRecordError::new(
                    slug,
                    format!("pricingPlans[{}].price", i),
                    format!("must be a number or \"{}\" (got \"{}\")", Price::CUSTOM, label),
                ));
            }
            _ => {}
        }
    }

    for (metric, score) in &record.benchmarks {
        if format_metric_label(metric).is_empty() {
            return Err(InvalidRecordError::new(
                slug,
                "benchmarks",
                format!("metric name must contain a word (got \"{}\")", metric),
            ));
        }
        if *score > MAX_BENCHMARK_SCORE {
            return Err(InvalidRecordError::new(
                slug,
                format!("benchmarks.{}", metric),
                format!("must be between 0 and {} (got {})", MAX_BENCHMARK_SCORE, score),
            ));
        }
    }

    for (i, faq) in record.faqs.iter().enumerate() {
        require_text(slug, &format!("faqs[{}].question", i), &faq.question)?;
        require_text(slug, &format!("faqs[{}].answer", i), &faq.answer)?;
    }

    if let Some(title) = &record.hero_title {
        require_text(slug, "heroTitle", title)?;
    }

    Ok(())
}

/// Invariants tied to the sections being rendered.
pub fn validate_for_sections(
    record: &ProductRecord,
    sections: &PageSections,
) -> Result<(), InvalidRecordError> {
    if sections.is_enabled(SectionKind::Pricing) && record.pricing_plans.is_empty() {
        return Err(InvalidRecordError::new(
            &record.slug,
            "pricingPlans",
            "must not be empty when the pricing section is rendered",
        ));
    }
    Ok(())
}

/// Rating must sit in [1.0, 5.0] with at most one decimal place.
fn validate_rating(slug: &str, rating: f64) -> Result<(), InvalidRecordError> {
    if !rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(InvalidRecordError::new(
            slug,
            "rating",
            format!("must be between {:.1} and {:.1} (got {})", MIN_RATING, MAX_RATING, rating),
        ));
    }
    let tenths = rating * 10.0;
    if (tenths - tenths.round()).abs() > 1e-6 {
        return Err(InvalidRecordError::new(
            slug,
            "rating",
            format!("must have one decimal place (got {})", rating),
        ));
    }
    Ok(())
}

fn require_text(slug: &str, field: &str, value: &str) -> Result<(), InvalidRecordError> {
    if value.trim().is_empty() {
        Err(InvalidRecordError::new(slug, field, "must not be empty"))
    } else {
        Ok(())
    }
}
