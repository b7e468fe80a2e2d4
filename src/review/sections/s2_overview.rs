//! S2: Quick Overview
//!
//! Key facts box plus in-page navigation to the other rendered sections.

use crate::review::types::{PageSections, ProductRecord, SectionKind};
use crate::review::utils::format_rating;
use crate::review::view_models::{NavLink, OverviewBlock, SectionBlock, SectionBody};

pub fn generate(record: &ProductRecord, sections: &PageSections) -> SectionBlock {
    let rating = format_rating(record.rating);
    let rating_display = match record.review_count {
        Some(1) => format!("{}/5 (1 review)", rating),
        Some(n) => format!("{}/5 ({} reviews)", rating, n),
        None => format!("{}/5", rating),
    };

    // Hero, overview and CTA are always in view, so they are not linked
    let navigation = sections
        .iter()
        .filter(|k| {
            !matches!(
                k,
                SectionKind::Hero | SectionKind::Overview | SectionKind::CallToAction
            )
        })
        .map(|k| NavLink {
            anchor: k.anchor(),
            label: k.nav_label(),
        })
        .collect();

    let overview = OverviewBlock {
        category: record.category.clone(),
        developer: record.developer.clone().unwrap_or_else(|| record.name.clone()),
        rating_display,
        website: record.website.clone(),
        navigation,
    };

    SectionBlock::new(
        SectionKind::Overview,
        "Quick Overview".to_string(),
        SectionBody::Overview(overview),
    )
}
