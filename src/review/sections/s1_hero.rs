//! S1: Hero
//!
//! Title is `heroTitle` when the record sets one, else "{name} Review".
//! The primary action always links to the product website.

use crate::review::types::{ProductRecord, SectionKind};
use crate::review::utils::{format_rating, star_string};
use crate::review::view_models::{HeroBlock, SectionBlock, SectionBody};

pub fn generate(record: &ProductRecord) -> SectionBlock {
    let title = hero_title(record);

    let hero = HeroBlock {
        title: title.clone(),
        subtitle: record.description.clone(),
        rating: record.rating,
        rating_display: format!("{}/5", format_rating(record.rating)),
        stars: star_string(record.rating),
        action_url: record.website.clone(),
        action_label: format!("Visit {}", record.name),
    };

    SectionBlock::new(SectionKind::Hero, title, SectionBody::Hero(hero))
}

pub fn hero_title(record: &ProductRecord) -> String {
    match &record.hero_title {
        Some(title) => title.clone(),
        None => format!("{} Review", record.name),
    }
}
