//! S3: Key Features
//!
//! One card per feature, in record order. No dedup, no sorting.

use crate::review::types::{ProductRecord, SectionKind};
use crate::review::view_models::{FeatureCard, SectionBlock, SectionBody};

pub fn generate(record: &ProductRecord) -> SectionBlock {
    let cards = record
        .features
        .iter()
        .map(|f| FeatureCard {
            title: f.title.clone(),
            description: f.description.clone(),
        })
        .collect();

    SectionBlock::new(
        SectionKind::Features,
        format!("{} Key Features & Capabilities", record.name),
        SectionBody::Features(cards),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::types::Feature;

    #[test]
    fn test_order_and_duplicates_preserved() {
        let feature = |t: &str| Feature { title: t.to_string(), description: format!("{} details", t) };
        let record = ProductRecord {
            name: "ContentStudio".to_string(),
            features: vec![feature("Scheduling"), feature("Analytics"), feature("Scheduling")],
            ..Default::default()
        };

        let block = generate(&record);
        assert_eq!(block.heading, "ContentStudio Key Features & Capabilities");
        let SectionBody::Features(cards) = block.body else {
            panic!("expected features body");
        };
        let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Scheduling", "Analytics", "Scheduling"]);
        assert_eq!(cards[1].description, "Analytics details");
    }
}
