//! S9: Call to Action
//!
//! Always rendered. Copy comes from the site configuration; the link is the
//! product website.

use crate::config::CtaCopy;
use crate::review::types::{ProductRecord, SectionKind};
use crate::review::utils::{substitute_placeholders, Placeholders};
use crate::review::view_models::{CallToActionBlock, SectionBlock, SectionBody};

pub fn generate(record: &ProductRecord, copy: &CtaCopy) -> SectionBlock {
    let values = Placeholders {
        name: &record.name,
        category: &record.category,
    };

    let block = CallToActionBlock {
        heading: substitute_placeholders(&copy.heading, &values),
        subheading: substitute_placeholders(&copy.subheading, &values),
        tagline: substitute_placeholders(&copy.tagline, &values),
        url: record.website.clone(),
        label: substitute_placeholders(&copy.button_label, &values),
    };

    SectionBlock::new(
        SectionKind::CallToAction,
        block.heading.clone(),
        SectionBody::CallToAction(block),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProductRecord {
        ProductRecord {
            name: "ContentStudio".to_string(),
            category: "Social Media".to_string(),
            website: "https://contentstudio.io".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_copy() {
        let SectionBody::CallToAction(cta) = generate(&record(), &CtaCopy::default()).body else {
            panic!("expected call to action body");
        };
        assert_eq!(cta.url, "https://contentstudio.io");
        assert_eq!(cta.label, "Visit ContentStudio →");
        assert!(cta.heading.starts_with("Work Directly With Experts"));
    }

    #[test]
    fn test_visit_variant() {
        let block = generate(&record(), &CtaCopy::visit_only());
        assert_eq!(block.heading, "Ready to Try ContentStudio?");
        let SectionBody::CallToAction(cta) = block.body else {
            panic!("expected call to action body");
        };
        assert_eq!(cta.subheading, "See how ContentStudio fits your Social Media workflow.");
    }
}
