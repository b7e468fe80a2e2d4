//! S8: Frequently Asked Questions
//!
//! `{name}` / `{category}` are resolved once per render by `substitute_faqs`;
//! the section and the FAQPage JSON-LD both consume that one result.

use crate::review::types::{Faq, SectionKind};
use crate::review::utils::{substitute_placeholders, Placeholders};
use crate::review::view_models::{FaqEntry, SectionBlock, SectionBody};

pub fn substitute_faqs(faqs: &[Faq], values: &Placeholders<'_>) -> Vec<FaqEntry> {
    faqs.iter()
        .map(|faq| FaqEntry {
            question: substitute_placeholders(&faq.question, values),
            answer: substitute_placeholders(&faq.answer, values),
        })
        .collect()
}

pub fn generate(entries: &[FaqEntry]) -> SectionBlock {
    SectionBlock::new(
        SectionKind::Faq,
        "Frequently Asked Questions".to_string(),
        SectionBody::Faq(entries.to_vec()),
    )
}
