//! S6: Pros & Cons
//!
//! Two independent lists, each in record order.

use crate::review::types::{ProductRecord, SectionKind};
use crate::review::view_models::{ProsConsBlock, SectionBlock, SectionBody};

pub fn generate(record: &ProductRecord) -> SectionBlock {
    let block = ProsConsBlock {
        pros: record.pros_and_cons.pros.clone(),
        cons: record.pros_and_cons.cons.clone(),
    };

    SectionBlock::new(
        SectionKind::ProsCons,
        format!("{} Pros & Cons", record.name),
        SectionBody::ProsCons(block),
    )
}
