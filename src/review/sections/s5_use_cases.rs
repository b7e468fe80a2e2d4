//! S5: Use Cases & Applications
//!
//! Uses the record's lists when present. Records without them get the
//! category-based defaults every review page has always carried.

use crate::review::types::{ProductRecord, SectionKind};
use crate::review::view_models::{SectionBlock, SectionBody, UseCasesBlock};

const DEFAULT_TARGET_USERS: [&str; 4] = [
    "Marketing professionals",
    "Content creators",
    "Business owners",
    "Agencies and teams",
];

pub fn generate(record: &ProductRecord) -> SectionBlock {
    let provided = record.use_cases.as_ref();

    let primary = match provided {
        Some(u) if !u.primary.is_empty() => u.primary.clone(),
        _ => default_primary(&record.category),
    };

    let target_users = match provided {
        Some(u) if !u.target_users.is_empty() => u.target_users.clone(),
        _ => DEFAULT_TARGET_USERS.iter().map(|s| s.to_string()).collect(),
    };

    SectionBlock::new(
        SectionKind::UseCases,
        format!("{} Use Cases & Applications", record.name),
        SectionBody::UseCases(UseCasesBlock { primary, target_users }),
    )
}

fn default_primary(category: &str) -> Vec<String> {
    vec![
        format!("{} automation and optimization", category),
        "Professional workflow enhancement".to_string(),
        "Content creation and management".to_string(),
        "Business process automation".to_string(),
    ]
}
