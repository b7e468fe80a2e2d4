//! S7: Performance Benchmarks
//!
//! Each metric renders as "{score}/10". Labels come from the key alone
//! (`ease_of_use` -> "Ease Of Use"), so any metric set works.

use crate::review::types::{ProductRecord, SectionKind};
use crate::review::utils::format_metric_label;
use crate::review::view_models::{BenchmarkScore, SectionBlock, SectionBody};

pub fn generate(record: &ProductRecord) -> SectionBlock {
    let scores = record
        .benchmarks
        .iter()
        .map(|(metric, score)| BenchmarkScore {
            metric: metric.clone(),
            label: format_metric_label(metric),
            score: *score,
            display: format!("{}/10", score),
        })
        .collect();

    SectionBlock::new(
        SectionKind::Benchmarks,
        format!("{} Performance Benchmarks", record.name),
        SectionBody::Benchmarks(scores),
    )
}
