//! Review page section builders.
//!
//! One module per `SectionKind`, numbered in display order. Each exposes a
//! `generate(...) -> SectionBlock` that reads only its arguments.

pub mod s1_hero;
pub mod s2_overview;
pub mod s3_features;
pub mod s4_pricing;
pub mod s5_use_cases;
pub mod s6_pros_cons;
pub mod s7_benchmarks;
pub mod s8_faq;
pub mod s9_call_to_action;
