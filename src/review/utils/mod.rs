//! Utility modules for review page generation.

pub mod text;

pub use text::*;
