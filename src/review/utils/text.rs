//! Text helpers shared by the section builders and metadata.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Matches the two supported FAQ placeholders.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(name|category)\}").expect("valid regex"));

/// Values substituted into `{name}` / `{category}` placeholders.
#[derive(Debug, Clone, Copy)]
pub struct Placeholders<'a> {
    pub name: &'a str,
    pub category: &'a str,
}

/// Single-pass placeholder substitution.
///
/// Substituted values are never re-scanned, so a product called `{category}`
/// stays literal. Unknown `{...}` tokens are left as written.
pub fn substitute_placeholders(template: &str, values: &Placeholders<'_>) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| match &caps[1] {
            "name" => values.name.to_string(),
            _ => values.category.to_string(),
        })
        .into_owned()
}

/// Display label for a benchmark key: `ease_of_use` -> `Ease Of Use`.
pub fn format_metric_label(key: &str) -> String {
    key.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
    }
}

/// Shortest decimal form of a price: `25.0` -> `25`, `9.99` -> `9.99`.
/// Negative zero prints as `0`.
pub fn format_amount(amount: f64) -> String {
    let amount = if amount == 0.0 { 0.0 } else { amount };
    format!("{}", amount)
}

/// Rating with one decimal place: `4.0` -> `4.0`.
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

/// Filled stars for the whole part of the rating, hollow for the rest of five.
pub fn star_string(rating: f64) -> String {
    let filled = rating.floor().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Truncate to at most `max_chars` characters, ending with `…` when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(1);
    let mut out: String = text.chars().take(keep).collect();
    out.truncate(out.trim_end().len());
    out.push('…');
    out
}

/// `[a-z0-9]` words joined by single hyphens.
pub fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .split('-')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()))
}
