//! Input data types for review page generation.
//!
//! Data sources:
//! - Product records: catalog JSON (camelCase keys), one record per reviewed product
//! - Section selection: `PageSections`, chosen by the caller per render

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One reviewed software product.
///
/// Immutable for the duration of a render. `benchmarks` keeps the key order of
/// the source document so that rendering never depends on hash order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    pub slug: String,
    pub category: String,
    pub description: String,
    pub website: String,
    pub rating: f64,
    /// Stored review count. Absent means "unknown", never "make one up".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub pricing_plans: Vec<PricingPlan>,
    #[serde(default)]
    pub pros_and_cons: ProsAndCons,
    #[serde(default)]
    pub benchmarks: IndexMap<String, u8>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_cases: Option<UseCases>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub plan_name: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_period: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Plan price: a number of dollars per month, or the literal `"Custom"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Label(String),
}

impl Price {
    pub const CUSTOM: &'static str = "Custom";

    pub fn custom() -> Self {
        Price::Label(Self::CUSTOM.to_string())
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            Price::Amount(n) => Some(*n),
            Price::Label(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProsAndCons {
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

/// FAQ entry. Question and answer may contain `{name}` / `{category}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCases {
    #[serde(default)]
    pub primary: Vec<String>,
    #[serde(default)]
    pub target_users: Vec<String>,
}

// ============================================================================
// Sections
// ============================================================================

/// Section kinds in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionKind {
    Hero,
    Overview,
    Features,
    Pricing,
    UseCases,
    ProsCons,
    Benchmarks,
    #[serde(rename = "FAQ")]
    Faq,
    CallToAction,
}

impl SectionKind {
    pub const ALL: [SectionKind; 9] = [
        SectionKind::Hero,
        SectionKind::Overview,
        SectionKind::Features,
        SectionKind::Pricing,
        SectionKind::UseCases,
        SectionKind::ProsCons,
        SectionKind::Benchmarks,
        SectionKind::Faq,
        SectionKind::CallToAction,
    ];

    /// HTML anchor id (`#pricing`, `#pros-cons`, ...)
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Overview => "overview",
            SectionKind::Features => "features",
            SectionKind::Pricing => "pricing",
            SectionKind::UseCases => "use-cases",
            SectionKind::ProsCons => "pros-cons",
            SectionKind::Benchmarks => "benchmarks",
            SectionKind::Faq => "faq",
            SectionKind::CallToAction => "get-started",
        }
    }

    /// Label used in the overview navigation.
    pub fn nav_label(&self) -> &'static str {
        match self {
            SectionKind::Hero => "Top",
            SectionKind::Overview => "Quick Overview",
            SectionKind::Features => "Key Features",
            SectionKind::Pricing => "Pricing Plans",
            SectionKind::UseCases => "Use Cases",
            SectionKind::ProsCons => "Pros & Cons",
            SectionKind::Benchmarks => "Performance Benchmarks",
            SectionKind::Faq => "FAQ",
            SectionKind::CallToAction => "Get Started",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionKind::Hero => "hero",
            SectionKind::Overview => "overview",
            SectionKind::Features => "features",
            SectionKind::Pricing => "pricing",
            SectionKind::UseCases => "use_cases",
            SectionKind::ProsCons => "pros_cons",
            SectionKind::Benchmarks => "benchmarks",
            SectionKind::Faq => "faq",
            SectionKind::CallToAction => "call_to_action",
        };
        f.write_str(name)
    }
}

impl FromStr for SectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "hero" => Ok(SectionKind::Hero),
            "overview" => Ok(SectionKind::Overview),
            "features" => Ok(SectionKind::Features),
            "pricing" => Ok(SectionKind::Pricing),
            "use_cases" | "usecases" => Ok(SectionKind::UseCases),
            "pros_cons" | "proscons" => Ok(SectionKind::ProsCons),
            "benchmarks" => Ok(SectionKind::Benchmarks),
            "faq" | "faqs" => Ok(SectionKind::Faq),
            "call_to_action" | "cta" => Ok(SectionKind::CallToAction),
            _ => Err(format!("unknown section '{}'", s)),
        }
    }
}

/// Which sections a render includes. Default: all of them.
///
/// The call-to-action block cannot be switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSections {
    enabled: [bool; 9],
}

impl PageSections {
    pub fn all() -> Self {
        Self { enabled: [true; 9] }
    }

    /// Only the listed sections (plus the call to action).
    pub fn only(kinds: &[SectionKind]) -> Self {
        let mut sections = Self { enabled: [false; 9] };
        for kind in kinds {
            sections.enabled[*kind as usize] = true;
        }
        sections
    }

    pub fn without(mut self, kind: SectionKind) -> Self {
        self.enabled[kind as usize] = false;
        self
    }

    pub fn with(mut self, kind: SectionKind) -> Self {
        self.enabled[kind as usize] = true;
        self
    }

    pub fn is_enabled(&self, kind: SectionKind) -> bool {
        kind == SectionKind::CallToAction || self.enabled[kind as usize]
    }

    /// Enabled sections in display order.
    pub fn iter(&self) -> impl Iterator<Item = SectionKind> + '_ {
        SectionKind::ALL.into_iter().filter(move |k| self.is_enabled(*k))
    }
}

impl Default for PageSections {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_camel_case_record() {
        let value = json!({
            "name": "ContentStudio",
            "slug": "contentstudio",
            "category": "Social Media",
            "description": "Content marketing-focused social media tool.",
            "website": "https://contentstudio.io",
            "rating": 4.3,
            "reviewCount": 100,
            "pricingPlans": [
                {"planName": "Pro", "price": 25, "billingPeriod": "month", "features": ["Scheduling"]},
                {"planName": "Enterprise", "price": "Custom"}
            ],
            "prosAndCons": {"pros": ["Fast"], "cons": ["No free tier"]},
            "benchmarks": {"speed": 8, "ease_of_use": 8, "accuracy": 7},
            "published": "2025-09-02"
        });

        let record: ProductRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.review_count, Some(100));
        assert_eq!(record.pricing_plans[0].price, Price::Amount(25.0));
        assert_eq!(record.pricing_plans[1].price, Price::custom());
        assert_eq!(record.pricing_plans[1].billing_period, None);
        assert_eq!(record.published, NaiveDate::from_ymd_opt(2025, 9, 2));

        // Source order is preserved, not sorted
        let keys: Vec<&str> = record.benchmarks.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["speed", "ease_of_use", "accuracy"]);
    }

    #[test]
    fn test_missing_plan_name_is_rejected_at_parse() {
        let value = json!({"price": 25});
        assert!(serde_json::from_value::<PricingPlan>(value).is_err());
    }

    #[test]
    fn test_page_sections_toggle() {
        let sections = PageSections::all().without(SectionKind::Benchmarks);
        assert!(!sections.is_enabled(SectionKind::Benchmarks));
        assert!(sections.is_enabled(SectionKind::Pricing));
        assert_eq!(sections.iter().count(), 8);
    }

    #[test]
    fn test_call_to_action_cannot_be_disabled() {
        let sections = PageSections::only(&[SectionKind::Hero]).without(SectionKind::CallToAction);
        let kinds: Vec<SectionKind> = sections.iter().collect();
        assert_eq!(kinds, vec![SectionKind::Hero, SectionKind::CallToAction]);
    }

    #[test]
    fn test_section_kind_from_str() {
        assert_eq!("pros-cons".parse::<SectionKind>(), Ok(SectionKind::ProsCons));
        assert_eq!("FAQ".parse::<SectionKind>(), Ok(SectionKind::Faq));
        assert_eq!("use cases".parse::<SectionKind>(), Ok(SectionKind::UseCases));
        assert!("sidebar".parse::<SectionKind>().is_err());
    }
}
