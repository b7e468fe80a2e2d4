//! View Models for Review Pages
//!
//! Output types of a render. Every string here is final display text; the
//! formatters only lay it out.

use serde::Serialize;
use serde_json::Value;

use crate::review::types::SectionKind;

/// Result of one render: metadata for the document head plus ordered body sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPage {
    pub slug: String,
    pub metadata: PageMetadata,
    pub sections: Vec<SectionBlock>,
}

impl RenderedPage {
    pub fn section(&self, kind: SectionKind) -> Option<&SectionBlock> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }

    /// Pricing cards in display order (empty when the section is off).
    pub fn pricing_cards(&self) -> &[PricingCard] {
        match self.section(SectionKind::Pricing).map(|s| &s.body) {
            Some(SectionBody::Pricing(cards)) => cards.as_slice(),
            _ => &[],
        }
    }

    /// JSON-LD blocks in the order they go into the document head.
    pub fn json_ld_blocks(&self) -> Vec<&Value> {
        let mut blocks = vec![&self.metadata.structured_data, &self.metadata.breadcrumb];
        if let Some(faq) = &self.metadata.faq_schema {
            blocks.push(faq);
        }
        blocks
    }
}

// ============================================================================
// Metadata
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    /// At most 160 characters
    pub description: String,
    pub keywords: String,
    pub author: String,
    pub robots: String,
    pub canonical_url: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    /// schema.org `Review` with a `SoftwareApplication` as `itemReviewed`
    pub structured_data: Value,
    /// schema.org `BreadcrumbList`
    pub breadcrumb: Value,
    /// schema.org `FAQPage`, only when FAQs are rendered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq_schema: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub og_type: String,
    pub url: String,
    pub site_name: String,
    pub image: String,
    pub image_width: u32,
    pub image_height: u32,
    pub locale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub creator: String,
}

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBlock {
    pub kind: SectionKind,
    pub anchor: &'static str,
    pub heading: String,
    pub body: SectionBody,
}

impl SectionBlock {
    pub fn new(kind: SectionKind, heading: String, body: SectionBody) -> Self {
        Self {
            kind,
            anchor: kind.anchor(),
            heading,
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionBody {
    Hero(HeroBlock),
    Overview(OverviewBlock),
    Features(Vec<FeatureCard>),
    Pricing(Vec<PricingCard>),
    UseCases(UseCasesBlock),
    ProsCons(ProsConsBlock),
    Benchmarks(Vec<BenchmarkScore>),
    Faq(Vec<FaqEntry>),
    CallToAction(CallToActionBlock),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroBlock {
    pub title: String,
    pub subtitle: String,
    pub rating: f64,
    pub rating_display: String, // "4.3/5"
    pub stars: String,          // "★★★★☆"
    pub action_url: String,
    pub action_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewBlock {
    pub category: String,
    pub developer: String,
    pub rating_display: String, // "4.3/5 (100 reviews)"
    pub website: String,
    pub navigation: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingCard {
    pub plan_name: String,
    pub price_display: String, // "$25/month" or "Custom"
    pub billing_note: Option<String>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UseCasesBlock {
    pub primary: Vec<String>,
    pub target_users: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProsConsBlock {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkScore {
    pub metric: String,
    pub label: String,
    pub score: u8,
    pub display: String, // "8/10"
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallToActionBlock {
    pub heading: String,
    pub subheading: String,
    pub tagline: String,
    pub url: String,
    pub label: String,
}
