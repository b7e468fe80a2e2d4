//! HTML output via askama.
//!
//! Sections arrive in display order, so the template lays them out in a fixed
//! sequence and skips the ones that were not rendered.

use askama::Template;

use crate::review::view_models::{
    BenchmarkScore,
    CallToActionBlock,
    FaqEntry,
    FeatureCard,
    HeroBlock,
    OverviewBlock,
    PageMetadata,
    PricingCard,
    ProsConsBlock,
    RenderedPage,
    SectionBody,
    UseCasesBlock,
};

/// One rendered section as the template sees it.
struct Section<'a, T: ?Sized> {
    anchor: &'static str,
    heading: &'a str,
    body: &'a T,
}

impl<T: ?Sized> Clone for Section<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Section<'_, T> {}

#[derive(Template)]
#[template(path = "review.html")]
struct ReviewTemplate<'a> {
    meta: &'a PageMetadata,
    json_ld: Vec<String>,
    hero: Option<Section<'a, HeroBlock>>,
    overview: Option<Section<'a, OverviewBlock>>,
    features: Option<Section<'a, Vec<FeatureCard>>>,
    pricing: Option<Section<'a, Vec<PricingCard>>>,
    use_cases: Option<Section<'a, UseCasesBlock>>,
    pros_cons: Option<Section<'a, ProsConsBlock>>,
    benchmarks: Option<Section<'a, Vec<BenchmarkScore>>>,
    faq: Option<Section<'a, Vec<FaqEntry>>>,
    cta: Option<Section<'a, CallToActionBlock>>,
}

impl<'a> ReviewTemplate<'a> {
    fn from_page(page: &'a RenderedPage) -> Self {
        let mut template = Self {
            meta: &page.metadata,
            json_ld: page
                .json_ld_blocks()
                .into_iter()
                .map(|block| script_safe_json(&block.to_string()))
                .collect(),
            hero: None,
            overview: None,
            features: None,
            pricing: None,
            use_cases: None,
            pros_cons: None,
            benchmarks: None,
            faq: None,
            cta: None,
        };

        for section in &page.sections {
            let anchor = section.anchor;
            let heading = section.heading.as_str();
            match &section.body {
                SectionBody::Hero(body) => template.hero = Some(Section { anchor, heading, body }),
                SectionBody::Overview(body) => template.overview = Some(Section { anchor, heading, body }),
                SectionBody::Features(body) => template.features = Some(Section { anchor, heading, body }),
                SectionBody::Pricing(body) => template.pricing = Some(Section { anchor, heading, body }),
                SectionBody::UseCases(body) => template.use_cases = Some(Section { anchor, heading, body }),
                SectionBody::ProsCons(body) => template.pros_cons = Some(Section { anchor, heading, body }),
                SectionBody::Benchmarks(body) => template.benchmarks = Some(Section { anchor, heading, body }),
                SectionBody::Faq(body) => template.faq = Some(Section { anchor, heading, body }),
                SectionBody::CallToAction(body) => template.cta = Some(Section { anchor, heading, body }),
            }
        }

        template
    }
}

/// Keep JSON-LD from closing its `<script>` element early.
fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Full HTML5 document for one page.
    pub fn format(page: &RenderedPage) -> Result<String, askama::Error> {
        ReviewTemplate::from_page(page).render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::generator::ReviewPageRenderer;
    use crate::review::types::{Faq, PageSections, Price, PricingPlan, ProductRecord, SectionKind};

    fn record() -> ProductRecord {
        ProductRecord {
            name: "ContentStudio".to_string(),
            slug: "contentstudio".to_string(),
            category: "Social Media".to_string(),
            description: "Plan & publish <everything> in one place.".to_string(),
            website: "https://contentstudio.io".to_string(),
            rating: 4.3,
            pricing_plans: vec![
                PricingPlan {
                    plan_name: "Pro".to_string(),
                    price: Price::Amount(25.0),
                    billing_period: Some("month".to_string()),
                    features: vec!["5 workspaces".to_string()],
                },
                PricingPlan {
                    plan_name: "Enterprise".to_string(),
                    price: Price::custom(),
                    billing_period: None,
                    features: vec![],
                },
            ],
            faqs: vec![Faq {
                question: "Is {name} worth it?".to_string(),
                answer: "Yes, see </script> notes.".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_document_structure() {
        let page = ReviewPageRenderer::default().render_default(&record()).unwrap();
        let html = HtmlFormatter::format(&page).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<link rel=\"canonical\""));
        assert!(html.contains("id=\"pricing\""));
        assert!(html.find("$25").unwrap() < html.find(">Custom<").unwrap());
        assert_eq!(html.matches("application/ld+json").count(), 3);
    }

    #[test]
    fn test_share_card_tags() {
        let page = ReviewPageRenderer::default().render_default(&record()).unwrap();
        let html = HtmlFormatter::format(&page).unwrap();

        assert!(html.contains("<meta property=\"og:image\" content=\""));
        assert!(html.contains("<meta property=\"og:image:width\" content=\"1200\">"));
        assert!(html.contains("<meta property=\"og:image:height\" content=\"630\">"));
        assert!(html.contains("<meta property=\"og:locale\" content=\"en_US\">"));
        assert!(html.contains("<meta name=\"twitter:card\" content=\"summary_large_image\">"));
        assert!(html.contains("<meta name=\"twitter:image\" content=\""));
        assert!(html.contains("<meta name=\"twitter:creator\" content=\"@siteoptz\">"));
        assert!(html.contains("<meta name=\"author\" content=\"SiteOptz\">"));
        assert!(html.contains("<meta name=\"robots\" content=\"index, follow"));
        assert!(html.contains("og-image.png"));
    }

    #[test]
    fn test_text_is_escaped() {
        let page = ReviewPageRenderer::default().render_default(&record()).unwrap();
        let html = HtmlFormatter::format(&page).unwrap();

        assert!(html.contains("Plan &amp; publish &lt;everything&gt;"));
        // only the closing tags of the three JSON-LD scripts
        assert_eq!(html.matches("</script>").count(), 3);
        assert!(html.contains("<\\/script>"));
    }

    #[test]
    fn test_disabled_sections_not_emitted() {
        let sections = PageSections::all().without(SectionKind::Faq);
        let page = ReviewPageRenderer::default().render(&record(), &sections).unwrap();
        let html = HtmlFormatter::format(&page).unwrap();

        assert!(!html.contains("id=\"faq\""));
        assert!(html.contains("id=\"get-started\""));
        assert_eq!(html.matches("application/ld+json").count(), 2);
    }

    #[test]
    fn test_deterministic() {
        let renderer = ReviewPageRenderer::default();
        let a = HtmlFormatter::format(&renderer.render_default(&record()).unwrap()).unwrap();
        let b = HtmlFormatter::format(&renderer.render_default(&record()).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}
