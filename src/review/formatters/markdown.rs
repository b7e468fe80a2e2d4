//! Markdown output with YAML front-matter, for static site generators.

use crate::review::view_models::{RenderedPage, SectionBlock, SectionBody};

const SECTION_SEPARATOR: &str = "\n\n---\n\n";

pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn format(page: &RenderedPage) -> String {
        let meta = &page.metadata;
        let mut md = String::with_capacity(4096);

        md.push_str("---\n");
        push_field(&mut md, "slug", &page.slug);
        push_field(&mut md, "title", &meta.title);
        push_field(&mut md, "description", &meta.description);
        push_field(&mut md, "canonical", &meta.canonical_url);
        md.push_str("---\n\n");

        let body: Vec<String> = page.sections.iter().map(format_section).collect();
        md.push_str(&body.join(SECTION_SEPARATOR));
        md.push('\n');
        md
    }
}

/// Values are emitted as JSON strings, which YAML reads as double-quoted scalars.
fn push_field(md: &mut String, key: &str, value: &str) {
    let quoted = serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value));
    md.push_str(&format!("{}: {}\n", key, quoted));
}

fn format_section(section: &SectionBlock) -> String {
    let mut md = String::with_capacity(512);
    match &section.body {
        SectionBody::Hero(hero) => {
            md.push_str(&format!("# {}\n\n", section.heading));
            md.push_str(&format!("{}\n\n", hero.subtitle));
            md.push_str(&format!("**Rating:** {} {}\n\n", hero.stars, hero.rating_display));
            md.push_str(&format!("[{}]({})", hero.action_label, hero.action_url));
        }
        SectionBody::Overview(overview) => {
            md.push_str(&format!("## {}\n\n", section.heading));
            md.push_str(&format!("- **Category:** {}\n", overview.category));
            md.push_str(&format!("- **Developer:** {}\n", overview.developer));
            md.push_str(&format!("- **Rating:** {}\n", overview.rating_display));
            md.push_str(&format!("- **Website:** <{}>", overview.website));
            if !overview.navigation.is_empty() {
                let links: Vec<String> = overview
                    .navigation
                    .iter()
                    .map(|link| format!("[{}](#{})", link.label, link.anchor))
                    .collect();
                md.push_str(&format!("\n\n{}", links.join(" · ")));
            }
        }
        SectionBody::Features(cards) => {
            md.push_str(&format!("## {}", section.heading));
            for card in cards {
                md.push_str(&format!("\n\n### {}\n\n{}", card.title, card.description));
            }
        }
        SectionBody::Pricing(cards) => {
            md.push_str(&format!("## {}", section.heading));
            for card in cards {
                md.push_str(&format!("\n\n### {}\n\n**{}**", card.plan_name, card.price_display));
                if let Some(note) = &card.billing_note {
                    md.push_str(&format!(" ({})", note));
                }
                for feature in &card.features {
                    md.push_str(&format!("\n- {}", feature));
                }
            }
        }
        SectionBody::UseCases(block) => {
            md.push_str(&format!("## {}\n\n### Primary Use Cases\n", section.heading));
            push_list(&mut md, &block.primary);
            md.push_str("\n\n### Target Users\n");
            push_list(&mut md, &block.target_users);
        }
        SectionBody::ProsCons(block) => {
            md.push_str(&format!("## {}\n\n### Pros\n", section.heading));
            push_list(&mut md, &block.pros);
            md.push_str("\n\n### Cons\n");
            push_list(&mut md, &block.cons);
        }
        SectionBody::Benchmarks(scores) => {
            md.push_str(&format!("## {}\n\n| Metric | Score |\n| --- | --- |", section.heading));
            for score in scores {
                md.push_str(&format!("\n| {} | {} |", score.label, score.display));
            }
        }
        SectionBody::Faq(entries) => {
            md.push_str(&format!("## {}", section.heading));
            for entry in entries {
                md.push_str(&format!("\n\n### {}\n\n{}", entry.question, entry.answer));
            }
        }
        SectionBody::CallToAction(cta) => {
            md.push_str(&format!("## {}\n\n", section.heading));
            md.push_str(&format!("{}\n\n", cta.subheading));
            if !cta.tagline.is_empty() {
                md.push_str(&format!("*{}*\n\n", cta.tagline));
            }
            md.push_str(&format!("[{}]({})", cta.label, cta.url));
        }
    }
    md
}

fn push_list(md: &mut String, items: &[String]) {
    let lines: Vec<String> = items.iter().map(|item| format!("- {}", item)).collect();
    md.push_str(&lines.join("\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::generator::ReviewPageRenderer;
    use crate::review::types::{PageSections, Price, PricingPlan, ProductRecord, SectionKind};

    fn record() -> ProductRecord {
        ProductRecord {
            name: "ContentStudio".to_string(),
            slug: "contentstudio".to_string(),
            category: "Social Media".to_string(),
            description: "A \"content-first\" social media tool.".to_string(),
            website: "https://contentstudio.io".to_string(),
            rating: 4.3,
            pricing_plans: vec![PricingPlan {
                plan_name: "Pro".to_string(),
                price: Price::Amount(25.0),
                billing_period: Some("year".to_string()),
                features: vec!["5 workspaces".to_string()],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_front_matter() {
        let page = ReviewPageRenderer::default().render_default(&record()).unwrap();
        let md = MarkdownFormatter::format(&page);

        assert!(md.starts_with("---\nslug: \"contentstudio\"\ntitle: \"ContentStudio Review | SiteOptz\"\n"));
        assert!(md.contains("canonical: \"https://siteoptz.ai/reviews/contentstudio\"\n---\n\n# ContentStudio Review"));
        assert!(md.contains("\\\"content-first\\\""));
    }

    #[test]
    fn test_sections_separated() {
        let sections = PageSections::only(&[SectionKind::Hero, SectionKind::Pricing]);
        let page = ReviewPageRenderer::default().render(&record(), &sections).unwrap();
        let md = MarkdownFormatter::format(&page);

        // hero, pricing, call to action
        assert_eq!(md.matches(SECTION_SEPARATOR).count(), 2);
        assert!(md.contains("### Pro\n\n**$25/month**"));
        assert!(md.contains("- 5 workspaces"));
    }

    #[test]
    fn test_section_layout() {
        let page = ReviewPageRenderer::default().render_default(&record()).unwrap();
        let md = MarkdownFormatter::format(&page);

        assert!(md.contains("# ContentStudio Review\n\nA \"content-first\" social media tool.\n\n**Rating:** ★★★★☆ 4.3/5\n\n[Visit ContentStudio](https://contentstudio.io)"));
        assert!(md.contains("- **Category:** Social Media\n- **Developer:** ContentStudio\n"));
        assert!(md.contains("**$25/month** (Billed yearly)\n- 5 workspaces"));
        assert!(md.contains("| Metric | Score |\n| --- | --- |"));
        assert!(md.ends_with(")\n"));
    }
}
