//! Page metadata: head tags and JSON-LD.
//!
//! Structured data blocks:
//! - `Review` of a `SoftwareApplication` (ratingValue echoes the record rating verbatim)
//! - `BreadcrumbList`: Home > {category} > Reviews > {name} Review
//! - `FAQPage` from the already-substituted FAQ entries

use chrono::Datelike;
use serde_json::{json, Map, Value};

use crate::config::SiteConfig;
use crate::review::types::{PageSections, ProductRecord, SectionKind};
use crate::review::utils::{format_amount, truncate_chars};
use crate::review::view_models::{FaqEntry, OpenGraph, PageMetadata, TwitterCard};

pub const MAX_DESCRIPTION_CHARS: usize = 160;

pub fn generate(
    record: &ProductRecord,
    site: &SiteConfig,
    sections: &PageSections,
    faqs: &[FaqEntry],
) -> PageMetadata {
    let title = page_title(record, site);
    let description = meta_description(record);
    let canonical_url = canonical_url(record, site);
    let image = site.og_image_url();

    let open_graph = OpenGraph {
        title: title.clone(),
        description: description.clone(),
        og_type: "article".to_string(),
        url: canonical_url.clone(),
        site_name: site.site_name.clone(),
        image: image.clone(),
        image_width: site.social.image_width,
        image_height: site.social.image_height,
        locale: site.social.locale.clone(),
    };

    let twitter = TwitterCard {
        card: "summary_large_image".to_string(),
        title: title.clone(),
        description: description.clone(),
        image,
        creator: site.social.twitter_handle.clone(),
    };

    let faq_schema = if sections.is_enabled(SectionKind::Faq) && !faqs.is_empty() {
        Some(faq_page_schema(faqs))
    } else {
        None
    };

    PageMetadata {
        keywords: keywords(record),
        author: site.organization.clone(),
        robots: site.social.robots.clone(),
        structured_data: review_schema(record, site),
        breadcrumb: breadcrumb_schema(record, site, &canonical_url),
        title,
        description,
        canonical_url,
        open_graph,
        twitter,
        faq_schema,
    }
}

/// "{name} Review [{year}] | {site}" when the publish date is known.
fn page_title(record: &ProductRecord, site: &SiteConfig) -> String {
    match record.published {
        Some(date) => format!("{} Review [{}] | {}", record.name, date.year(), site.site_name),
        None => format!("{} Review | {}", record.name, site.site_name),
    }
}

fn meta_description(record: &ProductRecord) -> String {
    let full = format!(
        "{} review. {} Features, pricing & alternatives.",
        record.name,
        record.description.trim()
    );
    if full.chars().count() <= MAX_DESCRIPTION_CHARS {
        return full;
    }

    let short = format!(
        "{} review: features, pricing, pros & cons. Expert analysis & comparison guide.",
        record.name
    );
    truncate_chars(&short, MAX_DESCRIPTION_CHARS)
}

fn keywords(record: &ProductRecord) -> String {
    let name = record.name.to_lowercase();
    format!(
        "{name} review, {name} pricing, {name} features, {name} alternatives, best {} tools",
        record.category.to_lowercase()
    )
}

pub fn canonical_url(record: &ProductRecord, site: &SiteConfig) -> String {
    site.absolute_url(&format!("reviews/{}", record.slug))
}

fn review_schema(record: &ProductRecord, site: &SiteConfig) -> Value {
    let mut app = Map::new();
    app.insert("@type".into(), json!("SoftwareApplication"));
    app.insert("name".into(), json!(record.name));
    app.insert("description".into(), json!(record.description));
    app.insert("applicationCategory".into(), json!(record.category));
    app.insert(
        "operatingSystem".into(),
        json!(record.operating_system.as_deref().unwrap_or("Web")),
    );
    app.insert("url".into(), json!(record.website));

    let lowest_price = record
        .pricing_plans
        .iter()
        .filter_map(|p| p.price.amount())
        .fold(None, |min: Option<f64>, p| Some(min.map_or(p, |m| m.min(p))));
    if let Some(price) = lowest_price {
        app.insert(
            "offers".into(),
            json!({
                "@type": "Offer",
                "price": format_amount(price),
                "priceCurrency": "USD"
            }),
        );
    }

    if let Some(count) = record.review_count {
        app.insert(
            "aggregateRating".into(),
            json!({
                "@type": "AggregateRating",
                "ratingValue": record.rating,
                "reviewCount": count,
                "bestRating": 5,
                "worstRating": 1
            }),
        );
    }

    let mut review = Map::new();
    review.insert("@context".into(), json!("https://schema.org"));
    review.insert("@type".into(), json!("Review"));
    review.insert("itemReviewed".into(), Value::Object(app));
    review.insert(
        "author".into(),
        json!({
            "@type": "Organization",
            "name": site.organization,
            "url": site.base_url
        }),
    );
    review.insert(
        "reviewRating".into(),
        json!({
            "@type": "Rating",
            "ratingValue": record.rating,
            "bestRating": 5,
            "worstRating": 1
        }),
    );
    if let Some(date) = record.published {
        review.insert("datePublished".into(), json!(date.format("%Y-%m-%d").to_string()));
    }

    Value::Object(review)
}

fn breadcrumb_schema(record: &ProductRecord, site: &SiteConfig, canonical_url: &str) -> Value {
    let category_page = site.absolute_url(&format!(
        "tools/?category={}",
        urlencoding::encode(&record.category)
    ));

    let crumbs = [
        ("Home".to_string(), site.base_url.clone()),
        (record.category.clone(), category_page),
        ("Reviews".to_string(), site.absolute_url("reviews")),
        (format!("{} Review", record.name), canonical_url.to_string()),
    ];

    let items: Vec<Value> = crumbs
        .into_iter()
        .enumerate()
        .map(|(i, (name, item))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": name,
                "item": item
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items
    })
}

fn faq_page_schema(faqs: &[FaqEntry]) -> Value {
    let questions: Vec<Value> = faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer
                }
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions
    })
}
