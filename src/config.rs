//! Site and server configuration.
//!
//! Both are environment-driven with defaults suitable for local development.
//! The renderer receives a `SiteConfig` by value at construction and never
//! reads the environment itself.

use std::path::PathBuf;

/// Publisher-level settings baked into every rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Appended to page titles: "ContentStudio Review | SiteOptz"
    pub site_name: String,
    /// Absolute origin without trailing slash, e.g. "https://siteoptz.ai"
    pub base_url: String,
    /// Review author in JSON-LD and the `author` meta tag
    pub organization: String,
    pub social: SocialCard,
    pub cta: CtaCopy,
}

/// Share-card settings for Open Graph and Twitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialCard {
    /// Absolute URL, or a site path resolved against `base_url`
    pub image: String,
    pub image_width: u32,
    pub image_height: u32,
    /// Open Graph locale, e.g. `en_US`
    pub locale: String,
    /// `twitter:creator`, including the `@`
    pub twitter_handle: String,
    pub robots: String,
}

impl Default for SocialCard {
    fn default() -> Self {
        Self {
            image: "/og-image.png".to_string(),
            image_width: 1200,
            image_height: 630,
            locale: "en_US".to_string(),
            twitter_handle: "@siteoptz".to_string(),
            robots: "index, follow, max-snippet:-1, max-image-preview:large, max-video-preview:-1".to_string(),
        }
    }
}

/// Call-to-action copy. `button_label` may use `{name}` / `{category}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaCopy {
    pub heading: String,
    pub subheading: String,
    pub tagline: String,
    pub button_label: String,
}

impl Default for CtaCopy {
    fn default() -> Self {
        Self {
            heading: "Work Directly With Experts Who've Helped Businesses Scale With AI".to_string(),
            subheading: "Not Another Demo. A Real Strategy Session For Your Business.".to_string(),
            tagline: "Get Your Custom AI Roadmap in 30 Minutes".to_string(),
            button_label: "Visit {name} →".to_string(),
        }
    }
}

impl CtaCopy {
    /// Plain product-link variant without the consultation pitch.
    pub fn visit_only() -> Self {
        Self {
            heading: "Ready to Try {name}?".to_string(),
            subheading: "See how {name} fits your {category} workflow.".to_string(),
            tagline: String::new(),
            button_label: "Visit {name} →".to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "SiteOptz".to_string(),
            base_url: "https://siteoptz.ai".to_string(),
            organization: "SiteOptz".to_string(),
            social: SocialCard::default(),
            cta: CtaCopy::default(),
        }
    }
}

impl SiteConfig {
    /// Read `SITE_NAME`, `SITE_URL`, `SITE_ORGANIZATION`, `SITE_OG_IMAGE`,
    /// `SITE_LOCALE`, `SITE_TWITTER_HANDLE` and `CTA_VARIANT`
    /// (`consultation` | `visit`), falling back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let site_name = std::env::var("SITE_NAME").unwrap_or(defaults.site_name);
        let organization = std::env::var("SITE_ORGANIZATION").unwrap_or_else(|_| site_name.clone());
        let cta = match std::env::var("CTA_VARIANT").as_deref() {
            Ok("visit") => CtaCopy::visit_only(),
            _ => defaults.cta,
        };

        let mut social = defaults.social;
        if let Ok(image) = std::env::var("SITE_OG_IMAGE") {
            social.image = image;
        }
        if let Ok(locale) = std::env::var("SITE_LOCALE") {
            social.locale = locale;
        }
        if let Ok(handle) = std::env::var("SITE_TWITTER_HANDLE") {
            social.twitter_handle = handle;
        }

        Self {
            site_name,
            base_url: std::env::var("SITE_URL")
                .map(|u| normalize_base_url(&u))
                .unwrap_or(defaults.base_url),
            organization,
            social,
            cta,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }

    /// Share image as an absolute URL.
    pub fn og_image_url(&self) -> String {
        let image = self.social.image.trim();
        if image.starts_with("https://") || image.starts_with("http://") {
            image.to_string()
        } else {
            self.absolute_url(image)
        }
    }

    /// `{base_url}/{path}` with exactly one slash between.
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Page host settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub catalog_path: PathBuf,
    pub port: u16,
}

impl ServerConfig {
    pub const DEFAULT_CATALOG: &'static str = "data/sample_catalog.json";
    pub const DEFAULT_PORT: u16 = 3000;

    /// Read `CATALOG_PATH` and `PORT`.
    pub fn from_env() -> Self {
        let catalog_path = std::env::var("CATALOG_PATH")
            .unwrap_or_else(|_| Self::DEFAULT_CATALOG.to_string())
            .into();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(Self::DEFAULT_PORT);

        Self { catalog_path, port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url() {
        let site = SiteConfig::default().with_base_url("https://example.com/");
        assert_eq!(site.absolute_url("/reviews/notion-ai"), "https://example.com/reviews/notion-ai");
        assert_eq!(site.absolute_url("reviews"), "https://example.com/reviews");
    }

    #[test]
    fn test_og_image_resolution() {
        let mut site = SiteConfig::default().with_base_url("https://example.com");
        assert_eq!(site.og_image_url(), "https://example.com/og-image.png");

        site.social.image = "https://cdn.example.com/card.png".to_string();
        assert_eq!(site.og_image_url(), "https://cdn.example.com/card.png");
    }

    #[test]
    fn test_default_cta_uses_name_placeholder() {
        assert!(CtaCopy::default().button_label.contains("{name}"));
    }
}
