//! Generate Static Review Pages
//!
//! Renders every record in a product catalog to `<out>/reviews/<slug>/index.<ext>`.
//! Run with: cargo run --bin generate_review_pages -- --catalog data/sample_catalog.json

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use review_page_renderer::{
    HtmlFormatter, JsonFormatter, MarkdownFormatter, PageSections, ProductCatalog, RenderedPage,
    ReviewPageRenderer, SectionKind, SiteConfig,
};

/// Render review pages for every product in a catalog.
#[derive(Parser, Debug)]
#[command(name = "generate_review_pages", version, about)]
struct Cli {
    /// Catalog JSON (array of records or {"products": [...]}).
    #[arg(long, env = "CATALOG_PATH", default_value = "data/sample_catalog.json")]
    catalog: PathBuf,

    /// Output root; pages land in <out-dir>/reviews/<slug>/.
    #[arg(long, default_value = "dist")]
    out_dir: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value = "html")]
    format: OutputFormat,

    /// Sections to leave out, comma separated (e.g. benchmarks,use-cases).
    #[arg(long, value_delimiter = ',')]
    skip: Vec<SectionKind>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Html,
    Markdown,
    Json,
}

impl OutputFormat {
    fn file_name(self) -> &'static str {
        match self {
            OutputFormat::Html => "index.html",
            OutputFormat::Markdown => "index.md",
            OutputFormat::Json => "index.json",
        }
    }

    fn render(self, page: &RenderedPage) -> anyhow::Result<String> {
        Ok(match self {
            OutputFormat::Html => HtmlFormatter::format(page)?,
            OutputFormat::Markdown => MarkdownFormatter::format(page),
            OutputFormat::Json => JsonFormatter::format(page)?,
        })
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "review_page_renderer=info,generate_review_pages=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let start = Instant::now();

    let catalog = ProductCatalog::from_json_file(&cli.catalog)
        .with_context(|| format!("loading catalog {}", cli.catalog.display()))?;

    let sections = cli
        .skip
        .iter()
        .fold(PageSections::all(), |sections, kind| sections.without(*kind));
    if cli.skip.contains(&SectionKind::CallToAction) {
        tracing::warn!("The call to action section is always rendered; ignoring --skip for it");
    }

    let renderer = ReviewPageRenderer::new(SiteConfig::from_env());
    let results = renderer.render_batch(catalog.records(), &sections);

    let mut written = 0usize;
    let mut failed = 0usize;
    for (record, result) in catalog.records().iter().zip(results) {
        let outcome = result
            .map_err(anyhow::Error::from)
            .and_then(|page| write_page(&cli.out_dir, cli.format, &page));
        match outcome {
            Ok(path) => {
                tracing::info!("Wrote {}", path.display());
                written += 1;
            }
            Err(e) => {
                tracing::error!("Failed to generate {}: {:#}", record.slug, e);
                failed += 1;
            }
        }
    }

    tracing::info!(
        "Generated {} pages ({} failed) in {:.2?}",
        written,
        failed,
        start.elapsed()
    );

    Ok(if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn write_page(out_dir: &Path, format: OutputFormat, page: &RenderedPage) -> anyhow::Result<PathBuf> {
    let dir = out_dir.join("reviews").join(&page.slug);
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let path = dir.join(format.file_name());
    let contents = format.render(page)?;
    fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
