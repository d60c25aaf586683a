//! `portfolio catalog` command handlers.
//!
//! Network commands need a full [`AppConfig`]; `inspect` reads a local file
//! and only needs the image origin, so it works without a site URL.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;
use portfolio_catalog::browse::{self, CardView, Page};
use portfolio_catalog::{parse_catalog, CatalogClient, CatalogEntry};
use portfolio_core::config::DEFAULT_IMAGE_ORIGIN;
use portfolio_core::{AppConfig, ConfigError};

#[derive(Debug, Subcommand)]
pub(crate) enum CatalogCommands {
    /// Fetch the catalog from the site and print every entry
    Fetch {
        /// Print entries as JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Search titles and summaries and print one page of matches
    Search {
        term: String,
        /// 1-based page number; out-of-range pages are clamped
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Print the first entries, as shown on the landing page
    Featured {
        #[arg(long, default_value_t = 4)]
        limit: usize,
    },
    /// Parse a local catalog file with the same pipeline (no network)
    Inspect {
        file: PathBuf,
        #[arg(long)]
        json: bool,
        /// Origin used to absolutize site-relative image paths
        #[arg(long, env = "PORTFOLIO_IMAGE_ORIGIN", default_value = DEFAULT_IMAGE_ORIGIN)]
        image_origin: String,
    },
}

pub(crate) async fn run(
    command: CatalogCommands,
    config: Result<AppConfig, ConfigError>,
) -> anyhow::Result<()> {
    match command {
        CatalogCommands::Fetch { json } => {
            let config = require_config(config)?;
            let entries = fetch(&config).await?;
            print_entries(&entries, json)
        }
        CatalogCommands::Search { term, page } => {
            let config = require_config(config)?;
            let entries = fetch(&config).await?;
            let hits = browse::search(&entries, &term);
            let page = browse::paginate(&hits, page, config.page_size);
            print_search_page(&term, &page);
            Ok(())
        }
        CatalogCommands::Featured { limit } => {
            let config = require_config(config)?;
            let entries = fetch(&config).await?;
            for entry in browse::featured(&entries, limit) {
                print_card(&CardView::from(entry));
            }
            Ok(())
        }
        CatalogCommands::Inspect {
            file,
            json,
            image_origin,
        } => {
            let entries = inspect(&file, &image_origin)?;
            print_entries(&entries, json)
        }
    }
}

fn require_config(config: Result<AppConfig, ConfigError>) -> anyhow::Result<AppConfig> {
    let config = config.context("failed to load configuration")?;
    tracing::debug!(env = %config.env, site_url = %config.site_url, "configuration loaded");
    Ok(config)
}

async fn fetch(config: &AppConfig) -> anyhow::Result<Vec<CatalogEntry>> {
    let client = CatalogClient::from_config(config).context("failed to build catalog client")?;
    client
        .load()
        .await
        .with_context(|| format!("failed to load catalog from {}", client.catalog_url()))
}

fn inspect(file: &Path, image_origin: &str) -> anyhow::Result<Vec<CatalogEntry>> {
    let bytes =
        std::fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    let entries = parse_catalog(&bytes, image_origin.trim_end_matches('/'))
        .with_context(|| format!("failed to parse {}", file.display()))?;
    tracing::info!(file = %file.display(), entries = entries.len(), "catalog file parsed");
    Ok(entries)
}

fn print_entries(entries: &[CatalogEntry], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }
    if entries.is_empty() {
        println!("catalog is empty");
        return Ok(());
    }
    for entry in entries {
        print_card(&CardView::from(entry));
    }
    println!("{} entries", entries.len());
    Ok(())
}

fn print_search_page(term: &str, page: &Page<'_, &CatalogEntry>) {
    if page.total_items == 0 {
        println!("no entries match \"{term}\"");
        return;
    }
    for entry in page.items {
        print_card(&CardView::from(*entry));
    }
    println!(
        "page {} of {} ({} matches)",
        page.number, page.total_pages, page.total_items
    );
    println!("pages: {}", format_window(page.number, page.total_pages));
}

fn print_card(card: &CardView) {
    println!("[{}] {} | {}", card.id, card.title, card.price);
    if !card.summary.is_empty() {
        println!("    {}", card.summary);
    }
    println!("    cover: {}", card.cover_url);
}

/// Page links with the current page bracketed, e.g. `1 [2] 3 4 5`.
fn format_window(current: usize, total: usize) -> String {
    browse::page_window(current, total)
        .into_iter()
        .map(|n| {
            if n == current {
                format!("[{n}]")
            } else {
                n.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
