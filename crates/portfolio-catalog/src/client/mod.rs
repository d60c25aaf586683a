//! HTTP client that loads the published catalog document.

mod url;

use std::time::Duration;

use portfolio_core::{AppConfig, CatalogEntry, LoadState};
use reqwest::{Client, Url};
use tokio::sync::watch;

use crate::error::CatalogError;
use crate::normalize::parse_catalog;

pub use url::{catalog_url, with_cache_buster, CACHE_BUSTER_PARAM};

/// Loads `books.csv` (or the configured path) from the site and normalizes it.
///
/// Every call re-fetches the document with a fresh cache-busting timestamp;
/// nothing is cached between loads. Errors are terminal for the load: there
/// are no retries and no partial results.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    catalog_url: Url,
    image_origin: String,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with the given timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidSiteUrl`] if the catalog URL cannot be built.
    /// - [`CatalogError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed (e.g., invalid TLS config).
    pub fn new(
        site_url: &str,
        catalog_path: &str,
        image_origin: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let catalog_url = catalog_url(site_url, catalog_path)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            catalog_url,
            image_origin: image_origin.trim_end_matches('/').to_owned(),
        })
    }

    /// Builds a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`CatalogClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        Self::new(
            &config.site_url,
            &config.catalog_path,
            &config.image_origin,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Catalog location without the cache-busting parameter.
    #[must_use]
    pub fn catalog_url(&self) -> &Url {
        &self.catalog_url
    }

    /// Fetches the raw catalog document.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`]: HTTP 404, the document is not at the expected path.
    /// - [`CatalogError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`CatalogError::Http`]: network or TLS failure.
    pub async fn fetch_document(&self) -> Result<Vec<u8>, CatalogError> {
        let stamp = chrono::Utc::now().timestamp_millis();
        let request_url = with_cache_buster(&self.catalog_url, stamp);
        let url = self.catalog_url.to_string();

        tracing::debug!(url = %request_url, "fetching catalog document");

        let response = self
            .client
            .get(request_url)
            .header(
                reqwest::header::ACCEPT,
                "text/csv,text/plain;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound { url });
        }

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }

    /// Fetches, parses and normalizes the catalog.
    ///
    /// An empty catalog is a successful result.
    ///
    /// # Errors
    ///
    /// Any error from [`CatalogClient::fetch_document`] or
    /// [`parse_catalog`]; see [`CatalogError::kind`] to tell them apart.
    pub async fn load(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        let body = self.fetch_document().await?;
        let entries = parse_catalog(&body, &self.image_origin)?;

        if entries.is_empty() {
            tracing::warn!(
                url = %self.catalog_url,
                "catalog document was read but produced no entries"
            );
        } else {
            tracing::info!(
                url = %self.catalog_url,
                entries = entries.len(),
                "catalog loaded"
            );
        }

        Ok(entries)
    }

    /// Starts a load in the background and returns a receiver that observes
    /// it: [`LoadState::Pending`] first, then exactly one terminal state.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<LoadState> {
        let (tx, rx) = watch::channel(LoadState::Pending);
        let client = self.clone();
        tokio::spawn(async move {
            let result = client.load().await;
            if let Err(e) = &result {
                tracing::error!(error = %e, kind = ?e.kind(), "catalog load failed");
            }
            tx.send_replace(LoadState::from(result));
        });
        rx
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
