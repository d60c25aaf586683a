//! Catalog URL construction for the loader client.

use reqwest::Url;

use crate::error::CatalogError;

/// Query parameter carrying the cache-busting timestamp.
pub const CACHE_BUSTER_PARAM: &str = "t";

/// Resolves `catalog_path` against the site root.
///
/// `site_url` is normalised to end with exactly one slash first, so a site
/// hosted under a sub-path (`https://host/livros`) keeps that prefix.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidSiteUrl`] if `site_url` is not an absolute
/// URL or the joined path cannot be parsed.
pub fn catalog_url(site_url: &str, catalog_path: &str) -> Result<Url, CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidSiteUrl {
        site_url: site_url.to_owned(),
        reason,
    };

    let normalised = format!("{}/", site_url.trim_end_matches('/'));
    let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
    if base.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_owned()));
    }

    base.join(catalog_path.trim_start_matches('/'))
        .map_err(|e| invalid(format!("cannot join \"{catalog_path}\": {e}")))
}

/// Appends the cache-busting parameter so intermediate caches never serve a
/// stale catalog.
#[must_use]
pub fn with_cache_buster(url: &Url, stamp_millis: i64) -> Url {
    let mut url = url.clone();
    url.query_pairs_mut()
        .append_pair(CACHE_BUSTER_PARAM, &stamp_millis.to_string());
    url
}
