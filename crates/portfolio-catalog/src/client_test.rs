use super::*;

#[test]
fn catalog_url_joins_path_to_site_root() {
    let url = catalog_url("https://jdreditora.com.br", "books.csv").unwrap();
    assert_eq!(url.as_str(), "https://jdreditora.com.br/books.csv");
}

#[test]
fn catalog_url_strips_trailing_slash_and_leading_path_slash() {
    let url = catalog_url("https://jdreditora.com.br/", "/books.csv").unwrap();
    assert_eq!(url.as_str(), "https://jdreditora.com.br/books.csv");
}

#[test]
fn catalog_url_keeps_site_sub_path() {
    let url = catalog_url("https://example.com/autor", "data/books.csv").unwrap();
    assert_eq!(url.as_str(), "https://example.com/autor/data/books.csv");
}

#[test]
fn catalog_url_rejects_relative_site_url() {
    let err = catalog_url("jdreditora.com.br", "books.csv").unwrap_err();
    assert!(
        matches!(err, CatalogError::InvalidSiteUrl { .. }),
        "expected InvalidSiteUrl, got: {err:?}"
    );
    assert_eq!(err.kind(), crate::FailureKind::Fetch);
}

#[test]
fn cache_buster_is_appended_as_query_param() {
    let base = catalog_url("https://jdreditora.com.br", "books.csv").unwrap();
    let url = with_cache_buster(&base, 1_700_000_000_000);
    assert_eq!(
        url.as_str(),
        "https://jdreditora.com.br/books.csv?t=1700000000000"
    );
    // The base URL is left untouched.
    assert!(base.query().is_none());
}

#[test]
fn new_trims_image_origin_and_exposes_base_url() {
    let client = CatalogClient::new(
        "https://jdreditora.com.br",
        "books.csv",
        "https://jdreditora.com.br/",
        5,
        "portfolio-test/0.1",
    )
    .unwrap();
    assert_eq!(client.image_origin, "https://jdreditora.com.br");
    assert_eq!(
        client.catalog_url().as_str(),
        "https://jdreditora.com.br/books.csv"
    );
}
