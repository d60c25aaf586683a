//! Cover-image reference cleanup.
//!
//! Image cells arrive in several shapes depending on the exporter:
//!
//! ```text
//! "https://site/a.jpg"                         quoted
//! https://site/a.jpg, https://site/b.jpg       gallery list
//! 123|https://site/a.jpg                       WooCommerce id|url
//! /wp-content/uploads/a.jpg                    site-relative
//! //cdn.site/a.jpg                             protocol-relative
//! ```
//!
//! Each stage below is a pure function; [`resolve_image_reference`] composes
//! them left to right.

/// Removes every `"` and `'` and trims surrounding whitespace.
#[must_use]
pub fn strip_quotes(raw: &str) -> String {
    raw.replace(['"', '\''], "").trim().to_owned()
}

/// Keeps the first entry of a comma-separated list.
#[must_use]
pub fn first_listed(value: &str) -> &str {
    value.split(',').next().unwrap_or(value).trim()
}

/// Picks the URL out of a pipe-delimited compound value.
///
/// The first segment starting with `http` (any case) wins. Without one, the
/// last segment is used. Values without a pipe pass through unchanged.
#[must_use]
pub fn pick_url_segment(value: &str) -> &str {
    if !value.contains('|') {
        return value;
    }
    value
        .split('|')
        .find(|segment| starts_with_http(segment.trim()))
        .or_else(|| value.rsplit('|').next())
        .unwrap_or(value)
        .trim()
}

/// Turns site-relative and protocol-relative paths into absolute URLs.
///
/// `origin` must not end with a slash.
#[must_use]
pub fn absolutize(value: &str, origin: &str) -> String {
    if value.starts_with("//") {
        format!("https:{value}")
    } else if value.starts_with('/') {
        format!("{origin}{value}")
    } else {
        value.to_owned()
    }
}

/// Runs the full cleanup pipeline on a raw image cell.
///
/// Absent or blank input yields an empty string; no placeholder is injected.
#[must_use]
pub fn resolve_image_reference(raw: Option<&str>, origin: &str) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let unquoted = strip_quotes(raw);
    let candidate = pick_url_segment(first_listed(&unquoted));
    if candidate.is_empty() {
        return String::new();
    }
    absolutize(candidate, origin)
}

fn starts_with_http(segment: &str) -> bool {
    segment
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("http"))
}
