//! Normalization from raw CSV rows to [`portfolio_core::CatalogEntry`].
//!
//! Column lookup is delegated to [`crate::aliases`] and cover cleanup to
//! [`crate::image`]; this module applies defaults, drops untitled rows and
//! orders the result.

use std::cmp::{Ordering, Reverse};

use portfolio_core::CatalogEntry;

use crate::aliases::{ColumnMap, Field};
use crate::document::read_document;
use crate::error::CatalogError;
use crate::image::resolve_image_reference;

/// Title used when a row carries none.
pub const UNTITLED: &str = "Sem Título";

/// Price used when a row carries none.
pub const DEFAULT_PRICE: &str = "0.00";

const FALLBACK_ID_LEN: usize = 12;

/// Field values resolved from one row, before defaults are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowValues<'a> {
    pub id: Option<&'a str>,
    pub title: Option<&'a str>,
    pub summary: Option<&'a str>,
    pub price: Option<&'a str>,
    pub image: Option<&'a str>,
}

impl<'a> RowValues<'a> {
    #[must_use]
    pub fn resolve(columns: &ColumnMap, row: &'a [String]) -> Self {
        Self {
            id: columns.value(Field::Id, row),
            title: columns.value(Field::Title, row),
            summary: columns.value(Field::Summary, row),
            price: columns.value(Field::Price, row),
            image: columns.value(Field::Image, row),
        }
    }

    /// Rows without a non-blank title are not part of the catalog.
    #[must_use]
    pub fn has_title(&self) -> bool {
        self.title.is_some_and(|t| !t.trim().is_empty())
    }

    /// Applies defaults and image cleanup. Empty cells count as absent.
    #[must_use]
    pub fn into_entry(self, image_origin: &str) -> CatalogEntry {
        let id = self
            .id
            .filter(|v| !v.trim().is_empty())
            .map_or_else(fallback_id, str::to_owned);

        CatalogEntry {
            id,
            title: non_empty(self.title).unwrap_or(UNTITLED).to_owned(),
            summary: non_empty(self.summary).unwrap_or_default().to_owned(),
            price: non_empty(self.price).unwrap_or(DEFAULT_PRICE).to_owned(),
            image_reference: resolve_image_reference(self.image, image_origin),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Generates a rendering key for rows that have no id.
///
/// The token is alphabetic only, so it carries no digits and sorts as zero.
/// Uniqueness within one list is best-effort.
#[must_use]
pub fn fallback_id() -> String {
    (0..FALLBACK_ID_LEN)
        .map(|_| char::from(b'a' + rand::random::<u8>() % 26))
        .collect()
}

/// Numeric sort key of an id: its digits with leading zeros removed.
///
/// Compared by length then lexically, which is exact numeric ordering for
/// any number of digits. An id without digits is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericKey(String);

impl NumericKey {
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        let digits: String = id.chars().filter(char::is_ascii_digit).collect();
        Self(digits.trim_start_matches('0').to_owned())
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }
}

impl Ord for NumericKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for NumericKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sorts entries newest first: descending numeric id, ties in input order.
pub fn sort_by_numeric_id(entries: &mut [CatalogEntry]) {
    entries.sort_by_cached_key(|entry| Reverse(NumericKey::from_id(&entry.id)));
}

/// Parses and normalizes a catalog document.
///
/// Untitled rows are dropped. The result is sorted by [`sort_by_numeric_id`].
/// An empty result is not an error.
///
/// # Errors
///
/// Returns [`CatalogError::Csv`] or [`CatalogError::RaggedRow`] if the
/// document is structurally invalid. No partial result is produced.
pub fn parse_catalog(
    bytes: &[u8],
    image_origin: &str,
) -> Result<Vec<CatalogEntry>, CatalogError> {
    let document = read_document(bytes)?;
    let columns = ColumnMap::resolve(&document.headers);

    if columns.index(Field::Title).is_none() && !document.rows.is_empty() {
        tracing::warn!(
            headers = ?document.headers,
            "no title column recognised; every row will be dropped"
        );
    }

    let mut entries: Vec<CatalogEntry> = document
        .rows
        .iter()
        .map(|row| RowValues::resolve(&columns, row))
        .filter(RowValues::has_title)
        .map(|values| values.into_entry(image_origin))
        .collect();

    sort_by_numeric_id(&mut entries);

    let dropped = document.rows.len() - entries.len();
    if dropped > 0 {
        tracing::debug!(dropped, "rows without a title skipped");
    }

    Ok(entries)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
