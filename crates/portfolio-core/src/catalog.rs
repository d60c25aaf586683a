use serde::{Deserialize, Serialize};

/// One normalized book record, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display identifier. Taken from the source row, or a random fallback
    /// token when the row has none. Never empty.
    pub id: String,
    /// Never empty; rows without a title are dropped during normalization.
    pub title: String,
    /// Short description as published. May contain HTML markup.
    pub summary: String,
    /// Price exactly as written in the source, e.g. `"19,90"` or `"19.90"`.
    pub price: String,
    /// Absolute cover URL, or an empty string when the row has no usable image.
    pub image_reference: String,
}

impl CatalogEntry {
    /// Returns `true` if the entry carries a cover image URL.
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image_reference.is_empty()
    }
}

/// Observable state of a single catalog load.
///
/// A load starts as [`LoadState::Pending`] and resolves to exactly one of
/// the two terminal states. `Ready(vec![])` is a successful, empty catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum LoadState {
    Pending,
    Ready(Vec<CatalogEntry>),
    Failed(String),
}

impl LoadState {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    /// Entries of a ready catalog. Pending and failed loads expose none.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        match self {
            LoadState::Ready(entries) => entries,
            LoadState::Pending | LoadState::Failed(_) => &[],
        }
    }

    /// The failure message, if the load failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            LoadState::Pending | LoadState::Ready(_) => None,
        }
    }
}

impl<E: std::fmt::Display> From<Result<Vec<CatalogEntry>, E>> for LoadState {
    fn from(result: Result<Vec<CatalogEntry>, E>) -> Self {
        match result {
            Ok(entries) => LoadState::Ready(entries),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }
}
