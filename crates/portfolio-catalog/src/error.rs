use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog document not found at expected path: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid site URL \"{site_url}\": {reason}")]
    InvalidSiteUrl { site_url: String, reason: String },

    #[error("CSV parse error in {context}: {source}")]
    Csv {
        context: String,
        #[source]
        source: csv::Error,
    },

    #[error("malformed CSV at line {line}: expected {expected} fields, found {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("malformed CSV at line {line}: quoted field is never closed")]
    UnterminatedQuote { line: u64 },

    #[error("malformed CSV at line {line}: unexpected character after closing quote")]
    MalformedQuote { line: u64 },
}

/// Coarse classification of a failed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The document could not be retrieved.
    Fetch,
    /// The document was retrieved but is structurally invalid.
    Parse,
}

impl CatalogError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            CatalogError::Http(_)
            | CatalogError::NotFound { .. }
            | CatalogError::UnexpectedStatus { .. }
            | CatalogError::InvalidSiteUrl { .. } => FailureKind::Fetch,
            CatalogError::Csv { .. }
            | CatalogError::RaggedRow { .. }
            | CatalogError::UnterminatedQuote { .. }
            | CatalogError::MalformedQuote { .. } => FailureKind::Parse,
        }
    }
}
