//! Raw CSV document reading.
//!
//! The first record is the header row. Rows whose cells are all blank are
//! dropped; any other row must have exactly as many cells as the header.
//! Quoting is checked before records are read, since the reader itself
//! accepts an unclosed quote by running the cell to end of input.

use crate::error::CatalogError;

/// Header names and data rows of a catalog document, cells kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parses a comma-separated document with a header row.
///
/// An empty input yields a document with no headers and no rows.
///
/// # Errors
///
/// - [`CatalogError::Csv`] if the reader rejects the input (e.g. invalid UTF-8).
/// - [`CatalogError::RaggedRow`] if a non-blank row's cell count differs from
///   the header's.
/// - [`CatalogError::UnterminatedQuote`] or [`CatalogError::MalformedQuote`]
///   if a quoted cell is left open or followed by stray characters.
pub fn read_document(bytes: &[u8]) -> Result<Document, CatalogError> {
    check_quotes(bytes)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| CatalogError::Csv {
            context: "header row".to_owned(),
            source: e,
        })?
        .iter()
        .map(str::to_owned)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| CatalogError::Csv {
            context: "data row".to_owned(),
            source: e,
        })?;

        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        if record.len() != headers.len() {
            return Err(CatalogError::RaggedRow {
                line: record.position().map_or(0, csv::Position::line),
                expected: headers.len(),
                found: record.len(),
            });
        }

        rows.push(record.iter().map(str::to_owned).collect());
    }

    tracing::debug!(
        columns = headers.len(),
        rows = rows.len(),
        "catalog document parsed"
    );

    Ok(Document { headers, rows })
}

#[derive(Clone, Copy)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Validates quoting: a cell opened with `"` must be closed by a `"` that is
/// followed by a delimiter, a line break or end of input. `""` inside a quoted
/// cell is an escaped quote. Quotes inside unquoted cells are literal.
fn check_quotes(bytes: &[u8]) -> Result<(), CatalogError> {
    let bytes = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes);
    let mut state = QuoteState::FieldStart;
    let mut line: u64 = 1;
    let mut opened_at: u64 = 1;

    for &byte in bytes {
        use QuoteState::{FieldStart, QuoteInQuoted, Quoted, Unquoted};
        state = match (state, byte) {
            (FieldStart, b'"') => {
                opened_at = line;
                Quoted
            }
            (FieldStart | Unquoted | QuoteInQuoted, b',' | b'\r') => FieldStart,
            (FieldStart | Unquoted | QuoteInQuoted, b'\n') => {
                line += 1;
                FieldStart
            }
            (FieldStart | Unquoted, _) => Unquoted,
            (Quoted, b'"') => QuoteInQuoted,
            (Quoted, b'\n') => {
                line += 1;
                Quoted
            }
            (Quoted, _) | (QuoteInQuoted, b'"') => Quoted,
            (QuoteInQuoted, _) => return Err(CatalogError::MalformedQuote { line }),
        };
    }

    if matches!(state, QuoteState::Quoted) {
        return Err(CatalogError::UnterminatedQuote { line: opened_at });
    }
    Ok(())
}
