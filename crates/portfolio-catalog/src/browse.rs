//! Read-side helpers for presenting a loaded catalog: free-text search,
//! fixed-size pagination, and card formatting.
//!
//! Nothing here mutates the catalog; every function borrows the loaded list.

use std::str::FromStr;
use std::sync::LazyLock;

use portfolio_core::CatalogEntry;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

/// Entries per page on the full catalog view.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Maximum number of page links shown at once.
pub const PAGE_WINDOW: usize = 5;

/// Cover shown when an entry has no image.
pub const PLACEHOLDER_COVER: &str = "https://via.placeholder.com/300x450?text=Sem+Imagem";

/// Currency prefix used for displayed prices.
pub const CURRENCY_PREFIX: &str = "R$";

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid tag regex"));

static LEADING_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d+)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid number regex")
});

static NUMERIC_ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#(x[0-9a-fA-F]+|[0-9]+);").expect("valid entity regex"));

/// Entries whose title or summary contains `term`, ignoring case.
///
/// The summary is matched as published (markup included). The term is used
/// as typed, surrounding spaces included; an empty term matches everything.
/// Catalog order is preserved.
#[must_use]
pub fn search<'a>(entries: &'a [CatalogEntry], term: &str) -> Vec<&'a CatalogEntry> {
    let needle = term.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            needle.is_empty()
                || entry.title.to_lowercase().contains(&needle)
                || entry.summary.to_lowercase().contains(&needle)
        })
        .collect()
}

/// First `limit` entries, as shown on the landing page.
#[must_use]
pub fn featured(entries: &[CatalogEntry], limit: usize) -> &[CatalogEntry] {
    &entries[..limit.min(entries.len())]
}

/// One page of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number actually served.
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Returns page `page` (1-based) of `items`, clamping out-of-range requests
/// to the first or last page. `page_size` of zero is treated as one.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size);
    let number = page.clamp(1, total_pages.max(1));
    let start = ((number - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    Page {
        items: &items[start..end],
        number,
        total_pages,
        total_items: items.len(),
    }
}

/// Page numbers to link from page `current` of `total`.
///
/// At most [`PAGE_WINDOW`] consecutive numbers, centred on `current` where
/// possible and shifted to stay within `1..=total` at either end.
#[must_use]
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let last_start = total.saturating_sub(PAGE_WINDOW - 1).max(1);
    let start = current.saturating_sub(PAGE_WINDOW / 2).clamp(1, last_start);
    let end = (start + PAGE_WINDOW - 1).min(total);
    (start..=end).collect()
}

/// Plain text of an HTML summary: tags removed, common entities decoded,
/// whitespace collapsed.
#[must_use]
pub fn strip_html(html: &str) -> String {
    let without_tags = TAG_RE.replace_all(html, " ");
    let decoded = decode_entities(&without_tags);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entities(value: &str) -> String {
    let named = value
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">");
    let numeric = NUMERIC_ENTITY_RE.replace_all(&named, |caps: &regex::Captures<'_>| {
        let code = &caps[1];
        let parsed = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse::<u32>().ok(),
        };
        parsed
            .and_then(char::from_u32)
            .map_or_else(|| caps[0].to_owned(), String::from)
    });
    // `&amp;` last so "&amp;lt;" stays literal "&lt;".
    numeric.replace("&amp;", "&")
}

/// Price as shown on a card, e.g. `"R$ 19,90"`.
///
/// Prices already written with a decimal comma are shown verbatim. Otherwise
/// the leading number is read (trailing text such as `" reais"` is ignored,
/// exponents are accepted), rounded half away from zero to two places and
/// written with a comma. Prices without a leading number are shown as-is.
#[must_use]
pub fn display_price(price: &str) -> String {
    if price.contains(',') {
        return format!("{CURRENCY_PREFIX} {price}");
    }
    match leading_decimal(price) {
        Some(value) => {
            let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{CURRENCY_PREFIX} {}", format!("{rounded:.2}").replace('.', ","))
        }
        None => format!("{CURRENCY_PREFIX} {price}"),
    }
}

/// Longest numeric prefix of `value` after leading whitespace.
fn leading_decimal(value: &str) -> Option<Decimal> {
    let number = LEADING_NUMBER_RE.find(value.trim_start())?.as_str();
    let mut number = number
        .strip_prefix('+')
        .unwrap_or(number)
        .to_ascii_lowercase();
    // ".5" and "-.5" need a leading zero.
    if number.starts_with('.') {
        number.insert(0, '0');
    } else if number.starts_with("-.") {
        number.insert(1, '0');
    }
    if number.contains('e') {
        Decimal::from_scientific(&number).ok()
    } else {
        Decimal::from_str(&number).ok()
    }
}

/// Presentation-ready view of one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub price: String,
    pub cover_url: String,
}

impl From<&CatalogEntry> for CardView {
    fn from(entry: &CatalogEntry) -> Self {
        let cover_url = if entry.has_image() {
            entry.image_reference.clone()
        } else {
            PLACEHOLDER_COVER.to_owned()
        };
        Self {
            id: entry.id.clone(),
            title: entry.title.clone(),
            summary: strip_html(&entry.summary),
            price: display_price(&entry.price),
            cover_url,
        }
    }
}
