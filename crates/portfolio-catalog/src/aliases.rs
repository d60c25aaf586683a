//! Header alias table mapping loosely-named CSV columns onto catalog fields.
//!
//! Catalog spreadsheets come from different exporters (`WooCommerce`, hand-made
//! sheets in Portuguese or English), so each logical field is accepted under
//! several header spellings. Matching ignores case and surrounding whitespace.

/// Logical catalog field resolved from a CSV row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Title,
    Summary,
    Price,
    Image,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Id,
        Field::Title,
        Field::Summary,
        Field::Price,
        Field::Image,
    ];

    /// Accepted header spellings for this field, in table order.
    #[must_use]
    pub fn aliases(self) -> &'static [&'static str] {
        ALIASES
            .iter()
            .find(|(field, _)| *field == self)
            .map_or(&[][..], |&(_, aliases)| aliases)
    }

    fn slot(self) -> usize {
        match self {
            Field::Id => 0,
            Field::Title => 1,
            Field::Summary => 2,
            Field::Price => 3,
            Field::Image => 4,
        }
    }
}

/// Ordered `{field: [accepted header spellings]}` table.
pub const ALIASES: &[(Field, &[&str])] = &[
    (Field::Id, &["ID", "id", "Identificador"]),
    (Field::Title, &["Name", "name", "Nome", "Título", "Title"]),
    (
        Field::Summary,
        &[
            "Short Description",
            "short_description",
            "Descrição",
            "Descrição curta",
            "Description",
        ],
    ),
    (Field::Price, &["Regular price", "price", "Preço", "Valor"]),
    (
        Field::Image,
        &[
            "Images",
            "images",
            "Image URL",
            "image_url",
            "Imagem",
            "Imagens",
            "URL da Imagem",
        ],
    ),
];

/// Lower-cases and trims a header for comparison. A leading byte-order mark
/// left by spreadsheet exports is dropped as well.
#[must_use]
pub fn normalize_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Returns `true` if `header` is one of `field`'s accepted spellings.
#[must_use]
pub fn header_matches(field: Field, header: &str) -> bool {
    let normalized = normalize_header(header);
    field
        .aliases()
        .iter()
        .any(|alias| normalize_header(alias) == normalized)
}

/// Column index per field for one document's header row.
///
/// The first header (left to right) that matches any alias wins; later
/// duplicates are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: [Option<usize>; 5],
}

impl ColumnMap {
    #[must_use]
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Self {
        let mut columns = [None; 5];
        for field in Field::ALL {
            columns[field.slot()] = headers
                .iter()
                .position(|header| header_matches(field, header.as_ref()));
        }
        Self { columns }
    }

    #[must_use]
    pub fn index(&self, field: Field) -> Option<usize> {
        self.columns[field.slot()]
    }

    /// Raw value of `field` in `row`, or `None` when no header matched.
    #[must_use]
    pub fn value<'r>(&self, field: Field, row: &'r [String]) -> Option<&'r str> {
        self.index(field)
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
    }
}
