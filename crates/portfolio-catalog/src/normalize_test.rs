use super::*;

const ORIGIN: &str = "https://jdreditora.com.br";

fn ids(entries: &[CatalogEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.id.as_str()).collect()
}

// -----------------------------------------------------------------------
// RowValues
// -----------------------------------------------------------------------

#[test]
fn into_entry_applies_defaults_for_absent_fields() {
    let values = RowValues {
        id: Some("12"),
        title: Some("Cartas a Timóteo"),
        ..RowValues::default()
    };
    let entry = values.into_entry(ORIGIN);
    assert_eq!(entry.id, "12");
    assert_eq!(entry.title, "Cartas a Timóteo");
    assert_eq!(entry.summary, "");
    assert_eq!(entry.price, DEFAULT_PRICE);
    assert_eq!(entry.image_reference, "");
}

#[test]
fn into_entry_uses_placeholder_title_when_absent() {
    let entry = RowValues::default().into_entry(ORIGIN);
    assert_eq!(entry.title, UNTITLED);
}

#[test]
fn into_entry_treats_empty_price_as_absent() {
    let values = RowValues {
        title: Some("A"),
        price: Some(""),
        ..RowValues::default()
    };
    assert_eq!(values.into_entry(ORIGIN).price, "0.00");
}

#[test]
fn into_entry_generates_fallback_id_for_missing_or_blank_id() {
    for id in [None, Some(""), Some("   ")] {
        let values = RowValues {
            id,
            title: Some("A"),
            ..RowValues::default()
        };
        let entry = values.into_entry(ORIGIN);
        assert!(!entry.id.trim().is_empty());
        assert!(NumericKey::from_id(&entry.id).is_zero());
    }
}

#[test]
fn has_title_rejects_blank_titles() {
    let blank = RowValues {
        title: Some("  "),
        ..RowValues::default()
    };
    assert!(!blank.has_title());
    assert!(!RowValues::default().has_title());
}

#[test]
fn fallback_ids_are_alphabetic_and_usually_distinct() {
    let a = fallback_id();
    let b = fallback_id();
    assert_eq!(a.len(), 12);
    assert!(a.chars().all(|c| c.is_ascii_lowercase()));
    assert_ne!(a, b);
}

// -----------------------------------------------------------------------
// NumericKey / sorting
// -----------------------------------------------------------------------

#[test]
fn numeric_key_strips_non_digits_and_leading_zeros() {
    assert_eq!(NumericKey::from_id("SKU-0045"), NumericKey::from_id("45"));
    assert!(NumericKey::from_id("abc").is_zero());
    assert!(NumericKey::from_id("000").is_zero());
}

#[test]
fn numeric_key_orders_numerically_not_lexically() {
    assert!(NumericKey::from_id("45") > NumericKey::from_id("7"));
    assert!(NumericKey::from_id("100") > NumericKey::from_id("99"));
    assert!(NumericKey::from_id("1") > NumericKey::from_id("no-digits"));
}

#[test]
fn numeric_key_handles_ids_longer_than_u64() {
    let big = "123456789012345678901234567890";
    let bigger = "923456789012345678901234567890";
    assert!(NumericKey::from_id(bigger) > NumericKey::from_id(big));
}

#[test]
fn sort_is_descending_and_stable() {
    let mut entries: Vec<CatalogEntry> = ["7", "x", "45", "y", "007"]
        .into_iter()
        .map(|id| RowValues {
            id: Some(id),
            title: Some("T"),
            ..RowValues::default()
        })
        .map(|v| v.into_entry(ORIGIN))
        .collect();
    sort_by_numeric_id(&mut entries);
    assert_eq!(ids(&entries), vec!["45", "7", "007", "x", "y"]);
}

// -----------------------------------------------------------------------
// parse_catalog
// -----------------------------------------------------------------------

#[test]
fn header_only_document_is_an_empty_catalog() {
    let entries = parse_catalog(b"ID,Name,Regular price,Images\n", ORIGIN).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn empty_document_is_an_empty_catalog() {
    let entries = parse_catalog(b"", ORIGIN).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn rows_without_title_are_excluded() {
    let csv = "ID,Nome,Valor\n1,,10\n2,  ,20\n3,Livro,30\n";
    let entries = parse_catalog(csv.as_bytes(), ORIGIN).unwrap();
    assert_eq!(ids(&entries), vec!["3"]);
}

#[test]
fn document_without_title_column_yields_nothing() {
    let csv = "ID,Preço\n1,10\n2,20\n";
    let entries = parse_catalog(csv.as_bytes(), ORIGIN).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn ids_sort_descending_numerically() {
    let csv = "ID,Name\n7,Sete\n45,Quarenta e cinco\n";
    let entries = parse_catalog(csv.as_bytes(), ORIGIN).unwrap();
    assert_eq!(ids(&entries), vec!["45", "7"]);
}

#[test]
fn comma_decimal_price_is_preserved() {
    let csv = "ID,Name,Preço\n1,Livro,\"19,90\"\n2,Outro,19.90\n";
    let entries = parse_catalog(csv.as_bytes(), ORIGIN).unwrap();
    assert_eq!(entries[0].price, "19.90");
    assert_eq!(entries[1].price, "19,90");
}

#[test]
fn relative_image_is_resolved_against_origin() {
    let csv = "ID,Name,Images\n1,Livro,/wp-content/uploads/cover.jpg\n";
    let entries = parse_catalog(csv.as_bytes(), ORIGIN).unwrap();
    assert_eq!(
        entries[0].image_reference,
        "https://jdreditora.com.br/wp-content/uploads/cover.jpg"
    );
}

#[test]
fn compound_image_without_url_keeps_last_segment() {
    let csv = "ID,Name,Image URL\n1,Livro,102|X\n";
    let entries = parse_catalog(csv.as_bytes(), ORIGIN).unwrap();
    assert_eq!(entries[0].image_reference, "X");
}

#[test]
fn woocommerce_export_is_normalized() {
    let csv = concat!(
        "ID,Type,SKU,Name,Short description,Regular price,Images\n",
        "101,simple,,Fé Inabalável,<p>Um devocional</p>,\"24,90\",",
        "\"https://jdreditora.com.br/wp-content/uploads/fe.jpg, https://jdreditora.com.br/wp-content/uploads/fe-2.jpg\"\n",
    );
    let entries = parse_catalog(csv.as_bytes(), ORIGIN).unwrap();
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.id, "101");
    assert_eq!(entry.title, "Fé Inabalável");
    assert_eq!(entry.summary, "<p>Um devocional</p>");
    assert_eq!(entry.price, "24,90");
    assert_eq!(
        entry.image_reference,
        "https://jdreditora.com.br/wp-content/uploads/fe.jpg"
    );
}

#[test]
fn portuguese_headers_are_recognised() {
    let csv = "Identificador,Título,Descrição curta,Valor,URL da Imagem\n9,Salmos,Poesia,15,//cdn.x/s.jpg\n";
    let entries = parse_catalog(csv.as_bytes(), ORIGIN).unwrap();
    assert_eq!(
        entries[0],
        CatalogEntry {
            id: "9".to_owned(),
            title: "Salmos".to_owned(),
            summary: "Poesia".to_owned(),
            price: "15".to_owned(),
            image_reference: "https://cdn.x/s.jpg".to_owned(),
        }
    );
}

#[test]
fn same_document_parses_to_equal_catalogs() {
    let csv = "ID,Name,Images\n3,C,/c.jpg\n10,A,123|https://a/a.jpg\n5,B,\n";
    let first = parse_catalog(csv.as_bytes(), ORIGIN).unwrap();
    let second = parse_catalog(csv.as_bytes(), ORIGIN).unwrap();
    assert_eq!(first, second);
    assert_eq!(ids(&first), vec!["10", "5", "3"]);
}

#[test]
fn malformed_document_fails_without_entries() {
    let csv = "ID,Name\n1,A\n2,B,unexpected\n";
    let err = parse_catalog(csv.as_bytes(), ORIGIN).unwrap_err();
    assert_eq!(err.kind(), crate::FailureKind::Parse);
    assert!(!err.to_string().is_empty());
}

#[test]
fn unclosed_quote_fails_even_when_cell_count_matches() {
    let err = parse_catalog(b"ID,Name\n1,\"abc\n", ORIGIN).unwrap_err();
    assert!(
        matches!(err, CatalogError::UnterminatedQuote { line: 2 }),
        "expected UnterminatedQuote, got: {err:?}"
    );
    assert_eq!(err.kind(), crate::FailureKind::Parse);
}

#[test]
fn stray_quote_in_image_cell_fails() {
    let err = parse_catalog(b"ID,Name,Images\n5,A,\"x\"y\"\n", ORIGIN).unwrap_err();
    assert_eq!(err.kind(), crate::FailureKind::Parse);
}
