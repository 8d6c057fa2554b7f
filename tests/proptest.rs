//! Property-based tests for csvbody.
//!
//! These tests generate random inputs to find edge cases.

use proptest::prelude::*;

use csvbody::core::{UTF8_BOM, escape_field, normalize};
use csvbody::{CsvConfig, Field, Record, encode};

/// Generate a random field using fast strategies
fn arb_field() -> impl Strategy<Value = Field> {
    prop_oneof![
        Just(Field::Absent),
        prop::sample::select(vec![
            String::new(),
            "plain".to_string(),
            "with,comma".to_string(),
            "with;semicolon".to_string(),
            "\"quoted\"".to_string(),
            "\"\"".to_string(),
            "line\r\nbreak".to_string(),
            "Привет мир".to_string(),
            "🎉🔥 emoji".to_string(),
            "=1+1".to_string(),
        ])
        .prop_map(Field::Text),
        "[a-z\" ,\n]{0,12}".prop_map(Field::Text),
        any::<i64>().prop_map(Field::Integer),
        any::<u64>().prop_map(Field::Unsigned),
        any::<bool>().prop_map(Field::Bool),
        (-1.0e9f64..1.0e9).prop_map(Field::Float),
    ]
}

fn arb_record() -> impl Strategy<Value = Record> {
    prop_oneof![
        prop::collection::vec(arb_field(), 1..6).prop_map(Record::Ordered),
        prop::collection::vec(("[a-z]{1,4}", arb_field()), 1..6).prop_map(Record::Keyed),
    ]
}

fn arb_records(max_len: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(arb_record(), 0..max_len)
}

fn arb_config() -> impl Strategy<Value = CsvConfig> {
    (
        prop::sample::select(vec![',', ';', '\t', '|']),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(separator, prevent_cast, ignore_absent)| {
            CsvConfig::new()
                .with_separator(separator)
                .with_prevent_cast(prevent_cast)
                .with_ignore_absent(ignore_absent)
        })
}

/// Text the spreadsheet should show for a field.
fn expected_cell(field: &Field, config: &CsvConfig) -> String {
    if config.ignore_absent && field.is_absent() {
        String::new()
    } else {
        field.canonical().into_owned()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ============================================
    // ESCAPING PROPERTIES
    // ============================================

    /// Inner text never contains an unpaired quote
    #[test]
    fn escaped_quotes_are_paired(field in arb_field(), config in arb_config()) {
        let escaped = escape_field(&field, &config);
        if escaped.is_empty() {
            prop_assert!(field.is_absent() && config.ignore_absent);
        } else {
            let start = if config.prevent_cast { 2 } else { 1 };
            let inner = &escaped[start..escaped.len() - 1];
            prop_assert_eq!(inner.replace("\"\"", ""), inner.replace('"', ""));
            prop_assert_eq!(inner.matches('"').count() % 2, 0);
            prop_assert_eq!(inner.replace("\"\"", "\""), field.canonical().into_owned());
        }
    }

    /// Prevent-cast output always starts with `="`
    #[test]
    fn prevent_cast_prefix(field in arb_field()) {
        let config = CsvConfig::excel().with_ignore_absent(false);
        prop_assert!(escape_field(&field, &config).starts_with("=\""));
    }

    // ============================================
    // NORMALIZER PROPERTIES
    // ============================================

    /// Keyed records keep pair order
    #[test]
    fn normalize_keeps_order(pairs in prop::collection::vec(("[a-z]{1,3}", arb_field()), 0..8)) {
        let expected: Vec<Field> = pairs.iter().map(|(_, f)| f.clone()).collect();
        let record = Record::Keyed(pairs);
        prop_assert_eq!(normalize(&record).into_owned(), expected);
    }

    // ============================================
    // ENCODER PROPERTIES
    // ============================================

    /// Encoding is deterministic
    #[test]
    fn encode_is_deterministic(records in arb_records(10), config in arb_config()) {
        let first = encode(&records, &config).unwrap();
        let second = encode(&records, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Payload always starts with the BOM and ends with a line terminator
    #[test]
    fn payload_framing(records in arb_records(10)) {
        let csv = encode(&records, &CsvConfig::default()).unwrap();
        prop_assert!(csv.as_bytes().starts_with(UTF8_BOM));
        if records.is_empty() {
            prop_assert_eq!(csv.len(), UTF8_BOM.len());
        } else {
            prop_assert!(csv.as_bytes().ends_with(b"\r\n"));
        }
    }

    /// A CSV reader recovers the canonical text of every field
    #[test]
    fn roundtrip_through_csv_reader(records in arb_records(10), separator in prop::sample::select(vec![b',', b';', b'\t'])) {
        let config = CsvConfig::new()
            .with_separator(char::from(separator))
            .with_ignore_absent(false);
        let csv = encode(&records, &config).unwrap();
        let body = &csv.as_bytes()[UTF8_BOM.len()..];

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(separator)
            .terminator(csv::Terminator::CRLF)
            .from_reader(body);

        let parsed: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect();

        let expected: Vec<Vec<String>> = records
            .iter()
            .map(|r| r.values().map(|f| expected_cell(f, &config)).collect())
            .collect();

        prop_assert_eq!(parsed, expected);
    }
}
