//! Property-based tests for normalization and backend equivalence.

use std::collections::BTreeMap;
use std::io::Cursor;

use proptest::prelude::*;
use wordbook::words::format::line;
use wordbook::{ArrayBackend, FileBackend, MapBackend, Words};

/// Keys with inner spaces but no surrounding whitespace.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_ .-]{0,12}[a-zA-Z0-9_]"
}

/// Values that may be empty and may contain the separator.
fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9][a-zA-Z0-9 =,.:{}%-]{0,20}[a-zA-Z0-9]",
        "[a-zA-Z0-9]{1,8}",
    ]
}

fn padding_strategy() -> impl Strategy<Value = String> {
    "[ \t]{0,4}"
}

/// A source with unique keys, interleaved with comments and blank lines.
fn source_strategy() -> impl Strategy<Value = (String, BTreeMap<String, String>)> {
    prop::collection::btree_map(key_strategy(), value_strategy(), 1..30).prop_flat_map(|records| {
        let count = records.len();
        (
            Just(records),
            prop::collection::vec((padding_strategy(), padding_strategy(), 0u8..4), count),
        )
            .prop_map(|(records, layout)| {
                let mut source = String::new();
                for ((key, value), (left, right, extra)) in records.iter().zip(layout) {
                    match extra {
                        0 => source.push_str("# a comment line\n"),
                        1 => source.push_str("   \n"),
                        _ => {}
                    }
                    source.push_str(&format!("{left}{key}{right}={right}{value}{left}\n"));
                }
                (source, records)
            })
    })
}

proptest! {
    #[test]
    fn normalize_line_strips_outer_whitespace(
        key in key_strategy(),
        value in value_strategy(),
        left in padding_strategy(),
        right in padding_strategy(),
    ) {
        let raw = format!("{left}{key}{right}={right}{value}{left}");
        let normalized = line::normalize_line(&raw, '=', '#').expect("valid line");
        prop_assert_eq!(&normalized, &format!("{key}={value}"));

        let record = line::parse_line(&normalized, '=', '#').expect("normalized line parses");
        prop_assert_eq!(record.key, key.as_str());
        prop_assert_eq!(record.value, value.as_str());
    }

    #[test]
    fn backends_agree((source, records) in source_strategy()) {
        let array = ArrayBackend::new(&source, '=', '#').expect("array backend");
        let map = MapBackend::new(&source, '=', '#').expect("map backend");
        let file = FileBackend::new(Cursor::new(source.clone()), '=', '#').expect("file backend");
        file.check_error().expect("file content");

        for (key, value) in &records {
            let array_found = array.find(key);
            prop_assert_eq!(array_found.as_deref(), Some(value.as_str()));
            let map_found = map.find(key);
            prop_assert_eq!(map_found.as_deref(), Some(value.as_str()));
            let file_found = file.find(key);
            prop_assert_eq!(file_found.as_deref(), Some(value.as_str()));
        }
        for missing in ["missing key", "# a comment line", ""] {
            prop_assert_eq!(array.find(missing), None);
            prop_assert_eq!(map.find(missing), None);
            prop_assert_eq!(file.find(missing), None);
        }
        prop_assert!(file.err().is_none());
    }
}
