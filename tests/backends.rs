mod common;

use std::io::Cursor;

use common::{read_fixture, KEY_NOT_FOUND};
use rstest::rstest;
use wordbook::{ArrayBackend, Delimiters, FileBackend, MapBackend, Words, WordsError};

#[derive(Debug, Clone, Copy)]
enum Backend {
    Array,
    Map,
    File,
}

fn build(kind: Backend, source: &str, separator: char, comment: char) -> wordbook::Result<Box<dyn Words>> {
    Ok(match kind {
        Backend::Array => Box::new(ArrayBackend::new(source, separator, comment)?),
        Backend::Map => Box::new(MapBackend::new(source, separator, comment)?),
        Backend::File => {
            // Content is not read on construction, so apply the same gate as the
            // in-memory backends: source check, then a full content check.
            wordbook::words::format::validate::validate_source(source)?;
            let backend = FileBackend::new(Cursor::new(source.to_owned()), separator, comment)?;
            backend.check_error()?;
            Box::new(backend)
        }
    })
}

const LOOKUPS: &[(&str, Option<&str>)] = &[
    ("k1", Some("v1")),
    ("k2", Some("v2")),
    ("k3", Some("v3")),
    ("  k3  ", Some("v3")),
    ("greeting", Some("Hello, World")),
    ("empty", Some("")),
    ("url", Some("https://example.com/?q=1")),
    ("# words table", None),
    (KEY_NOT_FOUND, None),
    ("", None),
    ("   ", None),
    ("k1\nk2", None),
];

#[rstest]
fn lookups_on_valid_source(#[values(Backend::Array, Backend::Map, Backend::File)] kind: Backend) {
    let words = build(kind, &read_fixture("valid.txt"), '=', '#').expect("valid source");
    for (name, want) in LOOKUPS {
        assert_eq!(words.find(name).as_deref(), *want, "{kind:?} find({name:?})");
        assert_eq!(words.get(name), want.unwrap_or_default(), "{kind:?} get({name:?})");
    }
}

#[rstest]
fn custom_delimiters(#[values(Backend::Array, Backend::Map, Backend::File)] kind: Backend) {
    let words = build(kind, "\nk1:v1\n@ this is a comment\nk2: v2 : more\n", ':', '@').expect("valid source");
    assert_eq!(words.get("k1"), "v1");
    assert_eq!(words.get("k2"), "v2 : more");
    assert_eq!(words.find("@ this is a comment"), None);
}

#[rstest]
fn duplicated_names_are_rejected(#[values(Backend::Array, Backend::Map, Backend::File)] kind: Backend) {
    match build(kind, &read_fixture("duplicate.txt"), '=', '#') {
        Err(WordsError::NameDuplicated { name }) => assert_eq!(name, "k1", "{kind:?}"),
        Err(other) => panic!("{kind:?}: expected NameDuplicated, got {other:?}"),
        Ok(_) => panic!("{kind:?}: duplicated source accepted"),
    }
}

#[rstest]
fn invalid_separator_is_rejected(#[values(Backend::Array, Backend::Map, Backend::File)] kind: Backend) {
    let err = build(kind, "k1=v1", 'x', '#').err().expect("invalid separator");
    assert!(matches!(err, WordsError::SeparatorInvalid('x')), "{kind:?}: {err:?}");
}

#[rstest]
fn invalid_comment_is_rejected(#[values(Backend::Array, Backend::Map, Backend::File)] kind: Backend) {
    let err = build(kind, "k1=v1", '=', 'x').err().expect("invalid comment");
    assert!(matches!(err, WordsError::CommentInvalid('x')), "{kind:?}: {err:?}");
}

#[rstest]
fn same_delimiters_are_rejected(#[values(Backend::Array, Backend::Map, Backend::File)] kind: Backend) {
    let err = build(kind, "k1=v1", '=', '=').err().expect("same delimiters");
    assert!(matches!(err, WordsError::SameDelimiter), "{kind:?}: {err:?}");
}

#[rstest]
#[case::empty("")]
#[case::whitespace("   \n  \t ")]
fn empty_source_is_rejected(
    #[case] source: &str,
    #[values(Backend::Array, Backend::Map, Backend::File)] kind: Backend,
) {
    let err = build(kind, source, '=', '#').err().expect("empty source");
    assert!(matches!(err, WordsError::SourceEmpty), "{kind:?}: {err:?}");
}

#[rstest]
#[case::absent_name("absent_name.txt")]
#[case::no_separator("no_separator.txt")]
fn malformed_source_is_rejected(
    #[case] fixture: &str,
    #[values(Backend::Array, Backend::Map, Backend::File)] kind: Backend,
) {
    let err = build(kind, &read_fixture(fixture), '=', '#').err().expect("malformed source");
    assert!(
        matches!(err, WordsError::NameNotPresent { .. } | WordsError::SeparatorNotPresent { .. }),
        "{kind:?}: {err:?}"
    );
}

#[test]
fn comment_only_source_builds_empty_tables() {
    let source = "# nothing\n# here\n";
    let array = ArrayBackend::new(source, '=', '#').expect("comments only");
    let map = MapBackend::new(source, '=', '#').expect("comments only");
    assert!(array.is_empty());
    assert!(map.is_empty());
    assert_eq!(array.find("nothing"), None);
    assert_eq!(map.find("nothing"), None);
}

#[test]
fn array_backend_keeps_normalized_lines_in_order() {
    let array = ArrayBackend::new(&read_fixture("valid_sparse.txt"), '=', '#').expect("valid source");
    assert_eq!(array.len(), 7);
    assert_eq!(array.lines().first().map(String::as_str), Some("k1=v1"));
    assert_eq!(array.lines().last().map(String::as_str), Some("k7=v7"));
}

#[test]
fn map_backend_exposes_names() {
    let map = MapBackend::new(&read_fixture("valid_sparse.txt"), '=', '#').expect("valid source");
    let mut names: Vec<&str> = map.names().collect();
    names.sort_unstable();
    assert_eq!(names, ["k1", "k2", "k3", "k4", "k5", "k6", "k7"]);
}

#[test]
fn with_delimiters_constructors() {
    let delimiters = Delimiters::new('|', '#').expect("valid delimiters");
    let source = read_fixture("different_separator.txt");
    let array = ArrayBackend::with_delimiters(&source, delimiters).expect("valid source");
    let map = MapBackend::with_delimiters(&source, delimiters).expect("valid source");
    assert_eq!(array.get("k2"), "v2 = still value");
    assert_eq!(map.get("k2"), "v2 = still value");
    assert!(matches!(
        ArrayBackend::with_delimiters("  ", delimiters),
        Err(WordsError::SourceEmpty)
    ));
}

#[test]
fn in_memory_backends_are_shareable_across_threads() {
    let array = std::sync::Arc::new(ArrayBackend::new(&read_fixture("valid.txt"), '=', '#').expect("valid"));
    let map = std::sync::Arc::new(MapBackend::new(&read_fixture("valid.txt"), '=', '#').expect("valid"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let array = array.clone();
            let map = map.clone();
            std::thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(array.get("k2"), "v2");
                    assert_eq!(map.get("greeting"), "Hello, World");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("reader thread");
    }
}
