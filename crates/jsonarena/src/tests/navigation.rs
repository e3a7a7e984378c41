use alloc::vec::Vec;

use super::parse_strict;
use crate::{DecodeOptions, JsonNumber, NodeKind};

#[test]
fn field_lookup_returns_first_match() {
    let source = r#"{"a": 1, "a": 2, "b": 3}"#;
    let doc = parse_strict(source).unwrap();
    let root = doc.root().unwrap();

    // duplicates are retained as distinct pairs; lookup takes the first
    assert_eq!(doc.object_iter(root).unwrap().count(), 3);
    let pair = doc.field_by_name(source, root, "a").unwrap();
    let value = doc.pair_value(pair).unwrap();
    assert_eq!(
        doc.number_value(source, value, &DecodeOptions::default()),
        Ok(JsonNumber::Unsigned(1))
    );
}

#[test]
fn field_lookup_misses() {
    let source = r#"{"a": 1}"#;
    let doc = parse_strict(source).unwrap();
    let root = doc.root().unwrap();
    assert!(doc.field_by_name(source, root, "b").is_none());
    assert!(doc.field_by_name(source, root, "").is_none());
}

#[test]
fn key_comparison_is_raw_bytes() {
    // the stored key span still contains the escape sequence
    let source = r#"{"a\nb": 1}"#;
    let doc = parse_strict(source).unwrap();
    let root = doc.root().unwrap();

    // the unescaped form does not match...
    assert!(doc.field_by_name(source, root, "a\nb").is_none());
    // ...the raw escaped bytes do
    assert!(doc.field_by_name(source, root, "a\\nb").is_some());
}

#[test]
fn array_indexing_in_and_out_of_range() {
    let source = "[10, 20, 30]";
    let doc = parse_strict(source).unwrap();
    let root = doc.root().unwrap();

    let third = doc.array_index(root, 2).unwrap();
    assert_eq!(
        doc.number_value(source, third, &DecodeOptions::default()),
        Ok(JsonNumber::Unsigned(30))
    );
    assert!(doc.array_index(root, 3).is_none());
    assert!(doc.array_index(root, usize::MAX).is_none());
}

#[test]
fn iterators_reject_wrong_node_kinds() {
    let source = r#"{"a": [1]}"#;
    let doc = parse_strict(source).unwrap();
    let root = doc.root().unwrap();

    assert!(doc.array_iter(root).is_none());
    let pair = doc.field_by_name(source, root, "a").unwrap();
    let arr = doc.pair_value(pair).unwrap();
    assert!(doc.object_iter(arr).is_none());
    assert!(doc.string_view(source, arr).is_none());
    assert!(doc.pair_key(source, arr).is_none());
}

#[test]
fn pair_accessors() {
    let source = r#"{"name": "zig"}"#;
    let doc = parse_strict(source).unwrap();
    let root = doc.root().unwrap();
    let pair = doc.object_iter(root).unwrap().next().unwrap();

    assert_eq!(doc.node(pair).kind(), NodeKind::Pair);
    let key = doc.pair_key(source, pair).unwrap();
    assert_eq!(key.raw(), "name");
    assert!(doc.pair_key_matches(source, pair, "name"));
    assert!(!doc.pair_key_matches(source, pair, "nam"));

    let value = doc.pair_value(pair).unwrap();
    assert_eq!(doc.string_view(source, value).unwrap().raw(), "zig");
}

#[test]
fn node_kind_names() {
    let source = r#"[{"k": 1}]"#;
    let doc = parse_strict(source).unwrap();
    let root = doc.root().unwrap();
    assert_eq!(doc.node(root).kind().as_str(), "array");

    let kinds: Vec<&str> = doc
        .array_iter(root)
        .unwrap()
        .map(|id| doc.node(id).kind().as_str())
        .collect();
    assert_eq!(kinds, ["object"]);
}
