#![allow(missing_docs)]
use jsonarena::{
    DATETIME_LEN_FULL, DecodeOptions, Document, HeapArena, JsonDateTime, JsonNumber, Mode,
    NodeKind, ParseError, Parser, ParserOptions,
};

fn parse(source: &str, mode: Mode) -> Result<Document<HeapArena>, ParseError> {
    let mut doc = Document::new(HeapArena::new());
    Parser::new(ParserOptions {
        mode,
        ..ParserOptions::default()
    })
    .parse(&mut doc, source)?;
    Ok(doc)
}

#[test]
fn mixed_scalar_array() {
    let source = r#"["hello", 42, true, null]"#;
    let doc = parse(source, Mode::Strict).unwrap();
    let root = doc.root().unwrap();

    let items: Vec<_> = doc.array_iter(root).unwrap().collect();
    assert_eq!(items.len(), 4);

    let text = doc.string_view(source, items[0]).unwrap();
    assert_eq!(text.decode(&DecodeOptions::default()), "hello");
    assert_eq!(
        doc.number_value(source, items[1], &DecodeOptions::default()),
        Ok(JsonNumber::Unsigned(42))
    );
    assert_eq!(doc.node(items[2]).kind(), NodeKind::True);
    assert_eq!(doc.node(items[3]).kind(), NodeKind::Null);
}

#[test]
fn timestamp_field_roundtrip() {
    let source = r#"{"created_at":"2022-01-02T03:04:05.006Z"}"#;
    let doc = parse(source, Mode::Strict).unwrap();
    let root = doc.root().unwrap();

    let pair = doc.field_by_name(source, root, "created_at").unwrap();
    let value = doc.pair_value(pair).unwrap();
    let view = doc.string_view(source, value).unwrap();

    let dt = JsonDateTime::from_json_str(&view).unwrap();
    assert_eq!(dt.year, 2022);
    assert_eq!(dt.month, 1);
    assert_eq!(dt.day, 2);
    assert_eq!(dt.hours, 3);
    assert_eq!(dt.minutes, 4);
    assert_eq!(dt.seconds, 5);
    assert_eq!(dt.milliseconds, 6);

    let mut buf = [0u8; DATETIME_LEN_FULL];
    dt.format_into(&mut buf).unwrap();
    assert_eq!(&buf[..], view.raw().as_bytes());
}

#[test]
fn truncated_document_never_succeeds() {
    let err = parse(r#"{"a":[1,2,"#, Mode::Strict).unwrap_err();
    assert!(matches!(
        err,
        ParseError::MalformedArray | ParseError::MalformedSource
    ));
}

#[test]
fn multibyte_text_narrows_to_placeholders() {
    let source = "[\"na\u{ef}ve \u{1F980} caf\u{e9}\"]";
    let doc = parse(source, Mode::Strict).unwrap();
    let root = doc.root().unwrap();
    let item = doc.array_index(root, 0).unwrap();
    let view = doc.string_view(source, item).unwrap();

    assert_eq!(view.decode(&DecodeOptions::default()), "na~ve ~ caf~");
}

#[test]
fn trailing_comma_split_by_mode() {
    let source = "[1,2,]";

    let doc = parse(source, Mode::Lenient).unwrap();
    let root = doc.root().unwrap();
    assert_eq!(doc.array_iter(root).unwrap().count(), 2);

    assert_eq!(
        parse(source, Mode::Strict).unwrap_err(),
        ParseError::InvalidArrayEnding
    );
}
