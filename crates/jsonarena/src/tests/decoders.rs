use alloc::string::String;

use super::parse_strict;
use crate::{DecodeError, DecodeOptions, JsonNumber, JsonStr};

fn string_at<'s>(source: &'s str, idx: usize) -> JsonStr<'s> {
    // the view borrows only the source, so the document can go away
    let doc = parse_strict(source).unwrap();
    let root = doc.root().unwrap();
    let item = doc.array_index(root, idx).unwrap();
    doc.string_view(source, item).unwrap()
}

#[test]
fn plain_strings_copy_verbatim() {
    let s = string_at(r#"["hello"]"#, 0);
    assert_eq!(s.decode(&DecodeOptions::default()), "hello");
    assert_eq!(s.len(), 5);
}

#[test]
fn escapes_are_substituted() {
    let s = string_at(r#"["a\nb\"c\\d"]"#, 0);
    assert_eq!(s.decode(&DecodeOptions::default()), "a\nb\"c\\d");
}

#[test]
fn remappable_escapes_use_configured_substitutes() {
    let s = string_at(r#"["x\ty\rz\b\f"]"#, 0);
    // defaults: tab and backspace/formfeed become spaces, CR becomes LF
    assert_eq!(s.decode(&DecodeOptions::default()), "x y\nz  ");

    let options = DecodeOptions {
        tab: b'T',
        carriage_return: b'R',
        backspace: b'B',
        formfeed: b'F',
        ..DecodeOptions::default()
    };
    assert_eq!(s.decode(&options), "xTyRzBF");
}

#[test]
fn unrecognized_escape_is_one_placeholder() {
    let s = string_at(r#"["a\qb"]"#, 0);
    assert_eq!(s.decode(&DecodeOptions::default()), "a~b");
}

#[test]
fn multibyte_utf8_collapses_to_placeholder() {
    let source = "[\"na\u{ef}ve\"]";
    let s = string_at(source, 0);
    assert_eq!(s.decode(&DecodeOptions::default()), "na~ve");

    // four-byte sequences collapse to a single placeholder too
    let source = "[\"a\u{1F600}b\"]";
    let s = string_at(source, 0);
    assert_eq!(s.decode(&DecodeOptions::default()), "a~b");
}

#[test]
fn utf8_passthrough_when_substitution_disabled() {
    let source = "[\"na\u{ef}ve\"]";
    let s = string_at(source, 0);
    let options = DecodeOptions {
        substitute_utf8: false,
        ..DecodeOptions::default()
    };
    assert_eq!(s.decode(&options), "na\u{ef}ve");
}

#[test]
fn nonprintable_ascii_is_dropped() {
    let source = "[\"a\u{1}b\u{7f}c\"]";
    let s = string_at(source, 0);
    assert_eq!(s.decode(&DecodeOptions::default()), "abc");

    let options = DecodeOptions {
        filter_nonprintable: false,
        ..DecodeOptions::default()
    };
    assert_eq!(s.decode(&options), "a\u{1}b\u{7f}c");
}

#[test]
fn decode_into_reports_written_bytes() {
    let source = r#"["na\u00efve"]"#;
    let s = string_at(source, 0);
    let mut buf = [0u8; 32];
    let written = s.decode_into(&mut buf, &DecodeOptions::default());
    // "\u" is an unrecognized escape: placeholder, then the hex digits
    // pass through as plain text
    assert_eq!(&buf[..written], b"na~00efve");
    assert!(written <= s.len());
}

#[test]
fn non_ascii_placeholder_is_raw_in_decode_into_and_lossy_in_decode() {
    let source = "[\"a\u{e9}b\"]";
    let s = string_at(source, 0);
    let options = DecodeOptions {
        placeholder: 0xFF,
        ..DecodeOptions::default()
    };

    // the byte-level path writes the configured byte verbatim
    let mut buf = [0u8; 8];
    let written = s.decode_into(&mut buf, &options);
    assert_eq!(&buf[..written], &[b'a', 0xFF, b'b']);

    // the owned-string path cannot represent a lone 0xFF byte
    assert_eq!(s.decode(&options), "a\u{fffd}b");
}

#[test]
fn number_classification() {
    let options = DecodeOptions::default();
    assert_eq!(JsonNumber::decode("42", &options), Ok(JsonNumber::Unsigned(42)));
    assert_eq!(JsonNumber::decode("0", &options), Ok(JsonNumber::Unsigned(0)));
    assert_eq!(JsonNumber::decode("-17", &options), Ok(JsonNumber::Signed(-17)));
    assert_eq!(JsonNumber::decode("3.25", &options), Ok(JsonNumber::Real(3.25)));
    assert_eq!(JsonNumber::decode("1e3", &options), Ok(JsonNumber::Real(1000.0)));
    assert_eq!(JsonNumber::decode("-2.5E-1", &options), Ok(JsonNumber::Real(-0.25)));
}

#[test]
fn number_from_node() {
    let source = "[42, -17, 3.25]";
    let doc = parse_strict(source).unwrap();
    let root = doc.root().unwrap();
    let options = DecodeOptions::default();

    let decoded: alloc::vec::Vec<JsonNumber> = doc
        .array_iter(root)
        .unwrap()
        .map(|id| doc.number_value(source, id, &options).unwrap())
        .collect();
    assert_eq!(
        decoded,
        [
            JsonNumber::Unsigned(42),
            JsonNumber::Signed(-17),
            JsonNumber::Real(3.25)
        ]
    );

    // a non-number node refuses to decode
    let source = r#"["x"]"#;
    let doc = parse_strict(source).unwrap();
    let item = doc.array_index(doc.root().unwrap(), 0).unwrap();
    assert_eq!(
        doc.number_value(source, item, &options),
        Err(DecodeError::MalformedNumber)
    );
}

#[test]
fn oversized_number_literal_fails_outright() {
    let options = DecodeOptions::default();
    let long: String = core::iter::repeat_n('9', options.max_number_len).collect();
    assert_eq!(
        JsonNumber::decode(&long, &options),
        Err(DecodeError::NumberTooLong)
    );
    // one under the bound still decodes
    let ok: String = core::iter::repeat_n('9', 19).collect();
    assert!(JsonNumber::decode(&ok, &options).is_ok());
}

#[test]
fn overflow_behavior_is_documented_not_detected() {
    let options = DecodeOptions::default();
    // 2^64 wraps to zero under the digit-by-digit accumulation
    assert_eq!(
        JsonNumber::decode("18446744073709551616", &options),
        Ok(JsonNumber::Unsigned(0))
    );
    // out-of-range signed values clamp
    assert_eq!(
        JsonNumber::decode("-99999999999999999999", &options),
        Ok(JsonNumber::Signed(i64::MIN))
    );
}
