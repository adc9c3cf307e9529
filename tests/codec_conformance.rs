//! Codec conformance tests.
//!
//! Exercises the public `parse`/`stringify` surface against the documented
//! grammar, including its deliberate leniencies.

use minijson::{parse, parse_prefix, stringify, EncodingError, FormatError, JsonString, JsonValue};
use std::collections::BTreeMap;

fn object(entries: &[(&str, JsonValue)]) -> JsonValue {
    JsonValue::Object(
        entries
            .iter()
            .map(|(k, v)| (JsonString::from(*k), v.clone()))
            .collect(),
    )
}

// ============================================================================
// Leniency
// ============================================================================

#[test]
fn trailing_garbage_is_not_rejected() {
    assert_eq!(parse("null1234").unwrap(), JsonValue::Null);
    assert_eq!(parse_prefix("null1234").unwrap().1, 4);
}

#[test]
fn trailing_garbage_after_containers() {
    assert_eq!(parse_prefix(r#"{"a":1}xyz"#).unwrap().1, 7);
    assert_eq!(parse("[true]]").unwrap(), JsonValue::Array(vec![true.into()]));
}

#[test]
fn raw_control_characters_accepted_in_strings() {
    assert_eq!(parse("\"a\x01b\nc\"").unwrap(), JsonValue::from("a\x01b\nc"));
}

// ============================================================================
// Whitespace
// ============================================================================

#[test]
fn whitespace_between_tokens_is_insignificant() {
    let compact = parse(r#"{"a":[1,2,{"b":null}],"c":"d"}"#).unwrap();
    let spaced = parse(" \n\t{ \"a\" :\r\n [ 1 ,\t2 , { \"b\" : null } ] ,\n\"c\"  :  \"d\" }  \n").unwrap();
    assert_eq!(compact, spaced);
}

#[test]
fn prefix_does_not_consume_trailing_whitespace() {
    assert_eq!(parse_prefix("  3  ").unwrap(), (JsonValue::Number(3.0), 3));
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn unicode_escape_yields_single_code_unit() {
    let value = parse("\"\\ubeef\\r\\n\"").unwrap();
    assert_eq!(
        value,
        JsonValue::String(JsonString::from_units(vec![0xBEEF, 0x0D, 0x0A]))
    );
}

#[test]
fn unicode_escape_hex_is_case_insensitive() {
    assert_eq!(parse(r#""\u00e9\u00C9""#).unwrap(), JsonValue::from("éÉ"));
}

#[test]
fn surrogate_escapes_are_not_paired() {
    let value = parse(r#""\uD83D\uDE00""#).unwrap();
    let s = value.as_str().unwrap();
    assert_eq!(s.as_units(), &[0xD83D, 0xDE00]);
    // The two units happen to form a valid pair when decoded.
    assert_eq!(s.to_utf8().as_deref(), Some("\u{1F600}"));
}

#[test]
fn unpaired_surrogate_round_trips() {
    let value = parse(r#""x\udc00y""#).unwrap();
    assert_eq!(value.as_str().unwrap().as_units(), &[0x78, 0xDC00, 0x79]);
    let text = stringify(&value).unwrap();
    assert_eq!(text, r#""x\uDC00y""#);
    assert_eq!(parse(&text).unwrap(), value);
}

#[test]
fn stringify_escapes_quote() {
    assert_eq!(stringify(&JsonValue::from("\"")).unwrap(), "\"\\\"\"");
}

#[test]
fn malformed_escapes_rejected() {
    assert!(matches!(parse(r#""\q""#), Err(FormatError::InvalidEscape(_))));
    assert!(matches!(parse(r#""\u00zz""#), Err(FormatError::InvalidHexDigit(_))));
    assert!(matches!(parse(r#""\u00"#), Err(FormatError::TruncatedUnicodeEscape(_))));
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn number_fidelity() {
    assert_eq!(parse("1e3").unwrap(), JsonValue::Number(1000.0));
    assert_eq!(parse("1e+3").unwrap(), JsonValue::Number(1000.0));
    assert_eq!(parse(" 3 ").unwrap(), JsonValue::Number(3.0));
    assert_eq!(parse("1e-3").unwrap(), JsonValue::Number(0.001));
    assert_eq!(stringify(&JsonValue::Number(3.0)).unwrap(), "3");
    assert_eq!(stringify(&JsonValue::Number(0.001)).unwrap(), "0.001");
}

#[test]
fn number_ends_at_end_of_input() {
    assert_eq!(parse("12").unwrap(), JsonValue::Number(12.0));
    assert_eq!(parse("1.25").unwrap(), JsonValue::Number(1.25));
    assert_eq!(parse("2E2").unwrap(), JsonValue::Number(200.0));
}

#[test]
fn decimal_values_are_exact() {
    for text in ["0.1", "0.2", "0.3", "123.456", "9007199254740993", "2.2250738585072014e-308"] {
        let expected: f64 = text.parse().unwrap();
        assert_eq!(parse(text).unwrap(), JsonValue::Number(expected), "{}", text);
    }
}

#[test]
fn truncated_numbers_rejected() {
    assert!(parse("-").is_err());
    assert!(parse("1.").is_err());
    assert!(parse("1e").is_err());
    assert!(parse("1e-").is_err());
}

// ============================================================================
// Rejection
// ============================================================================

#[test]
fn empty_input_rejected() {
    assert_eq!(parse(""), Err(FormatError::UnexpectedEnd(0)));
}

#[test]
fn non_finite_numbers_rejected() {
    for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            stringify(&JsonValue::Number(n)),
            Err(EncodingError::NonFiniteNumber(_))
        ));
    }
}

#[test]
fn non_finite_nested_in_object_rejected() {
    let value = object(&[("ok", 1.0.into()), ("bad", f64::NAN.into())]);
    assert!(stringify(&value).is_err());
}

#[test]
fn overflowing_literal_parses_but_cannot_be_stringified() {
    let value = parse("1e400").unwrap();
    assert_eq!(value, JsonValue::Number(f64::INFINITY));
    assert!(stringify(&value).is_err());
}

#[test]
fn malformed_delimiters_rejected() {
    for text in ["[1 2]", "[1,2", "{\"a\":1", "{\"a\" 1}", "{\"a\":1 \"b\":2}", "{,}", "[,]"] {
        assert!(parse(text).is_err(), "{} should be rejected", text);
    }
}

#[test]
fn error_offsets_point_at_violation() {
    let err = parse("[1, 2, x]").unwrap_err();
    assert_eq!(err, FormatError::UnknownValue(7));
    assert_eq!(err.offset(), 7);
    assert_eq!(err.to_string(), "unknown value at offset 7");
}

#[test]
fn truncated_literals_rejected() {
    assert!(matches!(parse("tru"), Err(FormatError::UnexpectedEnd(3))));
    assert!(matches!(parse("[fals"), Err(FormatError::UnexpectedEnd(5))));
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn empty_containers() {
    let obj = parse("{}").unwrap();
    let arr = parse("[]").unwrap();
    assert_eq!(obj, JsonValue::Object(BTreeMap::new()));
    assert_eq!(arr, JsonValue::Array(vec![]));
    assert_eq!(stringify(&obj).unwrap(), "{}");
    assert_eq!(stringify(&arr).unwrap(), "[]");
}

#[test]
fn duplicate_keys_last_write_wins() {
    let value = parse(r#"{"k": "first", "k": "second"}"#).unwrap();
    assert_eq!(value, object(&[("k", "second".into())]));
}

#[test]
fn nested_round_trip() {
    let text = r#"{"":[[],[1,{"a":2},[3,4]]]}"#;
    let value = parse(text).unwrap();
    assert_eq!(stringify(&value).unwrap(), text);
}

#[test]
fn object_keys_serialize_in_utf16_order() {
    let value = parse(r#"{"b":1,"a":2,"\uFF61":3,"\uD83D\uDE00":4}"#).unwrap();
    assert_eq!(
        stringify(&value).unwrap(),
        "{\"a\":2,\"b\":1,\"\u{1F600}\":4,\"\u{FF61}\":3}"
    );
}

#[test]
fn from_str_delegates_to_parse() {
    let value: JsonValue = "[1, \"two\", null]".parse().unwrap();
    assert_eq!(
        value,
        JsonValue::Array(vec![1.0.into(), "two".into(), JsonValue::Null])
    );
}
