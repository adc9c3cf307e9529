//! Property tests: `parse(stringify(v)) == v` for any value with finite
//! numbers, including strings with unpaired surrogates.

use minijson::{parse, stringify, JsonString, JsonValue};
use proptest::prelude::*;

fn arb_string() -> impl Strategy<Value = JsonString> {
    prop_oneof![
        any::<String>().prop_map(JsonString::from),
        // Arbitrary code units, surrogates included.
        prop::collection::vec(any::<u16>(), 0..8).prop_map(JsonString::from_units),
    ]
}

fn arb_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<i32>().prop_map(f64::from),
        any::<f64>().prop_filter("finite", |n| n.is_finite()),
    ]
}

fn arb_value() -> impl Strategy<Value = JsonValue> {
    let leaf = prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Bool),
        arb_number().prop_map(JsonValue::Number),
        arb_string().prop_map(JsonValue::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(JsonValue::Array),
            prop::collection::btree_map(arb_string(), inner, 0..6).prop_map(JsonValue::Object),
        ]
    })
}

proptest! {
    #[test]
    fn stringify_then_parse_is_identity(value in arb_value()) {
        let text = stringify(&value).unwrap();
        prop_assert_eq!(parse(&text).unwrap(), value);
    }

    #[test]
    fn numbers_round_trip_bit_for_bit(n in arb_number()) {
        let text = stringify(&JsonValue::Number(n)).unwrap();
        let back = parse(&text).unwrap().as_f64().unwrap();
        prop_assert_eq!(back.to_bits(), n.to_bits(), "text was {}", text);
    }

    #[test]
    fn surrounding_whitespace_is_ignored(value in arb_value(), pad in "[ \t\r\n]{0,4}") {
        let text = stringify(&value).unwrap();
        let padded = format!("{}{}{}", pad, text, pad);
        prop_assert_eq!(parse(&padded).unwrap(), value);
    }
}
