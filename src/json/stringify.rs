//! JSON serialization.
//!
//! Produces compact JSON text with no insignificant whitespace. Object keys
//! come out in map iteration order, which for [`JsonValue::Object`] is
//! UTF-16 code unit order.

use std::collections::BTreeMap;

use super::types::{JsonString, JsonValue};
use crate::error::{EncodeResult, EncodingError};

/// Serialize an f64 to its shortest round-trippable decimal form.
///
/// Follows the ECMAScript `Number.prototype.toString` choice of notation:
/// plain decimals for magnitudes in `[1e-6, 1e21)` and zero, exponent
/// notation otherwise. Non-finite numbers have no JSON form.
pub fn serialize_number(value: f64) -> EncodeResult<String> {
    if !value.is_finite() {
        return Err(EncodingError::NonFiniteNumber(value));
    }

    let abs = value.abs();
    if abs == 0.0 || (1e-6..1e21).contains(&abs) {
        Ok(format!("{}", value))
    } else {
        Ok(format!("{:e}", value))
    }
}

/// Serialize a JsonValue to JSON text.
pub fn stringify(value: &JsonValue) -> EncodeResult<String> {
    let mut output = String::new();
    stringify_into(value, &mut output)?;
    Ok(output)
}

/// Serialize a JsonValue, appending to `output`.
///
/// On error `output` may hold a partial rendering and should be discarded.
pub fn stringify_into(value: &JsonValue, output: &mut String) -> EncodeResult<()> {
    serialize_value(value, output).map_err(|err| {
        tracing::debug!(error = %err, "json stringify failed");
        err
    })
}

fn serialize_value(value: &JsonValue, output: &mut String) -> EncodeResult<()> {
    match value {
        JsonValue::Null => output.push_str("null"),
        JsonValue::Bool(true) => output.push_str("true"),
        JsonValue::Bool(false) => output.push_str("false"),
        JsonValue::Number(n) => output.push_str(&serialize_number(*n)?),
        JsonValue::String(s) => serialize_string(s, output),
        JsonValue::Array(arr) => serialize_array(arr, output)?,
        JsonValue::Object(obj) => serialize_object(obj, output)?,
    }
    Ok(())
}

/// Serialize a string with JSON escaping.
///
/// Unpaired surrogates cannot be written as UTF-8, so they are emitted as
/// `\uXXXX` escapes, which parse back to the same code unit.
pub fn serialize_string(s: &JsonString, output: &mut String) {
    output.push('"');
    for decoded in char::decode_utf16(s.as_units().iter().copied()) {
        match decoded {
            Ok('"') => output.push_str("\\\""),
            Ok('\\') => output.push_str("\\\\"),
            Ok('\n') => output.push_str("\\n"),
            Ok('\x08') => output.push_str("\\b"),
            Ok('\x0C') => output.push_str("\\f"),
            Ok('\r') => output.push_str("\\r"),
            Ok('\t') => output.push_str("\\t"),
            Ok(c) if c < '\x20' => {
                output.push_str(&format!("\\u{:04X}", c as u32));
            }
            Ok(c) => output.push(c),
            Err(lone) => {
                output.push_str(&format!("\\u{:04X}", lone.unpaired_surrogate()));
            }
        }
    }
    output.push('"');
}

fn serialize_array(arr: &[JsonValue], output: &mut String) -> EncodeResult<()> {
    output.push('[');
    for (i, value) in arr.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        serialize_value(value, output)?;
    }
    output.push(']');
    Ok(())
}

fn serialize_object(obj: &BTreeMap<JsonString, JsonValue>, output: &mut String) -> EncodeResult<()> {
    output.push('{');
    for (i, (key, value)) in obj.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        serialize_string(key, output);
        output.push(':');
        serialize_value(value, output)?;
    }
    output.push('}');
    Ok(())
}
