//! JSON value types.
//!
//! Strings are stored as UTF-16 code units rather than `String`: a `\uXXXX`
//! escape produces exactly one code unit and no surrogate pairing is done,
//! so a parsed string may contain unpaired surrogates that UTF-8 cannot
//! represent.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// A string as a sequence of UTF-16 code units.
///
/// Ordering is lexicographic over code units, which is also the order in
/// which object keys are iterated and serialized.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JsonString {
    units: Vec<u16>,
}

impl JsonString {
    /// Create an empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap raw code units. Unpaired surrogates are allowed.
    pub fn from_units(units: Vec<u16>) -> Self {
        Self { units }
    }

    /// The code units of this string.
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// Number of code units (not characters).
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns true if the string has no code units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Append a single code unit.
    pub fn push_unit(&mut self, unit: u16) {
        self.units.push(unit);
    }

    /// Append a character as one or two code units.
    pub fn push_char(&mut self, ch: char) {
        let mut buf = [0u16; 2];
        self.units.extend_from_slice(ch.encode_utf16(&mut buf));
    }

    /// Convert to UTF-8, or `None` if the string holds an unpaired surrogate.
    pub fn to_utf8(&self) -> Option<String> {
        String::from_utf16(&self.units).ok()
    }

    /// Convert to UTF-8, replacing unpaired surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }
}

impl From<&str> for JsonString {
    fn from(s: &str) -> Self {
        Self {
            units: s.encode_utf16().collect(),
        }
    }
}

impl From<String> for JsonString {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Vec<u16>> for JsonString {
    fn from(units: Vec<u16>) -> Self {
        Self::from_units(units)
    }
}

impl PartialEq<str> for JsonString {
    fn eq(&self, other: &str) -> bool {
        self.units.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for JsonString {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Display for JsonString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for decoded in char::decode_utf16(self.units.iter().copied()) {
            let ch = decoded.unwrap_or(char::REPLACEMENT_CHARACTER);
            fmt::Write::write_char(f, ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for JsonString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for decoded in char::decode_utf16(self.units.iter().copied()) {
            match decoded {
                Ok(ch) => write!(f, "{}", ch.escape_debug())?,
                // Lone surrogates are shown as the escape that produced them.
                Err(e) => write!(f, "\\u{:04X}", e.unpaired_surrogate())?,
            }
        }
        f.write_str("\"")
    }
}

/// A JSON value.
///
/// Exactly six variants; numbers are always `f64`. Equality is structural,
/// with IEEE-754 semantics for numbers, so the type is `PartialEq` but not
/// `Eq`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    /// JSON null literal
    #[default]
    Null,
    /// JSON boolean (true/false)
    Bool(bool),
    /// JSON number
    Number(f64),
    /// JSON string as UTF-16 code units
    String(JsonString),
    /// JSON array of values
    Array(Vec<JsonValue>),
    /// JSON object, keys iterated in code unit order
    Object(BTreeMap<JsonString, JsonValue>),
}

impl JsonValue {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns the boolean value if this is a Bool, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a Number, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&JsonString> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the array if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a reference to the object if this is an Object, None otherwise.
    pub fn as_object(&self) -> Option<&BTreeMap<JsonString, JsonValue>> {
        match self {
            JsonValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get a value from an object by key.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(map) => map.get(&JsonString::from(key)),
            _ => None,
        }
    }

    /// Get a value from an array by index.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        match self {
            JsonValue::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    /// Returns the type name as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<f64> for JsonValue {
    fn from(n: f64) -> Self {
        JsonValue::Number(n)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::String(JsonString::from(s))
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(JsonString::from(s))
    }
}

impl From<JsonString> for JsonValue {
    fn from(s: JsonString) -> Self {
        JsonValue::String(s)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(arr: Vec<JsonValue>) -> Self {
        JsonValue::Array(arr)
    }
}

impl From<BTreeMap<JsonString, JsonValue>> for JsonValue {
    fn from(map: BTreeMap<JsonString, JsonValue>) -> Self {
        JsonValue::Object(map)
    }
}

impl FromStr for JsonValue {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parser::parse(s)
    }
}
