//! JSON parsing and serialization.
//!
//! # Architecture
//!
//! - [`types`] - Value model (`JsonValue`, `JsonString`)
//! - [`cursor`] - Forward-only read position shared by the sub-parsers
//! - [`parser`] - Recursive descent parser
//! - [`stringify`] - Compact serializer
//!
//! # Example
//!
//! ```
//! use minijson::json::{parse, stringify, JsonValue};
//!
//! let value = parse(r#"{"b": [1, 2.5e1], "a": "xA"}"#).unwrap();
//! assert_eq!(value.get("a").unwrap().as_str().unwrap(), "xA");
//!
//! // Keys come out in UTF-16 order with no whitespace.
//! assert_eq!(stringify(&value).unwrap(), r#"{"a":"xA","b":[1,25]}"#);
//!
//! // Input after the first complete value is ignored.
//! assert_eq!(parse("null1234").unwrap(), JsonValue::Null);
//! ```

pub mod cursor;
pub mod parser;
pub mod stringify;
pub mod types;

pub use parser::{parse, parse_prefix, Parser};
pub use stringify::{serialize_number, stringify, stringify_into};
pub use types::{JsonString, JsonValue};
