//! minijson - a minimal JSON codec.
//!
//! Converts JSON text into a dynamically typed [`JsonValue`] and back.
//!
//! - [`parse`] reads the first JSON value of a text. Trailing input is
//!   ignored, and `\uXXXX` escapes are kept as single UTF-16 code units
//!   (surrogates are never paired), so strings are [`JsonString`]s of code
//!   units rather than `String`.
//! - [`stringify`] writes compact JSON. NaN and the infinities are rejected.
//!
//! Every number is an `f64`; integer and float spellings are not
//! distinguished after parsing.
//!
//! # Modules
//!
//! - [`json`] - value model, parser and serializer
//! - [`error`] - [`FormatError`] and [`EncodingError`]

// Library code reports failures through Result, never by panicking.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod json;

// Re-export commonly used types
pub use error::{EncodeResult, EncodingError, Error, FormatError, ParseResult};
pub use json::{parse, parse_prefix, stringify, stringify_into, JsonString, JsonValue};
