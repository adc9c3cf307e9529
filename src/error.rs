//! Error types for the codec.
//!
//! Parsing and serialization fail in disjoint ways, so each direction gets
//! its own error enum. [`Error`] unifies them for callers that drive both.

use thiserror::Error;

/// Malformed or truncated input passed to [`crate::parse`].
///
/// Every variant carries the byte offset into the input at which the
/// violation was detected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum FormatError {
    /// Input ended while a value was still expected or incomplete.
    #[error("unexpected end of input at offset {0}")]
    UnexpectedEnd(usize),

    /// The lookahead does not start any JSON value.
    #[error("unknown value at offset {0}")]
    UnknownValue(usize),

    /// Object member does not start with a string key.
    #[error("object expected string key at offset {0}")]
    ExpectedKey(usize),

    /// Object key is not followed by `:`.
    #[error("object expected ':' at offset {0}")]
    ExpectedColon(usize),

    /// Object member is followed by neither `,` nor `}`.
    #[error("object expected ',' or '}}' at offset {0}")]
    ExpectedCommaOrBrace(usize),

    /// Array element is followed by neither `,` nor `]`.
    #[error("array expected ',' or ']' at offset {0}")]
    ExpectedCommaOrBracket(usize),

    /// Backslash followed by a character that is not a JSON escape.
    #[error("invalid escape sequence at offset {0}")]
    InvalidEscape(usize),

    /// `\u` escape containing a non-hexadecimal character.
    #[error("invalid hexadecimal character in unicode escape at offset {0}")]
    InvalidHexDigit(usize),

    /// `\u` escape with fewer than four characters left in the input.
    #[error("unicode escape not length 4 at offset {0}")]
    TruncatedUnicodeEscape(usize),

    /// Number without a digit after the optional sign.
    #[error("expected digit at offset {0}")]
    ExpectedDigit(usize),

    /// Decimal point followed by no digits.
    #[error("decimal point followed by no digits at offset {0}")]
    MissingFractionDigits(usize),

    /// Exponent marker followed by no digits.
    #[error("exponent not followed by digits at offset {0}")]
    MissingExponentDigits(usize),
}

impl FormatError {
    /// Byte offset into the input at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            FormatError::UnexpectedEnd(at)
            | FormatError::UnknownValue(at)
            | FormatError::ExpectedKey(at)
            | FormatError::ExpectedColon(at)
            | FormatError::ExpectedCommaOrBrace(at)
            | FormatError::ExpectedCommaOrBracket(at)
            | FormatError::InvalidEscape(at)
            | FormatError::InvalidHexDigit(at)
            | FormatError::TruncatedUnicodeEscape(at)
            | FormatError::ExpectedDigit(at)
            | FormatError::MissingFractionDigits(at)
            | FormatError::MissingExponentDigits(at) => *at,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            FormatError::UnexpectedEnd(_) => "UnexpectedEnd",
            FormatError::UnknownValue(_) => "UnknownValue",
            FormatError::ExpectedKey(_) => "ExpectedKey",
            FormatError::ExpectedColon(_) => "ExpectedColon",
            FormatError::ExpectedCommaOrBrace(_) => "ExpectedCommaOrBrace",
            FormatError::ExpectedCommaOrBracket(_) => "ExpectedCommaOrBracket",
            FormatError::InvalidEscape(_) => "InvalidEscape",
            FormatError::InvalidHexDigit(_) => "InvalidHexDigit",
            FormatError::TruncatedUnicodeEscape(_) => "TruncatedUnicodeEscape",
            FormatError::ExpectedDigit(_) => "ExpectedDigit",
            FormatError::MissingFractionDigits(_) => "MissingFractionDigits",
            FormatError::MissingExponentDigits(_) => "MissingExponentDigits",
        }
    }
}

/// A value that cannot be rendered as JSON text by [`crate::stringify`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EncodingError {
    /// NaN and the infinities have no JSON representation.
    #[error("number {0} is not JSON convertible")]
    NonFiniteNumber(f64),
}

/// Either direction of the codec failing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Parse failure.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Stringify failure.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// Result type for [`crate::parse`].
pub type ParseResult<T> = Result<T, FormatError>;

/// Result type for [`crate::stringify`].
pub type EncodeResult<T> = Result<T, EncodingError>;
