//! Recursive descent JSON parser.
//!
//! The grammar is deliberately lenient in two places: input after the first
//! complete value is ignored (`null1234` parses as `null`), and raw control
//! characters inside strings are accepted as-is.
//!
//! Recursion depth equals the nesting depth of the input. There is no depth
//! guard, so pathologically deep input can exhaust the stack.

use std::collections::BTreeMap;

use super::cursor::Cursor;
use super::types::{JsonString, JsonValue};
use crate::error::{FormatError, ParseResult};

/// Largest mantissa that converts to `f64` without rounding.
const MAX_EXACT_MANTISSA: u64 = 1 << 53;

/// Powers of ten that are exactly representable as `f64`.
const POW10: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// JSON parser over a single input text.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Byte offset of the first character not yet consumed.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Parse a single JSON value, skipping leading whitespace.
    ///
    /// The cursor is left on the first character after the value.
    pub fn parse_value(&mut self) -> ParseResult<JsonValue> {
        self.cursor.skip_whitespace();
        let at = self.cursor.position();

        match self.cursor.require()? {
            b'{' => {
                self.cursor.bump();
                self.parse_object()
            }
            b'[' => {
                self.cursor.bump();
                self.parse_array()
            }
            b'"' => {
                self.cursor.bump();
                self.parse_string().map(JsonValue::String)
            }
            b'-' | b'0'..=b'9' => self.parse_number().map(JsonValue::Number),
            _ if self.cursor.eat_literal("null") => Ok(JsonValue::Null),
            _ if self.cursor.eat_literal("true") => Ok(JsonValue::Bool(true)),
            _ if self.cursor.eat_literal("false") => Ok(JsonValue::Bool(false)),
            _ => {
                // A literal cut short by the end of input is truncation, not garbage.
                let rest = self.cursor.rest();
                if ["null", "true", "false"].iter().any(|lit| lit.starts_with(rest)) {
                    Err(FormatError::UnexpectedEnd(self.cursor.len()))
                } else {
                    Err(FormatError::UnknownValue(at))
                }
            }
        }
    }

    /// Parse an object; the opening brace is already consumed.
    fn parse_object(&mut self) -> ParseResult<JsonValue> {
        let mut map = BTreeMap::new();

        self.cursor.skip_whitespace();
        if self.cursor.eat(b'}') {
            return Ok(JsonValue::Object(map));
        }

        loop {
            if self.cursor.require()? != b'"' {
                return Err(FormatError::ExpectedKey(self.cursor.position()));
            }
            self.cursor.bump();
            let key = self.parse_string()?;

            self.cursor.skip_whitespace();
            if self.cursor.require()? != b':' {
                return Err(FormatError::ExpectedColon(self.cursor.position()));
            }
            self.cursor.bump();

            // Duplicate keys: last one wins.
            let value = self.parse_value()?;
            map.insert(key, value);

            self.cursor.skip_whitespace();
            match self.cursor.require()? {
                b',' => {
                    self.cursor.bump();
                    self.cursor.skip_whitespace();
                }
                b'}' => {
                    self.cursor.bump();
                    return Ok(JsonValue::Object(map));
                }
                _ => return Err(FormatError::ExpectedCommaOrBrace(self.cursor.position())),
            }
        }
    }

    /// Parse an array; the opening bracket is already consumed.
    fn parse_array(&mut self) -> ParseResult<JsonValue> {
        let mut arr = Vec::new();

        self.cursor.skip_whitespace();
        if self.cursor.eat(b']') {
            return Ok(JsonValue::Array(arr));
        }

        loop {
            arr.push(self.parse_value()?);

            self.cursor.skip_whitespace();
            match self.cursor.require()? {
                b',' => {
                    self.cursor.bump();
                    self.cursor.skip_whitespace();
                }
                b']' => {
                    self.cursor.bump();
                    return Ok(JsonValue::Array(arr));
                }
                _ => return Err(FormatError::ExpectedCommaOrBracket(self.cursor.position())),
            }
        }
    }

    /// Parse a string body; the opening quote is already consumed.
    fn parse_string(&mut self) -> ParseResult<JsonString> {
        let mut result = JsonString::new();

        loop {
            let at = self.cursor.position();
            match self.cursor.next_char() {
                None => return Err(FormatError::UnexpectedEnd(at)),
                Some('"') => return Ok(result),
                Some('\\') => self.parse_escape(&mut result)?,
                Some(ch) => result.push_char(ch),
            }
        }
    }

    /// Read an escape sequence after a backslash.
    fn parse_escape(&mut self, out: &mut JsonString) -> ParseResult<()> {
        let at = self.cursor.position();
        let ch = match self.cursor.next_char() {
            None => return Err(FormatError::UnexpectedEnd(at)),
            Some(c @ ('"' | '/' | '\\')) => c,
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('f') => '\x0C',
            Some('b') => '\x08',
            Some('u') => {
                out.push_unit(self.parse_unicode_escape()?);
                return Ok(());
            }
            Some(_) => return Err(FormatError::InvalidEscape(at)),
        };
        out.push_char(ch);
        Ok(())
    }

    /// Read the four hex digits of a `\uXXXX` escape as one code unit.
    ///
    /// Surrogates are kept as they are; `\uD83D\uDE00` yields two units.
    fn parse_unicode_escape(&mut self) -> ParseResult<u16> {
        let start = self.cursor.position();
        if self.cursor.rest().chars().take(4).count() < 4 {
            return Err(FormatError::TruncatedUnicodeEscape(start));
        }

        let mut unit: u16 = 0;
        for _ in 0..4 {
            let at = self.cursor.position();
            let digit = self
                .cursor
                .next_char()
                .and_then(|c| c.to_digit(16))
                .ok_or(FormatError::InvalidHexDigit(at))?;
            unit = (unit << 4) | digit as u16;
        }
        Ok(unit)
    }

    /// Parse a number.
    ///
    /// The grammar is checked digit by digit here; only the final conversion
    /// of an already validated token may go through `str::parse`.
    fn parse_number(&mut self) -> ParseResult<f64> {
        let negative = self.cursor.eat(b'-');
        let start = self.cursor.position();

        // A leading zero ends the integer part; "01" leaves "1" unconsumed.
        let int_part = match self.cursor.require()? {
            b'0' => {
                self.cursor.bump();
                self.cursor.slice_from(start)
            }
            b'1'..=b'9' => self.cursor.take_digits(),
            _ => return Err(FormatError::ExpectedDigit(start)),
        };

        let mut frac_part = "";
        if self.cursor.eat(b'.') {
            frac_part = self.cursor.take_digits();
            if frac_part.is_empty() {
                return Err(FormatError::MissingFractionDigits(self.cursor.position()));
            }
        }

        let mut exponent: i64 = 0;
        if let Some(b'e' | b'E') = self.cursor.peek() {
            self.cursor.bump();
            let exp_negative = match self.cursor.peek() {
                Some(b'-') => {
                    self.cursor.bump();
                    true
                }
                Some(b'+') => {
                    self.cursor.bump();
                    false
                }
                _ => false,
            };
            let exp_digits = self.cursor.take_digits();
            if exp_digits.is_empty() {
                return Err(FormatError::MissingExponentDigits(self.cursor.position()));
            }
            exponent = exp_digits.bytes().fold(0i64, |acc, d| {
                acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
            });
            if exp_negative {
                exponent = -exponent;
            }
        }

        let token = self.cursor.slice_from(start);
        let magnitude = decimal_to_f64(int_part, frac_part, exponent, token)
            .ok_or(FormatError::ExpectedDigit(start))?;

        Ok(if negative { -magnitude } else { magnitude })
    }
}

/// Convert scanned decimal digits to the nearest `f64`.
///
/// `int_part` and `frac_part` are ASCII digit runs and the value is
/// `int_part.frac_part * 10^exponent`. `token` is the full unsigned number
/// text, used when the exact fast path does not apply.
fn decimal_to_f64(int_part: &str, frac_part: &str, exponent: i64, token: &str) -> Option<f64> {
    let mut mantissa: u64 = 0;
    for d in int_part.bytes().chain(frac_part.bytes()) {
        mantissa = match mantissa
            .checked_mul(10)
            .and_then(|m| m.checked_add(u64::from(d - b'0')))
        {
            Some(m) if m <= MAX_EXACT_MANTISSA => m,
            _ => return token.parse().ok(),
        };
    }

    if mantissa == 0 {
        return Some(0.0);
    }

    let frac_len = i64::try_from(frac_part.len()).unwrap_or(i64::MAX);
    let scale = exponent.saturating_sub(frac_len);

    // Both operands are exact, so one IEEE operation rounds correctly.
    match scale {
        0..=22 => Some(mantissa as f64 * POW10[scale as usize]),
        -22..=-1 => Some(mantissa as f64 / POW10[(-scale) as usize]),
        _ => token.parse().ok(),
    }
}

/// Parse a JSON text into a JsonValue.
///
/// Anything after the first complete value is ignored.
pub fn parse(input: &str) -> ParseResult<JsonValue> {
    parse_prefix(input).map(|(value, _)| value)
}

/// Parse the leading JSON value of `input`.
///
/// Returns the value and the byte offset just past it. Trailing whitespace
/// is not consumed.
pub fn parse_prefix(input: &str) -> ParseResult<(JsonValue, usize)> {
    let mut parser = Parser::new(input);
    match parser.parse_value() {
        Ok(value) => {
            let consumed = parser.position();
            tracing::trace!(
                consumed,
                total = input.len(),
                kind = value.type_name(),
                "parsed json value"
            );
            Ok((value, consumed))
        }
        Err(err) => {
            tracing::debug!(error = %err, offset = err.offset(), "json parse failed");
            Err(err)
        }
    }
}
