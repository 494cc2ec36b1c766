//! Forgiving parser for user-typed LIN frame IDs.
//!
//! An ID is one or two digits with at most one affix that fixes the base:
//!
//! | Form | Example | Base |
//! |------|---------|------|
//! | `0x`/`0X` prefix | `0x3F` | hex |
//! | `x`/`X` prefix | `x3F` | hex |
//! | no affix | `3F`, `27`, `7` | hex |
//! | `h`/`H`/`x`/`X` suffix | `3Fh`, `27X` | hex |
//! | `d`/`D` suffix | `27d`, `3D` | decimal |
//!
//! Two decimal-range digits without an affix are read as hexadecimal, so `27`
//! is 0x27. A caller can force either base with a [`BaseHint`]; under a forced
//! decimal base any hex-only digit or hex affix is rejected.
//!
//! The parser is a small state machine advanced one character at a time with a
//! single character of look-ahead. It neither allocates nor backtracks.
//!
//! # Example
//!
//! ```
//! use lin_pid::{parse, parse_with_hint, BaseHint, NumericBase};
//!
//! assert_eq!(parse("0x27", false, false), Ok(0x27));
//! assert_eq!(parse("27", false, false), Ok(0x27));
//! assert_eq!(parse("27d", false, false), Ok(27));
//!
//! let parsed = parse_with_hint("27", BaseHint::Decimal).unwrap();
//! assert_eq!(parsed.value, 27);
//! assert_eq!(parsed.base, NumericBase::Decimal);
//! ```

use core::str::FromStr;

use log::{debug, trace};

use crate::error::{CharPosition, ParseError};

/// Number of leading blanks (spaces or tabs) skipped before the ID.
pub const MAX_LEADING_WHITESPACE: usize = 10;

const INVALID_DIGIT: u8 = 0xFF;

/// ASCII digit values; non-digits map to `INVALID_DIGIT`.
const DIGIT_TABLE: [u8; 128] = build_digit_table();

const fn build_digit_table() -> [u8; 128] {
    let mut table = [INVALID_DIGIT; 128];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        table[b'A' as usize + i] = 10 + i as u8;
        table[b'a' as usize + i] = 10 + i as u8;
        i += 1;
    }
    table
}

fn digit_value(ch: char) -> Option<u8> {
    match DIGIT_TABLE.get(ch as usize) {
        Some(&value) if value != INVALID_DIGIT => Some(value),
        _ => None,
    }
}

#[inline]
fn is_hex_only(ch: char) -> bool {
    ch.is_ascii_hexdigit() && !ch.is_ascii_digit()
}

/// The base an ID is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericBase {
    /// Not decided yet. Never reported for a successful parse.
    #[default]
    Indeterminate,
    /// Base 16.
    Hex,
    /// Base 10.
    Decimal,
}

/// Base requested by the caller ahead of parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseHint {
    /// Decide from the token itself.
    #[default]
    Auto,
    /// Treat the digits as hexadecimal.
    Hex,
    /// Treat the digits as decimal.
    Decimal,
}

impl BaseHint {
    /// Build a hint from a pair of force flags.
    ///
    /// Both flags together are rejected with [`ParseError::ConflictingBaseHints`].
    pub fn from_flags(force_hex: bool, force_decimal: bool) -> Result<Self, ParseError> {
        match (force_hex, force_decimal) {
            (false, false) => Ok(BaseHint::Auto),
            (true, false) => Ok(BaseHint::Hex),
            (false, true) => Ok(BaseHint::Decimal),
            (true, true) => Err(ParseError::ConflictingBaseHints),
        }
    }
}

/// A successfully parsed ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedId {
    /// The parsed value. Not range-checked against the LIN ID range.
    pub value: u8,
    /// The resolved base, either [`NumericBase::Hex`] or [`NumericBase::Decimal`].
    pub base: NumericBase,
}

impl FromStr for ParsedId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_with_hint(s, BaseHint::Auto)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing significant read yet.
    Start,
    /// A hex prefix was read; a digit must follow.
    AfterPrefix,
    /// One digit read.
    OneDigit,
    /// Two digits read; only a suffix may follow.
    TwoDigits,
    /// Digits and a suffix read; nothing may follow.
    Complete,
}

#[derive(Debug)]
struct Lexer {
    state: State,
    base: NumericBase,
    prefixed: bool,
    first: Option<char>,
    second: Option<char>,
}

impl Lexer {
    fn new(hint: BaseHint) -> Self {
        let base = match hint {
            BaseHint::Auto => NumericBase::Indeterminate,
            BaseHint::Hex => NumericBase::Hex,
            BaseHint::Decimal => NumericBase::Decimal,
        };
        Self {
            state: State::Start,
            base,
            prefixed: false,
            first: None,
            second: None,
        }
    }

    fn is_decimal(&self) -> bool {
        self.base == NumericBase::Decimal
    }

    /// Fix the base. Committing to the other base once one is fixed is an error.
    fn commit(&mut self, base: NumericBase) -> Result<(), ParseError> {
        match self.base {
            NumericBase::Indeterminate => {
                trace!("ID base resolved to {base:?} in state {:?}", self.state);
                self.base = base;
                Ok(())
            }
            current if current == base => Ok(()),
            _ => Err(ParseError::MixedHexAndDecimalAffixes),
        }
    }

    fn step(&mut self, ch: char, next: Option<char>) -> Result<(), ParseError> {
        match self.state {
            State::Start => match ch {
                'x' | 'X' => self.hex_prefix(CharPosition::First),
                c if c.is_ascii_hexdigit() => self.first_digit(c),
                c => Err(ParseError::InvalidCharacter {
                    position: CharPosition::First,
                    found: c,
                }),
            },
            State::AfterPrefix => {
                if ch.is_ascii_hexdigit() {
                    self.first_digit(ch)
                } else {
                    Err(ParseError::InvalidCharacter {
                        position: CharPosition::First,
                        found: ch,
                    })
                }
            }
            State::OneDigit => self.after_one_digit(ch, next),
            State::TwoDigits => self.after_two_digits(ch),
            State::Complete => Err(ParseError::TooManyDigits),
        }
    }

    fn hex_prefix(&mut self, position: CharPosition) -> Result<(), ParseError> {
        if self.is_decimal() {
            return Err(ParseError::HexDigitUnderDecimalSetting { position });
        }
        self.commit(NumericBase::Hex)?;
        self.prefixed = true;
        self.state = State::AfterPrefix;
        Ok(())
    }

    fn first_digit(&mut self, ch: char) -> Result<(), ParseError> {
        if is_hex_only(ch) {
            if self.is_decimal() {
                return Err(ParseError::HexDigitUnderDecimalSetting {
                    position: CharPosition::First,
                });
            }
            self.commit(NumericBase::Hex)?;
        }
        self.first = Some(ch);
        self.state = State::OneDigit;
        Ok(())
    }

    fn second_digit(&mut self, ch: char) -> Result<(), ParseError> {
        if is_hex_only(ch) {
            if self.is_decimal() {
                return Err(ParseError::HexDigitUnderDecimalSetting {
                    position: CharPosition::Second,
                });
            }
            self.commit(NumericBase::Hex)?;
        }
        self.second = Some(ch);
        self.state = State::TwoDigits;
        Ok(())
    }

    fn hex_suffix(&mut self) -> Result<(), ParseError> {
        if self.prefixed {
            return Err(ParseError::TooManyDigits);
        }
        if self.is_decimal() {
            return Err(ParseError::InvalidDecimalSuffix);
        }
        self.commit(NumericBase::Hex)?;
        self.state = State::Complete;
        Ok(())
    }

    fn after_one_digit(&mut self, ch: char, next: Option<char>) -> Result<(), ParseError> {
        match ch {
            '0'..='9' => self.second_digit(ch),
            // "0x" followed by more characters is a prefix, "0x" alone is zero.
            'x' | 'X' if self.first == Some('0') && !self.prefixed && next.is_some() => {
                self.first = None;
                self.hex_prefix(CharPosition::Second)
            }
            'x' | 'X' if self.is_decimal() => Err(ParseError::HexDigitUnderDecimalSetting {
                position: CharPosition::Second,
            }),
            'x' | 'X' | 'h' | 'H' => self.hex_suffix(),
            // A trailing d after one decimal digit is the decimal suffix.
            'd' | 'D' if next.is_none() && self.base != NumericBase::Hex => {
                self.commit(NumericBase::Decimal)?;
                self.state = State::Complete;
                Ok(())
            }
            c if c.is_ascii_hexdigit() => self.second_digit(c),
            c => Err(ParseError::InvalidCharacter {
                position: CharPosition::Second,
                found: c,
            }),
        }
    }

    fn after_two_digits(&mut self, ch: char) -> Result<(), ParseError> {
        match ch {
            'x' | 'X' | 'h' | 'H' => self.hex_suffix(),
            'd' | 'D' => {
                if self.prefixed {
                    return Err(ParseError::TooManyDigits);
                }
                if self.base == NumericBase::Hex {
                    return Err(ParseError::InvalidDecimalSuffix);
                }
                self.commit(NumericBase::Decimal)?;
                self.state = State::Complete;
                Ok(())
            }
            _ => Err(ParseError::TooManyDigits),
        }
    }

    fn finish(self) -> Result<ParsedId, ParseError> {
        if self.state == State::AfterPrefix {
            return Err(ParseError::MissingDigits);
        }
        let Some(first) = self.first else {
            return Err(ParseError::EmptyInput);
        };

        let to_value = |ch: char, position: CharPosition| {
            digit_value(ch).ok_or(ParseError::InvalidCharacter {
                position,
                found: ch,
            })
        };
        let (high, low) = match self.second {
            Some(second) => (
                to_value(first, CharPosition::First)?,
                to_value(second, CharPosition::Second)?,
            ),
            None => (0, to_value(first, CharPosition::First)?),
        };

        let base = match self.base {
            NumericBase::Indeterminate => NumericBase::Hex,
            resolved => resolved,
        };
        let value = match base {
            NumericBase::Decimal => high * 10 + low,
            _ => high * 16 + low,
        };
        Ok(ParsedId { value, base })
    }
}

/// Parse an ID token with an explicit base hint.
///
/// Leading spaces and tabs are skipped, up to [`MAX_LEADING_WHITESPACE`].
/// The result is not checked against the LIN ID range.
pub fn parse_with_hint(token: &str, hint: BaseHint) -> Result<ParsedId, ParseError> {
    let result = lex(token, hint);
    if let Err(e) = &result {
        debug!("rejected ID token {token:?} ({hint:?}): {e}");
    }
    result
}

fn lex(token: &str, hint: BaseHint) -> Result<ParsedId, ParseError> {
    let rest = token.trim_start_matches(|c: char| c == ' ' || c == '\t');
    if rest.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let skipped = token.len() - rest.len();
    if skipped > MAX_LEADING_WHITESPACE {
        return Err(ParseError::InvalidCharacter {
            position: CharPosition::First,
            found: token.chars().nth(MAX_LEADING_WHITESPACE).unwrap_or(' '),
        });
    }

    let mut lexer = Lexer::new(hint);
    let mut chars = rest.chars().peekable();
    while let Some(ch) = chars.next() {
        lexer.step(ch, chars.peek().copied())?;
    }
    lexer.finish()
}

/// Parse an ID token into a byte.
///
/// `force_hex` and `force_decimal` fix the base in advance; passing both is
/// rejected with [`ParseError::ConflictingBaseHints`].
pub fn parse(token: &str, force_hex: bool, force_decimal: bool) -> Result<u8, ParseError> {
    let hint = BaseHint::from_flags(force_hex, force_decimal)?;
    parse_with_hint(token, hint).map(|parsed| parsed.value)
}
