//! Error types for ID parsing and PID computation.
//!
//! [`ParseError`] is what the number parser reports for a rejected token. It is
//! `Copy` and carries no allocations so it can be used without `std`.
//! [`Error`] is the caller-level error: it wraps [`ParseError`] and adds the
//! checks a front end performs around the parser (flag conflicts, LIN range).
//!
//! # Example
//!
//! ```
//! use lin_pid::{Error, ParseError, parse};
//!
//! match parse("0xZZ", false, false) {
//!     Ok(id) => println!("ID {id:#04X}"),
//!     Err(ParseError::InvalidCharacter { found, .. }) => {
//!         eprintln!("unexpected character {found:?}");
//!     }
//!     Err(e) => eprintln!("{}", Error::from(e)),
//! }
//! ```

use core::fmt;

use crate::pid::MAX_ID;

/// Where in the token an offending character was found.
///
/// Only used for diagnostics; the parser's control flow does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharPosition {
    /// The first significant character (or first digit after a prefix).
    First,
    /// The character following the first digit.
    Second,
}

impl fmt::Display for CharPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharPosition::First => f.write_str("first"),
            CharPosition::Second => f.write_str("second"),
        }
    }
}

/// Reasons a token cannot be resolved to an ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The token was empty or contained only blanks.
    EmptyInput,

    /// A character that is neither a digit nor a recognized affix appeared
    /// where a digit was expected.
    InvalidCharacter {
        /// Position of the character
        position: CharPosition,
        /// The character that was found
        found: char,
    },

    /// A `d`/`D` suffix followed digits already known to be hexadecimal, or a
    /// hex affix followed two digits under a forced decimal setting.
    InvalidDecimalSuffix,

    /// A hex-only digit (`A`-`F`) or `x` affix was seen while decimal was forced.
    HexDigitUnderDecimalSetting {
        /// Position of the character
        position: CharPosition,
    },

    /// More than two digits, or anything after the suffix.
    TooManyDigits,

    /// A hex prefix was not followed by any digit.
    MissingDigits,

    /// The parser tried to commit to both bases.
    ///
    /// The state machine never produces this; seeing it indicates a bug.
    MixedHexAndDecimalAffixes,

    /// Both `force_hex` and `force_decimal` were requested.
    ConflictingBaseHints,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => f.write_str("ID argument is empty or only whitespace"),
            ParseError::InvalidCharacter { position, found } => {
                write!(f, "Invalid {position} character {found:?} in ID")
            }
            ParseError::InvalidDecimalSuffix => {
                f.write_str("Decimal suffix does not match the digits entered")
            }
            ParseError::HexDigitUnderDecimalSetting { position } => write!(
                f,
                "Hexadecimal {position} digit entered while decimal format was requested"
            ),
            ParseError::TooManyDigits => {
                f.write_str("Too many digits entered: IDs take at most two digits")
            }
            ParseError::MissingDigits => f.write_str("Hex prefix is not followed by any digit"),
            ParseError::MixedHexAndDecimalAffixes => {
                f.write_str("Internal error: ID resolved as both hexadecimal and decimal")
            }
            ParseError::ConflictingBaseHints => {
                f.write_str("Hexadecimal and decimal formats requested together")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Errors reported to a user of the calculator.
#[derive(Debug)]
pub enum Error {
    /// The ID token could not be parsed.
    Parse(ParseError),

    /// The parsed ID does not fit in the 6-bit LIN frame identifier.
    IdOutOfRange {
        /// The value that was parsed
        id: u8,
    },

    /// `--hex` and `--dec` were both given.
    ConflictingBaseFlags,

    /// Writing output failed.
    ///
    /// Only available with the `std` feature.
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "{e}"),
            Error::IdOutOfRange { id } => write!(
                f,
                "ID out of range: {id:#04X} exceeds the maximum LIN ID {MAX_ID:#04X}"
            ),
            Error::ConflictingBaseFlags => {
                f.write_str("The --hex and --dec flags cannot be used together")
            }
            #[cfg(feature = "std")]
            Error::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// A specialized Result type for calculator operations.
pub type Result<T> = core::result::Result<T, Error>;
