#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

//! # lin-pid
//!
//! Compute LIN 2.1 Protected Identifiers (PIDs) from frame IDs typed by a user.
//!
//! LIN (Local Interconnect Network) frames are addressed by a 6-bit frame
//! identifier. On the wire the identifier travels as the protected identifier:
//! the 6 ID bits plus two parity bits (LIN 2.1, section 2.3.1.3).
//!
//! ## Features
//!
//! - **Parsing**: accept an ID in about thirty notations (`0x27`, `x27`, `27h`,
//!   `27`, `27d`, ...) and resolve hex vs decimal without ambiguity
//! - **Encoding**: compute the PID from an ID, validate PIDs, strip parity
//! - **CLI**: the `lin_pid` binary (feature `cli`)
//!
//! The parser and encoder need neither `std` nor an allocator.
//!
//! ## Quick Start
//!
//! ```
//! use lin_pid::{compute_pid, parse, MAX_ID};
//!
//! let id = parse("27", false, false)?;
//! assert_eq!(id, 0x27);
//! assert!(id <= MAX_ID);
//! assert_eq!(compute_pid(id), 0xE7);
//! # Ok::<(), lin_pid::ParseError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`parser`] | Hex/decimal ID token parser |
//! | [`pid`] | Parity computation and the reference table |
//! | [`error`] | Error types and [`Result`] alias |
//! | `cli` | Command-line front end (feature `cli`) |
//!
//! ## Error Handling
//!
//! The parser returns [`ParseError`], a small `Copy` enum naming why a token was
//! rejected. Front ends wrap it in [`Error`], which adds range and flag checks.

pub mod error;
pub mod parser;
pub mod pid;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types at the crate root
pub use error::{CharPosition, Error, ParseError, Result};
pub use parser::{BaseHint, NumericBase, ParsedId, parse, parse_with_hint};
pub use pid::{
    INVALID_PID, MAX_ID, PidEntry, REFERENCE_PID_TABLE, compute_pid, frame_id, is_valid_pid,
    reference_table,
};
