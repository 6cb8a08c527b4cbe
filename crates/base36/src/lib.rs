//! Base-36 numeral encoding and decoding.
//!
//! Every count in the easysync changeset wire format — header lengths,
//! char/line spans, attribute ids — is written as a run of lowercase
//! base-36 digits (`0-9a-z`). This crate provides the two conversions the
//! codec layers need.
//!
//! # Example
//!
//! ```
//! use easysync_base36::{num_to_string, parse_num};
//!
//! assert_eq!(parse_num("1z").unwrap(), 71);
//! assert_eq!(num_to_string(71), "1z");
//! ```

mod num_to_string;
mod parse_num;

pub use num_to_string::num_to_string;
pub use parse_num::parse_num;

/// The base-36 digit alphabet, in value order.
pub const ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Error type for base-36 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base36Error {
    /// The input string is empty.
    Empty,
    /// The input contains a character outside `0-9a-z`.
    InvalidDigit(char),
    /// The decoded value does not fit in a `u64`.
    Overflow,
}

impl std::fmt::Display for Base36Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Base36Error::Empty => write!(f, "empty base-36 number"),
            Base36Error::InvalidDigit(c) => write!(f, "invalid base-36 digit: {c:?}"),
            Base36Error::Overflow => write!(f, "base-36 number overflows u64"),
        }
    }
}

impl std::error::Error for Base36Error {}
