//! Error types for kinetic-hull operations.
//!
//! Hull construction itself never fails: general position is a precondition,
//! not something that is checked. Errors only come from reading point sets.

use thiserror::Error;

/// Errors that can occur while reading point sets.
#[derive(Debug, Error)]
pub enum HullError {
    /// A token could not be parsed as a number.
    #[error("invalid number '{token}' on line {line}")]
    InvalidNumber {
        /// The offending token.
        token: String,
        /// 1-based line number.
        line: usize,
    },

    /// A record ended before all of its coordinates were read.
    #[error("line {line}: expected {expected} values, found {found}")]
    MissingValue {
        /// 1-based line number.
        line: usize,
        /// Number of values a record needs.
        expected: usize,
        /// Number of values actually present.
        found: usize,
    },

    /// The input ended while more records were announced.
    #[error("unexpected end of input: expected {expected} more record(s)")]
    UnexpectedEnd {
        /// Number of records still missing.
        expected: usize,
    },

    /// Extra tokens after the last announced record.
    #[error("unexpected trailing input on line {line}")]
    TrailingInput {
        /// 1-based line number.
        line: usize,
    },

    /// The underlying reader failed.
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}
