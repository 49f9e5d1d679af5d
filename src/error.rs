//! Error type for the fallible edges of the crate.
//!
//! Evaluating a problem never fails. Only text parsing (graphs, solutions,
//! typed solver options) can produce a [`ParseError`].

use std::fmt;

/// An error raised while parsing a textual form or a solver option.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The input ended before a required value was read.
    UnexpectedEnd {
        /// What the parser was looking for.
        expected: &'static str,
    },
    /// A token could not be parsed as the expected number.
    InvalidNumber {
        /// The offending token.
        token: String,
    },
    /// A graph body did not hold exactly `size * size` costs.
    CostCount {
        /// Declared vertex count.
        size: usize,
        /// Number of cost values found.
        found: usize,
    },
    /// A solution declared a different number of tours than it listed.
    TourCount {
        /// Declared tour count.
        declared: usize,
        /// Tour lines found.
        found: usize,
    },
    /// A solver option carried a value of the wrong type.
    InvalidOption {
        /// Option key.
        key: String,
        /// Raw value.
        value: String,
    },
}

/// A type alias for results of parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of input, expected {expected}")
            }
            ParseError::InvalidNumber { token } => write!(f, "invalid number '{token}'"),
            ParseError::CostCount { size, found } => {
                match size.checked_mul(*size) {
                    Some(needed) => {
                        write!(f, "graph of size {size} needs {needed} costs, found {found}")
                    }
                    None => write!(f, "graph of size {size} is too large, found {found} costs"),
                }
            }
            ParseError::TourCount { declared, found } => {
                write!(f, "solution declares {declared} tours but lists {found}")
            }
            ParseError::InvalidOption { key, value } => {
                write!(f, "invalid value '{value}' for option '{key}'")
            }
        }
    }
}

impl std::error::Error for ParseError {}
