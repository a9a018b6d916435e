//! Rule construction errors.

use std::error::Error;
use std::fmt;

/// Errors from building a rule table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// A `B.../S...` string could not be parsed.
    InvalidNotation {
        /// The rejected input.
        notation: String,
        /// What went wrong.
        reason: String,
    },
    /// A neighbour count outside `0..=8` was used in a birth/survival set.
    CountOutOfRange {
        /// The rejected count.
        count: u8,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNotation { notation, reason } => {
                write!(f, "invalid rule notation {notation:?}: {reason}")
            }
            Self::CountOutOfRange { count } => {
                write!(f, "neighbour count {count} is outside 0..=8")
            }
        }
    }
}

impl Error for RuleError {}
