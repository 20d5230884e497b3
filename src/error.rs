//! Error type shared by every fallible routine in the crate.
//!
//! "Not found" is never an error here: searches return `Option` and
//! collection-producing routines return an empty `Vec`. Errors are reserved
//! for inputs that violate a checked precondition.

use thiserror::Error;

/// Result alias used throughout `algokit`.
pub type Result<T> = std::result::Result<T, AlgoError>;

/// Failure raised when an input cannot be processed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgoError {
    /// A validated precondition does not hold (unsorted search input,
    /// malformed board, bad configuration).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An encoded string buffer could not be decoded.
    #[error("malformed encoding at byte {offset}: {reason}")]
    MalformedEncoding {
        /// Byte offset into the buffer where decoding stopped.
        offset: usize,
        /// What was expected at that offset.
        reason: &'static str,
    },

    /// A checked arithmetic operation overflowed.
    #[error("arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}

impl AlgoError {
    /// Shorthand for [`AlgoError::InvalidInput`].
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AlgoError::invalid("board must have 9 rows, found 8");
        assert_eq!(err.to_string(), "invalid input: board must have 9 rows, found 8");

        let err = AlgoError::MalformedEncoding {
            offset: 3,
            reason: "expected terminator",
        };
        assert_eq!(err.to_string(), "malformed encoding at byte 3: expected terminator");
    }
}
