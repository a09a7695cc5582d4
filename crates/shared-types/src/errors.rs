//! # Error Types
//!
//! Errors raised while parsing shared primitives.

use thiserror::Error;

/// Errors that can occur when parsing a textual address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressParseError {
    /// The `0x` prefix is missing.
    #[error("Address must start with 0x: {0}")]
    MissingPrefix(String),

    /// Wrong number of hex digits after the prefix.
    #[error("Address must have 40 hex digits, got {got}: {value}")]
    InvalidLength { value: String, got: usize },

    /// A non-hex character was found.
    #[error("Address contains non-hex characters: {0}")]
    InvalidHex(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_length_error() {
        let err = AddressParseError::InvalidLength {
            value: "0x1234".to_string(),
            got: 4,
        };
        assert!(err.to_string().contains("got 4"));
    }
}
