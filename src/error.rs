//! Error types shared by the enumeration routines.

use thiserror::Error;

/// Errors returned by the enumerators and the sequence assembler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A parameter is outside the domain of the operation (a zero radix,
    /// a zero base or length, too many bits).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The requested output has more elements than `usize` can count.
    #[error("input too large: {size} exceeds the maximum of {max}")]
    InputTooLarge { size: String, max: usize },
}

impl Error {
    /// Builds an [`Error::InvalidInput`] from any message.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result type for enumeration operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = Error::invalid_input("radix at position 1 is zero");
        assert_eq!(err.to_string(), "invalid input: radix at position 1 is zero");
    }

    #[test]
    fn test_input_too_large_display() {
        let err = Error::InputTooLarge {
            size: "2^70".to_string(),
            max: usize::MAX,
        };
        assert!(err.to_string().starts_with("input too large: 2^70 exceeds"));
    }
}
