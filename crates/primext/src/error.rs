//! Error type for the [`Text`](crate::Text) construction guard.
//!
//! Everything else in the crate is total and reports "no result" through a
//! sentinel value instead of an error.

use thiserror::Error;

/// Reasons the [`Text`](crate::Text) construction guard rejects a value
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    /// The supplied value is not text
    #[error("Text can only be created from a string, got {kind}")]
    InvalidArgument { kind: &'static str },

    /// The supplied text is empty or whitespace-only
    #[error("Cannot create Text from an empty string")]
    EmptyValue,
}

impl TextError {
    /// Creates an invalid-argument error naming the kind of value received.
    ///
    /// # Example
    /// ```
    /// use primext::TextError;
    ///
    /// let err = TextError::invalid_argument("number");
    /// assert_eq!(err.to_string(), "Text can only be created from a string, got number");
    /// ```
    pub fn invalid_argument(kind: &'static str) -> Self {
        Self::InvalidArgument { kind }
    }

    /// Returns true for the empty-value variant
    pub fn is_empty_value(&self) -> bool {
        matches!(self, Self::EmptyValue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = TextError::invalid_argument("number");
        assert!(matches!(err, TextError::InvalidArgument { kind: "number" }));
        assert!(!err.is_empty_value());
        assert!(err.to_string().contains("number"));
    }

    #[test]
    fn test_empty_value_error() {
        let err = TextError::EmptyValue;
        assert!(err.is_empty_value());
        assert_eq!(err.to_string(), "Cannot create Text from an empty string");
    }
}
