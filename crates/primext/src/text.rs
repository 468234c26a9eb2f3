//! Immutable string newtype with chainable string operations.
//!
//! [`Text::new`] is the construction guard: it rejects empty or
//! whitespace-only input. Operations return new `Text` values and may yield
//! empty text (for example sanitizing `"@@@"`), which is why results are
//! built through [`Text::wrap`] rather than the guard.

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::TextError;
use crate::string;

/// An immutable text value exposing the [`string`](crate::string) helpers as
/// chainable methods.
///
/// # Examples
///
/// ```
/// use primext::Text;
///
/// let text = Text::new("hello @there!").expect("non-empty");
/// assert_eq!(text.sanitize().capitalize_first_letter(), "Hello-there");
/// assert!(Text::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Text(String);

impl Text {
    /// Create a new text value.
    ///
    /// # Errors
    ///
    /// Returns `TextError::EmptyValue` if the value is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TextError> {
        let value = value.into();
        if string::is_empty(&value) {
            tracing::debug!("rejected empty value for Text");
            return Err(TextError::EmptyValue);
        }
        Ok(Self(value))
    }

    /// Wraps a value without the emptiness guard.
    pub fn wrap(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper, returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Uppercases the first character.
    pub fn capitalize_first_letter(&self) -> Self {
        Self(string::capitalize_first_letter(&self.0))
    }

    /// Collapses non-alphanumeric runs into single hyphens.
    pub fn sanitize(&self) -> Self {
        Self(string::sanitize(&self.0))
    }

    /// Converts separated words to camelCase.
    pub fn to_camel_case(&self) -> Self {
        Self(string::to_camel_case(&self.0))
    }

    /// Converts to kebab-case.
    pub fn to_kebab_case(&self) -> Self {
        Self(string::to_kebab_case(&self.0))
    }

    /// Removes all whitespace.
    pub fn remove_spaces(&self) -> Self {
        Self(string::remove_spaces(&self.0))
    }

    /// See [`string::truncate`].
    pub fn truncate(&self, max_length: usize) -> Self {
        Self(string::truncate(&self.0, max_length))
    }

    /// Reverses the character order.
    pub fn reverse(&self) -> Self {
        Self(string::reverse(&self.0))
    }

    /// True when the text is empty after trimming.
    pub fn is_empty(&self) -> bool {
        string::is_empty(&self.0)
    }

    /// Negation of [`Text::is_empty`].
    pub fn is_not_empty(&self) -> bool {
        string::is_not_empty(&self.0)
    }

    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        string::word_count(&self.0)
    }

    /// True when every character is an ASCII letter or digit.
    pub fn is_alphanumeric(&self) -> bool {
        string::is_alphanumeric(&self.0)
    }

    /// Equality, optionally ignoring case.
    pub fn equals(&self, other: &str, case_insensitive: bool) -> bool {
        string::equals(&self.0, other, case_insensitive)
    }

    /// Code-point ordering against `other`.
    pub fn compare_to(&self, other: &str) -> Ordering {
        string::compare_to(&self.0, other)
    }

    /// Case-sensitive prefix check.
    pub fn starts_with(&self, prefix: &str) -> bool {
        string::starts_with(&self.0, prefix)
    }

    /// Case-sensitive suffix check.
    pub fn ends_with(&self, suffix: &str) -> bool {
        string::ends_with(&self.0, suffix)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<String> for Text {
    type Error = TextError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Text {
    type Error = TextError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Text> for String {
    fn from(text: Text) -> String {
        text.0
    }
}

/// Guarded construction from a dynamically typed value.
///
/// Anything other than a JSON string is rejected with
/// `TextError::InvalidArgument`; strings then go through [`Text::new`].
#[cfg(feature = "serde")]
impl TryFrom<serde_json::Value> for Text {
    type Error = TextError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        let kind = match value {
            Value::String(s) => return Self::new(s),
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        tracing::debug!(kind, "rejected non-string value for Text");
        Err(TextError::invalid_argument(kind))
    }
}
