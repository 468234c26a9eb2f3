//! String utilities.
//!
//! Every transform returns its input unchanged when the input is empty by
//! [`is_empty`] (blank or whitespace-only). The exception is [`truncate`],
//! which always honors the ellipsis rule for tiny limits.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Suffix appended by [`truncate`]
pub const ELLIPSIS: &str = "...";

static NON_ALPHANUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("valid regex"));
static CAMEL_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_ ]+.").expect("valid regex"));
static LOWER_UPPER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid regex"));
static KEBAB_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("valid regex"));

/// Returns true when the text is empty after trimming whitespace.
///
/// # Examples
///
/// ```
/// use primext::string::is_empty;
///
/// assert!(is_empty(""));
/// assert!(is_empty(" \t\n"));
/// assert!(!is_empty(" a "));
/// ```
pub fn is_empty(value: &str) -> bool {
    value.trim().is_empty()
}

/// Emptiness check that also treats an absent value as empty.
pub fn is_none_or_empty(value: Option<&str>) -> bool {
    value.is_none_or(is_empty)
}

/// Negation of [`is_empty`].
pub fn is_not_empty(value: &str) -> bool {
    !is_empty(value)
}

/// Converts empty text to `None`, otherwise returns `Some(value)`.
///
/// Whitespace-only text counts as empty.
///
/// # Examples
///
/// ```
/// use primext::none_if_empty;
///
/// assert_eq!(none_if_empty("hello"), Some("hello"));
/// assert_eq!(none_if_empty(""), None);
/// assert_eq!(none_if_empty("   "), None);
/// ```
pub fn none_if_empty(value: &str) -> Option<&str> {
    if is_empty(value) {
        None
    } else {
        Some(value)
    }
}

/// Owned version of [`none_if_empty`] for when you have a `String`.
pub fn some_if_not_empty(value: String) -> Option<String> {
    if is_empty(&value) {
        None
    } else {
        Some(value)
    }
}

/// Uppercases the first character and leaves the rest untouched.
///
/// # Examples
///
/// ```
/// use primext::string::capitalize_first_letter;
///
/// assert_eq!(capitalize_first_letter("hello world"), "Hello world");
/// ```
pub fn capitalize_first_letter(value: &str) -> String {
    if is_empty(value) {
        return value.to_string();
    }
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replaces every run of characters outside `[a-zA-Z0-9]` with one hyphen,
/// then strips hyphens from both ends.
///
/// # Examples
///
/// ```
/// use primext::string::sanitize;
///
/// assert_eq!(sanitize("@Hello@World!"), "Hello-World");
/// assert_eq!(sanitize("___underscore_test___"), "underscore-test");
/// ```
pub fn sanitize(value: &str) -> String {
    if is_empty(value) {
        return value.to_string();
    }
    NON_ALPHANUMERIC_RE
        .replace_all(value, "-")
        .trim_matches('-')
        .to_string()
}

/// Converts `snake_case`, `kebab-case` or space separated words to camelCase.
///
/// Input with no separator is returned as-is, so `"alreadyCamelCase"` keeps
/// its casing. Otherwise the whole string is lowercased first.
///
/// # Examples
///
/// ```
/// use primext::string::to_camel_case;
///
/// assert_eq!(to_camel_case("snake_case_format"), "snakeCaseFormat");
/// assert_eq!(to_camel_case("Hello-World-Example"), "helloWorldExample");
/// assert_eq!(to_camel_case("alreadyCamelCase"), "alreadyCamelCase");
/// ```
pub fn to_camel_case(value: &str) -> String {
    if is_empty(value) || !value.contains(['-', '_', ' ']) {
        return value.to_string();
    }
    let lowered = value.to_lowercase();
    CAMEL_SEPARATOR_RE
        .replace_all(&lowered, |caps: &Captures<'_>| {
            caps.get(0)
                .and_then(|m| m.as_str().chars().last())
                .map(|c| c.to_uppercase().collect::<String>())
                .unwrap_or_default()
        })
        .into_owned()
}

/// Converts camelCase, PascalCase, spaced or snake_case text to kebab-case.
///
/// # Examples
///
/// ```
/// use primext::string::to_kebab_case;
///
/// assert_eq!(to_kebab_case("HelloWorldExample"), "hello-world-example");
/// assert_eq!(to_kebab_case("multiple_Cases_used"), "multiple-cases-used");
/// ```
pub fn to_kebab_case(value: &str) -> String {
    if is_empty(value) {
        return value.to_string();
    }
    let split = LOWER_UPPER_RE.replace_all(value, "$1-$2");
    KEBAB_SEPARATOR_RE
        .replace_all(&split, "-")
        .to_lowercase()
}

/// Removes every whitespace character.
pub fn remove_spaces(value: &str) -> String {
    if is_empty(value) {
        return value.to_string();
    }
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Shortens text to at most `max_length` characters, ending in [`ELLIPSIS`].
///
/// A limit of 3 or less always yields the bare ellipsis. Lengths count
/// Unicode scalar values, not bytes.
///
/// # Examples
///
/// ```
/// use primext::string::truncate;
///
/// assert_eq!(truncate("Hello World", 8), "Hello...");
/// assert_eq!(truncate("Hello", 5), "Hello");
/// assert_eq!(truncate("Hi", 2), "...");
/// ```
pub fn truncate(value: &str, max_length: usize) -> String {
    let marker_len = ELLIPSIS.len();
    if max_length <= marker_len {
        return ELLIPSIS.to_string();
    }
    if value.chars().count() <= max_length {
        return value.to_string();
    }
    let mut truncated: String = value.chars().take(max_length - marker_len).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Reverses the character order.
pub fn reverse(value: &str) -> String {
    if is_empty(value) {
        return value.to_string();
    }
    value.chars().rev().collect()
}

/// Counts whitespace-delimited words. Empty text has zero words.
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// True when the text is non-empty and only contains `[a-zA-Z0-9]`.
pub fn is_alphanumeric(value: &str) -> bool {
    is_not_empty(value) && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Compares two strings exactly, or after lowercasing both when
/// `case_insensitive` is set.
pub fn equals(first: &str, second: &str, case_insensitive: bool) -> bool {
    if case_insensitive {
        first.to_lowercase() == second.to_lowercase()
    } else {
        first == second
    }
}

/// Lexicographic order by code point.
///
/// `compare_to(a, b) as i8` gives the familiar -1 / 0 / 1 indicator.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use primext::string::compare_to;
///
/// assert_eq!(compare_to("apple", "banana"), Ordering::Less);
/// assert_eq!(compare_to("apple", "ant") as i8, 1);
/// ```
pub fn compare_to(first: &str, second: &str) -> Ordering {
    first.cmp(second)
}

/// Case-sensitive prefix check.
pub fn starts_with(value: &str, prefix: &str) -> bool {
    value.starts_with(prefix)
}

/// Case-sensitive suffix check.
pub fn ends_with(value: &str, suffix: &str) -> bool {
    value.ends_with(suffix)
}

/// Extension trait exposing the string utilities as methods on `str`.
///
/// Methods whose natural name is already taken by an inherent `str` or
/// `String` method use a distinct name (`is_blank`, `truncate_ellipsis`).
/// `starts_with`/`ends_with` are inherent with the same meaning.
///
/// # Examples
///
/// ```
/// use primext::StringExt;
///
/// assert_eq!("hello world".to_camel_case(), "helloWorld");
/// assert_eq!("This is a test string.".truncate_ellipsis(10), "This is...");
/// assert_eq!(String::from("  ").non_empty(), None);
/// ```
pub trait StringExt {
    /// See [`is_empty`].
    fn is_blank(&self) -> bool;
    /// See [`is_not_empty`].
    fn is_not_blank(&self) -> bool;
    /// Returns `None` when blank, otherwise `Some(self)`.
    fn non_empty(&self) -> Option<&str>;
    /// See [`capitalize_first_letter`].
    fn capitalize_first_letter(&self) -> String;
    /// See [`sanitize`].
    fn sanitize(&self) -> String;
    /// See [`to_camel_case`].
    fn to_camel_case(&self) -> String;
    /// See [`to_kebab_case`].
    fn to_kebab_case(&self) -> String;
    /// See [`remove_spaces`].
    fn remove_spaces(&self) -> String;
    /// See [`truncate`].
    fn truncate_ellipsis(&self, max_length: usize) -> String;
    /// See [`reverse`].
    fn reverse(&self) -> String;
    /// See [`word_count`].
    fn word_count(&self) -> usize;
    /// See [`is_alphanumeric`].
    fn is_alphanumeric(&self) -> bool;
    /// See [`equals`].
    fn equals(&self, other: &str, case_insensitive: bool) -> bool;
    /// See [`compare_to`].
    fn compare_to(&self, other: &str) -> Ordering;
}

impl StringExt for str {
    fn is_blank(&self) -> bool {
        is_empty(self)
    }

    fn is_not_blank(&self) -> bool {
        is_not_empty(self)
    }

    fn non_empty(&self) -> Option<&str> {
        none_if_empty(self)
    }

    fn capitalize_first_letter(&self) -> String {
        capitalize_first_letter(self)
    }

    fn sanitize(&self) -> String {
        sanitize(self)
    }

    fn to_camel_case(&self) -> String {
        to_camel_case(self)
    }

    fn to_kebab_case(&self) -> String {
        to_kebab_case(self)
    }

    fn remove_spaces(&self) -> String {
        remove_spaces(self)
    }

    fn truncate_ellipsis(&self, max_length: usize) -> String {
        truncate(self, max_length)
    }

    fn reverse(&self) -> String {
        reverse(self)
    }

    fn word_count(&self) -> usize {
        word_count(self)
    }

    fn is_alphanumeric(&self) -> bool {
        is_alphanumeric(self)
    }

    fn equals(&self, other: &str, case_insensitive: bool) -> bool {
        equals(self, other, case_insensitive)
    }

    fn compare_to(&self, other: &str) -> Ordering {
        compare_to(self, other)
    }
}
