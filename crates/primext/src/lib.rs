//! Pure helpers for strings, numbers and dates.
//!
//! Every helper exists in two forms: a free function in [`string`],
//! [`number`] or [`datetime`], and a method on the matching extension trait
//! ([`StringExt`], [`NumberExt`], [`DateExt`]) implemented for the primitive
//! types. The trait methods delegate to the free functions.
//!
//! [`Text`] is an immutable string newtype with the same operations as
//! chainable methods.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Total where possible** - helpers return a sentinel instead of failing;
//!   only the [`Text`] construction guard returns an error
//! - **Invalid dates propagate** - date arithmetic returns `Option`, and
//!   [`DateExt`] is implemented on `Option<DateTime<Tz>>` so `None` flows
//!   through a chain of calls

pub mod datetime;
pub mod error;
pub mod number;
pub mod string;
pub mod text;

#[cfg(test)]
mod property_tests;

// Re-export commonly used items at crate root for convenience
pub use datetime::{parse_datetime, parse_datetime_or, DateExt};
pub use error::TextError;
pub use number::NumberExt;
pub use string::{none_if_empty, some_if_not_empty, StringExt, ELLIPSIS};
pub use text::Text;
