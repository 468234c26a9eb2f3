//! Property-based tests for the string, number and date helpers

#[cfg(test)]
mod tests {
    use crate::datetime::{
        add_days, first_day_of_month, is_within_date_range, last_day_of_month, subtract_days,
    };
    use crate::number::{max, min};
    use crate::string::{is_alphanumeric, reverse, sanitize, truncate, ELLIPSIS};
    use crate::{DateExt, StringExt, Text, TextError};
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};
    use proptest::prelude::*;

    // Seconds between 1900-01-01 and 2200-01-01
    const EPOCH_RANGE: std::ops::Range<i64> = -2_208_988_800..7_258_118_400;

    fn utc_from(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().expect("in range")
    }

    proptest! {
        #[test]
        fn test_truncate_respects_max_length(text in ".{0,64}", max_length in 0usize..80) {
            let truncated = truncate(&text, max_length);
            if max_length <= ELLIPSIS.len() {
                prop_assert_eq!(truncated, ELLIPSIS);
            } else {
                prop_assert!(truncated.chars().count() <= max_length);
            }
        }

        #[test]
        fn test_reverse_is_an_involution(text in "\\PC{0,64}") {
            prop_assert_eq!(reverse(&reverse(&text)), text);
        }

        #[test]
        fn test_sanitize_output_alphabet(text in "\\PC{0,64}") {
            let sanitized = sanitize(&text);
            if !text.trim().is_empty() {
                prop_assert!(!sanitized.starts_with('-'));
                prop_assert!(!sanitized.ends_with('-'));
                prop_assert!(sanitized
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-'));
                prop_assert!(!sanitized.contains("--"));
            }
        }

        #[test]
        fn test_alphanumeric_text_is_already_sanitized(text in "[a-zA-Z0-9]{1,32}") {
            prop_assert!(is_alphanumeric(&text));
            prop_assert_eq!(sanitize(&text), text);
        }

        #[test]
        fn test_word_count_matches_joined_words(words in prop::collection::vec("[a-z]{1,8}", 0..10)) {
            let joined = words.join("  ");
            prop_assert_eq!(joined.word_count(), words.len());
        }

        #[test]
        fn test_max_and_min_bound_both_arguments(a in any::<i64>(), b in any::<i64>()) {
            let hi = max(a, b);
            let lo = min(a, b);
            prop_assert!(hi >= a && hi >= b);
            prop_assert!(lo <= a && lo <= b);
            prop_assert!(hi == a || hi == b);
        }

        #[test]
        fn test_add_after_subtract_days_round_trips(secs in EPOCH_RANGE, days in -100_000i64..100_000) {
            let date = utc_from(secs);
            let back = subtract_days(&date, days).and_then(|d| add_days(&d, days));
            prop_assert_eq!(back, Some(date));
        }

        #[test]
        fn test_round_trip_in_fixed_offset(
            secs in EPOCH_RANGE,
            days in -1_000i64..1_000,
            offset_hours in -12i32..=14,
        ) {
            let offset = FixedOffset::east_opt(offset_hours * 3600).expect("valid offset");
            let date = utc_from(secs).with_timezone(&offset);
            prop_assert!(date.subtract_days(days).add_days(days).is_equal(&date));
        }

        #[test]
        fn test_date_lies_within_its_month(secs in EPOCH_RANGE) {
            let date = utc_from(secs);
            let first = first_day_of_month(&date).expect("valid");
            let last = last_day_of_month(&date).expect("valid");
            prop_assert!(first <= date && date <= last);
            prop_assert!(is_within_date_range(&date, &first, &last));
            prop_assert!(is_within_date_range(&date, &date, &date));
        }

        #[test]
        fn test_text_guard_matches_emptiness(value in "\\s{0,4}[a-z]{0,4}") {
            match Text::new(value.clone()) {
                Ok(text) => prop_assert_eq!(text.as_str(), value.as_str()),
                Err(err) => {
                    prop_assert_eq!(err, TextError::EmptyValue);
                    prop_assert!(value.is_blank());
                }
            }
        }
    }
}
