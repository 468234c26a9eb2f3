//! Date arithmetic and comparison helpers.
//!
//! Calendar operations read and rebuild the wall-clock fields in the date's
//! own time zone, so "first day of the month" for a `-05:00` timestamp is the
//! first day of the month as seen at `-05:00`. Comparisons use the absolute
//! instant.
//!
//! A date that cannot be represented is `None`. Functions that build a new
//! date return `Option`, and [`DateExt`] is implemented on
//! `Option<DateTime<Tz>>` so the invalid marker propagates instead of failing.

use chrono::{
    DateTime, Datelike, Days, Duration, LocalResult, Months, NaiveDate, NaiveDateTime, Offset,
    TimeZone, Utc,
};

/// Naive formats accepted by [`parse_datetime`], read as UTC
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const NAIVE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Rebuilds a zoned date from wall-clock fields.
///
/// Ambiguous times (clocks turned back) resolve to the earlier instant.
/// Times inside a gap (clocks turned forward) move forward one hour.
fn localize<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => {
            tracing::trace!(%naive, "wall-clock time falls in a zone gap, shifting one hour");
            let shifted = naive.checked_add_signed(Duration::try_hours(1)?)?;
            tz.from_local_datetime(&shifted).earliest()
        }
    }
}

/// Wall-clock fields of `date` in its own zone.
///
/// `None` when the offset pushes the local time past the range chrono can
/// represent, as happens at `NaiveDateTime::MAX` east of UTC.
fn local_fields<Tz: TimeZone>(date: &DateTime<Tz>) -> Option<NaiveDateTime> {
    let local = date.naive_utc().checked_add_offset(date.offset().fix());
    if local.is_none() {
        tracing::debug!(utc = %date.naive_utc(), "local time is out of range");
    }
    local
}

fn at_time<Tz: TimeZone>(
    date: &DateTime<Tz>,
    day: NaiveDate,
    hour: u32,
    min: u32,
    sec: u32,
    milli: u32,
) -> Option<DateTime<Tz>> {
    let naive = day.and_hms_milli_opt(hour, min, sec, milli)?;
    localize(&date.timezone(), naive)
}

/// Shifts the calendar date by `days`, keeping the wall-clock time.
///
/// Month and year rollover follow the calendar. Returns `None` when the
/// result is out of range.
///
/// # Examples
///
/// ```
/// use chrono::{Datelike, TimeZone, Utc};
/// use primext::datetime::add_days;
///
/// let date = Utc.with_ymd_and_hms(2022, 2, 1, 12, 0, 0).single().expect("valid date");
/// let later = add_days(&date, 28).expect("in range");
/// assert_eq!((later.month(), later.day()), (3, 1));
/// ```
pub fn add_days<Tz: TimeZone>(date: &DateTime<Tz>, days: i64) -> Option<DateTime<Tz>> {
    let local = local_fields(date)?;
    let step = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        local.checked_add_days(step)
    } else {
        local.checked_sub_days(step)
    };
    let result = shifted.and_then(|naive| localize(&date.timezone(), naive));
    if result.is_none() {
        tracing::debug!(days, "day arithmetic left the representable range");
    }
    result
}

/// [`add_days`] with `days` negated.
pub fn subtract_days<Tz: TimeZone>(date: &DateTime<Tz>, days: i64) -> Option<DateTime<Tz>> {
    add_days(date, days.checked_neg()?)
}

/// Day 1 of the date's month at 00:00:00.000.
pub fn first_day_of_month<Tz: TimeZone>(date: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let local = local_fields(date)?;
    let first = NaiveDate::from_ymd_opt(local.year(), local.month(), 1)?;
    at_time(date, first, 0, 0, 0, 0)
}

/// Last calendar day of the date's month at 23:59:59.999.
///
/// The day is found by stepping one month past day 1 and back one day, so
/// leap years need no special casing.
///
/// # Examples
///
/// ```
/// use chrono::{Datelike, TimeZone, Utc};
/// use primext::datetime::last_day_of_month;
///
/// let date = Utc.with_ymd_and_hms(2024, 2, 10, 8, 0, 0).single().expect("valid date");
/// assert_eq!(last_day_of_month(&date).map(|d| d.day()), Some(29));
/// ```
pub fn last_day_of_month<Tz: TimeZone>(date: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let local = local_fields(date)?;
    let last = NaiveDate::from_ymd_opt(local.year(), local.month(), 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()?;
    at_time(date, last, 23, 59, 59, 999)
}

/// Same calendar day at 00:00:00.000.
pub fn first_hour_of_day<Tz: TimeZone>(date: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    at_time(date, local_fields(date)?.date(), 0, 0, 0, 0)
}

/// Same calendar day at 23:59:59.999.
pub fn last_hour_of_day<Tz: TimeZone>(date: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    at_time(date, local_fields(date)?.date(), 23, 59, 59, 999)
}

/// Inclusive range check: `start <= date <= end`.
pub fn is_within_date_range<Tz: TimeZone>(
    date: &DateTime<Tz>,
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
) -> bool {
    start <= date && date <= end
}

/// Shifts the date by an absolute number of seconds.
pub fn add_seconds<Tz: TimeZone>(date: &DateTime<Tz>, seconds: i64) -> Option<DateTime<Tz>> {
    let delta = Duration::try_seconds(seconds)?;
    let result = date.clone().checked_add_signed(delta);
    if result.is_none() {
        tracing::debug!(seconds, "second arithmetic left the representable range");
    }
    result
}

/// [`add_seconds`] with `seconds` negated.
pub fn subtract_seconds<Tz: TimeZone>(date: &DateTime<Tz>, seconds: i64) -> Option<DateTime<Tz>> {
    add_seconds(date, seconds.checked_neg()?)
}

/// True when `date` is a strictly later instant than `other`.
pub fn is_after<Tz: TimeZone, Tz2: TimeZone>(date: &DateTime<Tz>, other: &DateTime<Tz2>) -> bool {
    date > other
}

/// True when `date` is a strictly earlier instant than `other`.
pub fn is_before<Tz: TimeZone, Tz2: TimeZone>(date: &DateTime<Tz>, other: &DateTime<Tz2>) -> bool {
    date < other
}

/// True when both values denote the same instant, whatever their zones.
pub fn is_equal<Tz: TimeZone, Tz2: TimeZone>(date: &DateTime<Tz>, other: &DateTime<Tz2>) -> bool {
    date == other
}

/// Parses a timestamp, returning `None` for anything unparseable.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS[.fff]` (space or `T` separated)
/// and `YYYY-MM-DD`. Naive forms are read as UTC.
///
/// # Examples
///
/// ```
/// use primext::parse_datetime;
/// use chrono::Datelike;
///
/// let dt = parse_datetime("2024-01-15T10:30:00Z").expect("valid timestamp");
/// assert_eq!(dt.year(), 2024);
/// assert!(parse_datetime("Not a date").is_none());
/// ```
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, NAIVE_DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        });
    if naive.is_none() {
        tracing::debug!(input = s, "unparseable timestamp");
    }
    naive.map(|n| n.and_utc())
}

/// Parses a timestamp, falling back to `default` when it is unparseable.
///
/// ```
/// use primext::parse_datetime_or;
/// use chrono::{TimeZone, Utc, Datelike};
///
/// let default = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).single().expect("valid date");
/// assert_eq!(parse_datetime_or("2024-01-15", default).year(), 2024);
/// assert_eq!(parse_datetime_or("not-a-date", default), default);
/// ```
pub fn parse_datetime_or(s: &str, default: DateTime<Utc>) -> DateTime<Utc> {
    parse_datetime(s).unwrap_or(default)
}

/// Extension trait exposing the date helpers as methods.
///
/// Implemented for `DateTime<Tz>` and for `Option<DateTime<Tz>>`. On `None`
/// every builder returns `None` and every comparison is false, including
/// [`is_equal`](DateExt::is_equal) against another `None`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use primext::{parse_datetime, DateExt};
///
/// let date = Utc.with_ymd_and_hms(2022, 2, 1, 12, 0, 0).single().expect("valid date");
/// let back = date.subtract_days(10).add_days(10);
/// assert!(back.is_equal(&date));
///
/// let invalid = parse_datetime("Not a date");
/// assert!(invalid.add_days(5).is_none());
/// assert!(!invalid.is_before(&date));
/// ```
pub trait DateExt {
    type Zone: TimeZone;

    /// The underlying date, or `None` for the invalid marker.
    fn as_datetime(&self) -> Option<&DateTime<Self::Zone>>;

    /// See [`add_days`](crate::datetime::add_days).
    fn add_days(&self, days: i64) -> Option<DateTime<Self::Zone>> {
        self.as_datetime()
            .and_then(|d| crate::datetime::add_days(d, days))
    }

    /// See [`subtract_days`](crate::datetime::subtract_days).
    fn subtract_days(&self, days: i64) -> Option<DateTime<Self::Zone>> {
        self.as_datetime()
            .and_then(|d| crate::datetime::subtract_days(d, days))
    }

    /// See [`first_day_of_month`](crate::datetime::first_day_of_month).
    fn first_day_of_month(&self) -> Option<DateTime<Self::Zone>> {
        self.as_datetime()
            .and_then(crate::datetime::first_day_of_month)
    }

    /// See [`last_day_of_month`](crate::datetime::last_day_of_month).
    fn last_day_of_month(&self) -> Option<DateTime<Self::Zone>> {
        self.as_datetime()
            .and_then(crate::datetime::last_day_of_month)
    }

    /// See [`first_hour_of_day`](crate::datetime::first_hour_of_day).
    fn first_hour_of_day(&self) -> Option<DateTime<Self::Zone>> {
        self.as_datetime()
            .and_then(crate::datetime::first_hour_of_day)
    }

    /// See [`last_hour_of_day`](crate::datetime::last_hour_of_day).
    fn last_hour_of_day(&self) -> Option<DateTime<Self::Zone>> {
        self.as_datetime()
            .and_then(crate::datetime::last_hour_of_day)
    }

    /// See [`add_seconds`](crate::datetime::add_seconds).
    fn add_seconds(&self, seconds: i64) -> Option<DateTime<Self::Zone>> {
        self.as_datetime()
            .and_then(|d| crate::datetime::add_seconds(d, seconds))
    }

    /// See [`subtract_seconds`](crate::datetime::subtract_seconds).
    fn subtract_seconds(&self, seconds: i64) -> Option<DateTime<Self::Zone>> {
        self.as_datetime()
            .and_then(|d| crate::datetime::subtract_seconds(d, seconds))
    }

    /// Inclusive range check; false if any of the three is invalid.
    fn is_within_date_range<S, E>(&self, start: &S, end: &E) -> bool
    where
        S: DateExt,
        E: DateExt,
    {
        match (self.as_datetime(), start.as_datetime(), end.as_datetime()) {
            (Some(date), Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }

    /// Strictly later instant; false if either side is invalid.
    fn is_after<O: DateExt>(&self, other: &O) -> bool {
        match (self.as_datetime(), other.as_datetime()) {
            (Some(date), Some(other)) => crate::datetime::is_after(date, other),
            _ => false,
        }
    }

    /// Strictly earlier instant; false if either side is invalid.
    fn is_before<O: DateExt>(&self, other: &O) -> bool {
        match (self.as_datetime(), other.as_datetime()) {
            (Some(date), Some(other)) => crate::datetime::is_before(date, other),
            _ => false,
        }
    }

    /// Same instant; false if either side is invalid.
    fn is_equal<O: DateExt>(&self, other: &O) -> bool {
        match (self.as_datetime(), other.as_datetime()) {
            (Some(date), Some(other)) => crate::datetime::is_equal(date, other),
            _ => false,
        }
    }
}

impl<Tz: TimeZone> DateExt for DateTime<Tz> {
    type Zone = Tz;

    fn as_datetime(&self) -> Option<&DateTime<Tz>> {
        Some(self)
    }
}

impl<Tz: TimeZone> DateExt for Option<DateTime<Tz>> {
    type Zone = Tz;

    fn as_datetime(&self) -> Option<&DateTime<Tz>> {
        self.as_ref()
    }
}
