//! Reconstruction of UTC timestamps from the `ddmmyy` date and
//! `hhmmss.ss` time fields of a sentence.

use chrono;
use chrono::format::ParseErrorKind;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use std::str::{self, FromStr};

use err::DecodeError;

const DATE_LENGTH: usize = 6;
const TIME_LENGTH: usize = 6;
const TIME_FORMAT: &str = "%H%M%S%.f";
/// Nanosecond value of a leap second (`hhmm60`) in chrono.
const LEAP_NANOS: u32 = 1_000_000_000;
/// Two digit years are always placed in this century.
const CENTURY: i32 = 2000;

quick_error! {
    /// Why a time field could not be read.
    #[derive(Debug)]
    enum TimeError {
        /// Not six digits in front of the optional fraction.
        Format {
            description("time is not hhmmss[.ss]")
        }
        Parse(err: chrono::format::ParseError) {
            from()
            description("time parsing error")
            display("Time parsing error: {}", err)
            cause(err)
        }
    }
}

/// Source of the current time, used whenever a sentence lacks a date or time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant. Useful when replaying recorded
/// sentences of a known day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Combines `date` and `time` into a UTC timestamp.
///
/// An absent or empty `date` is replaced by the current date of `clock`, an
/// absent or empty `time` by its current time of day (whole seconds).
/// The clock is only read when one of the two is missing.
///
/// Fractions of a second are dropped. A leap second (`235960`) is kept as
/// chrono's leap second representation.
pub fn reconstruct<C: Clock + ?Sized>(
    clock: &C,
    date: Option<&str>,
    time: Option<&str>,
) -> Result<DateTime<Utc>, DecodeError> {
    let date = date.filter(|d| !d.is_empty());
    let time = time.filter(|t| !t.is_empty());

    let now = match (date, time) {
        (Some(_), Some(_)) => None,
        _ => Some(clock.now()),
    };
    let invalid = || DecodeError::InvalidDateTime {
        date: date.unwrap_or("").to_owned(),
        time: time.unwrap_or("").to_owned(),
    };

    let day = match (date, now) {
        (Some(d), _) => {
            let (day, month, year) = parse_date(d)?;
            NaiveDate::from_ymd_opt(year, month, day).ok_or_else(&invalid)?
        }
        (None, Some(now)) => now.date_naive(),
        (None, None) => return Err(invalid()),
    };

    let time_of_day = match (time, now) {
        (Some(t), _) => parse_time(t).map_err(|err| match err {
            TimeError::Parse(ref e)
                if e.kind() == ParseErrorKind::OutOfRange
                    || e.kind() == ParseErrorKind::Impossible =>
            {
                invalid()
            }
            _ => unparsable("time", t),
        })?,
        (None, Some(now)) => {
            let t = now.time();
            t.with_nanosecond(0).unwrap_or(t)
        }
        (None, None) => return Err(invalid()),
    };

    Ok(Utc.from_utc_datetime(&day.and_time(time_of_day)))
}

/// Splits `ddmmyy` into day, month and year.
fn parse_date(date: &str) -> Result<(u32, u32, i32), DecodeError> {
    let digits = fixed_digits(date, DATE_LENGTH, "date")?;
    let year = CENTURY + digits[2] as i32;
    Ok((digits[0], digits[1], year))
}

/// Reads `hhmmss[.ss]`, dropping the fraction.
fn parse_time(time: &str) -> Result<NaiveTime, TimeError> {
    let whole = time.split('.').next().unwrap_or("");
    // chrono accepts single digit and signed values, NMEA does not
    if whole.len() != TIME_LENGTH || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::Format);
    }

    let t = NaiveTime::parse_from_str(time, TIME_FORMAT)?;
    let nanos = if t.nanosecond() >= LEAP_NANOS { LEAP_NANOS } else { 0 };
    Ok(t.with_nanosecond(nanos).unwrap_or(t))
}

/// Reads `len` ascii digits as pairs.
fn fixed_digits(
    field: &str,
    len: usize,
    name: &'static str,
) -> Result<[u32; 3], DecodeError> {
    if field.len() != len || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unparsable(name, field));
    }

    let mut pairs = [0u32; 3];
    for (pair, chunk) in pairs.iter_mut().zip(field.as_bytes().chunks(2)) {
        // only ascii digits at this point
        let text = str::from_utf8(chunk).map_err(|_| unparsable(name, field))?;
        *pair = u32::from_str(text).map_err(|_| unparsable(name, field))?;
    }
    Ok(pairs)
}

#[inline]
fn unparsable(field: &'static str, token: &str) -> DecodeError {
    DecodeError::UnparsableNumber {
        field,
        token: token.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Duration};

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2023, 11, 5, 7, 30, 12).unwrap())
    }

    #[test]
    fn composes_date_and_time() {
        let dt = reconstruct(&clock(), Some("160614"), Some("180826.9")).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2014, 6, 16, 18, 8, 26).unwrap());
        assert_eq!(dt.to_rfc3339(), "2014-06-16T18:08:26+00:00");
    }

    #[test]
    fn months_are_one_based() {
        let dt = reconstruct(&clock(), Some("311299"), Some("235959")).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2099, 12, 31));
        let dt = reconstruct(&clock(), Some("010100"), Some("000000")).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2000, 1, 1));
    }

    #[test]
    fn keeps_leap_second() {
        let dt = reconstruct(&clock(), Some("311216"), Some("235960")).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2016, 12, 31));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (23, 59, 59));
        assert_eq!(dt.nanosecond(), 1_000_000_000);

        let dt = reconstruct(&clock(), Some("311216"), Some("235960.5")).unwrap();
        assert_eq!(dt.nanosecond(), 1_000_000_000);
    }

    #[test]
    fn missing_date_uses_clock_date() {
        let dt = reconstruct(&clock(), None, Some("123519")).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 11, 5, 12, 35, 19).unwrap());

        let dt = reconstruct(&clock(), Some(""), Some("123519.25")).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 11, 5, 12, 35, 19).unwrap());
    }

    #[test]
    fn missing_time_uses_clock_time() {
        let dt = reconstruct(&clock(), Some("230394"), None).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2094, 3, 23, 7, 30, 12).unwrap());
    }

    #[test]
    fn missing_both_is_now_in_whole_seconds() {
        let now = Utc.with_ymd_and_hms(2023, 11, 5, 7, 30, 12).unwrap()
            + Duration::milliseconds(750);
        let dt = reconstruct(&FixedClock(now), None, Some("")).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 11, 5, 7, 30, 12).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert_matches!(
            reconstruct(&clock(), Some("16061"), Some("180826")),
            Err(DecodeError::UnparsableNumber { field: "date", .. })
        );
        assert_matches!(
            reconstruct(&clock(), Some("16o614"), Some("180826")),
            Err(DecodeError::UnparsableNumber { field: "date", .. })
        );
        assert_matches!(
            reconstruct(&clock(), Some("160614"), Some("1808")),
            Err(DecodeError::UnparsableNumber { field: "time", .. })
        );
        assert_matches!(
            reconstruct(&clock(), Some("160614"), Some("180826.x")),
            Err(DecodeError::UnparsableNumber { field: "time", .. })
        );
        assert_matches!(
            reconstruct(&clock(), None, Some("+18082")),
            Err(DecodeError::UnparsableNumber { field: "time", .. })
        );
    }

    #[test]
    fn rejects_impossible_values() {
        assert_matches!(
            reconstruct(&clock(), Some("310299"), Some("120000")),
            Err(DecodeError::InvalidDateTime { .. })
        );
        assert_matches!(
            reconstruct(&clock(), Some("010199"), Some("256000")),
            Err(DecodeError::InvalidDateTime { .. })
        );
        assert_matches!(
            reconstruct(&clock(), Some("010199"), Some("235961")),
            Err(DecodeError::InvalidDateTime { .. })
        );
        assert_matches!(
            reconstruct(&clock(), Some("010199"), Some("126000")),
            Err(DecodeError::InvalidDateTime { .. })
        );
    }
}
