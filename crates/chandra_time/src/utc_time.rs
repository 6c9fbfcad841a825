//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the instant type passed through the whole pipeline. It is
//! a plain value: every clock tick produces a new one.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};

use crate::error::TimeError;
use crate::julian::{J2000_JD, calendar_to_jd, jd_to_calendar, jd_to_unix_seconds, unix_seconds_to_jd};
use crate::scale::TimeScale;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// The J2000.0 reference instant, 2000-01-01T12:00:00Z.
    pub fn j2000() -> Self {
        Self::new(2000, 1, 1, 12, 0, 0.0)
    }

    /// Build from a `chrono` UTC timestamp.
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 / 1e9,
        }
    }

    /// Build from seconds since the Unix epoch.
    ///
    /// Timestamps outside `chrono`'s range go through Julian Date arithmetic.
    pub fn from_unix_seconds(seconds: f64) -> Self {
        let whole = seconds.floor();
        let nanos = ((seconds - whole) * 1e9).round().min(999_999_999.0) as u32;
        match Utc.timestamp_opt(whole as i64, nanos).single() {
            Some(dt) => Self::from_datetime(&dt),
            None => Self::from_jd_utc(unix_seconds_to_jd(seconds)),
        }
    }

    /// Build from a Julian Date on the UTC scale.
    pub fn from_jd_utc(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Convert to a `chrono` timestamp. `None` if a calendar field is invalid.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let whole = self.second.floor();
        let nanos = ((self.second - whole) * 1e9).round().min(999_999_999.0) as u32;
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_nano_opt(self.hour, self.minute, whole as u32, nanos)
            .map(|naive| naive.and_utc())
    }

    /// Julian Date on the UTC scale (calendar-only, no leap-second table).
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Seconds since the Unix epoch.
    pub fn to_unix_seconds(&self) -> f64 {
        jd_to_unix_seconds(self.to_jd_utc())
    }

    /// Days since J2000.0 measured on `scale`. Negative before the epoch.
    pub fn days_since_j2000(&self, scale: TimeScale) -> f64 {
        self.to_jd_utc() - J2000_JD + scale.offset_days()
    }
}

impl From<DateTime<Utc>> for UtcTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(&dt)
    }
}

impl fmt::Display for UtcTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T, TimeError> {
    value.parse().map_err(|_| TimeError::Field {
        field,
        value: value.to_string(),
    })
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm:ssZ` (the trailing `Z` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('Z');
        let Some((date, time)) = trimmed.split_once('T') else {
            return Err(TimeError::Format(s.to_string()));
        };
        let date_parts: Vec<&str> = date.split('-').collect();
        let time_parts: Vec<&str> = time.split(':').collect();
        if date_parts.len() != 3 || time_parts.len() != 3 {
            return Err(TimeError::Format(s.to_string()));
        }

        let year: i32 = parse_field("year", date_parts[0])?;
        let month: u32 = parse_field("month", date_parts[1])?;
        let day: u32 = parse_field("day", date_parts[2])?;
        let hour: u32 = parse_field("hour", time_parts[0])?;
        let minute: u32 = parse_field("minute", time_parts[1])?;
        let second: f64 = parse_field("second", time_parts[2])?;

        if !(1..=12).contains(&month) {
            return Err(TimeError::OutOfRange("month"));
        }
        if !(1..=31).contains(&day) {
            return Err(TimeError::OutOfRange("day"));
        }
        if hour > 23 {
            return Err(TimeError::OutOfRange("hour"));
        }
        if minute > 59 {
            return Err(TimeError::OutOfRange("minute"));
        }
        if !(0.0..61.0).contains(&second) {
            return Err(TimeError::OutOfRange("second"));
        }
        Ok(Self::new(year, month, day, hour, minute, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn display_fractional_seconds() {
        let t = UtcTime::new(2024, 1, 15, 12, 30, 45.123);
        let s = t.to_string();
        assert!(s.contains("12:30:"), "got: {s}");
    }

    #[test]
    fn parse_with_and_without_z() {
        let a: UtcTime = "2024-01-25T17:54:00Z".parse().unwrap();
        let b: UtcTime = "2024-01-25T17:54:00".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, UtcTime::new(2024, 1, 25, 17, 54, 0.0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "2024-01-25 17:54".parse::<UtcTime>(),
            Err(TimeError::Format(_))
        ));
        assert!(matches!(
            "2024-xx-25T17:54:00Z".parse::<UtcTime>(),
            Err(TimeError::Field { field: "month", .. })
        ));
        assert_eq!(
            "2024-13-25T17:54:00Z".parse::<UtcTime>(),
            Err(TimeError::OutOfRange("month"))
        );
    }

    #[test]
    fn j2000_day_count_is_zero_on_utc_scale() {
        assert!(UtcTime::j2000().days_since_j2000(TimeScale::Utc).abs() < 1e-12);
        let tt = UtcTime::j2000().days_since_j2000(TimeScale::Tt);
        assert!((tt - 69.184 / 86_400.0).abs() < 1e-9);
    }

    #[test]
    fn days_before_epoch_are_negative() {
        let t = UtcTime::new(1999, 12, 31, 12, 0, 0.0);
        assert!((t.days_since_j2000(TimeScale::Utc) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn unix_roundtrip() {
        let t = UtcTime::from_unix_seconds(1_706_205_240.25);
        assert_eq!((t.year, t.month, t.day), (2024, 1, 25));
        assert_eq!((t.hour, t.minute), (17, 54));
        assert!((t.second - 0.25).abs() < 1e-6);
        assert!((t.to_unix_seconds() - 1_706_205_240.25).abs() < 1e-3);
    }

    #[test]
    fn chrono_roundtrip() {
        let t = UtcTime::new(2024, 2, 29, 6, 7, 8.5);
        let dt = t.to_datetime().unwrap();
        assert_eq!(UtcTime::from(dt), t);
    }

    #[test]
    fn invalid_calendar_has_no_datetime() {
        assert!(UtcTime::new(2023, 2, 30, 0, 0, 0.0).to_datetime().is_none());
    }
}
