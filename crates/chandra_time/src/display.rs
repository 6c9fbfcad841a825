//! Human-readable timestamps in a display timezone.
//!
//! The zone string comes from an external time-settings store. A missing,
//! empty, sentinel, or unknown zone falls back to the host's local zone; it
//! never fails the caller.

use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;

use crate::utc_time::UtcTime;

/// Weekday, day, month, year, 12-hour clock with AM/PM marker.
pub const TIMESTAMP_FORMAT: &str = "%A, %-d %B %Y %I:%M:%S %p";

/// Zone strings meaning "use the host default".
pub const HOST_DEFAULT_SENTINELS: [&str; 3] = ["local", "system", "default"];

/// Where a formatted timestamp's zone came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// A named IANA zone.
    Named(Tz),
    /// The host's local zone.
    #[default]
    HostDefault,
}

impl DisplayZone {
    /// Resolve an optional zone identifier.
    pub fn resolve(timezone: Option<&str>) -> Self {
        let Some(name) = timezone.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::HostDefault;
        };
        if HOST_DEFAULT_SENTINELS
            .iter()
            .any(|s| s.eq_ignore_ascii_case(name))
        {
            return Self::HostDefault;
        }
        match name.parse::<Tz>() {
            Ok(tz) => Self::Named(tz),
            Err(_) => {
                tracing::warn!(timezone = name, "unknown timezone, using host default");
                Self::HostDefault
            }
        }
    }

    /// Format a `chrono` UTC timestamp in this zone.
    pub fn format(self, dt: &DateTime<Utc>) -> String {
        match self {
            Self::Named(tz) => dt.with_timezone(&tz).format(TIMESTAMP_FORMAT).to_string(),
            Self::HostDefault => dt.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Format `utc` for display in `timezone` (see [`DisplayZone::resolve`]).
///
/// Instants whose calendar fields `chrono` rejects are shown in ISO form.
pub fn format_local(utc: &UtcTime, timezone: Option<&str>) -> String {
    match utc.to_datetime() {
        Some(dt) => DisplayZone::resolve(timezone).format(&dt),
        None => utc.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_zone_kolkata() {
        let t = UtcTime::new(2024, 1, 25, 17, 54, 0.0);
        assert_eq!(
            format_local(&t, Some("Asia/Kolkata")),
            "Thursday, 25 January 2024 11:24:00 PM"
        );
    }

    #[test]
    fn named_zone_new_york() {
        let t = UtcTime::new(2024, 1, 25, 17, 54, 0.0);
        assert_eq!(
            format_local(&t, Some("America/New_York")),
            "Thursday, 25 January 2024 12:54:00 PM"
        );
    }

    #[test]
    fn utc_zone_morning() {
        let t = UtcTime::new(2000, 1, 1, 9, 5, 7.0);
        assert_eq!(
            format_local(&t, Some("UTC")),
            "Saturday, 1 January 2000 09:05:07 AM"
        );
    }

    #[test]
    fn sentinels_and_garbage_use_host_default() {
        assert_eq!(DisplayZone::resolve(None), DisplayZone::HostDefault);
        assert_eq!(DisplayZone::resolve(Some("")), DisplayZone::HostDefault);
        assert_eq!(DisplayZone::resolve(Some("Local")), DisplayZone::HostDefault);
        assert_eq!(
            DisplayZone::resolve(Some("Mars/Olympus_Mons")),
            DisplayZone::HostDefault
        );
        assert_eq!(
            DisplayZone::resolve(Some("Europe/Berlin")),
            DisplayZone::Named(chrono_tz::Europe::Berlin)
        );
    }

    #[test]
    fn unknown_zone_still_formats() {
        let t = UtcTime::new(2024, 1, 25, 17, 54, 0.0);
        let s = format_local(&t, Some("not/a-zone"));
        assert!(s.contains("2024"), "got: {s}");
    }

    #[test]
    fn invalid_calendar_falls_back_to_iso() {
        let t = UtcTime::new(2023, 2, 30, 0, 0, 0.0);
        assert_eq!(format_local(&t, Some("UTC")), "2023-02-30T00:00:00Z");
    }
}
