//! Time scale used for the day count fed to the ephemeris series.

use serde::{Deserialize, Serialize};

use crate::julian::SECONDS_PER_DAY;

/// TT − UTC in seconds (TAI − UTC = 37 s since 2017-01-01, plus 32.184 s).
pub const TT_MINUS_UTC_S: f64 = 69.184;

/// Time standard in which the J2000.0 day count is measured.
///
/// The series in `chandra_ephem` are defined against TT. `Tt` adds the fixed
/// present-day TT − UTC offset; `Utc` feeds the UTC day count directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeScale {
    /// UTC treated as TT.
    Utc,
    /// Terrestrial Time approximated as UTC + 69.184 s.
    #[default]
    Tt,
}

impl TimeScale {
    /// Offset from UTC in seconds.
    pub const fn offset_seconds(self) -> f64 {
        match self {
            Self::Utc => 0.0,
            Self::Tt => TT_MINUS_UTC_S,
        }
    }

    /// Offset from UTC in days.
    pub fn offset_days(self) -> f64 {
        self.offset_seconds() / SECONDS_PER_DAY
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Utc => "utc",
            Self::Tt => "tt",
        }
    }
}

impl std::str::FromStr for TimeScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utc" => Ok(Self::Utc),
            "tt" => Ok(Self::Tt),
            other => Err(format!("unknown time scale: {other} (expected utc or tt)")),
        }
    }
}
