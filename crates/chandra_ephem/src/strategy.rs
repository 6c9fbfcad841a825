//! Lunar model abstraction and runtime selection.

use chandra_time::{TimeScale, UtcTime};
use serde::{Deserialize, Serialize};

use crate::angles::EphemerisAngles;
use crate::series::LowPrecisionSeries;
use crate::synodic::SynodicMonth;

/// A lunar/solar model: a pure mapping from a J2000.0 day count to longitudes.
pub trait EphemerisStrategy {
    /// Longitudes at `days_since_j2000` (fractional, negative before the epoch).
    fn angles(&self, days_since_j2000: f64) -> EphemerisAngles;

    /// Longitudes at a UTC instant, with the day count measured on `scale`.
    fn angles_at(&self, utc: &UtcTime, scale: TimeScale) -> EphemerisAngles {
        self.angles(utc.days_since_j2000(scale))
    }
}

/// Selectable lunar model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EphemerisModel {
    /// Closed-form series with the dominant lunar correction (canonical).
    #[default]
    LowPrecision,
    /// Mean synodic month from a reference new moon.
    Synodic,
}

/// All models, canonical first.
pub const ALL_MODELS: [EphemerisModel; 2] = [EphemerisModel::LowPrecision, EphemerisModel::Synodic];

impl EphemerisModel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::LowPrecision => "low_precision",
            Self::Synodic => "synodic",
        }
    }
}

impl EphemerisStrategy for EphemerisModel {
    fn angles(&self, days_since_j2000: f64) -> EphemerisAngles {
        match self {
            Self::LowPrecision => LowPrecisionSeries.angles(days_since_j2000),
            Self::Synodic => SynodicMonth.angles(days_since_j2000),
        }
    }
}

impl std::str::FromStr for EphemerisModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "low_precision" | "series" => Ok(Self::LowPrecision),
            "synodic" => Ok(Self::Synodic),
            other => Err(format!(
                "unknown ephemeris model: {other} (expected low_precision or synodic)"
            )),
        }
    }
}

/// Compute longitudes at `utc` with the canonical model on the TT scale.
pub fn compute_angles(utc: &UtcTime) -> EphemerisAngles {
    LowPrecisionSeries.angles_at(utc, TimeScale::Tt)
}
