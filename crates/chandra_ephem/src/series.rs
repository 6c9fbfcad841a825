//! Closed-form low-precision Sun and Moon longitudes.
//!
//! Sun: mean anomaly plus a three-term equation of center, shifted by Earth's
//! argument of perihelion and rotated by π from heliocentric Earth to
//! geocentric Sun.
//!
//! Moon: mean longitude plus the single dominant (equation of center) term of
//! the lunar theory. Accuracy is roughly a degree, which keeps tithi
//! boundaries within about half a day.

use std::f64::consts::PI;

use crate::angles::{EphemerisAngles, normalize_2pi};
use crate::strategy::EphemerisStrategy;

/// Solar mean anomaly at J2000.0, degrees.
pub const SUN_MEAN_ANOMALY_J2000_DEG: f64 = 357.5291;
/// Solar mean anomaly rate, degrees/day.
pub const SUN_MEAN_ANOMALY_RATE_DEG: f64 = 0.985_600_28;
/// Argument of perihelion of Earth's orbit, degrees.
pub const EARTH_PERIHELION_DEG: f64 = 102.9372;

/// Lunar mean longitude at J2000.0, degrees.
pub const MOON_MEAN_LONGITUDE_J2000_DEG: f64 = 218.316;
/// Lunar mean longitude rate, degrees/day.
pub const MOON_MEAN_LONGITUDE_RATE_DEG: f64 = 13.176_396;
/// Lunar mean anomaly at J2000.0, degrees.
pub const MOON_MEAN_ANOMALY_J2000_DEG: f64 = 134.963;
/// Lunar mean anomaly rate, degrees/day.
pub const MOON_MEAN_ANOMALY_RATE_DEG: f64 = 13.064_993;
/// Amplitude of the lunar equation of center, degrees.
pub const MOON_EQUATION_OF_CENTER_DEG: f64 = 6.289;

/// Solar mean anomaly in radians (not reduced).
///
/// `d` = days since J2000.0.
pub fn sun_mean_anomaly(d: f64) -> f64 {
    (SUN_MEAN_ANOMALY_J2000_DEG + SUN_MEAN_ANOMALY_RATE_DEG * d).to_radians()
}

/// Equation of center for mean anomaly `m` (radians), in radians.
pub fn sun_equation_of_center(m: f64) -> f64 {
    (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin()).to_radians()
}

/// Sun's geocentric ecliptic longitude in radians [0, 2π).
pub fn sun_longitude(d: f64) -> f64 {
    let m = sun_mean_anomaly(d);
    let c = sun_equation_of_center(m);
    normalize_2pi(m + c + EARTH_PERIHELION_DEG.to_radians() + PI)
}

/// Moon's geocentric ecliptic longitude in radians [0, 2π).
pub fn moon_longitude(d: f64) -> f64 {
    let l = (MOON_MEAN_LONGITUDE_J2000_DEG + MOON_MEAN_LONGITUDE_RATE_DEG * d).to_radians();
    let mm = (MOON_MEAN_ANOMALY_J2000_DEG + MOON_MEAN_ANOMALY_RATE_DEG * d).to_radians();
    normalize_2pi(l + MOON_EQUATION_OF_CENTER_DEG.to_radians() * mm.sin())
}

/// Canonical lunar model: both bodies from the closed-form series above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LowPrecisionSeries;

impl EphemerisStrategy for LowPrecisionSeries {
    fn angles(&self, days_since_j2000: f64) -> EphemerisAngles {
        EphemerisAngles {
            sun_longitude: sun_longitude(days_since_j2000),
            moon_longitude: moon_longitude(days_since_j2000),
        }
    }
}
