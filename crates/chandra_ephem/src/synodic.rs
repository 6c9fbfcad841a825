//! Mean synodic-month lunar model.
//!
//! Elongation grows uniformly from a reference new moon at the mean synodic
//! rate. The Sun comes from the closed-form series; the Moon is placed at
//! Sun + elongation. Ignores the lunar equation of center, so phase errors
//! reach roughly ±11 deg of elongation (under one tithi).

use std::f64::consts::TAU;

use crate::angles::{EphemerisAngles, normalize_2pi};
use crate::series::sun_longitude;
use crate::strategy::EphemerisStrategy;

/// Mean synodic month, days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// Reference new moon 2000-01-06 18:14 UTC, days since J2000.0.
pub const REFERENCE_NEW_MOON_DAYS: f64 = 5.259_722;

/// Elongation in radians [0, 2π) from mean lunation arithmetic.
pub fn mean_elongation(days_since_j2000: f64) -> f64 {
    let lunations = (days_since_j2000 - REFERENCE_NEW_MOON_DAYS) / SYNODIC_MONTH_DAYS;
    normalize_2pi(lunations.rem_euclid(1.0) * TAU)
}

/// Days elapsed since the most recent mean new moon, in [0, synodic month).
pub fn moon_age_days(days_since_j2000: f64) -> f64 {
    (days_since_j2000 - REFERENCE_NEW_MOON_DAYS).rem_euclid(SYNODIC_MONTH_DAYS)
}

/// Alternative lunar model using fixed synodic-month arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SynodicMonth;

impl EphemerisStrategy for SynodicMonth {
    fn angles(&self, days_since_j2000: f64) -> EphemerisAngles {
        let sun = sun_longitude(days_since_j2000);
        EphemerisAngles::new(sun, sun + mean_elongation(days_since_j2000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_new_moon_has_zero_elongation() {
        let e = SynodicMonth.angles(REFERENCE_NEW_MOON_DAYS).elongation();
        assert!(e < 1e-6 || TAU - e < 1e-6, "elongation = {e}");
    }

    #[test]
    fn half_lunation_is_full() {
        let d = REFERENCE_NEW_MOON_DAYS + SYNODIC_MONTH_DAYS / 2.0;
        let e = SynodicMonth.angles(d).elongation();
        assert!((e - std::f64::consts::PI).abs() < 1e-6, "elongation = {e}");
    }

    #[test]
    fn age_before_reference_wraps() {
        let age = moon_age_days(REFERENCE_NEW_MOON_DAYS - 1.0);
        assert!((age - (SYNODIC_MONTH_DAYS - 1.0)).abs() < 1e-9);
    }
}
