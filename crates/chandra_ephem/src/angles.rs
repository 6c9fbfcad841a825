//! Geocentric ecliptic longitudes of the Sun and Moon.

use std::f64::consts::{PI, TAU};

/// Normalize an angle to [0, 2π) radians.
///
/// Values that round up to exactly 2π after the remainder are folded to 0.
pub fn normalize_2pi(rad: f64) -> f64 {
    let r = rad.rem_euclid(TAU);
    if r >= TAU { 0.0 } else { r }
}

/// Sun and Moon geocentric ecliptic longitudes at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisAngles {
    /// Sun's ecliptic longitude, radians in [0, 2π).
    pub sun_longitude: f64,
    /// Moon's ecliptic longitude, radians in [0, 2π).
    pub moon_longitude: f64,
}

impl EphemerisAngles {
    /// Build from raw longitudes, normalizing both to [0, 2π).
    pub fn new(sun_longitude: f64, moon_longitude: f64) -> Self {
        Self {
            sun_longitude: normalize_2pi(sun_longitude),
            moon_longitude: normalize_2pi(moon_longitude),
        }
    }

    /// Moon − Sun, radians in [0, 2π). 0 at new moon, π at full moon.
    pub fn elongation(&self) -> f64 {
        normalize_2pi(self.moon_longitude - self.sun_longitude)
    }

    /// Signed elongation difference to `other`, radians in [-π, π).
    pub fn elongation_delta(&self, other: &Self) -> f64 {
        (self.elongation() - other.elongation() + PI).rem_euclid(TAU) - PI
    }

    pub fn sun_longitude_deg(&self) -> f64 {
        self.sun_longitude.to_degrees()
    }

    pub fn moon_longitude_deg(&self) -> f64 {
        self.moon_longitude.to_degrees()
    }
}
