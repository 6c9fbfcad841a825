//! Ephemeris calculator: geocentric ecliptic longitudes of the Sun and Moon.
//!
//! This crate provides:
//! - `EphemerisAngles` and angle normalization helpers
//! - `LowPrecisionSeries`, the canonical closed-form model
//! - `SynodicMonth`, a mean-lunation model kept as a cross-check
//! - The `EphemerisStrategy` trait and runtime `EphemerisModel` selection
//!
//! Every computation is a pure function of the day count; nothing is cached.

pub mod angles;
pub mod series;
pub mod strategy;
pub mod synodic;

pub use angles::{EphemerisAngles, normalize_2pi};
pub use series::{
    LowPrecisionSeries, moon_longitude, sun_equation_of_center, sun_longitude, sun_mean_anomaly,
};
pub use strategy::{ALL_MODELS, EphemerisModel, EphemerisStrategy, compute_angles};
pub use synodic::{
    REFERENCE_NEW_MOON_DAYS, SYNODIC_MONTH_DAYS, SynodicMonth, mean_elongation, moon_age_days,
};
