//! Phase classifier for the chandra lunar engine.
//!
//! Turns Sun and Moon longitudes into an elongation, phase fraction,
//! illuminated fraction, waxing flag, and a tithi/paksha label.
//!
//! All functions are pure and total.

pub mod classify;
pub mod moon_phase;
pub mod tithi;

pub use classify::{PhaseState, classify, classify_elongation, illumination};
pub use moon_phase::{ALL_MOON_PHASES, MoonPhase};
pub use tithi::{
    ALL_TITHIS, Paksha, TITHI_COUNT, TITHI_NAMES, TITHI_SEGMENT_DEG, Tithi, TithiPosition,
    tithi_from_elongation, tithi_number_from_phase,
};
