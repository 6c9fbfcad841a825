//! Phase classifier: elongation → phase fraction, illumination, tithi.

use std::f64::consts::{PI, TAU};

use chandra_ephem::EphemerisAngles;

use crate::moon_phase::MoonPhase;
use crate::tithi::{Paksha, Tithi, tithi_number_from_phase};

/// Largest `f64` strictly below 1.0.
const LAST_PHASE_BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Classified lunar phase at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseState {
    /// Moon − Sun elongation, radians in [0, 2π]. Exactly 2π only when the
    /// input rounded up to a full turn.
    pub elongation: f64,
    /// Fraction of the lunation elapsed, [0, 1). 0 = new, 0.5 = full.
    pub phase_fraction: f64,
    /// Illuminated fraction of the disk, [0, 1].
    pub illumination: f64,
    /// `elongation < π`.
    pub waxing: bool,
    pub paksha: Paksha,
    pub tithi: Tithi,
    /// 1-based tithi number (1-30).
    pub tithi_index: u8,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    pub tithi_name: &'static str,
    pub moon_phase: MoonPhase,
}

impl PhaseState {
    /// Display label, e.g. `"Shukla Paksha, Dashami"`.
    pub fn label(&self) -> String {
        format!("{} Paksha, {}", self.paksha.name(), self.tithi_name)
    }

    pub fn elongation_deg(&self) -> f64 {
        self.elongation.to_degrees()
    }
}

/// Half-cosine illuminated fraction for a phase fraction.
pub fn illumination(phase_fraction: f64) -> f64 {
    (0.5 * (1.0 - (TAU * phase_fraction).cos())).clamp(0.0, 1.0)
}

/// Classify Sun and Moon longitudes.
pub fn classify(angles: &EphemerisAngles) -> PhaseState {
    classify_elongation(angles.elongation())
}

/// Classify an elongation in radians.
///
/// Values outside [0, 2π) are reduced; a value that rounds to 2π stays in
/// tithi 30 with a phase fraction just below 1.
pub fn classify_elongation(elongation: f64) -> PhaseState {
    let elongation = if (0.0..=TAU).contains(&elongation) {
        elongation
    } else {
        elongation.rem_euclid(TAU)
    };
    let phase_fraction = (elongation / TAU).min(LAST_PHASE_BELOW_ONE);
    let tithi_index = tithi_number_from_phase(phase_fraction);
    let tithi = Tithi::from_number(tithi_index);
    PhaseState {
        elongation,
        phase_fraction,
        illumination: (0.5 * (1.0 - elongation.cos())).clamp(0.0, 1.0),
        waxing: elongation < PI,
        paksha: tithi.paksha(),
        tithi,
        tithi_index,
        tithi_in_paksha: tithi.in_paksha(),
        tithi_name: tithi.name(),
        moon_phase: MoonPhase::from_phase_fraction(phase_fraction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_moon() {
        let s = classify_elongation(0.0);
        assert_eq!(s.tithi_index, 1);
        assert_eq!(s.paksha, Paksha::Shukla);
        assert!(s.waxing);
        assert!(s.illumination.abs() < 1e-12);
    }

    #[test]
    fn full_moon_boundary() {
        let s = classify_elongation(PI);
        assert_eq!(s.tithi_index, 16);
        assert_eq!(s.paksha, Paksha::Krishna);
        assert!(!s.waxing);
        assert!((s.illumination - 1.0).abs() < 1e-12);

        let s = classify_elongation(PI - 1e-9);
        assert_eq!(s.tithi_name, "Purnima");
        assert!(s.waxing);
    }

    #[test]
    fn full_turn_is_last_tithi() {
        let s = classify_elongation(TAU);
        assert_eq!(s.tithi_index, 30);
        assert_eq!(s.tithi_name, "Amavasya");
        assert!(s.phase_fraction < 1.0);
    }

    #[test]
    fn negative_elongation_is_reduced() {
        let s = classify_elongation(-0.1);
        assert_eq!(s.tithi_index, 30);
        assert!(!s.waxing);
    }

    #[test]
    fn label_format() {
        let s = classify_elongation(110f64.to_radians());
        assert_eq!(s.tithi_index, 10);
        assert_eq!(s.label(), "Shukla Paksha, Dashami");

        let s = classify_elongation(355f64.to_radians());
        assert_eq!(s.label(), "Krishna Paksha, Amavasya");
    }

    #[test]
    fn classify_uses_moon_minus_sun() {
        let angles = EphemerisAngles::new(300f64.to_radians(), 30f64.to_radians());
        let s = classify(&angles);
        assert!((s.elongation_deg() - 90.0).abs() < 1e-9);
        assert_eq!(s.moon_phase, MoonPhase::FirstQuarter);
    }
}
