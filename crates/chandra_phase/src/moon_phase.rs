//! The eight principal phase names.

/// Conventional phase name for a point in the lunation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All phases in lunation order.
pub const ALL_MOON_PHASES: [MoonPhase; 8] = [
    MoonPhase::New,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::Full,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
];

impl MoonPhase {
    /// Phase for a fraction in [0, 1). Each name covers a 1/8 bin centred on
    /// its principal point (New at 0, First Quarter at 0.25, ...).
    pub fn from_phase_fraction(phase_fraction: f64) -> Self {
        let p = phase_fraction.rem_euclid(1.0);
        let bin = ((p * 8.0 + 0.5).floor() as usize) % 8;
        ALL_MOON_PHASES[bin]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}
