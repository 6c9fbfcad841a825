//! Tithi (lunar day) and Paksha (fortnight) enumeration.
//!
//! 30 tithis per synodic month, each spanning 12 deg of Moon-Sun elongation.
//! Tithis 1-15 form Shukla paksha (waxing), ending at Purnima; 16-30 form
//! Krishna paksha (waning), ending at Amavasya.

/// Elongation span of one tithi, degrees.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Number of tithis in a synodic month.
pub const TITHI_COUNT: u8 = 30;

/// Names shared by the first 14 tithis of each paksha.
pub const TITHI_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Bright (waxing) half: tithis 1-15.
    Shukla,
    /// Dark (waning) half: tithis 16-30.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 30 tithis of a synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

/// All 30 tithis in order (index 0 = Shukla Pratipada).
pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

impl Tithi {
    /// Tithi for a 1-based number; out-of-range numbers are clamped to [1, 30].
    pub fn from_number(number: u8) -> Self {
        ALL_TITHIS[(number.clamp(1, TITHI_COUNT) - 1) as usize]
    }

    /// 1-based number in the month (1 = Shukla Pratipada, 30 = Amavasya).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn paksha(self) -> Paksha {
        if self.number() <= 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// 1-based position within the paksha (1-15).
    pub fn in_paksha(self) -> u8 {
        (self.number() - 1) % 15 + 1
    }

    /// Traditional name, without the paksha prefix.
    pub fn name(self) -> &'static str {
        match self {
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
            other => TITHI_NAMES[(other.in_paksha() - 1) as usize],
        }
    }
}

/// Tithi position within the month for a given elongation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPosition {
    pub tithi: Tithi,
    /// 1-based tithi number (1-30).
    pub tithi_index: u8,
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Degrees already elapsed within the current tithi, [0, 12).
    pub degrees_in_tithi: f64,
}

/// 1-based tithi number for a phase fraction in [0, 1).
///
/// A fraction that rounds up to 1.0 stays in tithi 30 instead of wrapping.
/// NaN maps to tithi 1.
pub fn tithi_number_from_phase(phase_fraction: f64) -> u8 {
    let raw = (phase_fraction * f64::from(TITHI_COUNT)).floor() + 1.0;
    raw.max(1.0).min(f64::from(TITHI_COUNT)) as u8
}

/// Classify a Moon-Sun elongation in degrees [0, 360].
///
/// Exactly 360 is treated as the end of Amavasya rather than Pratipada.
/// Values outside the closed range are reduced mod 360 first.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let deg = if (0.0..=360.0).contains(&elongation_deg) {
        elongation_deg
    } else {
        elongation_deg.rem_euclid(360.0)
    };
    let tithi_index = tithi_number_from_phase(deg / 360.0);
    let tithi = Tithi::from_number(tithi_index);
    let start = f64::from(tithi_index - 1) * TITHI_SEGMENT_DEG;
    TithiPosition {
        tithi,
        tithi_index,
        paksha: tithi.paksha(),
        tithi_in_paksha: tithi.in_paksha(),
        degrees_in_tithi: (deg - start).clamp(0.0, TITHI_SEGMENT_DEG),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_names() {
        assert_eq!(Tithi::from_number(15).name(), "Purnima");
        assert_eq!(Tithi::from_number(30).name(), "Amavasya");
        assert_eq!(Tithi::from_number(1).name(), "Pratipada");
        assert_eq!(Tithi::from_number(16).name(), "Pratipada");
        assert_eq!(Tithi::from_number(29).name(), "Chaturdashi");
    }

    #[test]
    fn paksha_split() {
        for t in ALL_TITHIS {
            let expected = if t.number() <= 15 { Paksha::Shukla } else { Paksha::Krishna };
            assert_eq!(t.paksha(), expected, "{t:?}");
        }
    }

    #[test]
    fn numbers_are_sequential() {
        for (i, t) in ALL_TITHIS.iter().enumerate() {
            assert_eq!(t.number() as usize, i + 1);
        }
    }

    #[test]
    fn from_number_clamps() {
        assert_eq!(Tithi::from_number(0), Tithi::ShuklaPratipada);
        assert_eq!(Tithi::from_number(31), Tithi::Amavasya);
    }

    #[test]
    fn elongation_zero_is_pratipada() {
        let pos = tithi_from_elongation(0.0);
        assert_eq!(pos.tithi, Tithi::ShuklaPratipada);
        assert_eq!(pos.tithi_index, 1);
        assert_eq!(pos.paksha, Paksha::Shukla);
    }

    #[test]
    fn elongation_mid_month() {
        let pos = tithi_from_elongation(180.0);
        assert_eq!(pos.tithi, Tithi::KrishnaPratipada);
        assert_eq!(pos.tithi_in_paksha, 1);
        assert!(pos.degrees_in_tithi.abs() < 1e-9);

        let pos = tithi_from_elongation(179.9);
        assert_eq!(pos.tithi, Tithi::Purnima);
        assert!((pos.degrees_in_tithi - 11.9).abs() < 1e-9);
    }

    #[test]
    fn full_circle_stays_amavasya() {
        assert_eq!(tithi_from_elongation(360.0).tithi, Tithi::Amavasya);
        assert_eq!(tithi_number_from_phase(1.0), 30);
    }

    #[test]
    fn out_of_range_elongation_is_reduced() {
        assert_eq!(tithi_from_elongation(-6.0).tithi, Tithi::Amavasya);
        assert_eq!(tithi_from_elongation(366.0).tithi, Tithi::ShuklaPratipada);
    }

    #[test]
    fn paksha_names() {
        assert_eq!(Paksha::Shukla.name(), "Shukla");
        assert_eq!(Paksha::Krishna.name(), "Krishna");
    }
}
