//! Icon strategy abstraction and runtime selection.

use serde::{Deserialize, Serialize};

use crate::arc_sweep::ArcSweep;
use crate::geometry_types::{Disk, IconGeometry};
use crate::mask_offset::MaskOffset;

/// Maps a phase fraction to an icon shape. Pure.
pub trait IconStrategy {
    fn geometry(&self, phase_fraction: f64) -> IconGeometry;
}

/// Reduce a phase fraction to [0, 1); non-finite input becomes 0 (new moon).
pub fn sanitize_phase(phase_fraction: f64) -> f64 {
    if !phase_fraction.is_finite() {
        return 0.0;
    }
    let p = phase_fraction.rem_euclid(1.0);
    if p >= 1.0 { 0.0 } else { p }
}

/// Selectable icon strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconModel {
    /// Outer semicircle plus elliptical terminator (canonical).
    #[default]
    ArcSweep,
    /// Bright disk minus an offset dark disk.
    MaskOffset,
}

impl IconModel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ArcSweep => "arc_sweep",
            Self::MaskOffset => "mask_offset",
        }
    }
}

impl std::str::FromStr for IconModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "arc_sweep" | "arcs" => Ok(Self::ArcSweep),
            "mask_offset" | "mask" => Ok(Self::MaskOffset),
            other => Err(format!(
                "unknown icon model: {other} (expected arc_sweep or mask_offset)"
            )),
        }
    }
}

/// An icon model bound to a disk.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IconGenerator {
    pub model: IconModel,
    pub disk: Disk,
}

impl IconGenerator {
    pub fn new(model: IconModel, disk: Disk) -> Self {
        Self { model, disk }
    }
}

impl IconStrategy for IconGenerator {
    fn geometry(&self, phase_fraction: f64) -> IconGeometry {
        match self.model {
            IconModel::ArcSweep => ArcSweep::new(self.disk).geometry(phase_fraction),
            IconModel::MaskOffset => MaskOffset::new(self.disk).geometry(phase_fraction),
        }
    }
}

/// Icon for `phase_fraction` with the canonical strategy and default disk.
pub fn geometry(phase_fraction: f64) -> IconGeometry {
    ArcSweep::default().geometry(phase_fraction)
}
