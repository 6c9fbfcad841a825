//! Mask-offset icon: a bright disk clipped by a sliding dark disk.
//!
//! The dark disk travels `illumination · (2r − reserve)` away from the bright
//! one, leaving a thin sliver until illumination reaches the near-full
//! threshold, where it snaps fully clear (`2r`). It slides left while waxing
//! (lit limb on the right) and right while waning.

use chandra_phase::illumination;

use crate::geometry_types::{Disk, IconGeometry};
use crate::strategy::{IconStrategy, sanitize_phase};

/// Travel withheld below the full threshold, in icon units.
pub const MASK_SLIVER_RESERVE: f64 = 1.2;

/// Illumination at and above which the mask clears the disk entirely.
pub const MASK_FULL_THRESHOLD: f64 = 0.9995;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MaskOffset {
    pub disk: Disk,
}

impl MaskOffset {
    pub fn new(disk: Disk) -> Self {
        Self { disk }
    }

    /// Unsigned mask travel for an illuminated fraction.
    pub fn travel(&self, illum: f64) -> f64 {
        let full = 2.0 * self.disk.clamped().r;
        if illum >= MASK_FULL_THRESHOLD {
            full
        } else {
            illum.clamp(0.0, 1.0) * (full - MASK_SLIVER_RESERVE).max(0.0)
        }
    }
}

impl IconStrategy for MaskOffset {
    fn geometry(&self, phase_fraction: f64) -> IconGeometry {
        let p = sanitize_phase(phase_fraction);
        let dx = self.travel(illumination(p));
        IconGeometry::Mask {
            disk: self.disk.clamped(),
            offset: if p < 0.5 { -dx } else { dx },
        }
    }
}
