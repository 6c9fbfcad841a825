//! Arc-sweep icon: outer semicircle plus an elliptical terminator.
//!
//! The terminator's horizontal radius is `|cos(2πp)|·r`. Waxing lights the
//! right half (outer sweep clockwise top → bottom); waning lights the left.
//! The inner sweep is `waxing != (cos(2πp) > 0)`: it bulges toward the lit
//! side for a crescent and away from it for a gibbous moon.

use std::f64::consts::TAU;

use crate::geometry_types::{Disk, IconGeometry, InnerEdge};
use crate::strategy::{IconStrategy, sanitize_phase};

/// Terminator radii below this collapse to a straight diameter.
pub const ARC_EPSILON: f64 = 1e-3;

/// Canonical icon strategy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArcSweep {
    pub disk: Disk,
}

impl ArcSweep {
    pub fn new(disk: Disk) -> Self {
        Self { disk }
    }
}

impl IconStrategy for ArcSweep {
    fn geometry(&self, phase_fraction: f64) -> IconGeometry {
        let disk = self.disk.clamped();
        let p = sanitize_phase(phase_fraction);
        let waxing = p < 0.5;
        let c = (TAU * p).cos();
        let rx = c.abs() * disk.r;
        let inner = if rx < ARC_EPSILON {
            InnerEdge::Diameter
        } else {
            InnerEdge::Arc {
                rx,
                ry: disk.r,
                sweep: waxing != (c > 0.0),
            }
        };
        IconGeometry::Arcs {
            disk,
            outer_sweep: waxing,
            inner,
        }
    }
}
