//! Icon geometry generator: a vector moon disk for a phase fraction.
//!
//! Two interchangeable strategies implement [`IconStrategy`]:
//! - [`ArcSweep`] (canonical): semicircle plus elliptical terminator path
//! - [`MaskOffset`]: bright disk clipped by a horizontally offset dark disk
//!
//! Both are continuous through the quarter and half phases and mirror
//! waxing at `p` onto waning at `1 − p`.

pub mod arc_sweep;
pub mod geometry_types;
pub mod mask_offset;
pub mod strategy;

pub use arc_sweep::{ARC_EPSILON, ArcSweep};
pub use geometry_types::{DEFAULT_CENTER, DEFAULT_RADIUS, Disk, IconGeometry, InnerEdge};
pub use mask_offset::{MASK_FULL_THRESHOLD, MASK_SLIVER_RESERVE, MaskOffset};
pub use strategy::{IconGenerator, IconModel, IconStrategy, geometry, sanitize_phase};
