//! Convenience facade for the chandra lunar phase engine.
//!
//! Wires the clock, ephemeris, classifier and icon crates into a single
//! pure call: give [`MoonEngine::snapshot`] an instant and get back the
//! angles, phase state, icon geometry, label and display timestamp.
//!
//! # Quick start
//!
//! ```rust
//! use chandra_rs::*;
//!
//! let engine = MoonEngine::default().with_zone(Some("Asia/Kolkata"));
//! let date: UtcTime = "2024-03-20T12:00:00Z".parse().unwrap();
//! let snap = engine.snapshot(&date);
//! assert_eq!(snap.label, "Shukla Paksha, Ekadashi");
//! ```

pub mod engine;
pub mod error;

pub use engine::{DARK_FILL, LIT_FILL, MoonEngine, MoonSnapshot};
pub use error::ChandraError;

// Re-export the types that appear in a snapshot so callers only need this crate.
pub use chandra_clock::{Clock, FixedClock, SystemClock, Ticker, TickerHandle};
pub use chandra_config::{EngineConfig, IconConfig, load_config};
pub use chandra_ephem::{EphemerisAngles, EphemerisModel};
pub use chandra_icon::{Disk, IconGeometry, IconModel, InnerEdge};
pub use chandra_phase::{MoonPhase, Paksha, PhaseState, Tithi};
pub use chandra_time::{DisplayZone, TimeScale, UtcTime, format_local};

/// Snapshot for `instant` with the default engine. Timestamps use the host zone.
pub fn snapshot(instant: &UtcTime) -> MoonSnapshot {
    MoonEngine::default().snapshot(instant)
}
