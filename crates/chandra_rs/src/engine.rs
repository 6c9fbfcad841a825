//! The per-tick pipeline: instant → angles → phase → icon + label.

use std::time::Duration;

use chandra_clock::{Clock, Ticker, TickerHandle};
use chandra_config::EngineConfig;
use chandra_ephem::{EphemerisAngles, EphemerisModel, EphemerisStrategy};
use chandra_icon::{IconGenerator, IconGeometry, IconStrategy};
use chandra_phase::{PhaseState, classify};
use chandra_time::{DisplayZone, TimeScale, UtcTime};

use crate::error::ChandraError;

/// Default fills for [`MoonSnapshot::to_svg`].
pub const LIT_FILL: &str = "#f4f1e1";
pub const DARK_FILL: &str = "#2b2b35";

/// Everything a display needs for one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct MoonSnapshot {
    pub instant: UtcTime,
    pub angles: EphemerisAngles,
    pub phase: PhaseState,
    pub icon: IconGeometry,
    /// `"<Paksha> Paksha, <tithi name>"`.
    pub label: String,
    /// `instant` formatted in the display zone.
    pub timestamp: String,
}

impl MoonSnapshot {
    /// Standalone SVG document of the icon with the default fills.
    pub fn to_svg(&self) -> String {
        self.icon.to_svg(LIT_FILL, DARK_FILL)
    }
}

/// A configured pipeline. Holds no per-tick state, so one engine can serve
/// any number of instants in any order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoonEngine {
    pub ephemeris: EphemerisModel,
    pub time_scale: TimeScale,
    pub icon: IconGenerator,
    pub zone: DisplayZone,
}

impl MoonEngine {
    /// Build from an already-validated configuration.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            ephemeris: config.ephemeris,
            time_scale: config.time_scale,
            icon: config.icon.generator(),
            zone: DisplayZone::resolve(config.timezone.as_deref()),
        }
    }

    /// Validate `config`, then build.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ChandraError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn with_zone(mut self, timezone: Option<&str>) -> Self {
        self.zone = DisplayZone::resolve(timezone);
        self
    }

    pub fn angles(&self, instant: &UtcTime) -> EphemerisAngles {
        self.ephemeris.angles_at(instant, self.time_scale)
    }

    pub fn phase(&self, instant: &UtcTime) -> PhaseState {
        classify(&self.angles(instant))
    }

    /// Run the full pipeline for one instant.
    pub fn snapshot(&self, instant: &UtcTime) -> MoonSnapshot {
        let angles = self.angles(instant);
        let phase = classify(&angles);
        let icon = self.icon.geometry(phase.phase_fraction);
        let label = phase.label();
        let timestamp = match instant.to_datetime() {
            Some(dt) => self.zone.format(&dt),
            None => instant.to_string(),
        };
        tracing::debug!(
            %instant,
            elongation_deg = phase.elongation_deg(),
            tithi = phase.tithi_index,
            %label,
            "snapshot"
        );
        MoonSnapshot {
            instant: *instant,
            angles,
            phase,
            icon,
            label,
            timestamp,
        }
    }

    /// Parse `YYYY-MM-DDThh:mm:ss[Z]` and snapshot that instant.
    pub fn snapshot_at(&self, date: &str) -> Result<MoonSnapshot, ChandraError> {
        let instant: UtcTime = date.parse()?;
        Ok(self.snapshot(&instant))
    }

    /// Deliver a snapshot for every tick of `clock` until the handle is
    /// stopped or dropped. Must be called inside a tokio runtime.
    pub fn watch<C, F>(
        &self,
        clock: C,
        period: Duration,
        mut on_snapshot: F,
    ) -> Result<TickerHandle, ChandraError>
    where
        C: Clock,
        F: FnMut(MoonSnapshot) + Send + 'static,
    {
        let engine = *self;
        let handle = Ticker::start(clock, period, move |now| on_snapshot(engine.snapshot(&now)))?;
        Ok(handle)
    }
}
