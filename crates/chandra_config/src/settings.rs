//! Strongly-typed engine settings.

use std::time::Duration;

use chandra_ephem::EphemerisModel;
use chandra_icon::{DEFAULT_CENTER, DEFAULT_RADIUS, Disk, IconGenerator, IconModel};
use chandra_time::TimeScale;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default clock cadence in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Root configuration for the engine. Every field has a default, so an
/// empty file (or no file at all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Clock cadence. Must be greater than zero.
    pub tick_interval_ms: u64,
    /// IANA zone for displayed timestamps. `None` uses the host zone.
    pub timezone: Option<String>,
    /// Scale used for the J2000.0 day count.
    pub time_scale: TimeScale,
    pub ephemeris: EphemerisModel,
    pub icon: IconConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            timezone: None,
            time_scale: TimeScale::default(),
            ephemeris: EphemerisModel::default(),
            icon: IconConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Reject values the pipeline cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "tick_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        self.icon.validate()
    }
}

/// Icon generator settings. Coordinates are in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub model: IconModel,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            model: IconModel::default(),
            cx: DEFAULT_CENTER,
            cy: DEFAULT_CENTER,
            radius: DEFAULT_RADIUS,
        }
    }
}

impl IconConfig {
    pub fn disk(&self) -> Disk {
        Disk::new(self.cx, self.cy, self.radius)
    }

    pub fn generator(&self) -> IconGenerator {
        IconGenerator::new(self.model, self.disk())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ConfigError::Invalid {
                field: "icon.cx/cy",
                reason: format!("center ({}, {}) is not finite", self.cx, self.cy),
            });
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::Invalid {
                field: "icon.radius",
                reason: format!("{} is not a positive radius", self.radius),
            });
        }
        Ok(())
    }
}
