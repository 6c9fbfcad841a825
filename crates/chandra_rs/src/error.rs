//! Unified error type for the facade.

use chandra_clock::ClockError;
use chandra_config::ConfigError;
use chandra_time::TimeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChandraError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Clock(#[from] ClockError),
}
