//! Instants and time arithmetic for the chandra lunar phase engine.
//!
//! This crate provides:
//! - `UtcTime`, the instant type carried through the pipeline
//! - Julian Date ↔ calendar conversions and the J2000.0 day count
//! - `TimeScale` selection (UTC or TT) for the ephemeris series
//! - Timezone-aware display formatting with host-default fallback

pub mod display;
pub mod error;
pub mod julian;
pub mod scale;
pub mod utc_time;

pub use display::{DisplayZone, HOST_DEFAULT_SENTINELS, TIMESTAMP_FORMAT, format_local};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar, jd_to_unix_seconds,
    unix_seconds_to_jd,
};
pub use scale::{TT_MINUS_UTC_S, TimeScale};
pub use utc_time::UtcTime;
