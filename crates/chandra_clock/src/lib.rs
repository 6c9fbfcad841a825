//! Fixed-cadence clock driver for the lunar pipeline.
//!
//! This crate provides:
//! - `Clock` sources of "now" (`SystemClock`, `FixedClock`)
//! - `Ticker` which emits instants on a tokio interval
//! - `TickerHandle` for explicit, awaitable shutdown
//!
//! Ticks are independent: consumers recompute everything from the instant
//! they receive, so a skipped tick never leaves stale state behind.

pub mod error;
pub mod source;
pub mod ticker;

pub use error::ClockError;
pub use source::{Clock, FixedClock, SystemClock};
pub use ticker::{DEFAULT_TICK_PERIOD, Ticker, TickerHandle};
