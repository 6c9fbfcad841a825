//! Error types for the clock driver.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ClockError {
    /// A tick period of zero was requested.
    #[error("tick period must be greater than zero")]
    ZeroPeriod,
    /// `start`/`subscribe` was called outside a tokio runtime.
    #[error("clock driver requires a running tokio runtime")]
    NoRuntime,
    /// The ticker task panicked or was cancelled before it could be joined.
    #[error("ticker task failed: {0}")]
    Join(String),
}
