//! Periodic instant emitter with explicit start/stop.
//!
//! Each consumer gets its own tokio task driven by `tokio::time::interval`.
//! The first tick fires immediately. `TickerHandle::stop` signals the task
//! and joins it, so no tick is delivered once it returns. Dropping the handle
//! only requests cancellation: the task never starts another tick, but a
//! callback already running on another worker thread may still finish.

use std::time::Duration;

use chandra_time::UtcTime;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::error::ClockError;
use crate::source::Clock;

/// Default cadence for a UI clock.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Handle to a running ticker task.
///
/// Dropping the handle aborts the task without waiting for it; use
/// [`TickerHandle::stop`] to know the task has exited.
#[derive(Debug)]
pub struct TickerHandle {
    shutdown: watch::Sender<bool>,
    task: Option<JoinHandle<u64>>,
    period: Duration,
}

impl TickerHandle {
    pub fn period(&self) -> Duration {
        self.period
    }

    /// `false` once the task has exited (stopped, or its receiver was dropped).
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop ticking and wait for the task to exit. Returns the number of
    /// ticks delivered to the consumer; ticks skipped for a lagging
    /// subscriber are not counted.
    pub async fn stop(mut self) -> Result<u64, ClockError> {
        // The task may already have exited, in which case nobody is listening.
        let _ = self.shutdown.send(true);
        let Some(task) = self.task.take() else {
            return Ok(0);
        };
        let ticks = task.await.map_err(|e| ClockError::Join(e.to_string()))?;
        tracing::info!(ticks, "ticker stopped");
        Ok(ticks)
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            tracing::debug!("ticker handle dropped, aborting task");
            task.abort();
        }
    }
}

/// Clock driver entry points.
pub struct Ticker;

impl Ticker {
    /// Call `on_tick` with a fresh instant from `clock` every `period`.
    pub fn start<C, F>(clock: C, period: Duration, mut on_tick: F) -> Result<TickerHandle, ClockError>
    where
        C: Clock,
        F: FnMut(UtcTime) + Send + 'static,
    {
        spawn_loop(clock, period, move |now| {
            on_tick(now);
            TickOutcome::Delivered
        })
    }

    /// Deliver instants through a bounded channel.
    ///
    /// A tick is skipped when the receiver is `capacity` instants behind.
    /// The task exits on its next tick after the receiver is dropped.
    pub fn subscribe<C: Clock>(
        clock: C,
        period: Duration,
        capacity: usize,
    ) -> Result<(TickerHandle, mpsc::Receiver<UtcTime>), ClockError> {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let handle = spawn_loop(clock, period, move |now| match tx.try_send(now) {
            Ok(()) => TickOutcome::Delivered,
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::debug!(%now, "subscriber lagging, tick skipped");
                TickOutcome::Skipped
            }
            Err(mpsc::error::TrySendError::Closed(_)) => TickOutcome::Closed,
        })?;
        Ok((handle, rx))
    }
}

/// What happened to one tick's instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickOutcome {
    Delivered,
    /// The consumer is still there but could not take it.
    Skipped,
    /// The consumer is gone; the loop ends.
    Closed,
}

/// Spawn the interval task. Only delivered ticks are counted.
fn spawn_loop<C, F>(clock: C, period: Duration, mut on_tick: F) -> Result<TickerHandle, ClockError>
where
    C: Clock,
    F: FnMut(UtcTime) -> TickOutcome + Send + 'static,
{
    if period.is_zero() {
        return Err(ClockError::ZeroPeriod);
    }
    let runtime = tokio::runtime::Handle::try_current().map_err(|_| ClockError::NoRuntime)?;
    let (shutdown, mut shutdown_rx) = watch::channel(false);

    let task = runtime.spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut ticks = 0u64;
        loop {
            tokio::select! {
                biased;
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
                _ = interval.tick() => {
                    let now = clock.now();
                    tracing::trace!(%now, "tick");
                    match on_tick(now) {
                        TickOutcome::Delivered => ticks += 1,
                        TickOutcome::Skipped => {}
                        TickOutcome::Closed => {
                            tracing::debug!("tick consumer gone");
                            break;
                        }
                    }
                }
            }
        }
        ticks
    });

    tracing::info!(period_ms = period.as_millis() as u64, "ticker started");
    Ok(TickerHandle {
        shutdown,
        task: Some(task),
        period,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FixedClock;

    #[test]
    fn zero_period_rejected() {
        let err = Ticker::start(FixedClock(UtcTime::j2000()), Duration::ZERO, |_| {}).unwrap_err();
        assert_eq!(err, ClockError::ZeroPeriod);
    }

    #[test]
    fn requires_runtime() {
        let err = Ticker::start(FixedClock(UtcTime::j2000()), DEFAULT_TICK_PERIOD, |_| {})
            .unwrap_err();
        assert_eq!(err, ClockError::NoRuntime);
    }
}
