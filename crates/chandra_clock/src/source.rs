//! Sources of "now".

use chandra_time::UtcTime;
use chrono::Utc;

/// Something that can report the current instant.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> UtcTime;
}

/// The host wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> UtcTime {
        UtcTime::from(Utc::now())
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub UtcTime);

impl Clock for FixedClock {
    fn now(&self) -> UtcTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_constant() {
        let c = FixedClock(UtcTime::j2000());
        assert_eq!(c.now(), c.now());
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now().year >= 2020);
    }
}
