//! Engine-owned scheduled tasks on a virtual clock.
//!
//! The host drives time by calling `advance(elapsed)` on the mounted
//! engine; nothing here reads a wall clock. A `Timer` is owned by the
//! engine that scheduled it, usually as `Option<Timer>`, so cancelling
//! is dropping: once an engine resets or is torn down, no callback
//! can fire against the discarded state.
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use rust_minigames::core::Timer;
//!
//! let mut tick = Timer::repeating(Duration::from_millis(150));
//! assert_eq!(tick.advance(Duration::from_millis(100)), 0);
//! assert_eq!(tick.advance(Duration::from_millis(350)), 3);
//!
//! let mut reveal = Timer::once(Duration::from_millis(1000));
//! assert_eq!(reveal.advance(Duration::from_millis(2500)), 1);
//! assert!(reveal.is_spent());
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Firing schedule of a timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Schedule {
    /// Fires once after the delay, then is spent.
    Once,
    /// Fires every period until dropped.
    Repeating,
}

/// A cancellable scheduled task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timer {
    schedule: Schedule,
    period: Duration,
    /// Time accumulated toward the next firing.
    elapsed: Duration,
    spent: bool,
}

impl Timer {
    /// One-shot timer firing after `delay`.
    #[must_use]
    pub fn once(delay: Duration) -> Self {
        Self::new(Schedule::Once, delay)
    }

    /// Recurring timer firing every `period`.
    ///
    /// A zero period would fire unboundedly; it is clamped to 1ms.
    #[must_use]
    pub fn repeating(period: Duration) -> Self {
        Self::new(Schedule::Repeating, period)
    }

    fn new(schedule: Schedule, period: Duration) -> Self {
        Self {
            schedule,
            period: period.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
            spent: false,
        }
    }

    #[must_use]
    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left until the next firing. Zero once spent.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        if self.spent {
            Duration::ZERO
        } else {
            self.period.saturating_sub(self.elapsed)
        }
    }

    /// True once a one-shot timer has fired.
    #[must_use]
    pub fn is_spent(&self) -> bool {
        self.spent
    }

    /// Advance the virtual clock and return how many firings became due.
    ///
    /// One-shot timers return at most 1 over their lifetime. A repeating
    /// timer reports at most `u32::MAX` firings per call; any excess is
    /// dropped and only the partial period carries over.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.spent {
            return 0;
        }

        self.elapsed = self.elapsed.saturating_add(elapsed);
        match self.schedule {
            Schedule::Once => {
                if self.elapsed >= self.period {
                    self.spent = true;
                    1
                } else {
                    0
                }
            }
            Schedule::Repeating => {
                let total = self.elapsed.as_nanos();
                let period = self.period.as_nanos();
                self.elapsed = from_nanos(total % period);
                u32::try_from(total / period).unwrap_or(u32::MAX)
            }
        }
    }
}

/// `nanos` below `Duration::MAX` as a `Duration`.
fn from_nanos(nanos: u128) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    Duration::new(secs, (nanos % NANOS_PER_SEC) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_once_fires_exactly_once() {
        let mut timer = Timer::once(ms(1000));

        assert_eq!(timer.advance(ms(999)), 0);
        assert_eq!(timer.remaining(), ms(1));
        assert_eq!(timer.advance(ms(1)), 1);
        assert!(timer.is_spent());
        assert_eq!(timer.advance(ms(5000)), 0);
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_repeating_accumulates_partial_periods() {
        let mut timer = Timer::repeating(ms(150));

        assert_eq!(timer.advance(ms(100)), 0);
        assert_eq!(timer.advance(ms(100)), 1);
        assert_eq!(timer.remaining(), ms(100));
        assert_eq!(timer.advance(ms(450)), 3);
        assert!(!timer.is_spent());
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let mut timer = Timer::repeating(Duration::ZERO);
        assert_eq!(timer.period(), ms(1));
        assert_eq!(timer.advance(ms(3)), 3);
    }

    #[test]
    fn test_huge_advance_saturates() {
        let mut once = Timer::once(ms(1000));
        once.advance(ms(10));
        assert_eq!(once.advance(Duration::MAX), 1);
        assert!(once.is_spent());

        let mut tick = Timer::repeating(ms(150));
        tick.advance(ms(100));
        assert_eq!(tick.advance(Duration::MAX), u32::MAX);
        assert!(tick.remaining() <= ms(150));

        // Still counts normally afterwards
        let left = tick.remaining();
        assert_eq!(tick.advance(left), 1);
    }

    #[test]
    fn test_exact_multiple_leaves_no_remainder() {
        let mut timer = Timer::repeating(ms(150));
        assert_eq!(timer.advance(ms(1500)), 10);
        assert_eq!(timer.remaining(), ms(150));
    }

    #[test]
    fn test_schedule_kind() {
        assert_eq!(Timer::once(ms(5)).schedule(), Schedule::Once);
        assert_eq!(Timer::repeating(ms(5)).schedule(), Schedule::Repeating);
    }
}
