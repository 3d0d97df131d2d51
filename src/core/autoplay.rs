use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, CarouselResult};

/// Identity of one scheduled recurring autoplay timer.
///
/// Handles are never reused within a timer: every (re)schedule issues a
/// strictly greater handle than the one it displaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerHandle(u64);

impl TimerHandle {
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Deterministic single-handle recurring timer.
///
/// The timer owns no thread. The host feeds elapsed wall time through
/// [`AutoplayTimer::advance`], which reports how many periods completed since
/// the active handle was scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayTimer {
    interval: Duration,
    handle: Option<TimerHandle>,
    issued: u64,
    released: u64,
    elapsed: Duration,
}

impl AutoplayTimer {
    pub fn new(interval: Duration) -> CarouselResult<Self> {
        if interval.is_zero() {
            return Err(CarouselError::InvalidConfig(
                "autoplay interval must be greater than zero".to_owned(),
            ));
        }
        Ok(Self {
            interval,
            handle: None,
            issued: 0,
            released: 0,
            elapsed: Duration::ZERO,
        })
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    #[must_use]
    pub fn handle(&self) -> Option<TimerHandle> {
        self.handle
    }

    /// Time accumulated toward the next tick of the active handle.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.handle.map(|_| self.interval.saturating_sub(self.elapsed))
    }

    /// Number of handles issued over the timer lifetime.
    #[must_use]
    pub fn issued_count(&self) -> u64 {
        self.issued
    }

    /// Number of handles cancelled over the timer lifetime.
    #[must_use]
    pub fn released_count(&self) -> u64 {
        self.released
    }

    /// Cancels any active handle and schedules a fresh one starting now.
    pub fn schedule(&mut self) -> TimerHandle {
        self.cancel();
        self.issued += 1;
        let handle = TimerHandle(self.issued);
        self.handle = Some(handle);
        self.elapsed = Duration::ZERO;
        handle
    }

    /// Re-times the active handle from now. No-op when nothing is scheduled.
    pub fn reschedule(&mut self) -> Option<TimerHandle> {
        if self.handle.is_none() {
            return None;
        }
        Some(self.schedule())
    }

    /// Releases the active handle. Returns `false` when nothing was scheduled.
    pub fn cancel(&mut self) -> bool {
        self.elapsed = Duration::ZERO;
        match self.handle.take() {
            Some(_) => {
                self.released += 1;
                true
            }
            None => false,
        }
    }

    /// Accumulates `delta` and returns the number of completed periods.
    ///
    /// The remainder carries into the next call, so ticks never drift with the
    /// granularity of host frames.
    pub fn advance(&mut self, delta: Duration) -> u64 {
        if self.handle.is_none() {
            return 0;
        }
        let total_nanos = self.elapsed.saturating_add(delta).as_nanos();
        let interval_nanos = self.interval.as_nanos();
        self.elapsed = duration_from_nanos(total_nanos % interval_nanos);
        u64::try_from(total_nanos / interval_nanos).unwrap_or(u64::MAX)
    }

    /// Returns `periods` completed periods to the pending time so the next
    /// [`AutoplayTimer::advance`] reports them again.
    pub fn defer_periods(&mut self, periods: u64) {
        if self.handle.is_none() || periods == 0 {
            return;
        }
        let deferred = self.interval.as_nanos().saturating_mul(u128::from(periods));
        self.elapsed = duration_from_nanos(self.elapsed.as_nanos().saturating_add(deferred));
    }
}

fn duration_from_nanos(nanos: u128) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    match u64::try_from(nanos / NANOS_PER_SEC) {
        // sub-second part is always < 1e9
        Ok(secs) => Duration::new(secs, (nanos % NANOS_PER_SEC) as u32),
        Err(_) => Duration::MAX,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::AutoplayTimer;

    fn timer(ms: u64) -> AutoplayTimer {
        AutoplayTimer::new(Duration::from_millis(ms)).expect("valid interval")
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(AutoplayTimer::new(Duration::ZERO).is_err());
    }

    #[test]
    fn idle_timer_never_ticks() {
        let mut timer = timer(100);
        assert_eq!(timer.advance(Duration::from_secs(10)), 0);
        assert_eq!(timer.time_until_next_tick(), None);
    }

    #[test]
    fn schedule_displaces_previous_handle() {
        let mut timer = timer(100);
        let first = timer.schedule();
        let second = timer.schedule();
        assert!(second > first);
        assert_eq!(timer.handle(), Some(second));
        assert_eq!(timer.issued_count(), 2);
        assert_eq!(timer.released_count(), 1);
    }

    #[test]
    fn advance_carries_remainder_between_calls() {
        let mut timer = timer(100);
        timer.schedule();
        assert_eq!(timer.advance(Duration::from_millis(60)), 0);
        assert_eq!(timer.advance(Duration::from_millis(60)), 1);
        assert_eq!(timer.elapsed(), Duration::from_millis(20));
        assert_eq!(timer.advance(Duration::from_millis(380)), 4);
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn reschedule_restarts_the_period() {
        let mut timer = timer(100);
        timer.schedule();
        timer.advance(Duration::from_millis(90));
        let handle = timer.reschedule().expect("active timer");
        assert_eq!(timer.handle(), Some(handle));
        assert_eq!(timer.advance(Duration::from_millis(90)), 0);
        assert_eq!(
            timer.time_until_next_tick(),
            Some(Duration::from_millis(10))
        );
    }

    #[test]
    fn deferred_periods_are_reported_by_the_next_advance() {
        let mut timer = timer(100);
        timer.schedule();
        assert_eq!(timer.advance(Duration::from_millis(330)), 3);
        timer.defer_periods(2);
        assert_eq!(timer.elapsed(), Duration::from_millis(230));
        assert_eq!(timer.advance(Duration::ZERO), 2);
        assert_eq!(timer.elapsed(), Duration::from_millis(30));
    }

    #[test]
    fn huge_delta_saturates_instead_of_wrapping() {
        let mut timer = timer(1);
        timer.schedule();
        assert_eq!(timer.advance(Duration::MAX), u64::MAX);
        timer.cancel();
        timer.defer_periods(u64::MAX);
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut timer = timer(100);
        assert!(timer.reschedule().is_none());
        timer.schedule();
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert_eq!(timer.released_count(), 1);
        assert!(!timer.is_active());
    }
}
