//! Timed pauses driven by wall-clock milliseconds
//!
//! Both the ball's post-goal wait and the winner screen follow the same
//! pattern: stop, wait until a deadline passes, then resume with a side
//! effect. `Pause` captures that pattern once.

/// A running countdown measured against a monotonic millisecond clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub started_at_ms: u64,
    pub delay_ms: u64,
}

impl Countdown {
    pub fn start(now_ms: u64, delay_ms: u64) -> Self {
        Self {
            started_at_ms: now_ms,
            delay_ms,
        }
    }

    pub fn elapsed(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_at_ms)
    }

    /// Strictly more than `delay_ms` must have passed.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.elapsed(now_ms) > self.delay_ms
    }
}

/// Pause-until-deadline slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pause {
    countdown: Option<Countdown>,
}

impl Pause {
    /// Enter the paused state, restarting the countdown if already paused
    pub fn begin(&mut self, now_ms: u64, delay_ms: u64) {
        self.countdown = Some(Countdown::start(now_ms, delay_ms));
    }

    pub fn is_active(&self) -> bool {
        self.countdown.is_some()
    }

    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    /// Leave the pause and run `on_resume` once the countdown has expired.
    ///
    /// Returns `None` while still waiting or when not paused at all.
    pub fn resume_if_due<T>(&mut self, now_ms: u64, on_resume: impl FnOnce() -> T) -> Option<T> {
        match self.countdown {
            Some(countdown) if countdown.is_expired(now_ms) => {
                self.countdown = None;
                Some(on_resume())
            }
            _ => None,
        }
    }
}
