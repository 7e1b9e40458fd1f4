//! Monotonic time and fixed-rate tick pacing

use std::thread;
use std::time::{Duration, Instant};

/// Time source for the game loop
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin. Never decreases.
    fn now_ms(&self) -> u64;

    /// Block until the next tick boundary
    fn wait_for_next_tick(&mut self);
}

/// Sleeps so that consecutive `wait` calls are at least one frame apart
#[derive(Debug)]
pub struct FrameLimiter {
    frame: Duration,
    last: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / ticks_per_second.max(1),
            last: None,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Time left until the next frame boundary, if any
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last {
            Some(last) => (last + self.frame).saturating_duration_since(now),
            None => Duration::ZERO,
        }
    }

    /// Sleep out the rest of the current frame and start the next one
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.last = Some(Instant::now());
    }
}

/// Wall clock backed by `Instant`
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
    limiter: FrameLimiter,
}

impl SystemClock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            origin: Instant::now(),
            limiter: FrameLimiter::new(ticks_per_second),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn wait_for_next_tick(&mut self) {
        self.limiter.wait();
    }
}

/// Clock that advances a fixed step per tick without sleeping.
///
/// Drives headless runs and tests at full speed with reproducible timing.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now_ms: u64,
    step_ms: u64,
}

impl ManualClock {
    pub fn new(step_ms: u64) -> Self {
        Self { now_ms: 0, step_ms }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn wait_for_next_tick(&mut self) {
        self.now_ms += self.step_ms;
    }
}
