//! Embassy time driver clock

use embassy_time::{block_for, Duration, Instant};
use embedded_hal::delay::DelayNs;
use smartcane_hal::Clock;

/// Monotonic clock backed by the embassy time driver
///
/// Delays spin on the timer rather than yielding to the executor; the
/// monitor loop is the only thing running.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl EmbassyClock {
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for EmbassyClock {
    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }
}

impl DelayNs for EmbassyClock {
    fn delay_ns(&mut self, ns: u32) {
        block_for(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}
