//! Time-driven fakes for protocol tests

use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use smartcane_hal::Clock;

/// Clock that ticks one microsecond per read
///
/// Busy-wait loops make progress without a real timer; delays jump ahead.
pub struct TickingClock<'a> {
    now_us: &'a Cell<u64>,
}

impl<'a> TickingClock<'a> {
    pub fn new(now_us: &'a Cell<u64>) -> Self {
        Self { now_us }
    }

    pub fn advance_ms(&mut self, ms: u64) {
        self.now_us.set(self.now_us.get() + ms * 1_000);
    }
}

impl Clock for TickingClock<'_> {
    fn now_us(&self) -> u64 {
        let now = self.now_us.get();
        self.now_us.set(now + 1);
        now
    }
}

impl DelayNs for TickingClock<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.now_us.set(self.now_us.get() + u64::from(ns).div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.now_us.set(self.now_us.get() + u64::from(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.advance_ms(u64::from(ms));
    }
}

/// Input that is high inside a fixed window of time
pub struct WindowPin<'a> {
    now_us: &'a Cell<u64>,
    rise_us: u64,
    fall_us: u64,
}

impl<'a> WindowPin<'a> {
    pub fn new(now_us: &'a Cell<u64>, rise_us: u64, fall_us: u64) -> Self {
        Self {
            now_us,
            rise_us,
            fall_us,
        }
    }
}

impl embedded_hal::digital::ErrorType for WindowPin<'_> {
    type Error = Infallible;
}

impl embedded_hal::digital::InputPin for WindowPin<'_> {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        let now = self.now_us.get();
        Ok(now >= self.rise_us && now < self.fall_us)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        self.is_high().map(|high| !high)
    }
}
