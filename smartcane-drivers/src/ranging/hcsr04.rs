//! HC-SR04 ultrasonic ranger
//!
//! A 10 µs trigger pulse makes the module emit a burst; the echo pin then
//! stays high for the round-trip time of flight. The echo is timed by
//! busy-waiting on the timebase, so the call blocks for at most the echo
//! timeout.

use embedded_hal::digital::{InputPin, OutputPin};
use smartcane_core::config::RangingTiming;
use smartcane_core::traits::{RangeFinder, SensorError};
use smartcane_hal::Timebase;

/// HC-SR04 driver
pub struct Hcsr04<TRIG, ECHO, T> {
    trigger: TRIG,
    echo: ECHO,
    timebase: T,
    timing: RangingTiming,
}

impl<TRIG, ECHO, T> Hcsr04<TRIG, ECHO, T>
where
    TRIG: OutputPin,
    ECHO: InputPin,
    T: Timebase,
{
    /// Create a new ranger with the standard timing
    pub fn new(trigger: TRIG, echo: ECHO, timebase: T) -> Self {
        Self::with_timing(trigger, echo, timebase, RangingTiming::DEFAULT)
    }

    /// Create a new ranger with custom timing
    pub fn with_timing(trigger: TRIG, echo: ECHO, timebase: T, timing: RangingTiming) -> Self {
        Self {
            trigger,
            echo,
            timebase,
            timing,
        }
    }

    fn send_trigger(&mut self) -> Result<(), SensorError> {
        self.trigger.set_low().map_err(|_| SensorError::Bus)?;
        self.timebase.delay_us(self.timing.settle_us);
        self.trigger.set_high().map_err(|_| SensorError::Bus)?;
        self.timebase.delay_us(self.timing.pulse_us);
        self.trigger.set_low().map_err(|_| SensorError::Bus)
    }

    /// Measure the width of the next high pulse on the echo pin (µs)
    ///
    /// A pulse already in progress is skipped. The timeout covers the whole
    /// wait, not each edge.
    fn pulse_in(&mut self) -> Result<u64, SensorError> {
        let start = self.timebase.now_us();

        self.wait_for(false, start)?;
        self.wait_for(true, start)?;
        let rise = self.timebase.now_us();
        self.wait_for(false, start)?;

        Ok(self.timebase.elapsed_us(rise))
    }

    fn wait_for(&mut self, high: bool, start: u64) -> Result<(), SensorError> {
        let timeout = u64::from(self.timing.echo_timeout_us);
        loop {
            if self.echo.is_high().map_err(|_| SensorError::Bus)? == high {
                return Ok(());
            }
            if self.timebase.elapsed_us(start) > timeout {
                return Err(SensorError::Timeout);
            }
        }
    }
}

impl<TRIG, ECHO, T> RangeFinder for Hcsr04<TRIG, ECHO, T>
where
    TRIG: OutputPin,
    ECHO: InputPin,
    T: Timebase,
{
    fn measure_distance(&mut self) -> Result<f32, SensorError> {
        self.send_trigger()?;
        let echo_us = self.pulse_in()?;
        Ok(self.timing.echo_to_cm(echo_us))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TickingClock, WindowPin};
    use core::cell::Cell;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};

    fn trigger() -> PinMock {
        PinMock::new(&[
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
        ])
    }

    #[test]
    fn test_measures_echo_width() {
        let now = Cell::new(0);
        // 882 µs round trip is 15 cm
        let echo = WindowPin::new(&now, 200, 200 + 882);
        let mut ranger = Hcsr04::new(trigger(), echo, TickingClock::new(&now));

        let distance = ranger.measure_distance().unwrap();
        assert!((distance - 15.0).abs() < 0.1, "distance = {distance}");

        ranger.trigger.done();
    }

    #[test]
    fn test_trigger_pulse_timing() {
        let now = Cell::new(0);
        let echo = WindowPin::new(&now, 100, 200);
        let mut ranger = Hcsr04::new(trigger(), echo, TickingClock::new(&now));

        ranger.send_trigger().unwrap();
        // 2 µs settle then 10 µs high
        assert_eq!(now.get(), 12);

        ranger.trigger.done();
    }

    #[test]
    fn test_no_echo_times_out() {
        let now = Cell::new(0);
        let echo = WindowPin::new(&now, u64::MAX, u64::MAX);
        let mut ranger = Hcsr04::new(trigger(), echo, TickingClock::new(&now));

        assert_eq!(ranger.measure_distance(), Err(SensorError::Timeout));
        // Gave up shortly after the 30 ms window
        assert!(now.get() < 31_000);

        ranger.trigger.done();
    }

    #[test]
    fn test_echo_stuck_high_times_out() {
        let now = Cell::new(0);
        let echo = WindowPin::new(&now, 0, u64::MAX);
        let mut ranger = Hcsr04::new(trigger(), echo, TickingClock::new(&now));

        assert_eq!(ranger.measure_distance(), Err(SensorError::Timeout));

        ranger.trigger.done();
    }

    #[test]
    fn test_previous_pulse_is_skipped() {
        let now = Cell::new(0);
        // Echo still high from an earlier burst, then low, then a fresh
        // 588 µs pulse (about 10 cm)
        struct TwoPulses<'a>(&'a Cell<u64>);

        impl embedded_hal::digital::ErrorType for TwoPulses<'_> {
            type Error = core::convert::Infallible;
        }

        impl InputPin for TwoPulses<'_> {
            fn is_high(&mut self) -> Result<bool, Self::Error> {
                let t = self.0.get();
                Ok(t < 50 || (1_000..1_588).contains(&t))
            }

            fn is_low(&mut self) -> Result<bool, Self::Error> {
                self.is_high().map(|h| !h)
            }
        }

        let mut ranger = Hcsr04::new(trigger(), TwoPulses(&now), TickingClock::new(&now));
        let distance = ranger.measure_distance().unwrap();
        assert!((distance - 10.0).abs() < 0.1, "distance = {distance}");

        ranger.trigger.done();
    }
}
