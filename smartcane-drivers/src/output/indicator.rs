//! GPIO indicator output
//!
//! LED driven directly from a GPIO pin, or through a transistor.

use embedded_hal::digital::OutputPin;
use smartcane_core::traits::AlertIndicator;

/// GPIO indicator
///
/// The pin can be configured as active-high (default) or active-low.
pub struct GpioIndicator<P> {
    pin: P,
    /// If true, indicator ON = pin LOW
    inverted: bool,
    /// Current logical state
    active: bool,
}

impl<P: OutputPin> GpioIndicator<P> {
    /// Create a new GPIO indicator
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the indicator is lit when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut indicator = Self {
            pin,
            inverted,
            active: false,
        };
        indicator.set_active(false);
        indicator
    }

    /// Create an indicator lit by driving the pin high
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create an indicator lit by driving the pin low
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> AlertIndicator for GpioIndicator<P> {
    fn set_active(&mut self, active: bool) {
        self.active = active;

        // Pin writes on the LED line have nowhere to report to
        let _ = if active != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};

    #[test]
    fn test_active_high_indicator() {
        let expectations = [
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
        ];
        let mut indicator = GpioIndicator::new_active_high(PinMock::new(&expectations));

        // Initially off
        assert!(!indicator.is_active());

        indicator.set_active(true);
        assert!(indicator.is_active());

        indicator.set_active(false);
        assert!(!indicator.is_active());

        indicator.pin.done();
    }

    #[test]
    fn test_active_low_indicator() {
        // Off is high for active-low
        let expectations = [
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
        ];
        let mut indicator = GpioIndicator::new_active_low(PinMock::new(&expectations));

        assert!(!indicator.is_active());
        indicator.set_active(true);
        assert!(indicator.is_active());
        indicator.set_active(false);

        indicator.pin.done();
    }

    #[test]
    fn test_indicator_trait() {
        let expectations = [PinTransaction::set(State::Low), PinTransaction::set(State::High)];
        let mut indicator = GpioIndicator::new_active_high(PinMock::new(&expectations));

        fn check_indicator<I: AlertIndicator>(i: &mut I) {
            assert!(!i.is_active());
            i.set_active(true);
            assert!(i.is_active());
        }

        check_indicator(&mut indicator);
        indicator.pin.done();
    }
}
