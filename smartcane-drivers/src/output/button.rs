//! Manual alert button
//!
//! Momentary switch to ground on a pulled-up input. Idle reads high,
//! pressed reads low. A press is reported once, on the high-to-low edge.

use embedded_hal::digital::InputPin;
use smartcane_core::traits::ManualTrigger;

/// Pulled-up, active-low push button
pub struct ActiveLowButton<P> {
    pin: P,
    /// Level seen on the previous poll
    was_pressed: bool,
}

impl<P: InputPin> ActiveLowButton<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            was_pressed: false,
        }
    }

    /// Current level, without edge detection
    ///
    /// A pin read failure counts as not pressed.
    pub fn is_held(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}

impl<P: InputPin> ManualTrigger for ActiveLowButton<P> {
    fn poll_pressed(&mut self) -> bool {
        let pressed = self.is_held();
        let edge = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        edge
    }
}
