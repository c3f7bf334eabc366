//! Indicator and input traits

/// Visual alert indicator (LED)
pub trait AlertIndicator {
    /// Turn the indicator on or off
    fn set_active(&mut self, active: bool);

    /// Check if the indicator is currently on
    fn is_active(&self) -> bool;
}

/// Manual alert request input
pub trait ManualTrigger {
    /// Returns true once for each new press since the previous poll
    ///
    /// Holding the button down does not report repeated presses.
    fn poll_pressed(&mut self) -> bool;
}
