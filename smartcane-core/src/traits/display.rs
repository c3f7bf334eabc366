//! Display driver trait for the 128x64 monochrome panel

use crate::alert::Screen;

/// Errors that can occur with the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Controller did not accept its initialization sequence
    InitFailed,
    /// Bus or interface failure while drawing or flushing
    Interface,
}

/// Trait for the alert display
///
/// The display is a dumb surface: screen content is decided in core and
/// handed over as a [`Screen`].
pub trait AlertDisplay {
    /// Initialize the display controller
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Clear and draw a complete screen
    fn show(&mut self, screen: &Screen) -> Result<(), DisplayError>;

    /// Clear the display to all pixels off
    fn blank(&mut self) -> Result<(), DisplayError>;
}
