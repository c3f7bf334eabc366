//! Analog input abstraction
//!
//! A single ADC channel read in blocking mode.

/// Errors that can occur during an analog conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Conversion did not complete or reported an error
    Conversion,
}

/// Single analog input channel
pub trait AnalogInput {
    /// Native resolution of [`AnalogInput::read_raw`] in bits
    const RESOLUTION_BITS: u8;

    /// Take one instantaneous sample
    ///
    /// Returns a value in `0..(1 << RESOLUTION_BITS)`.
    fn read_raw(&mut self) -> Result<u16, AdcError>;

    /// Largest value [`AnalogInput::read_raw`] can return
    fn full_scale(&self) -> u16 {
        ((1u32 << Self::RESOLUTION_BITS) - 1) as u16
    }
}
