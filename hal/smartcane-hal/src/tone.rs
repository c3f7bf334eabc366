//! Tone output abstraction
//!
//! Drives a passive buzzer with a square wave. Starting a tone returns
//! immediately; the tone keeps sounding until [`ToneOutput::stop`].

/// Square-wave tone generator
pub trait ToneOutput {
    /// Start a tone at `frequency_hz`, replacing any tone already playing
    fn start(&mut self, frequency_hz: u32);

    /// Silence the output
    fn stop(&mut self);

    /// Check if a tone is currently sounding
    fn is_sounding(&self) -> bool;
}
