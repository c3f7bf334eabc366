//! PWM tone output
//!
//! A passive buzzer on a PWM channel A pin, driven with a 50% duty square
//! wave. The output frequency is `clk_sys / (divider * (top + 1))`.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config, Pwm};
use fixed::FixedU16;
use smartcane_hal::ToneOutput;

/// Largest integer clock divider
const MAX_DIVIDER: u32 = 255;

/// Divider and wrap value for a target frequency
///
/// Picks the smallest integer divider that keeps `top` within 16 bits,
/// which gives the finest frequency resolution.
fn tone_timing(clk_hz: u32, frequency_hz: u32) -> (u32, u16) {
    let cycles = clk_hz / frequency_hz.max(1);
    let divider = (cycles / 65_536 + 1).clamp(1, MAX_DIVIDER);
    let top = (cycles / divider).saturating_sub(1).min(u32::from(u16::MAX));
    (divider, top as u16)
}

/// Square-wave tone on a PWM slice
pub struct PwmTone<'d> {
    pwm: Pwm<'d>,
    config: Config,
    sounding: bool,
}

impl<'d> PwmTone<'d> {
    /// Take a PWM output; it starts silent
    pub fn new(pwm: Pwm<'d>) -> Self {
        let mut tone = Self {
            pwm,
            config: Config::default(),
            sounding: false,
        };
        tone.stop();
        tone
    }
}

impl ToneOutput for PwmTone<'_> {
    fn start(&mut self, frequency_hz: u32) {
        let (divider, top) = tone_timing(clk_sys_freq(), frequency_hz);

        self.config.divider = FixedU16::from_num(divider);
        self.config.top = top;
        self.config.compare_a = top / 2;
        self.config.enable = true;
        self.pwm.set_config(&self.config);
        self.sounding = true;
    }

    fn stop(&mut self) {
        self.config.compare_a = 0;
        self.config.enable = false;
        self.pwm.set_config(&self.config);
        self.sounding = false;
    }

    fn is_sounding(&self) -> bool {
        self.sounding
    }
}
