//! Alert presenter
//!
//! Drives the LED, buzzer, display and diagnostic stream through one
//! complete alert: raise, report, hold for the dwell, then clear. The
//! sequence always runs to completion; nothing can cancel a dwell.

use core::fmt::Write;

use smartcane_hal::{Timebase, ToneOutput};

use super::reasons::Alert;
use super::report;
use super::screen::Screen;
use crate::config::Timing;
use crate::traits::{AlertDisplay, AlertIndicator, DisplayError};

/// Everything the loop controller needs from the alert outputs
pub trait AlertSink {
    /// Write the boot banner to the diagnostic stream
    fn announce_boot(&mut self);

    /// Initialize the display and show the welcome screen
    ///
    /// An error here is fatal to the device.
    fn init_display<T: Timebase>(&mut self, timebase: &mut T) -> Result<(), DisplayError>;

    /// Report the motion self-test and readiness
    fn announce_ready(&mut self, motion_ok: bool);

    /// Report that startup cannot continue
    fn announce_halt(&mut self);

    /// Run one full alert sequence, returning after the dwell
    ///
    /// Display failures do not shorten the sequence; the first one is
    /// returned once every indicator has been cleared.
    fn present<T: Timebase>(&mut self, alert: &Alert, timebase: &mut T) -> Result<(), DisplayError>;
}

/// Alert outputs: indicator LED, buzzer, display and diagnostic stream
pub struct AlertPresenter<I, T, D, W> {
    indicator: I,
    tone: T,
    display: D,
    log: W,
    timing: Timing,
}

impl<I, T, D, W> AlertPresenter<I, T, D, W>
where
    I: AlertIndicator,
    T: ToneOutput,
    D: AlertDisplay,
    W: Write,
{
    /// Create a presenter; all outputs are forced off
    pub fn new(mut indicator: I, mut tone: T, display: D, log: W, timing: Timing) -> Self {
        indicator.set_active(false);
        tone.stop();
        Self {
            indicator,
            tone,
            display,
            log,
            timing,
        }
    }

    /// Get the indicator
    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// Get the tone output
    pub fn tone(&self) -> &T {
        &self.tone
    }

    /// Get the display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get the diagnostic stream
    pub fn log(&self) -> &W {
        &self.log
    }
}

impl<I, T, D, W> AlertSink for AlertPresenter<I, T, D, W>
where
    I: AlertIndicator,
    T: ToneOutput,
    D: AlertDisplay,
    W: Write,
{
    fn announce_boot(&mut self) {
        let _ = report::write_boot_banner(&mut self.log);
    }

    fn init_display<TB: Timebase>(&mut self, timebase: &mut TB) -> Result<(), DisplayError> {
        self.display.init()?;
        self.display.show(&Screen::welcome())?;
        timebase.delay_ms(self.timing.welcome_screen_ms);
        self.display.blank()
    }

    fn announce_ready(&mut self, motion_ok: bool) {
        let _ = report::write_ready(&mut self.log, motion_ok);
    }

    fn announce_halt(&mut self) {
        let _ = report::write_display_failure(&mut self.log);
    }

    fn present<TB: Timebase>(
        &mut self,
        alert: &Alert,
        timebase: &mut TB,
    ) -> Result<(), DisplayError> {
        // 1. LED on
        self.indicator.set_active(true);

        // 2. Tone starts; it is stopped on schedule during the dwell
        let tone_end_ms = timebase.now_ms() + u64::from(self.timing.tone_duration_ms);
        self.tone.start(self.timing.tone_frequency_hz);

        // 3. Panel summary
        let shown = self.display.show(&Screen::alert(&alert.snapshot));

        // 4. Diagnostic report
        let _ = report::write_alert(&mut self.log, alert);

        // 5. Dwell, silencing the tone when its time is up
        let dwell_end_ms = timebase.now_ms() + u64::from(self.timing.alert_dwell_ms);
        wait_until(timebase, tone_end_ms.min(dwell_end_ms));
        self.tone.stop();
        wait_until(timebase, dwell_end_ms);

        // 6. Everything off
        self.indicator.set_active(false);
        let blanked = self.display.blank();

        shown.and(blanked)
    }
}

/// Block until the timebase reaches `deadline_ms`
fn wait_until<T: Timebase>(timebase: &mut T, deadline_ms: u64) {
    let now = timebase.now_ms();
    if deadline_ms > now {
        timebase.delay_ms((deadline_ms - now) as u32);
    }
}
