//! Test doubles shared by the unit tests in this crate
//!
//! Time-driven fakes share one `Cell<u64>` of microseconds so that the
//! timebase, tone and anything else observing time agree on "now".

use core::cell::Cell;
use std::collections::VecDeque;
use std::string::{String, ToString};
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use smartcane_hal::{Clock, Timebase, ToneOutput};

use crate::alert::{Alert, AlertSink, Screen};
use crate::config::Timing;
use crate::sensor::{SensorSnapshot, SensorSuite};
use crate::traits::{AlertDisplay, AlertIndicator, DisplayError, ManualTrigger};

/// Clock that only moves when something delays on it
pub struct FakeTimebase<'a> {
    now_us: &'a Cell<u64>,
}

impl<'a> FakeTimebase<'a> {
    pub fn new(now_us: &'a Cell<u64>) -> Self {
        Self { now_us }
    }

    pub fn set_ms(&mut self, ms: u64) {
        self.now_us.set(ms * 1_000);
    }

    fn advance_us(&mut self, us: u64) {
        self.now_us.set(self.now_us.get() + us);
    }
}

impl Clock for FakeTimebase<'_> {
    fn now_us(&self) -> u64 {
        self.now_us.get()
    }
}

impl DelayNs for FakeTimebase<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.advance_us(u64::from(ns).div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.advance_us(u64::from(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.advance_us(u64::from(ms) * 1_000);
    }
}

/// Indicator that counts how often it was switched on
#[derive(Default)]
pub struct FakeIndicator {
    active: bool,
    activations: usize,
}

impl FakeIndicator {
    pub fn activations(&self) -> usize {
        self.activations
    }
}

impl AlertIndicator for FakeIndicator {
    fn set_active(&mut self, active: bool) {
        if active {
            self.activations += 1;
        }
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Tone output that timestamps start and stop
pub struct FakeTone<'a> {
    now_us: &'a Cell<u64>,
    frequency_hz: Option<u32>,
    started_at_ms: Option<u64>,
    stopped_at_ms: Option<u64>,
    sounding: bool,
}

impl<'a> FakeTone<'a> {
    pub fn new(now_us: &'a Cell<u64>) -> Self {
        Self {
            now_us,
            frequency_hz: None,
            started_at_ms: None,
            stopped_at_ms: None,
            sounding: false,
        }
    }

    pub fn frequency_hz(&self) -> Option<u32> {
        self.frequency_hz
    }

    pub fn started_at_ms(&self) -> Option<u64> {
        self.started_at_ms
    }

    pub fn stopped_at_ms(&self) -> Option<u64> {
        self.stopped_at_ms
    }

    fn now_ms(&self) -> u64 {
        self.now_us.get() / 1_000
    }
}

impl ToneOutput for FakeTone<'_> {
    fn start(&mut self, frequency_hz: u32) {
        self.frequency_hz = Some(frequency_hz);
        self.started_at_ms = Some(self.now_ms());
        self.sounding = true;
    }

    fn stop(&mut self) {
        // Only a real stop is recorded; the power-on stop is not
        if self.sounding {
            self.stopped_at_ms = Some(self.now_ms());
        }
        self.sounding = false;
    }

    fn is_sounding(&self) -> bool {
        self.sounding
    }
}

/// What the fake display was asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    Init,
    Show(Screen),
    Blank,
}

/// Display that records every call
#[derive(Default)]
pub struct FakeDisplay {
    pub(crate) fail_init: bool,
    pub(crate) fail_draws: bool,
    events: Vec<ScreenEvent>,
}

impl FakeDisplay {
    pub fn events(&self) -> &[ScreenEvent] {
        &self.events
    }
}

impl AlertDisplay for FakeDisplay {
    fn init(&mut self) -> Result<(), DisplayError> {
        if self.fail_init {
            return Err(DisplayError::InitFailed);
        }
        self.events.push(ScreenEvent::Init);
        Ok(())
    }

    fn show(&mut self, screen: &Screen) -> Result<(), DisplayError> {
        if self.fail_draws {
            return Err(DisplayError::Interface);
        }
        self.events.push(ScreenEvent::Show(screen.clone()));
        Ok(())
    }

    fn blank(&mut self) -> Result<(), DisplayError> {
        if self.fail_draws {
            return Err(DisplayError::Interface);
        }
        self.events.push(ScreenEvent::Blank);
        Ok(())
    }
}

/// Sensor suite that replays queued snapshots, then a fallback
pub struct ScriptedSensors {
    queue: VecDeque<SensorSnapshot>,
    fallback: SensorSnapshot,
    pub(crate) self_test_ok: bool,
    pub(crate) self_tests: usize,
    pub(crate) samples: usize,
}

impl ScriptedSensors {
    pub fn new(fallback: SensorSnapshot) -> Self {
        Self {
            queue: VecDeque::new(),
            fallback,
            self_test_ok: true,
            self_tests: 0,
            samples: 0,
        }
    }

    pub fn push(&mut self, snapshot: SensorSnapshot) {
        self.queue.push_back(snapshot);
    }
}

impl SensorSuite for ScriptedSensors {
    fn self_test(&mut self) -> bool {
        self.self_tests += 1;
        self.self_test_ok
    }

    fn sample(&mut self) -> SensorSnapshot {
        self.samples += 1;
        self.queue.pop_front().unwrap_or(self.fallback)
    }
}

/// Button that reports queued presses, one per poll
#[derive(Default)]
pub struct ScriptedButton {
    presses: VecDeque<bool>,
}

impl ScriptedButton {
    pub fn press(&mut self) {
        self.presses.push_back(true);
    }
}

impl ManualTrigger for ScriptedButton {
    fn poll_pressed(&mut self) -> bool {
        self.presses.pop_front().unwrap_or(false)
    }
}

/// Alert sink that logs calls instead of driving outputs
#[derive(Default)]
pub struct RecordingSink {
    pub(crate) fail_display: bool,
    pub(crate) fail_present: bool,
    pub(crate) log: Vec<String>,
    pub(crate) alerts: Vec<Alert>,
    pub(crate) alert_times_ms: Vec<u64>,
}

impl AlertSink for RecordingSink {
    fn announce_boot(&mut self) {
        self.log.push("boot".to_string());
    }

    fn init_display<T: Timebase>(&mut self, timebase: &mut T) -> Result<(), DisplayError> {
        self.log.push("display".to_string());
        if self.fail_display {
            return Err(DisplayError::InitFailed);
        }
        timebase.delay_ms(Timing::DEFAULT.welcome_screen_ms);
        Ok(())
    }

    fn announce_ready(&mut self, motion_ok: bool) {
        self.log.push(format!("ready:{motion_ok}"));
    }

    fn announce_halt(&mut self) {
        self.log.push("halt".to_string());
    }

    fn present<T: Timebase>(&mut self, alert: &Alert, timebase: &mut T) -> Result<(), DisplayError> {
        self.alerts.push(*alert);
        self.alert_times_ms.push(timebase.now_ms());
        timebase.delay_ms(Timing::DEFAULT.alert_dwell_ms);
        if self.fail_present {
            Err(DisplayError::Interface)
        } else {
            Ok(())
        }
    }
}
