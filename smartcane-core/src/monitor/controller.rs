//! Monitor loop controller
//!
//! Owns timing and orchestrates one iteration at a time:
//! button → (due?) → sample → evaluate → present → reset.

use smartcane_hal::Timebase;

use super::state::{LoopState, Phase, PhaseEvent};
use crate::alert::{evaluate, Alert, AlertReasons, AlertSink};
use crate::config::{Thresholds, Timing};
use crate::sensor::SensorSuite;
use crate::traits::{DisplayError, ManualTrigger};

/// Fatal startup failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupError {
    /// The display could not be initialized; the device cannot alert
    DisplayInit(DisplayError),
}

impl From<DisplayError> for StartupError {
    fn from(e: DisplayError) -> Self {
        StartupError::DisplayInit(e)
    }
}

/// What a single loop iteration did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepOutcome {
    /// Not due yet and no manual request; nothing was sampled
    Skipped,
    /// Sensors evaluated, no alert condition
    Clear,
    /// An alert was presented and cleared
    Alerted {
        reasons: AlertReasons,
        /// First display failure during the alert, if any
        display_error: Option<DisplayError>,
    },
}

/// The monitor loop
pub struct Monitor<S, B, P, C> {
    sensors: S,
    button: B,
    presenter: P,
    timebase: C,
    thresholds: Thresholds,
    timing: Timing,
    state: LoopState,
    phase: Phase,
}

impl<S, B, P, C> Monitor<S, B, P, C>
where
    S: SensorSuite,
    B: ManualTrigger,
    P: AlertSink,
    C: Timebase,
{
    /// Create a monitor; call [`Monitor::startup`] before stepping it
    pub fn new(
        sensors: S,
        button: B,
        presenter: P,
        timebase: C,
        thresholds: Thresholds,
        timing: Timing,
    ) -> Self {
        let state = LoopState::new(timebase.now_ms());
        Self {
            sensors,
            button,
            presenter,
            timebase,
            thresholds,
            timing,
            state,
            phase: Phase::Idle,
        }
    }

    /// One-time startup sequence
    ///
    /// Returns the motion self-test result. Only a display failure is
    /// fatal; the caller must stop all further progress on error.
    pub fn startup(&mut self) -> Result<bool, StartupError> {
        self.presenter.announce_boot();

        if let Err(e) = self.presenter.init_display(&mut self.timebase) {
            self.presenter.announce_halt();
            return Err(e.into());
        }

        // Degraded mode on failure, never a hard stop
        let motion_ok = self.sensors.self_test();
        self.presenter.announce_ready(motion_ok);

        self.state = LoopState::new(self.timebase.now_ms());
        Ok(motion_ok)
    }

    /// Run one loop iteration
    pub fn step(&mut self) -> StepOutcome {
        // Button is polled every pass, due or not
        if self.button.poll_pressed() {
            self.state.request_manual();
            self.timebase.delay_ms(self.timing.debounce_ms);
        }

        let now_ms = self.timebase.now_ms();
        if !self.state.is_due(now_ms, self.timing.check_interval_ms) {
            return StepOutcome::Skipped;
        }
        self.state.mark_checked(now_ms);

        let snapshot = self.sensors.sample();
        let reasons = evaluate(&snapshot, self.state.manual_pending, &self.thresholds);

        let outcome = if reasons.is_triggered() {
            self.phase = self.phase.transition(PhaseEvent::AlertRaised);
            let alert = Alert { reasons, snapshot };
            let result = self.presenter.present(&alert, &mut self.timebase);
            self.phase = self.phase.transition(PhaseEvent::AlertCleared);

            StepOutcome::Alerted {
                reasons,
                display_error: result.err(),
            }
        } else {
            StepOutcome::Clear
        };

        self.state.finish_evaluation();
        outcome
    }

    /// Get the state carried between iterations
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Get the current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get the sensor suite
    pub fn sensors(&self) -> &S {
        &self.sensors
    }

    /// Get the alert sink
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Get the timebase
    pub fn timebase(&self) -> &C {
        &self.timebase
    }
}
