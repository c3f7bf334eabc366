//! Loop state and phase machine

/// The only state that survives from one iteration to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoopState {
    /// Time of the last evaluation (ms)
    pub last_check_ms: u64,
    /// A manual alert has been requested and not yet evaluated
    pub manual_pending: bool,
}

impl LoopState {
    /// Fresh state with the check clock starting at `now_ms`
    pub const fn new(now_ms: u64) -> Self {
        Self {
            last_check_ms: now_ms,
            manual_pending: false,
        }
    }

    /// Latch a manual alert request
    pub fn request_manual(&mut self) {
        self.manual_pending = true;
    }

    /// Check whether this iteration should evaluate the sensors
    ///
    /// True once strictly more than `interval_ms` has passed since the last
    /// check, or immediately when a manual alert is pending.
    pub fn is_due(&self, now_ms: u64, interval_ms: u32) -> bool {
        self.manual_pending || now_ms.saturating_sub(self.last_check_ms) > u64::from(interval_ms)
    }

    /// Record the start of an evaluation
    pub fn mark_checked(&mut self, now_ms: u64) {
        self.last_check_ms = now_ms;
    }

    /// End of an iteration that reached evaluation
    ///
    /// The manual flag is cleared whether or not an alert fired, so a stale
    /// request can never fire twice.
    pub fn finish_evaluation(&mut self) {
        self.manual_pending = false;
    }
}

/// Loop phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Polling the button and waiting for the next check
    #[default]
    Idle,
    /// Alert raised; indicators active until the dwell completes
    Alerting,
}

/// Events that move the loop between phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseEvent {
    /// Evaluation produced at least one alert reason
    AlertRaised,
    /// Presenter finished its dwell-and-clear sequence
    AlertCleared,
}

impl Phase {
    /// Process an event and return the next phase
    pub fn transition(self, event: PhaseEvent) -> Self {
        use Phase::*;
        use PhaseEvent::*;

        match (self, event) {
            (Idle, AlertRaised) => Alerting,
            (Alerting, AlertCleared) => Idle,
            // An alert is never re-entered while one is showing
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_is_strict() {
        let state = LoopState::new(1_000);
        assert!(!state.is_due(1_000, 500));
        assert!(!state.is_due(1_500, 500));
        assert!(state.is_due(1_501, 500));
    }

    #[test]
    fn test_manual_overrides_interval() {
        let mut state = LoopState::new(1_000);
        state.request_manual();
        assert!(state.is_due(1_000, 500));

        state.finish_evaluation();
        assert!(!state.manual_pending);
        assert!(!state.is_due(1_000, 500));
    }

    #[test]
    fn test_mark_checked_restarts_interval() {
        let mut state = LoopState::new(0);
        state.mark_checked(2_000);
        assert!(!state.is_due(2_400, 500));
        assert!(state.is_due(2_501, 500));
    }

    #[test]
    fn test_clock_behind_last_check() {
        let state = LoopState::new(5_000);
        assert!(!state.is_due(4_000, 500));
    }

    #[test]
    fn test_alert_cycle() {
        let phase = Phase::Idle;
        let alerting = phase.transition(PhaseEvent::AlertRaised);
        assert_eq!(alerting, Phase::Alerting);

        let idle = alerting.transition(PhaseEvent::AlertCleared);
        assert_eq!(idle, Phase::Idle);
    }

    #[test]
    fn test_no_reentry() {
        let alerting = Phase::Alerting;
        assert_eq!(alerting.transition(PhaseEvent::AlertRaised), Phase::Alerting);
        assert_eq!(Phase::Idle.transition(PhaseEvent::AlertCleared), Phase::Idle);
    }
}
