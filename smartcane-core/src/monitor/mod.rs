//! Monitor loop
//!
//! Defines the loop controller and the little state it keeps between
//! iterations. The loop is a single sequential thread of control; the
//! alert dwell blocks the whole iteration.

pub mod controller;
pub mod state;

pub use controller::{Monitor, StartupError, StepOutcome};
pub use state::{LoopState, Phase, PhaseEvent};
