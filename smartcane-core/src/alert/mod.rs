//! Alert evaluation and presentation
//!
//! Data flows one way each iteration: snapshot → [`evaluate`] →
//! [`AlertPresenter::present`] → indicators cleared.

pub mod evaluator;
pub mod presenter;
pub mod reasons;
pub mod report;
pub mod screen;

pub use evaluator::evaluate;
pub use presenter::{AlertPresenter, AlertSink};
pub use reasons::{Alert, AlertReason, AlertReasons};
pub use screen::Screen;
