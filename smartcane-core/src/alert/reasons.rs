//! Alert reasons

use crate::sensor::SensorSnapshot;

/// A single condition that can raise an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertReason {
    /// User pressed the alert button
    Manual,
    /// Something closer than the obstacle distance
    Obstacle,
    /// Temperature outside the safe band
    Temperature,
    /// Too dark
    Light,
    /// Humidity outside the comfortable band
    Humidity,
    /// Sudden movement or fall
    Motion,
}

impl AlertReason {
    /// All reasons in report order
    pub const ALL: [AlertReason; 6] = [
        AlertReason::Manual,
        AlertReason::Obstacle,
        AlertReason::Temperature,
        AlertReason::Light,
        AlertReason::Humidity,
        AlertReason::Motion,
    ];

    /// Human-readable description for the diagnostic report
    pub fn description(&self) -> &'static str {
        match self {
            AlertReason::Manual => "Manual alert button pressed",
            AlertReason::Obstacle => "Obstacle detected",
            AlertReason::Temperature => "Temperature out of range",
            AlertReason::Light => "Low light level",
            AlertReason::Humidity => "Humidity out of range",
            AlertReason::Motion => "Sudden movement detected",
        }
    }
}

/// Six independent alert flags
///
/// The alert is triggered exactly when at least one flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlertReasons {
    pub manual: bool,
    pub obstacle: bool,
    pub temperature: bool,
    pub light: bool,
    pub humidity: bool,
    pub motion: bool,
}

impl AlertReasons {
    /// No reasons set
    pub const NONE: Self = Self {
        manual: false,
        obstacle: false,
        temperature: false,
        light: false,
        humidity: false,
        motion: false,
    };

    /// Check whether a reason is set
    pub fn contains(&self, reason: AlertReason) -> bool {
        match reason {
            AlertReason::Manual => self.manual,
            AlertReason::Obstacle => self.obstacle,
            AlertReason::Temperature => self.temperature,
            AlertReason::Light => self.light,
            AlertReason::Humidity => self.humidity,
            AlertReason::Motion => self.motion,
        }
    }

    /// Aggregate flag: logical OR of all six reasons
    pub fn is_triggered(&self) -> bool {
        self.manual
            || self.obstacle
            || self.temperature
            || self.light
            || self.humidity
            || self.motion
    }

    /// Reasons that fired, in report order
    pub fn iter(&self) -> impl Iterator<Item = AlertReason> + '_ {
        AlertReason::ALL
            .into_iter()
            .filter(move |reason| self.contains(*reason))
    }

    /// Number of reasons that fired
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

impl From<AlertReason> for AlertReasons {
    fn from(reason: AlertReason) -> Self {
        let mut reasons = Self::NONE;
        match reason {
            AlertReason::Manual => reasons.manual = true,
            AlertReason::Obstacle => reasons.obstacle = true,
            AlertReason::Temperature => reasons.temperature = true,
            AlertReason::Light => reasons.light = true,
            AlertReason::Humidity => reasons.humidity = true,
            AlertReason::Motion => reasons.motion = true,
        }
        reasons
    }
}

/// A triggered alert together with the readings that caused it
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alert {
    pub reasons: AlertReasons,
    pub snapshot: SensorSnapshot,
}
