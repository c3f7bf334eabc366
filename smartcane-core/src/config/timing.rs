//! Loop, alert and ranging timing

/// Minimum time between two scheduled sensor checks (ms)
pub const CHECK_INTERVAL_MS: u32 = 500;
/// How long an alert stays visible and lit (ms)
pub const ALERT_DWELL_MS: u32 = 2_000;
/// Settle delay after a button press is detected (ms)
pub const BUTTON_DEBOUNCE_MS: u32 = 100;
/// Alert tone frequency (Hz)
pub const TONE_FREQUENCY_HZ: u32 = 1_500;
/// Alert tone length (ms)
pub const TONE_DURATION_MS: u32 = 300;
/// Welcome screen time at startup (ms)
pub const WELCOME_SCREEN_MS: u32 = 2_500;

/// Trigger line low time before the pulse (µs)
pub const TRIGGER_SETTLE_US: u32 = 2;
/// Trigger pulse width (µs)
pub const TRIGGER_PULSE_US: u32 = 10;
/// Longest wait for a complete echo pulse (µs)
pub const ECHO_TIMEOUT_US: u32 = 30_000;
/// Speed of sound used for ranging (cm/µs)
pub const SPEED_OF_SOUND_CM_PER_US: f32 = 0.034;

/// Monitor loop and alert presentation timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Scheduled check period (ms), compared with strict `>`
    pub check_interval_ms: u32,
    /// Alert hold time after the report is written (ms)
    pub alert_dwell_ms: u32,
    /// Blocking settle delay after a button edge (ms)
    pub debounce_ms: u32,
    /// Tone frequency (Hz)
    pub tone_frequency_hz: u32,
    /// Tone length (ms)
    pub tone_duration_ms: u32,
    /// Startup welcome screen time (ms)
    pub welcome_screen_ms: u32,
}

impl Timing {
    /// Factory timing
    pub const DEFAULT: Self = Self {
        check_interval_ms: CHECK_INTERVAL_MS,
        alert_dwell_ms: ALERT_DWELL_MS,
        debounce_ms: BUTTON_DEBOUNCE_MS,
        tone_frequency_hz: TONE_FREQUENCY_HZ,
        tone_duration_ms: TONE_DURATION_MS,
        welcome_screen_ms: WELCOME_SCREEN_MS,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Ultrasonic ranging timing
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RangingTiming {
    /// Trigger low time before the pulse (µs)
    pub settle_us: u32,
    /// Trigger pulse width (µs)
    pub pulse_us: u32,
    /// Whole-measurement echo timeout (µs)
    pub echo_timeout_us: u32,
    /// Speed of sound (cm/µs)
    pub speed_of_sound_cm_per_us: f32,
}

impl RangingTiming {
    /// Factory ranging timing
    pub const DEFAULT: Self = Self {
        settle_us: TRIGGER_SETTLE_US,
        pulse_us: TRIGGER_PULSE_US,
        echo_timeout_us: ECHO_TIMEOUT_US,
        speed_of_sound_cm_per_us: SPEED_OF_SOUND_CM_PER_US,
    };

    /// Convert a round-trip echo time to a one-way distance in cm
    pub fn echo_to_cm(&self, echo_us: u64) -> f32 {
        echo_us as f32 * self.speed_of_sound_cm_per_us / 2.0
    }
}

impl Default for RangingTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}
