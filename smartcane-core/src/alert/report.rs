//! Diagnostic text stream
//!
//! Line-oriented messages written once at startup and once per alert.
//! The framing is fixed so existing serial log parsers keep working.

use core::fmt::{self, Write};

use super::reasons::Alert;

/// Border used for the boot banner and alert blocks
pub const BORDER: &str = "=====";

/// Shown in place of a reading that is missing this cycle
const MISSING: &str = "N/A";

/// Boot banner, written before any hardware is touched
pub fn write_boot_banner<W: Write>(w: &mut W) -> fmt::Result {
    writeln!(w, "{} Smart Cane Monitor {}", BORDER, BORDER)?;
    writeln!(w, "Initializing sensors...")
}

/// Motion self-test result and ready message
pub fn write_ready<W: Write>(w: &mut W, motion_ok: bool) -> fmt::Result {
    if motion_ok {
        writeln!(w, "MPU6050 connection successful")?;
    } else {
        writeln!(w, "MPU6050 connection failed")?;
    }
    writeln!(w, "System ready.")
}

/// Fatal display failure notice
pub fn write_display_failure<W: Write>(w: &mut W) -> fmt::Result {
    writeln!(w, "Display initialization failed, halting.")
}

/// Bordered alert block: fired reasons, then all five raw readings
pub fn write_alert<W: Write>(w: &mut W, alert: &Alert) -> fmt::Result {
    let s = &alert.snapshot;

    writeln!(w, "{} ALERT TRIGGERED {}", BORDER, BORDER)?;
    for reason in alert.reasons.iter() {
        writeln!(w, "- {}", reason.description())?;
    }

    write!(w, "Temperature: ")?;
    write_reading(w, s.temperature_c, "C")?;
    write!(w, "Humidity: ")?;
    write_reading(w, s.humidity_pct, "%")?;
    write!(w, "Distance: ")?;
    write_reading(w, s.distance_cm, "cm")?;

    match s.light_level {
        Some(l) => writeln!(w, "Light level: {}", l)?,
        None => writeln!(w, "Light level: {}", MISSING)?,
    }
    match s.acceleration_magnitude() {
        Some(m) => writeln!(w, "Acceleration sum: {}", m)?,
        None => writeln!(w, "Acceleration sum: {}", MISSING)?,
    }

    writeln!(w, "{}{}{}{}{}", BORDER, BORDER, BORDER, BORDER, BORDER)
}

fn write_reading<W: Write>(w: &mut W, value: Option<f32>, unit: &str) -> fmt::Result {
    match value {
        Some(v) => writeln!(w, "{:.1} {}", v, unit),
        None => writeln!(w, "{}", MISSING),
    }
}
