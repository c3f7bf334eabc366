//! Time abstractions
//!
//! The monitor loop needs two things from the platform: a monotonic
//! timestamp and a blocking delay. The delay half is `embedded-hal`'s
//! [`DelayNs`]; the timestamp half is [`Clock`].

use embedded_hal::delay::DelayNs;

/// Monotonic microsecond clock
///
/// Timestamps start at an arbitrary origin (usually boot) and never go
/// backwards. 64 bits of microseconds do not wrap within the device's life.
pub trait Clock {
    /// Microseconds since the clock's origin
    fn now_us(&self) -> u64;

    /// Milliseconds since the clock's origin
    fn now_ms(&self) -> u64 {
        self.now_us() / 1_000
    }

    /// Microseconds elapsed since an earlier [`Clock::now_us`] reading
    fn elapsed_us(&self, since_us: u64) -> u64 {
        self.now_us().saturating_sub(since_us)
    }
}

/// A clock that can also block for a duration
///
/// Everything in the monitor loop runs on a single thread of control, so
/// waiting is always a blocking delay on the same time source.
pub trait Timebase: Clock + DelayNs {}

// Blanket implementation for types that implement both traits
impl<T: Clock + DelayNs> Timebase for T {}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}
