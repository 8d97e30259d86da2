//! Monotonic millisecond timestamps.
//!
//! The control core never reads a clock itself: every entry point takes
//! an [`Instant`] supplied by the caller (a [`ClockPort`] in the firmware,
//! a simulated counter in tests).  Elapsed-time arithmetic saturates, so a
//! stale or out-of-order timestamp reads as "no time passed" instead of
//! wrapping into a huge duration.
//!
//! [`ClockPort`]: crate::app::ports::ClockPort

use core::fmt;

/// Milliseconds since boot on a monotonic clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(u64);

impl Instant {
    /// The clock origin (boot).
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`, or 0 if `earlier`
    /// is in the future.
    pub const fn millis_since(self, earlier: Instant) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// The instant `ms` milliseconds after `self`.
    pub const fn plus_millis(self, ms: u64) -> Instant {
        Self(self.0.saturating_add(ms))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
