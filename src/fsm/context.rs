//! Shared mutable context threaded through every mode handler.
//!
//! `ModeContext` holds everything a handler may read or write: the
//! current clock reading, the resume memory, the blink phase, and the
//! commanded output level.  The main loop reads `output_level` after each
//! call into the machine and applies it to the indicator.

use crate::config::ControlConfig;
use crate::time::Instant;

use super::IndicatorMode;

// ---------------------------------------------------------------------------
// Resume memory
// ---------------------------------------------------------------------------

/// Which mode a short press from `Off` resumes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeMemory {
    /// The most recently entered non-off mode.
    pub last_non_off_mode: IndicatorMode,
    /// Set only by a long press; cleared by the next short press.
    pub resume_pending: bool,
}

impl Default for ModeMemory {
    fn default() -> Self {
        Self {
            last_non_off_mode: IndicatorMode::On,
            resume_pending: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Blink phase
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkPhase {
    pub is_on: bool,
    pub next_toggle: Instant,
}

// ---------------------------------------------------------------------------
// ModeContext
// ---------------------------------------------------------------------------

pub struct ModeContext {
    /// Clock reading of the call currently being handled.
    pub now: Instant,
    pub memory: ModeMemory,
    /// `Some` exactly while the current mode is `Blink`.
    pub blink: Option<BlinkPhase>,
    /// Output level commanded by the current mode (0 = off).
    pub output_level: u16,

    // -- Derived from configuration --
    pub full_level: u16,
    pub dim_level: u16,
    pub blink_half_period_ms: u64,
}

impl ModeContext {
    pub fn new(config: &ControlConfig, now: Instant) -> Self {
        Self {
            now,
            memory: ModeMemory::default(),
            blink: None,
            output_level: 0,
            full_level: config.output_max,
            dim_level: config.dim_level(),
            blink_half_period_ms: config.half_period_ms(),
        }
    }

    /// Deadline for the next blink toggle, one half period from now.
    pub fn next_blink_deadline(&self) -> Instant {
        self.now.plus_millis(self.blink_half_period_ms)
    }
}
