//! Function-pointer finite state machine for the indicator modes.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  ModeTable                                                │
//! │  ┌────────┬───────────┬────────────────────┬───────────┐  │
//! │  │ Mode   │ on_enter  │ on_short_press     │ on_tick   │  │
//! │  ├────────┼───────────┼────────────────────┼───────────┤  │
//! │  │ Off    │ fn(ctx)   │ fn(ctx) -> Mode    │ —         │  │
//! │  │ On     │ fn(ctx)   │ fn(ctx) -> Mode    │ —         │  │
//! │  │ Dim25  │ fn(ctx)   │ fn(ctx) -> Mode    │ —         │  │
//! │  │ Blink  │ fn(ctx)   │ fn(ctx) -> Mode    │ fn(ctx)   │  │
//! │  └────────┴───────────┴────────────────────┴───────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! A short press asks the current row for the next mode; a long press
//! forces `Off` from any row and arms the resume memory.  Every mode
//! change, including the initial one, goes through [`ModeStateMachine`]'s
//! `apply_mode`, which runs the new row's `on_enter`.  That is the only
//! place output-level effects of a transition happen.
//!
//! `tick` runs the current row's `on_tick` (only `Blink` has one) and
//! must be called every loop iteration.

pub mod context;
pub mod states;

use core::fmt;

use context::{BlinkPhase, ModeContext};
use log::info;

use crate::config::ControlConfig;
use crate::time::Instant;

// ---------------------------------------------------------------------------
// Mode identity
// ---------------------------------------------------------------------------

/// Indicator output modes.
/// Must stay in sync with the table built in [`states::build_mode_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum IndicatorMode {
    Off = 0,
    On = 1,
    Dim25 = 2,
    Blink = 3,
}

impl IndicatorMode {
    /// Total number of modes — used to size the table array.
    pub const COUNT: usize = 4;

    /// Convert a table index back to `IndicatorMode`.  Out-of-range
    /// indices assert in debug builds and map to `Off` in release.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Off,
            1 => Self::On,
            2 => Self::Dim25,
            3 => Self::Blink,
            _ => {
                debug_assert!(false, "invalid mode index: {idx}");
                Self::Off
            }
        }
    }
}

impl fmt::Display for IndicatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Off => "Off",
            Self::On => "On",
            Self::Dim25 => "Dim25",
            Self::Blink => "Blink",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Entry action: applies the mode's output level and memory effects.
pub type ModeEnterFn = fn(&mut ModeContext);

/// Short-press handler: returns the mode to enter next.
pub type ShortPressFn = fn(&mut ModeContext) -> IndicatorMode;

/// Per-iteration handler for time-driven behaviour.
pub type ModeTickFn = fn(&mut ModeContext);

// ---------------------------------------------------------------------------
// Mode descriptor (one row in the table)
// ---------------------------------------------------------------------------

pub struct ModeDescriptor {
    pub id: IndicatorMode,
    pub name: &'static str,
    pub on_enter: ModeEnterFn,
    pub on_short_press: ShortPressFn,
    pub on_tick: Option<ModeTickFn>,
}

// ---------------------------------------------------------------------------
// Mode state machine
// ---------------------------------------------------------------------------

/// The indicator mode machine.
///
/// Owns the mode table and the [`ModeContext`] (resume memory, blink
/// phase, commanded output level).
pub struct ModeStateMachine {
    /// Fixed-size table indexed by `IndicatorMode as usize`.
    table: [ModeDescriptor; IndicatorMode::COUNT],
    /// Index of the current mode.
    current: usize,
    ctx: ModeContext,
}

impl ModeStateMachine {
    /// Construct the machine and enter `Off`.
    pub fn new(config: &ControlConfig, now: Instant) -> Self {
        let mut fsm = Self {
            table: states::build_mode_table(),
            current: IndicatorMode::Off as usize,
            ctx: ModeContext::new(config, now),
        };
        fsm.init(now);
        fsm
    }

    /// Reset to `Off` with empty resume memory.
    pub fn init(&mut self, now: Instant) {
        self.ctx.memory = context::ModeMemory::default();
        self.current = IndicatorMode::Off as usize;
        self.ctx.now = now;
        (self.table[self.current].on_enter)(&mut self.ctx);
        info!("Mode machine starting in: {}", self.table[self.current].name);
    }

    /// Advance the normal cycle, or resume the remembered mode from `Off`.
    pub fn on_short_press(&mut self, now: Instant) -> IndicatorMode {
        self.ctx.now = now;
        let next = (self.table[self.current].on_short_press)(&mut self.ctx);
        self.apply_mode(next, now);
        next
    }

    /// Force `Off` from any mode and arm resume memory.
    pub fn on_long_press(&mut self, now: Instant) -> IndicatorMode {
        self.ctx.memory.resume_pending = true;
        self.apply_mode(IndicatorMode::Off, now);
        IndicatorMode::Off
    }

    /// Service time-driven behaviour.  Call every loop iteration.
    pub fn tick(&mut self, now: Instant) {
        self.ctx.now = now;
        if let Some(tick) = self.table[self.current].on_tick {
            tick(&mut self.ctx);
        }
    }

    pub fn mode(&self) -> IndicatorMode {
        IndicatorMode::from_index(self.current)
    }

    /// Output level the current mode commands (0 = off).
    pub fn output_level(&self) -> u16 {
        self.ctx.output_level
    }

    pub fn resume_pending(&self) -> bool {
        self.ctx.memory.resume_pending
    }

    pub fn last_non_off_mode(&self) -> IndicatorMode {
        self.ctx.memory.last_non_off_mode
    }

    /// Blink phase, present only while in `Blink`.
    pub fn blink_phase(&self) -> Option<BlinkPhase> {
        self.ctx.blink
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn apply_mode(&mut self, next: IndicatorMode, now: Instant) {
        let next_idx = next as usize;

        info!(
            "Mode transition: {} -> {} (resume_pending={})",
            self.table[self.current].name, self.table[next_idx].name, self.ctx.memory.resume_pending
        );

        self.current = next_idx;
        self.ctx.now = now;
        (self.table[self.current].on_enter)(&mut self.ctx);
    }
}
