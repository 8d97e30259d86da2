//! Concrete mode handler functions and table builder.
//!
//! Each mode is defined by plain `fn` pointers (no closures, no dynamic
//! dispatch, no heap).
//!
//! ```text
//!          short            short             short
//!   OFF ──────────▶ ON ──────────▶ DIM25 ──────────▶ BLINK
//!    ▲                                                 │
//!    └──────────────────────── short ──────────────────┘
//!
//!   Any mode ──[long]──▶ OFF (resume pending)
//!   OFF (resume pending) ──[short]──▶ last non-off mode
//! ```

use log::info;

use super::context::{BlinkPhase, ModeContext};
use super::{IndicatorMode, ModeDescriptor};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static mode table.  Called once per machine.
pub fn build_mode_table() -> [ModeDescriptor; IndicatorMode::COUNT] {
    [
        // Index 0 — Off
        ModeDescriptor {
            id: IndicatorMode::Off,
            name: "Off",
            on_enter: off_enter,
            on_short_press: off_short_press,
            on_tick: None,
        },
        // Index 1 — On
        ModeDescriptor {
            id: IndicatorMode::On,
            name: "On",
            on_enter: full_enter,
            on_short_press: full_short_press,
            on_tick: None,
        },
        // Index 2 — Dim25
        ModeDescriptor {
            id: IndicatorMode::Dim25,
            name: "Dim25",
            on_enter: dim_enter,
            on_short_press: dim_short_press,
            on_tick: None,
        },
        // Index 3 — Blink
        ModeDescriptor {
            id: IndicatorMode::Blink,
            name: "Blink",
            on_enter: blink_enter,
            on_short_press: blink_short_press,
            on_tick: Some(blink_tick),
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  OFF
// ═══════════════════════════════════════════════════════════════════════════

fn off_enter(ctx: &mut ModeContext) {
    // Resume memory carries through Off untouched.
    ctx.blink = None;
    ctx.output_level = 0;
}

fn off_short_press(ctx: &mut ModeContext) -> IndicatorMode {
    if ctx.memory.resume_pending {
        ctx.memory.resume_pending = false;
        info!("OFF: resuming {:?}", ctx.memory.last_non_off_mode);
        ctx.memory.last_non_off_mode
    } else {
        IndicatorMode::On
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  ON
// ═══════════════════════════════════════════════════════════════════════════

fn full_enter(ctx: &mut ModeContext) {
    ctx.blink = None;
    ctx.output_level = ctx.full_level;
    ctx.memory.last_non_off_mode = IndicatorMode::On;
}

fn full_short_press(_ctx: &mut ModeContext) -> IndicatorMode {
    IndicatorMode::Dim25
}

// ═══════════════════════════════════════════════════════════════════════════
//  DIM25
// ═══════════════════════════════════════════════════════════════════════════

fn dim_enter(ctx: &mut ModeContext) {
    ctx.blink = None;
    ctx.output_level = ctx.dim_level;
    ctx.memory.last_non_off_mode = IndicatorMode::Dim25;
}

fn dim_short_press(_ctx: &mut ModeContext) -> IndicatorMode {
    IndicatorMode::Blink
}

// ═══════════════════════════════════════════════════════════════════════════
//  BLINK — 50% duty square wave, starting dark
// ═══════════════════════════════════════════════════════════════════════════

fn blink_enter(ctx: &mut ModeContext) {
    ctx.blink = Some(BlinkPhase {
        is_on: false,
        next_toggle: ctx.next_blink_deadline(),
    });
    ctx.output_level = 0;
    ctx.memory.last_non_off_mode = IndicatorMode::Blink;
}

fn blink_short_press(ctx: &mut ModeContext) -> IndicatorMode {
    // Completing the cycle by hand always restarts at On next time.
    ctx.memory.resume_pending = false;
    IndicatorMode::Off
}

fn blink_tick(ctx: &mut ModeContext) {
    let next_toggle = ctx.next_blink_deadline();
    let full_level = ctx.full_level;
    let Some(phase) = ctx.blink.as_mut() else {
        return;
    };
    if ctx.now < phase.next_toggle {
        return;
    }
    phase.is_on = !phase.is_on;
    phase.next_toggle = next_toggle;
    ctx.output_level = if phase.is_on { full_level } else { 0 };
}
