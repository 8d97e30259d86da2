//! Fuzz target: `ModeStateMachine`
//!
//! Bytes select short press, long press, or a tick after a gap.  Asserts
//! the resume memory is only pending in Off, blink state exists only in
//! Blink, and the output level always belongs to the current mode.
//!
//! cargo fuzz run fuzz_mode_machine

#![no_main]

use libfuzzer_sys::fuzz_target;
use pushdim::config::ControlConfig;
use pushdim::fsm::{IndicatorMode, ModeStateMachine};
use pushdim::time::Instant;

fuzz_target!(|data: &[u8]| {
    let config = ControlConfig::default();
    let mut fsm = ModeStateMachine::new(&config, Instant::ZERO);
    let mut now = Instant::ZERO;

    for &byte in data {
        now = now.plus_millis(u64::from(byte >> 2));
        match byte & 0x03 {
            0 => {
                fsm.on_short_press(now);
            }
            1 => {
                fsm.on_long_press(now);
            }
            _ => fsm.tick(now),
        }

        if fsm.resume_pending() {
            assert_eq!(fsm.mode(), IndicatorMode::Off);
        }
        assert_eq!(fsm.blink_phase().is_some(), fsm.mode() == IndicatorMode::Blink);
        assert_ne!(fsm.last_non_off_mode(), IndicatorMode::Off);

        let level = fsm.output_level();
        match fsm.mode() {
            IndicatorMode::Off => assert_eq!(level, 0),
            IndicatorMode::On => assert_eq!(level, config.output_max),
            IndicatorMode::Dim25 => assert_eq!(level, config.dim_level()),
            IndicatorMode::Blink => assert!(level == 0 || level == config.output_max),
        }
    }
});
