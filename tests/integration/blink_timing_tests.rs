//! Blink output timing as seen through the indicator writes.

use pushdim::config::ControlConfig;
use pushdim::fsm::IndicatorMode;

use super::mock_hw::{PRESSED, RELEASED, Rig};

/// Drive the rig into Blink and return the time Blink was entered.
fn enter_blink(rig: &mut Rig) -> u64 {
    rig.short_press();
    rig.short_press();

    rig.board.level = PRESSED;
    rig.run_for(200);
    rig.board.level = RELEASED;
    while rig.app.mode() != IndicatorMode::Blink {
        rig.step();
    }
    rig.now_ms()
}

/// Step for `ms` and record `(time, level)` whenever the commanded level changes.
fn record_toggles(rig: &mut Rig, ms: u64) -> Vec<(u64, u16)> {
    let mut level = rig.app.output_level();
    let mut toggles = Vec::new();
    for _ in 0..ms {
        rig.step();
        if rig.app.output_level() != level {
            level = rig.app.output_level();
            toggles.push((rig.now_ms(), level));
        }
    }
    toggles
}

#[test]
fn blink_is_a_two_hertz_square_wave_starting_dark() {
    let mut rig = Rig::new();
    let t0 = enter_blink(&mut rig);
    assert_eq!(rig.app.output_level(), 0);

    let toggles = record_toggles(&mut rig, 2000);
    let expected: Vec<(u64, u16)> = (1..=8)
        .map(|k| (t0 + k * 250, if k % 2 == 1 { 1000 } else { 0 }))
        .collect();
    assert_eq!(toggles, expected);
    assert_eq!(rig.board.last_write(), Some(0));
}

#[test]
fn blink_rate_follows_configuration() {
    let config = ControlConfig {
        blink_hz: 5,
        ..ControlConfig::default()
    };
    let mut rig = Rig::with_config(&config);
    let t0 = enter_blink(&mut rig);

    let toggles = record_toggles(&mut rig, 1000);
    assert_eq!(toggles.len(), 10);
    assert_eq!(toggles[0], (t0 + 100, 1000));
    for pair in toggles.windows(2) {
        assert_eq!(pair[1].0 - pair[0].0, 100);
    }
}

#[test]
fn leaving_blink_stops_toggling() {
    let mut rig = Rig::new();
    enter_blink(&mut rig);
    rig.run_for(100);

    rig.short_press();
    assert_eq!(rig.app.mode(), IndicatorMode::Off);
    let writes = rig.board.writes.len();

    rig.run_for(2000);
    assert_eq!(rig.board.writes.len(), writes);
    assert_eq!(rig.app.output_level(), 0);
}

#[test]
fn held_button_does_not_disturb_blink() {
    let mut rig = Rig::new();
    let t0 = enter_blink(&mut rig);

    // A press still being debounced/held leaves the wave alone until it resolves.
    rig.run_for(50);
    rig.board.level = PRESSED;
    let toggles = record_toggles(&mut rig, 500);
    assert_eq!(toggles, vec![(t0 + 250, 1000), (t0 + 500, 0)]);
    assert_eq!(rig.app.mode(), IndicatorMode::Blink);
}
