//! Button samples → classifier → mode machine → indicator writes.

use pushdim::app::events::AppEvent;
use pushdim::drivers::button::PressEvent;
use pushdim::fsm::IndicatorMode;

use super::mock_hw::Rig;

use IndicatorMode::{Blink, Dim25, Off, On};

#[test]
fn short_presses_walk_the_full_cycle() {
    let mut rig = Rig::new();
    assert_eq!(rig.app.mode(), Off);

    for expected in [On, Dim25, Blink, Off] {
        rig.short_press();
        assert_eq!(rig.app.mode(), expected);
    }

    assert_eq!(
        rig.sink.mode_changes(),
        vec![(Off, On), (On, Dim25), (Dim25, Blink), (Blink, Off)]
    );
    assert!(!rig.app.resume_pending());
    // Started at 0, full, dim, then dark on entering Blink.  Blink lit
    // once during the last press, and Off darkened it again.
    assert_eq!(rig.board.writes, vec![0, 1000, 250, 0, 1000, 0]);
}

#[test]
fn each_short_press_emits_exactly_one_press_event() {
    let mut rig = Rig::new();
    rig.short_press();
    rig.short_press();
    let presses = rig.sink.count(|e| matches!(e, AppEvent::Press(PressEvent::ShortPress)));
    assert_eq!(presses, 2);
    assert_eq!(rig.sink.count(|e| matches!(e, AppEvent::Press(PressEvent::LongPress))), 0);
}

#[test]
fn long_press_turns_off_and_resume_restores_dim() {
    let mut rig = Rig::new();
    rig.short_press();
    rig.short_press();
    assert_eq!(rig.app.mode(), Dim25);

    rig.long_press();
    assert_eq!(rig.app.mode(), Off);
    assert!(rig.app.resume_pending());
    assert_eq!(rig.board.last_write(), Some(0));

    rig.short_press();
    assert_eq!(rig.app.mode(), Dim25);
    assert!(!rig.app.resume_pending());
    assert_eq!(rig.board.last_write(), Some(250));

    rig.short_press();
    assert_eq!(rig.app.mode(), Blink);
}

#[test]
fn long_press_fires_while_button_is_still_down() {
    let mut rig = Rig::new();
    rig.short_press();
    assert_eq!(rig.app.mode(), On);

    rig.board.level = super::mock_hw::PRESSED;
    rig.run_for(3100);
    assert!(rig.app.is_held());
    assert_eq!(rig.app.mode(), Off);
    assert!(rig.app.resume_pending());

    // Releasing afterwards adds nothing.
    let before = rig.sink.events.len();
    rig.board.level = super::mock_hw::RELEASED;
    rig.run_for(100);
    assert_eq!(rig.sink.events.len(), before);
    assert_eq!(rig.app.mode(), Off);
}

#[test]
fn long_press_while_already_off_arms_resume_of_default() {
    let mut rig = Rig::new();
    rig.long_press();
    assert_eq!(rig.app.mode(), Off);
    assert!(rig.app.resume_pending());
    // No transition happened, so none is reported.
    assert!(rig.sink.mode_changes().is_empty());

    rig.short_press();
    assert_eq!(rig.app.mode(), On);
}

#[test]
fn resume_then_continue_cycle_from_resumed_mode() {
    let mut rig = Rig::new();
    for _ in 0..3 {
        rig.short_press();
    }
    assert_eq!(rig.app.mode(), Blink);

    rig.long_press();
    rig.short_press();
    assert_eq!(rig.app.mode(), Blink);

    rig.short_press();
    assert_eq!(rig.app.mode(), Off);
    assert!(!rig.app.resume_pending());

    rig.short_press();
    assert_eq!(rig.app.mode(), On);
}

#[test]
fn contact_bounce_does_not_produce_presses() {
    let mut rig = Rig::new();
    for _ in 0..10 {
        rig.board.level = super::mock_hw::PRESSED;
        rig.run_for(5);
        rig.board.level = super::mock_hw::RELEASED;
        rig.run_for(5);
    }
    rig.run_for(100);
    assert_eq!(rig.app.mode(), Off);
    assert_eq!(rig.sink.count(|e| matches!(e, AppEvent::Press(_))), 0);
}
