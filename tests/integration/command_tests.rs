//! Presses injected as `AppCommand`s share the button's dispatch path.

use pushdim::app::commands::AppCommand;
use pushdim::app::events::AppEvent;
use pushdim::app::ports::ClockPort;
use pushdim::drivers::button::PressEvent;
use pushdim::fsm::IndicatorMode;

use super::mock_hw::Rig;

fn send(rig: &mut Rig, cmd: AppCommand) {
    let now = rig.clock.now();
    rig.app.handle_command(cmd, now, &mut rig.board, &mut rig.sink);
}

#[test]
fn short_press_command_advances_mode_and_writes_output() {
    let mut rig = Rig::new();
    send(&mut rig, AppCommand::ShortPress);

    assert_eq!(rig.app.mode(), IndicatorMode::On);
    assert_eq!(rig.board.last_write(), Some(1000));
    assert_eq!(
        rig.sink.events[1..],
        [
            AppEvent::Press(PressEvent::ShortPress),
            AppEvent::ModeChanged {
                from: IndicatorMode::Off,
                to: IndicatorMode::On,
            },
        ]
    );
}

#[test]
fn long_press_command_arms_resume_like_a_held_button() {
    let mut rig = Rig::new();
    send(&mut rig, AppCommand::ShortPress);
    send(&mut rig, AppCommand::ShortPress);
    send(&mut rig, AppCommand::LongPress);
    assert_eq!(rig.app.mode(), IndicatorMode::Off);
    assert!(rig.app.resume_pending());

    send(&mut rig, AppCommand::ShortPress);
    assert_eq!(rig.app.mode(), IndicatorMode::Dim25);
    assert_eq!(rig.board.last_write(), Some(250));
}

#[test]
fn commands_and_button_presses_interleave() {
    let mut rig = Rig::new();
    rig.short_press();
    send(&mut rig, AppCommand::ShortPress);
    rig.short_press();
    assert_eq!(rig.app.mode(), IndicatorMode::Blink);

    // A long press command cuts Blink like the button would.
    rig.run_for(300);
    send(&mut rig, AppCommand::LongPress);
    assert_eq!(rig.app.mode(), IndicatorMode::Off);
    rig.short_press();
    assert_eq!(rig.app.mode(), IndicatorMode::Blink);
}
