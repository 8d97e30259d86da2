//! Inbound commands to the control service.
//!
//! These let a surrounding harness (serial console, test driver) inject
//! a classified press without going through the physical button.  They
//! follow exactly the same dispatch path as a debounced press.

use crate::drivers::button::PressEvent;

/// Commands that external adapters can send into the control core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Behave as if the button was short-pressed.
    ShortPress,

    /// Behave as if the button was long-pressed.
    LongPress,
}

impl From<AppCommand> for PressEvent {
    fn from(cmd: AppCommand) -> Self {
        match cmd {
            AppCommand::ShortPress => PressEvent::ShortPress,
            AppCommand::LongPress => PressEvent::LongPress,
        }
    }
}
