//! Outbound application events.
//!
//! The [`ControlService`](super::service::ControlService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.

use crate::drivers::button::PressEvent;
use crate::error::{InputError, OutputError};
use crate::fsm::IndicatorMode;

/// Structured events emitted by the control core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The service has started (carries the initial mode).
    Started(IndicatorMode),

    /// A debounced press was classified.
    Press(PressEvent),

    /// The mode machine changed mode.
    ModeChanged {
        from: IndicatorMode,
        to: IndicatorMode,
    },

    /// The input line could not be read; the last good level is in use.
    InputFault(InputError),

    /// The input line is readable again.
    InputRecovered,

    /// The indicator rejected a level; it is retried every iteration.
    OutputFault(OutputError),

    /// The indicator accepted a level again.
    OutputRecovered,
}
