//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (ESP-IDF logger → UART / USB-CDC in production).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(mode) => info!("START | initial_mode={}", mode),
            AppEvent::Press(press) => info!("PRESS | {:?}", press),
            AppEvent::ModeChanged { from, to } => info!("MODE | {} -> {}", from, to),
            AppEvent::InputFault(e) => warn!("FAULT | input: {}", e),
            AppEvent::InputRecovered => info!("FAULT | input recovered"),
            AppEvent::OutputFault(e) => warn!("FAULT | output: {}", e),
            AppEvent::OutputRecovered => info!("FAULT | output recovered"),
        }
    }
}
