//! Hardware adapter — bridges the board's button and indicator to the port traits.
//!
//! Reads the button GPIO and owns the [`IndicatorDriver`], exposing them
//! through [`InputPort`] and [`OutputPort`].  This is the only module in
//! the firmware that touches the pins directly.  On non-espidf targets
//! the underlying helpers are cfg-gated simulation stubs.

use crate::app::ports::{InputPort, OutputPort};
use crate::drivers::hw_init;
use crate::drivers::indicator::IndicatorDriver;
use crate::error::{InputError, OutputError};

/// Concrete adapter that combines the board I/O behind port traits.
pub struct HardwareAdapter {
    button_gpio: i32,
    indicator: IndicatorDriver,
}

impl HardwareAdapter {
    pub fn new(button_gpio: i32, indicator: IndicatorDriver) -> Self {
        Self {
            button_gpio,
            indicator,
        }
    }
}

// ── InputPort implementation ──────────────────────────────────

impl InputPort for HardwareAdapter {
    fn read_level(&mut self) -> Result<bool, InputError> {
        // gpio_get_level cannot fail on a configured input.
        Ok(hw_init::gpio_read(self.button_gpio))
    }
}

// ── OutputPort implementation ─────────────────────────────────

impl OutputPort for HardwareAdapter {
    fn set_level(&mut self, level: u16) -> Result<(), OutputError> {
        self.indicator.set_level(level)
    }
}
