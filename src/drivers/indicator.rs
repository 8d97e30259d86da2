//! Dimmable indicator LED driver.
//!
//! One LEDC PWM channel drives a single LED.  Levels arrive in the
//! normalised `0..=output_max` range and are scaled to the LEDC duty
//! resolution configured in [`pins`].
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the LEDC channel via hw_init.
//! On host/test: the LEDC write is a no-op stub.

use crate::drivers::hw_init;
use crate::error::OutputError;
use crate::pins;

pub struct IndicatorDriver {
    output_max: u16,
}

impl IndicatorDriver {
    pub fn new(output_max: u16) -> Self {
        Self {
            output_max: output_max.max(1),
        }
    }

    /// Drive the LED at `level`, clamped to `output_max`.
    pub fn set_level(&mut self, level: u16) -> Result<(), OutputError> {
        hw_init::ledc_set(hw_init::LEDC_CH_INDICATOR, self.duty_for(level))
            .map_err(OutputError::LedcRejected)
    }

    fn duty_for(&self, level: u16) -> u32 {
        let level = level.min(self.output_max);
        (u32::from(level) * pins::PWM_MAX_DUTY) / u32::from(self.output_max)
    }
}
