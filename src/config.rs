//! Control-loop configuration.
//!
//! Timing and output parameters for the press classifier and the
//! indicator mode machine.  Values are fixed when the
//! [`ControlService`](crate::app::service::ControlService) is built and are
//! never mutated at runtime.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Quiet time a raw level must hold before it is trusted.
pub const DEBOUNCE_INTERVAL_MS: u32 = 30;
/// Hold time at which a press becomes a long press.
pub const LONG_PRESS_THRESHOLD_MS: u32 = 3000;
/// Blink square-wave frequency.
pub const BLINK_HZ: u32 = 2;
/// Dim mode intensity as a fraction of full output.
pub const DIM_FRACTION: f32 = 0.25;
/// Normalised output resolution (0 = off, OUTPUT_MAX = fully on).
pub const OUTPUT_MAX: u16 = 1000;
/// Driving-loop cadence.
pub const POLL_INTERVAL_MS: u32 = 1;

/// Core control configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlConfig {
    // --- Press classification ---
    /// Debounce quiet interval (milliseconds)
    pub debounce_interval_ms: u32,
    /// Hold time that classifies a press as long (milliseconds)
    pub long_press_threshold_ms: u32,

    // --- Indicator ---
    /// Blink frequency (Hz), 50% duty
    pub blink_hz: u32,
    /// Dim25 intensity as a fraction of `output_max` (0.0-1.0)
    pub dim_fraction: f32,
    /// Output level that means fully on
    pub output_max: u16,

    // --- Timing ---
    /// Driving-loop sleep between iterations (milliseconds)
    pub poll_interval_ms: u32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            debounce_interval_ms: DEBOUNCE_INTERVAL_MS,
            long_press_threshold_ms: LONG_PRESS_THRESHOLD_MS,
            blink_hz: BLINK_HZ,
            dim_fraction: DIM_FRACTION,
            output_max: OUTPUT_MAX,
            poll_interval_ms: POLL_INTERVAL_MS,
        }
    }
}

impl ControlConfig {
    /// Reject parameter combinations the control loop cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_interval_ms == 0 {
            return Err(ConfigError::DebounceIntervalZero);
        }
        if self.long_press_threshold_ms <= self.debounce_interval_ms {
            return Err(ConfigError::LongPressNotAboveDebounce);
        }
        if self.blink_hz == 0 || self.blink_hz > 500 {
            return Err(ConfigError::BlinkRateOutOfRange);
        }
        if !(0.0..=1.0).contains(&self.dim_fraction) {
            return Err(ConfigError::DimFractionOutOfRange);
        }
        if self.output_max == 0 {
            return Err(ConfigError::OutputMaxZero);
        }
        if self.poll_interval_ms == 0 || self.poll_interval_ms >= self.debounce_interval_ms {
            return Err(ConfigError::PollIntervalOutOfRange);
        }
        Ok(())
    }

    /// Half of one blink period: `1000 / (2 * blink_hz)` milliseconds.
    pub fn half_period_ms(&self) -> u64 {
        1000 / (2 * u64::from(self.blink_hz.max(1)))
    }

    /// Output level for the Dim25 mode.
    pub fn dim_level(&self) -> u16 {
        let level = (f32::from(self.output_max) * self.dim_fraction.clamp(0.0, 1.0)).round();
        (level as u16).min(self.output_max)
    }
}
