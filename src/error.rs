//! Unified error types for the pushdim firmware.
//!
//! The control core itself has no failure modes; these types describe
//! the platform at its boundary and the configuration the core is built
//! from.  All variants are `Copy` so they can be carried in
//! [`AppEvent`](crate::app::events::AppEvent)s without allocation.

use core::fmt;

use crate::drivers::hw_init::HwInitError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The button input could not be sampled.
    Input(InputError),
    /// The indicator output could not be driven.
    Output(OutputError),
    /// Configuration failed validation.
    Config(ConfigError),
    /// Peripheral initialisation failed.
    Init(HwInitError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "input: {e}"),
            Self::Output(e) => write!(f, "output: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Init(e) => write!(f, "init: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Input capability errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The GPIO level could not be read.
    GpioReadFailed,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioReadFailed => write!(f, "GPIO read failed"),
        }
    }
}

impl core::error::Error for InputError {}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

// ---------------------------------------------------------------------------
// Output capability errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputError {
    /// The PWM driver refused the duty-cycle write.
    PwmWriteFailed,
    /// The LEDC peripheral returned an ESP-IDF error code.
    LedcRejected(i32),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PwmWriteFailed => write!(f, "PWM write failed"),
            Self::LedcRejected(rc) => write!(f, "LEDC rejected duty update (rc={rc})"),
        }
    }
}

impl core::error::Error for OutputError {}

impl From<OutputError> for Error {
    fn from(e: OutputError) -> Self {
        Self::Output(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Reasons a [`ControlConfig`](crate::config::ControlConfig) is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    DebounceIntervalZero,
    /// The long-press threshold must exceed the debounce interval.
    LongPressNotAboveDebounce,
    /// Blink rate must give a half period of at least 1 ms.
    BlinkRateOutOfRange,
    DimFractionOutOfRange,
    OutputMaxZero,
    /// The poll cadence must be non-zero and finer than the debounce interval.
    PollIntervalOutOfRange,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DebounceIntervalZero => write!(f, "debounce interval must be non-zero"),
            Self::LongPressNotAboveDebounce => {
                write!(f, "long-press threshold must exceed the debounce interval")
            }
            Self::BlinkRateOutOfRange => write!(f, "blink rate must be 1..=500 Hz"),
            Self::DimFractionOutOfRange => write!(f, "dim fraction must be within 0.0..=1.0"),
            Self::OutputMaxZero => write!(f, "output resolution must be non-zero"),
            Self::PollIntervalOutOfRange => {
                write!(f, "poll interval must be non-zero and below the debounce interval")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
