//! GPIO / peripheral pin assignments for the pushdim board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// User button (active-low, internal pull-up)
// ---------------------------------------------------------------------------

/// Momentary push-button to GND.  LOW = pressed.
pub const BUTTON_GPIO: i32 = 14;

// ---------------------------------------------------------------------------
// Indicator LED (through series resistor to GND)
// ---------------------------------------------------------------------------

/// LEDC PWM output driving the indicator.
pub const INDICATOR_PWM_GPIO: i32 = 15;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  10-bit gives 0 – 1023 duty steps,
/// enough to resolve the normalised 0 – 1000 output range.
pub const PWM_RESOLUTION_BITS: u32 = 10;
/// Full-scale LEDC duty at [`PWM_RESOLUTION_BITS`].
pub const PWM_MAX_DUTY: u32 = (1 << PWM_RESOLUTION_BITS) - 1;
/// LEDC frequency for the indicator (1 kHz — flicker-free).
pub const INDICATOR_PWM_FREQ_HZ: u32 = 1_000;
