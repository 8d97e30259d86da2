//! Port traits — the hexagonal boundary between the control core and the platform.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlService (domain)
//! ```
//!
//! Driven adapters (button input, indicator output, clock, event sink)
//! implement these traits.  The [`ControlService`](super::service::ControlService)
//! consumes them via generics, so the core never touches hardware directly.
//!
//! Capability failures are reported as typed errors.  The service never
//! panics on them: it keeps the last known value and tries again next
//! iteration.

use crate::error::{InputError, OutputError};
use crate::time::Instant;

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// The single button input line.
pub trait InputPort {
    /// Raw electrical level of the line (`true` = high).  Not debounced.
    fn read_level(&mut self) -> Result<bool, InputError>;
}

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// The single dimmable indicator.
pub trait OutputPort {
    /// Apply an intensity in `0..=output_max` (0 = fully off).
    fn set_level(&mut self, level: u16) -> Result<(), OutputError>;
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic, non-decreasing time source.
pub trait ClockPort {
    fn now(&self) -> Instant;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
