//! Polled button debouncer with short and long press classification.
//!
//! ## Hardware
//!
//! Active-low momentary switch with pull-up: a LOW level means pressed.
//! The main loop samples the raw level every iteration (~1 ms) and feeds
//! it to [`PressClassifier::poll`] together with the current time.
//!
//! ## Debounce
//!
//! Raw samples and the settled level are tracked separately.  Every raw
//! toggle restarts the settling timer; the settled level only follows the
//! raw level after it has been quiet for the full debounce interval, so a
//! single bounce never disturbs an already-stable state.
//!
//! ## Gesture detection
//!
//! | Gesture     | Condition                         | Event        |
//! |-------------|-----------------------------------|--------------|
//! | Short press | Debounced release before 3 s      | `ShortPress` |
//! | Long press  | Held >= 3 s (fires while held)    | `LongPress`  |
//!
//! A long press that was missed while held (the loop stalled across the
//! threshold) is still reported on release.

use log::debug;

use crate::config::ControlConfig;
use crate::time::Instant;

/// Classified press events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressEvent {
    ShortPress,
    LongPress,
}

/// Result of one [`PressClassifier::poll`] call.
///
/// Both event flags are one-shot: true for exactly the invocation that
/// produced them, never both at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifierOutput {
    pub is_held: bool,
    pub short_event: bool,
    pub long_event: bool,
}

impl ClassifierOutput {
    /// The event fired by this invocation, if any.
    pub fn event(&self) -> Option<PressEvent> {
        if self.long_event {
            Some(PressEvent::LongPress)
        } else if self.short_event {
            Some(PressEvent::ShortPress)
        } else {
            None
        }
    }
}

/// Raw vs settled level tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DebounceState {
    stable_level: bool,
    last_raw_sample: bool,
    last_change: Instant,
}

impl DebounceState {
    fn settled(level: bool, now: Instant) -> Self {
        Self {
            stable_level: level,
            last_raw_sample: level,
            last_change: now,
        }
    }
}

/// Bookkeeping for the press currently (or last) held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PressSession {
    is_held: bool,
    press_start: Instant,
    long_already_fired: bool,
}

impl PressSession {
    /// Active-low: a low line at seed time is a press starting `now`.
    fn seeded(raw_level: bool, now: Instant) -> Self {
        Self {
            is_held: !raw_level,
            press_start: now,
            long_already_fired: false,
        }
    }
}

pub struct PressClassifier {
    debounce: DebounceState,
    session: PressSession,
    debounce_ms: u64,
    long_press_ms: u64,
}

impl PressClassifier {
    /// Build a classifier whose settled level starts at `initial_raw_level`.
    pub fn new(config: &ControlConfig, initial_raw_level: bool, now: Instant) -> Self {
        let mut classifier = Self {
            debounce: DebounceState::settled(initial_raw_level, now),
            session: PressSession::seeded(initial_raw_level, now),
            debounce_ms: u64::from(config.debounce_interval_ms),
            long_press_ms: u64::from(config.long_press_threshold_ms),
        };
        classifier.init(initial_raw_level, now);
        classifier
    }

    /// Re-seed the classifier from a fresh raw reading.
    ///
    /// A button already held at init counts as a press that started `now`.
    pub fn init(&mut self, initial_raw_level: bool, now: Instant) {
        self.debounce = DebounceState::settled(initial_raw_level, now);
        self.session = PressSession::seeded(initial_raw_level, now);
    }

    /// Call from the main loop every iteration with the raw pin level.
    pub fn poll(&mut self, raw_level: bool, now: Instant) -> ClassifierOutput {
        let mut out = ClassifierOutput {
            is_held: self.session.is_held,
            short_event: false,
            long_event: false,
        };

        if raw_level != self.debounce.last_raw_sample {
            // Noise, or the first edge of a real transition: restart settling.
            self.debounce.last_raw_sample = raw_level;
            self.debounce.last_change = now;
            return out;
        }

        let quiet_ms = now.millis_since(self.debounce.last_change);
        if quiet_ms >= self.debounce_ms && self.debounce.stable_level != raw_level {
            self.debounce.stable_level = raw_level;
            if raw_level {
                self.commit_release(now, &mut out);
            } else {
                self.commit_press(now);
            }
        }

        if self.session.is_held && !self.session.long_already_fired {
            let held_ms = now.millis_since(self.session.press_start);
            if held_ms >= self.long_press_ms {
                debug!("button: long press after {}ms (still held)", held_ms);
                out.long_event = true;
                self.session.long_already_fired = true;
            }
        }

        out.is_held = self.session.is_held;
        out
    }

    fn commit_press(&mut self, now: Instant) {
        debug!("button: pressed at {}", now);
        self.session = PressSession::seeded(false, now);
    }

    fn commit_release(&mut self, now: Instant, out: &mut ClassifierOutput) {
        if !self.session.is_held {
            return;
        }
        self.session.is_held = false;

        if self.session.long_already_fired {
            debug!("button: released after long press");
            return;
        }

        let held_ms = now.millis_since(self.session.press_start);
        if held_ms >= self.long_press_ms {
            debug!("button: long press caught on release ({}ms)", held_ms);
            out.long_event = true;
            self.session.long_already_fired = true;
        } else {
            debug!("button: short press ({}ms)", held_ms);
            out.short_event = true;
        }
    }

    /// Debounced "currently held" state.
    pub fn is_held(&self) -> bool {
        self.session.is_held
    }
}
