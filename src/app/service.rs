//! Control service — the hexagonal core.
//!
//! [`ControlService`] owns the press classifier and the indicator mode
//! machine and runs one control-loop iteration per [`tick`]:
//!
//! ```text
//!  InputPort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                │        ControlService         │
//! OutputPort ◀── │  PressClassifier · ModeFsm   │
//!                └──────────────────────────────┘
//! ```
//!
//! All I/O flows through port traits injected at call sites, so the
//! whole loop is testable with mock adapters and a simulated clock.
//!
//! [`tick`]: ControlService::tick

use log::{info, warn};

use crate::config::ControlConfig;
use crate::drivers::button::{ClassifierOutput, PressClassifier, PressEvent};
use crate::error;
use crate::fsm::{IndicatorMode, ModeStateMachine};
use crate::time::Instant;

use super::commands::AppCommand;
use super::events::AppEvent;
use super::ports::{EventSink, InputPort, OutputPort};

// ───────────────────────────────────────────────────────────────
// ControlService
// ───────────────────────────────────────────────────────────────

pub struct ControlService {
    classifier: PressClassifier,
    fsm: ModeStateMachine,
    /// Last raw level successfully read from the input.
    last_raw_level: bool,
    /// Level the indicator last accepted; `None` until the first write
    /// succeeds or after a failed write.
    applied_level: Option<u16>,
    input_faulted: bool,
    output_faulted: bool,
}

impl ControlService {
    /// Build the service from a validated configuration.
    ///
    /// `initial_raw_level` is the input line read at boot; a button held
    /// during boot counts as a press starting at `now`.
    pub fn new(
        config: &ControlConfig,
        initial_raw_level: bool,
        now: Instant,
    ) -> error::Result<Self> {
        config.validate()?;
        Ok(Self {
            classifier: PressClassifier::new(config, initial_raw_level, now),
            fsm: ModeStateMachine::new(config, now),
            last_raw_level: initial_raw_level,
            applied_level: None,
            input_faulted: false,
            output_faulted: false,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the initial mode and drive the indicator to match it.
    pub fn start(&mut self, hw: &mut impl OutputPort, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started(self.fsm.mode()));
        info!("ControlService started in {}", self.fsm.mode());
        self.apply_output(hw, sink);
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one loop iteration: sample → classify → dispatch → blink tick → output.
    ///
    /// The `hw` parameter satisfies **both** [`InputPort`] and
    /// [`OutputPort`] so a single adapter can own the pin and the PWM
    /// channel without a double mutable borrow.
    pub fn tick(
        &mut self,
        hw: &mut (impl InputPort + OutputPort),
        now: Instant,
        sink: &mut impl EventSink,
    ) -> ClassifierOutput {
        // 1. Sample the input, holding the last good level on failure
        let raw_level = self.sample_input(hw, sink);

        // 2. Debounce + classify
        let out = self.classifier.poll(raw_level, now);

        // 3. Dispatch at most one event
        if let Some(press) = out.event() {
            self.dispatch(press, now, sink);
        }

        // 4. Time-driven blink, every iteration
        self.fsm.tick(now);

        // 5. Drive the indicator
        self.apply_output(hw, sink);

        out
    }

    // ── Command handling ──────────────────────────────────────

    /// Inject a press from outside the button path.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        now: Instant,
        hw: &mut impl OutputPort,
        sink: &mut impl EventSink,
    ) {
        info!("Command: {:?}", cmd);
        self.dispatch(cmd.into(), now, sink);
        self.apply_output(hw, sink);
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn mode(&self) -> IndicatorMode {
        self.fsm.mode()
    }

    pub fn resume_pending(&self) -> bool {
        self.fsm.resume_pending()
    }

    /// Level the mode machine currently commands.
    pub fn output_level(&self) -> u16 {
        self.fsm.output_level()
    }

    /// Debounced button state.
    pub fn is_held(&self) -> bool {
        self.classifier.is_held()
    }

    // ── Internal ──────────────────────────────────────────────

    fn sample_input(&mut self, hw: &mut impl InputPort, sink: &mut impl EventSink) -> bool {
        match hw.read_level() {
            Ok(level) => {
                if self.input_faulted {
                    self.input_faulted = false;
                    info!("Input readable again");
                    sink.emit(&AppEvent::InputRecovered);
                }
                self.last_raw_level = level;
                level
            }
            Err(e) => {
                if !self.input_faulted {
                    self.input_faulted = true;
                    warn!("Input read failed ({}), holding last level", e);
                    sink.emit(&AppEvent::InputFault(e));
                }
                self.last_raw_level
            }
        }
    }

    fn dispatch(&mut self, press: PressEvent, now: Instant, sink: &mut impl EventSink) {
        let from = self.fsm.mode();
        sink.emit(&AppEvent::Press(press));

        let to = match press {
            PressEvent::ShortPress => self.fsm.on_short_press(now),
            PressEvent::LongPress => self.fsm.on_long_press(now),
        };

        if to != from {
            sink.emit(&AppEvent::ModeChanged { from, to });
        }
    }

    fn apply_output(&mut self, hw: &mut impl OutputPort, sink: &mut impl EventSink) {
        let level = self.fsm.output_level();
        if self.applied_level == Some(level) {
            return;
        }

        match hw.set_level(level) {
            Ok(()) => {
                self.applied_level = Some(level);
                if self.output_faulted {
                    self.output_faulted = false;
                    info!("Indicator accepting writes again");
                    sink.emit(&AppEvent::OutputRecovered);
                }
            }
            Err(e) => {
                self.applied_level = None;
                if !self.output_faulted {
                    self.output_faulted = true;
                    warn!("Indicator write failed ({}), retrying", e);
                    sink.emit(&AppEvent::OutputFault(e));
                }
            }
        }
    }
}
