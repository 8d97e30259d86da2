//! Mock board, clock and event sink for integration tests.
//!
//! Records every indicator write and every emitted event so tests can
//! assert on the full history without touching real GPIO/LEDC registers.

use std::cell::Cell;

use pushdim::app::events::AppEvent;
use pushdim::app::ports::{ClockPort, EventSink, InputPort, OutputPort};
use pushdim::app::service::ControlService;
use pushdim::config::ControlConfig;
use pushdim::drivers::button::ClassifierOutput;
use pushdim::error::{InputError, OutputError};
use pushdim::fsm::IndicatorMode;
use pushdim::time::Instant;

pub const RELEASED: bool = true;
pub const PRESSED: bool = false;

/// Quiet time after a release, long enough for the debouncer to settle.
pub const SETTLE_MS: u64 = 100;

// ── MockBoard ─────────────────────────────────────────────────

/// Scripted button line plus a recording indicator.
pub struct MockBoard {
    pub level: bool,
    pub read_fails: bool,
    pub write_fails: bool,
    pub writes: Vec<u16>,
}

#[allow(dead_code)]
impl MockBoard {
    pub fn new() -> Self {
        Self {
            level: RELEASED,
            read_fails: false,
            write_fails: false,
            writes: Vec::new(),
        }
    }

    pub fn last_write(&self) -> Option<u16> {
        self.writes.last().copied()
    }
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPort for MockBoard {
    fn read_level(&mut self) -> Result<bool, InputError> {
        if self.read_fails {
            Err(InputError::GpioReadFailed)
        } else {
            Ok(self.level)
        }
    }
}

impl OutputPort for MockBoard {
    fn set_level(&mut self, level: u16) -> Result<(), OutputError> {
        if self.write_fails {
            return Err(OutputError::LedcRejected(-1));
        }
        self.writes.push(level);
        Ok(())
    }
}

// ── SimClock ──────────────────────────────────────────────────

#[derive(Default)]
pub struct SimClock {
    ms: Cell<u64>,
}

impl SimClock {
    pub fn advance(&self, ms: u64) {
        self.ms.set(self.ms.get() + ms);
    }
}

impl ClockPort for SimClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.ms.get())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn mode_changes(&self) -> Vec<(IndicatorMode, IndicatorMode)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::ModeChanged { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}

// ── Rig ───────────────────────────────────────────────────────

/// A started [`ControlService`] wired to the mocks, stepped 1 ms at a time.
pub struct Rig {
    pub app: ControlService,
    pub board: MockBoard,
    pub sink: RecordingSink,
    pub clock: SimClock,
}

#[allow(dead_code)]
impl Rig {
    pub fn new() -> Self {
        Self::with_config(&ControlConfig::default())
    }

    pub fn with_config(config: &ControlConfig) -> Self {
        let clock = SimClock::default();
        let mut board = MockBoard::new();
        let mut sink = RecordingSink::default();
        let mut app =
            ControlService::new(config, board.level, clock.now()).expect("valid config");
        app.start(&mut board, &mut sink);
        Self {
            app,
            board,
            sink,
            clock,
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now().as_millis()
    }

    /// One control-loop iteration, 1 ms after the previous one.
    pub fn step(&mut self) -> ClassifierOutput {
        self.clock.advance(1);
        self.app.tick(&mut self.board, self.clock.now(), &mut self.sink)
    }

    pub fn run_for(&mut self, ms: u64) {
        for _ in 0..ms {
            self.step();
        }
    }

    /// Hold the button for `hold_ms`, then release and let it settle.
    pub fn press(&mut self, hold_ms: u64) {
        self.board.level = PRESSED;
        self.run_for(hold_ms);
        self.board.level = RELEASED;
        self.run_for(SETTLE_MS);
    }

    pub fn short_press(&mut self) {
        self.press(200);
    }

    pub fn long_press(&mut self) {
        self.press(3200);
    }
}

impl Default for Rig {
    fn default() -> Self {
        Self::new()
    }
}
