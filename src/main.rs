//! pushdim firmware — main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  HardwareAdapter        LogEventSink        SystemClock      │
//! │  (Input + Output)       (EventSink)         (ClockPort)      │
//! │                                                              │
//! │  ─────────────────── Port Trait Boundary ──────────────────  │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │            ControlService (pure logic)                 │  │
//! │  │  PressClassifier · ModeStateMachine                    │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! │                                                              │
//! │  Cooperative loop: tick → FreeRtos::delay_ms(poll interval)  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use esp_idf_hal::delay::FreeRtos;
use log::{info, warn};

use pushdim::adapters::hardware::HardwareAdapter;
use pushdim::adapters::log_sink::LogEventSink;
use pushdim::adapters::time::SystemClock;
use pushdim::app::ports::{ClockPort, InputPort};
use pushdim::app::service::ControlService;
use pushdim::config::ControlConfig;
use pushdim::drivers::hw_init;
use pushdim::drivers::indicator::IndicatorDriver;
use pushdim::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("pushdim v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration (compile-time defaults) ──────────────
    let config = ControlConfig::default();
    config.validate().context("built-in control configuration")?;

    // ── 3. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals().context("peripheral init")?;

    let clock = SystemClock::new();
    let mut hw = HardwareAdapter::new(pins::BUTTON_GPIO, IndicatorDriver::new(config.output_max));
    let mut log_sink = LogEventSink::new();

    // ── 4. Control service ────────────────────────────────────
    let initial_level = hw.read_level().unwrap_or_else(|e| {
        warn!("Initial button read failed ({}), assuming released", e);
        true
    });
    let mut app = ControlService::new(&config, initial_level, clock.now())?;
    app.start(&mut hw, &mut log_sink);

    info!(
        "System ready. Entering control loop ({} ms cadence).",
        config.poll_interval_ms
    );

    // ── 5. Control loop ───────────────────────────────────────
    loop {
        app.tick(&mut hw, clock.now(), &mut log_sink);
        FreeRtos::delay_ms(config.poll_interval_ms);
    }
}
