//! pushdim firmware library.
//!
//! A single push-button drives a dimmable, blinking indicator: the
//! [`drivers::button`] classifier turns bouncy samples into short and
//! long presses, and the [`fsm`] mode machine turns presses into output
//! levels.  [`app::service::ControlService`] runs both once per loop
//! iteration.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod fsm;
pub mod pins;
pub mod time;

pub mod adapters;
pub mod drivers;
