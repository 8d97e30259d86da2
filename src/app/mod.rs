//! Application core — pure control logic, zero I/O.
//!
//! This module wires the press classifier to the indicator mode machine
//! and runs one iteration of the control loop per
//! [`ControlService::tick`](service::ControlService::tick).  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
