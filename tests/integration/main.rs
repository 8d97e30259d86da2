//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the control loop
//! against mock adapters.  All tests run on the host (x86_64) with no
//! real hardware required.

mod blink_timing_tests;
mod command_tests;
mod mock_hw;
mod mode_cycle_tests;
