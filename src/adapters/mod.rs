//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements              | Connects to                    |
//! |------------|-------------------------|--------------------------------|
//! | `hal`      | InputPort, OutputPort   | any embedded-hal 1.0 pin / PWM |
//! | `hardware` | InputPort, OutputPort   | ESP32 GPIO, LEDC               |
//! | `log_sink` | EventSink               | Serial log output              |
//! | `time`     | ClockPort               | ESP32 system timer             |

pub mod hal;
pub mod hardware;
pub mod log_sink;
pub mod time;
