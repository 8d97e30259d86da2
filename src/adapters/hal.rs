//! embedded-hal adapters.
//!
//! Implements the input and output ports over the `embedded-hal` 1.0
//! [`InputPin`] and [`SetDutyCycle`] traits, so the control core runs on
//! any HAL that provides them (esp-idf-hal `PinDriver`/`LedcDriver`,
//! rp2040-hal, stm32 HALs, ...).  HAL error types are opaque to the core
//! and collapse into the port error variants.

use embedded_hal::digital::InputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::app::ports::{InputPort, OutputPort};
use crate::error::{InputError, OutputError};

/// Button input over any [`InputPin`].
pub struct HalButton<P> {
    pin: P,
}

impl<P: InputPin> HalButton<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> InputPort for HalButton<P> {
    fn read_level(&mut self) -> Result<bool, InputError> {
        self.pin.is_high().map_err(|_| InputError::GpioReadFailed)
    }
}

/// Indicator output over any [`SetDutyCycle`] channel.
///
/// Levels in `0..=output_max` map linearly onto the channel's duty range.
pub struct HalIndicator<P> {
    pwm: P,
    output_max: u16,
}

impl<P: SetDutyCycle> HalIndicator<P> {
    pub fn new(pwm: P, output_max: u16) -> Self {
        Self {
            pwm,
            output_max: output_max.max(1),
        }
    }
}

impl<P: SetDutyCycle> OutputPort for HalIndicator<P> {
    fn set_level(&mut self, level: u16) -> Result<(), OutputError> {
        let level = level.min(self.output_max);
        self.pwm
            .set_duty_cycle_fraction(level, self.output_max)
            .map_err(|_| OutputError::PwmWriteFailed)
    }
}

/// A button and an indicator bundled behind both ports, for
/// [`ControlService::tick`](crate::app::service::ControlService::tick).
pub struct HalHardware<B, L> {
    pub button: HalButton<B>,
    pub indicator: HalIndicator<L>,
}

impl<B: InputPin, L: SetDutyCycle> HalHardware<B, L> {
    pub fn new(button: B, indicator: L, output_max: u16) -> Self {
        Self {
            button: HalButton::new(button),
            indicator: HalIndicator::new(indicator, output_max),
        }
    }
}

impl<B: InputPin, L> InputPort for HalHardware<B, L> {
    fn read_level(&mut self) -> Result<bool, InputError> {
        self.button.read_level()
    }
}

impl<B, L: SetDutyCycle> OutputPort for HalHardware<B, L> {
    fn set_level(&mut self, level: u16) -> Result<(), OutputError> {
        self.indicator.set_level(level)
    }
}
