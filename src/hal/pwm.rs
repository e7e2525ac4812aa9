use embedded_hal::PwmPin;
use num_traits::{Float, FromPrimitive};

use super::Motor;

/// Drives a PWM pin as a signed-power [`Motor`].
///
/// Signed power in `-127..=127` is scaled linearly into the pin's
/// `min..=max` duty range, with zero power landing on the midpoint. Inputs
/// outside the nominal range are clamped here because the pin has a hard
/// duty ceiling, unlike the integer motor drivers the control layer
/// normally talks to.
pub struct PwmMotor<P: PwmPin> {
    min: P::Duty,
    max: P::Duty,
    pin: P,
}

impl<P> PwmMotor<P>
where
    P: PwmPin,
    P::Duty: Float,
{
    pub fn new(min: P::Duty, max: P::Duty, pin: P) -> Self {
        Self { min, max, pin }
    }

    pub fn enable(&mut self) {
        self.pin.enable();
    }

    pub fn disable(&mut self) {
        self.pin.disable();
    }
}

impl<P> Motor for PwmMotor<P>
where
    P: PwmPin,
    P::Duty: Float + FromPrimitive,
{
    fn set_power(&mut self, power: i16) {
        let offset = P::Duty::from_i16(power.clamp(-127, 127) + 127).unwrap();
        let span = P::Duty::from_u8(254).unwrap();
        let duty = self.min + (self.max - self.min) * offset / span;
        self.pin.set_duty(duty);
    }
}
