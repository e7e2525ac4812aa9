//! Hardware abstraction layer.
//!
//! The control loop reaches every external collaborator through these
//! traits: the joystick/input driver, the motor-power driver, the limit
//! switches, the sorter encoder, and the ball classifier. Firmware crates
//! implement them over the platform's device drivers; the tests implement
//! them over plain values.

use embedded_hal::digital::v2::InputPin;
use log::warn;
use nalgebra::Vector3;

pub mod pwm;
pub use pwm::PwmMotor;

/// A signed-power motor channel.
///
/// The driver retains the most recent command: a channel that receives no
/// command during a cycle keeps running at whatever it was last told. The
/// actuator policies rely on this for their hold-last-command branches.
pub trait Motor {
    /// Command the motor at a signed power, nominally in `-127..=127`.
    ///
    /// Values outside the nominal range are the driver's problem; the
    /// control layer never clamps.
    fn set_power(&mut self, power: i16);

    /// Stop the motor. Zero power unless the driver has a distinct stop.
    fn stop(&mut self) {
        self.set_power(0);
    }
}

impl<M: Motor> Motor for &mut M {
    fn set_power(&mut self, power: i16) {
        (&mut **self).set_power(power);
    }

    fn stop(&mut self) {
        (&mut **self).stop();
    }
}

/// A cumulative rotary encoder.
pub trait Encoder {
    /// Current angle in signed degrees, accumulated since the last reset.
    fn angle(&mut self) -> i32;

    /// Zero the angle counter.
    fn reset(&mut self);
}

/// A binary mechanism sensor, such as a travel limit switch.
pub trait Switch {
    fn is_active(&mut self) -> bool;
}

/// Adapts an active-low input pin to [`Switch`].
///
/// Limit switches are wired active-low: the switch is closed when the pin
/// reads low. A failed read counts as inactive.
pub struct ActiveLow<P>(pub P);

impl<P: InputPin> Switch for ActiveLow<P> {
    fn is_active(&mut self) -> bool {
        self.0.is_low().unwrap_or_else(|_| {
            warn!("limit switch read failed, treating as open");
            false
        })
    }
}

/// Digital button states sampled from the operator's joystick.
///
/// A fresh snapshot is taken every control cycle and never retained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Buttons {
    pub pickup: bool,
    pub shoot: bool,
    pub ramp_up: bool,
    pub ramp_down: bool,
    pub lift_up: bool,
    pub lift_down: bool,
    pub sort_left: bool,
    pub sort_right: bool,
}

/// The operator's input device.
pub trait Joystick {
    /// Drive axes as `(strafe, forward, rotate)`, each roughly `-127..=127`.
    fn axes(&mut self) -> Vector3<i16>;

    /// Button snapshot for this cycle.
    fn buttons(&mut self) -> Buttons;
}

/// Ball classification reported by the external sensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ball {
    Friendly,
    Enemy,
}

/// The external ball classifier feeding the sorter.
pub trait BallSensor {
    /// Classification of the ball currently seen, if any.
    fn read(&mut self) -> Option<Ball>;
}
