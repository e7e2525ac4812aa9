use crate::hal::Motor;

/// What a [`BangBang`] actuator does when neither button is held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Idle {
    /// Issue an explicit stop.
    Stop,
    /// Issue nothing, leaving the driver's previous command in effect.
    HoldLast,
}

/// Two-button, three-state motor driver with no feedback.
///
/// The shooter runs with `Idle::HoldLast` and its reverse input wired false:
/// once fired it keeps spinning until some other command reaches the
/// channel. The ramp runs with `Idle::Stop` and stops the moment both
/// buttons are released.
pub struct BangBang<M> {
    motor: M,
    forward_power: i16,
    reverse_power: i16,
    idle: Idle,
}

impl<M: Motor> BangBang<M> {
    pub fn new(motor: M, forward_power: i16, reverse_power: i16, idle: Idle) -> Self {
        Self {
            motor,
            forward_power,
            reverse_power,
            idle,
        }
    }

    /// Run one cycle. Forward wins when both buttons are held.
    pub fn update(&mut self, forward: bool, reverse: bool) {
        if forward {
            self.motor.set_power(self.forward_power);
        } else if reverse {
            self.motor.set_power(self.reverse_power);
        } else if self.idle == Idle::Stop {
            self.motor.stop();
        }
    }
}
