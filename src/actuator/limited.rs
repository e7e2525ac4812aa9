use crate::hal::{Motor, Switch};

/// Travel-limit snapshot, recomputed from the switches every cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub at_max: bool,
    pub at_min: bool,
}

/// Three-state actuator whose travel limits veto motion.
///
/// Unlike [`BangBang`](crate::actuator::BangBang), a limited actuator
/// resolves to exactly one explicit command every cycle: the stop branch
/// covers released buttons, conflicting buttons, and a limit vetoing the
/// requested direction.
pub struct LimitedActuator<M, S> {
    motor: M,
    upper: S,
    lower: S,
    power: i16,
}

impl<M: Motor, S: Switch> LimitedActuator<M, S> {
    pub fn new(motor: M, upper: S, lower: S, power: i16) -> Self {
        Self {
            motor,
            upper,
            lower,
            power,
        }
    }

    /// Read the limit switches as they stand this cycle.
    pub fn limits(&mut self) -> Limits {
        Limits {
            at_max: self.upper.is_active(),
            at_min: self.lower.is_active(),
        }
    }

    /// Run one cycle: up drives forward unless at the upper limit, down
    /// drives reverse unless at the lower limit, anything else stops.
    pub fn update(&mut self, up: bool, down: bool) {
        let limits = self.limits();

        if up && !limits.at_max {
            self.motor.set_power(self.power);
        } else if down && !limits.at_min {
            self.motor.set_power(-self.power);
        } else {
            self.motor.stop();
        }
    }
}
