use embedded_time::duration::Milliseconds;

use crate::hal::Motor;

/// Debounced on/off toggle for a single motor, evaluated only while its
/// trigger button is held.
pub struct ToggleActuator<M> {
    motor: M,
    power: i16,
    debounce: Milliseconds<u32>,
    active: bool,
    last_toggle: Milliseconds<u32>,
}

impl<M: Motor> ToggleActuator<M> {
    pub fn new(motor: M, power: i16, debounce: Milliseconds<u32>) -> Self {
        Self {
            motor,
            power,
            debounce,
            active: false,
            last_toggle: Milliseconds(0),
        }
    }

    /// Whether the toggle is currently latched on.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Run one cycle.
    ///
    /// While the trigger is held the toggle flips at most once per debounce
    /// window, then the motor is commanded to match: on at the configured
    /// power, off otherwise. Holding past one window flips again; this is an
    /// at-most-once-per-window latch, not edge detection.
    ///
    /// While the trigger is released nothing is issued for this channel, so
    /// the driver keeps its last command and a toggled-on mechanism keeps
    /// running with the button released.
    pub fn update(&mut self, held: bool, now: Milliseconds<u32>) {
        if !held {
            return;
        }

        if now.0 - self.last_toggle.0 > self.debounce.0 {
            self.active = !self.active;
            self.last_toggle = now;
        }

        if self.active {
            self.motor.set_power(self.power);
        } else {
            self.motor.stop();
        }
    }
}
