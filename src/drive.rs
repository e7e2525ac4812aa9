//! Four-wheel holonomic drive mixing.

use nalgebra::{Vector3, Vector4};

use crate::hal::Motor;

/// Mix the `(strafe, forward, rotate)` axes into wheel powers ordered
/// `(front_left, front_right, back_left, back_right)`.
///
/// The mix is the fixed linear combination for an X-mounted omni drivetrain;
/// outputs can reach about three times a single axis and are issued
/// unclamped.
pub fn mix(axes: Vector3<i16>) -> Vector4<i16> {
    let (strafe, forward, rotate) = (axes.x, axes.y, axes.z);

    Vector4::new(
        -forward - strafe + rotate,
        -forward + strafe + rotate,
        -forward - strafe - rotate,
        -forward + strafe - rotate,
    )
}

/// A four-wheel holonomic drivetrain commanded as a unit.
pub struct HolonomicDrive<M> {
    pub front_left: M,
    pub front_right: M,
    pub back_left: M,
    pub back_right: M,
    dead_zone: i16,
}

impl<M: Motor> HolonomicDrive<M> {
    pub fn new(front_left: M, front_right: M, back_left: M, back_right: M, dead_zone: i16) -> Self {
        Self {
            front_left,
            front_right,
            back_left,
            back_right,
            dead_zone,
        }
    }

    /// Run one drive cycle from the current axis sample.
    ///
    /// Any single axis past the dead zone engages the mixer; otherwise every
    /// wheel is stopped.
    pub fn update(&mut self, axes: Vector3<i16>) {
        if axes.iter().any(|a| a.abs() > self.dead_zone) {
            let power = mix(axes);
            self.front_left.set_power(power.x);
            self.front_right.set_power(power.y);
            self.back_left.set_power(power.z);
            self.back_right.set_power(power.w);
        } else {
            self.stop();
        }
    }

    /// Stop all four drive motors.
    pub fn stop(&mut self) {
        self.front_left.stop();
        self.front_right.stop();
        self.back_left.stop();
        self.back_right.stop();
    }
}
