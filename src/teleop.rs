//! Loop composition: one [`Teleop`] value owns every component and runs the
//! whole control cycle.

use embedded_hal::blocking::delay::DelayMs;
use embedded_time::{clock, duration::Milliseconds, Clock, ConversionError};

use crate::actuator::{BangBang, Idle, LimitedActuator, ToggleActuator};
use crate::drive::HolonomicDrive;
use crate::hal::{BallSensor, Encoder, Joystick, Motor, Switch};
use crate::sorter::Sorter;

/// A teleoperation error caused by clock timing.
#[derive(Debug)]
pub enum Error {
    Clock(clock::Error),
    Time(ConversionError),
}

impl From<clock::Error> for Error {
    fn from(clock_error: clock::Error) -> Self {
        Error::Clock(clock_error)
    }
}

impl From<ConversionError> for Error {
    fn from(time_error: ConversionError) -> Self {
        Error::Time(time_error)
    }
}

/// Every tunable in one place. The defaults match the robot this library
/// was written for; power values are nominal signed duty in `-127..=127`.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Minimum axis magnitude before the drive mixer engages.
    pub dead_zone: i16,
    /// Delay between control cycles.
    pub cycle_ms: u16,
    /// Pickup toggle debounce window.
    pub debounce_ms: u32,
    pub pickup_power: i16,
    pub shooter_power: i16,
    pub ramp_power: i16,
    pub lift_power: i16,
    /// Carousel power while a sort cycle runs.
    pub sort_power: i16,
    /// Auxiliary mixer power while a sort cycle runs.
    pub sort_mixer_power: i16,
    /// Encoder travel before a sort cycle completes.
    pub sort_exit_degrees: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dead_zone: 50,
            cycle_ms: 20,
            debounce_ms: 100,
            pickup_power: 127,
            shooter_power: 127,
            ramp_power: 127,
            lift_power: 127,
            sort_power: 20,
            sort_mixer_power: 64,
            sort_exit_degrees: 90,
        }
    }
}

/// The robot's motor channels, in one struct so [`Teleop::new`] stays
/// readable at the call site.
pub struct Motors<M> {
    pub front_left: M,
    pub front_right: M,
    pub back_left: M,
    pub back_right: M,
    pub pickup: M,
    pub shooter: M,
    pub ramp: M,
    pub lift: M,
    pub sorter: M,
    pub sort_mixer: M,
}

/// The teleoperation control loop.
///
/// Single-threaded and cooperative: [`cycle`](Teleop::cycle) runs one
/// iteration to completion and the delay in [`run`](Teleop::run) is the only
/// suspension point. All persistent state lives inside this value and is
/// dropped with it; re-creating the loop after a disable restarts every
/// component from its defaults.
pub struct Teleop<J, C, D, M, S, E, B> {
    joystick: J,
    clock: C,
    delay: D,
    cycle_ms: u16,
    pub drive: HolonomicDrive<M>,
    pub pickup: ToggleActuator<M>,
    pub shooter: BangBang<M>,
    pub ramp: BangBang<M>,
    pub lift: LimitedActuator<M, S>,
    pub sorter: Sorter<M, E, B>,
}

impl<J, C, D, M, S, E, B> Teleop<J, C, D, M, S, E, B>
where
    J: Joystick,
    C: Clock<T = u32>,
    D: DelayMs<u16>,
    M: Motor,
    S: Switch,
    E: Encoder,
    B: BallSensor,
{
    /// Wire up every component from the robot's channels and a [`Config`].
    ///
    /// `lift_limits` is `(upper, lower)`.
    pub fn new(
        joystick: J,
        clock: C,
        delay: D,
        motors: Motors<M>,
        lift_limits: (S, S),
        sort_encoder: E,
        ball_sensor: B,
        config: Config,
    ) -> Self {
        let (upper, lower) = lift_limits;

        Self {
            joystick,
            clock,
            delay,
            cycle_ms: config.cycle_ms,
            drive: HolonomicDrive::new(
                motors.front_left,
                motors.front_right,
                motors.back_left,
                motors.back_right,
                config.dead_zone,
            ),
            pickup: ToggleActuator::new(
                motors.pickup,
                config.pickup_power,
                Milliseconds(config.debounce_ms),
            ),
            // The shooter has no reverse button and holds its last command
            // when the trigger is released.
            shooter: BangBang::new(motors.shooter, config.shooter_power, 0, Idle::HoldLast),
            ramp: BangBang::new(motors.ramp, config.ramp_power, -config.ramp_power, Idle::Stop),
            lift: LimitedActuator::new(motors.lift, upper, lower, config.lift_power),
            sorter: Sorter::new(
                motors.sorter,
                motors.sort_mixer,
                sort_encoder,
                ball_sensor,
                config.sort_power,
                config.sort_mixer_power,
                config.sort_exit_degrees,
            ),
        }
    }

    /// Run one control iteration: sample the joystick once, then command
    /// each mechanism in a fixed order.
    pub fn cycle(&mut self) -> Result<(), Error> {
        let now = self.millis()?;
        let axes = self.joystick.axes();
        let buttons = self.joystick.buttons();

        self.drive.update(axes);
        self.pickup.update(buttons.pickup, now);
        self.shooter.update(buttons.shoot, false);
        self.ramp.update(buttons.ramp_up, buttons.ramp_down);
        self.lift.update(buttons.lift_up, buttons.lift_down);
        self.sorter.update(buttons.sort_left, buttons.sort_right);

        Ok(())
    }

    /// Run cycles forever at the configured period.
    ///
    /// This never returns in normal operation; the platform tears the task
    /// down externally on disable or lost communication. The only error path
    /// is a failing clock.
    pub fn run(&mut self) -> Result<(), Error> {
        loop {
            self.cycle()?;
            self.delay.delay_ms(self.cycle_ms);
        }
    }

    fn millis(&mut self) -> Result<Milliseconds<u32>, Error> {
        let instant = self.clock.try_now()?;
        Milliseconds::try_from(instant.duration_since_epoch()).map_err(Into::into)
    }
}
