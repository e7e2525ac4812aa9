//! # embedded-teleop
//! A `#![no_std]` teleoperation library for embedded rust
//!
//! Once per control cycle the loop samples the operator's joystick, mixes the
//! drive axes into four holonomic wheel powers, and runs each mechanism
//! actuator in a fixed order. The only persistent state is a handful of small
//! mode flags (pickup toggle, sorter direction, debounce timestamps) owned by
//! the loop itself; all hardware is reached through the narrow traits in
//! [`hal`].
//!
//! # Generic components
//! [`hal`] contains the hardware abstraction layer.
//!
//! [`drive`] contains the holonomic drive mixer.
//!
//! [`actuator`] contains the per-mechanism actuator policies.
//!
//! [`sorter`] contains the exclusive dual-direction ball sorter.
//!
//! # Running the loop
//! Create and run a [`Teleop`] from a joystick, clock, delay, and the robot's
//! motor and sensor channels:
//! ```ignore
//! use embedded_teleop::{Config, Motors, Teleop};
//!
//! let motors = Motors {
//!     front_left: MotorChannel(2),
//!     front_right: MotorChannel(7),
//!     back_left: MotorChannel(3),
//!     back_right: MotorChannel(8),
//!     pickup: MotorChannel(1),
//!     shooter: MotorChannel(4),
//!     ramp: MotorChannel(5),
//!     lift: MotorChannel(6),
//!     sorter: MotorChannel(9),
//!     sort_mixer: MotorChannel(10),
//! };
//!
//! let mut teleop = Teleop::new(
//!     joystick,
//!     clock,
//!     delay,
//!     motors,
//!     (lift_upper_switch, lift_lower_switch),
//!     sort_encoder,
//!     ball_sensor,
//!     Config::default(),
//! );
//!
//! // Loops forever; the platform tears the task down on disable.
//! teleop.run()?;
//! ```

#![no_std]

pub mod actuator;
pub use actuator::{BangBang, Idle, LimitedActuator, ToggleActuator};

pub mod drive;
pub use drive::HolonomicDrive;

pub mod hal;
pub use hal::{Ball, BallSensor, Buttons, Encoder, Joystick, Motor, Switch};

pub mod sorter;
pub use sorter::{SortMode, Sorter};

pub mod teleop;
pub use teleop::{Config, Motors, Teleop};
