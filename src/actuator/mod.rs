//! Per-mechanism actuator policies.
//!
//! Each actuator owns its motor and issues at most one command per control
//! cycle. The policies differ in what happens on idle input: a
//! [`LimitedActuator`] always resolves to an explicit command, a [`BangBang`]
//! follows its [`Idle`] policy, and a [`ToggleActuator`] issues nothing at
//! all while its trigger is released.

pub mod bang_bang;
pub use bang_bang::{BangBang, Idle};

pub mod limited;
pub use limited::{LimitedActuator, Limits};

pub mod toggle;
pub use toggle::ToggleActuator;
