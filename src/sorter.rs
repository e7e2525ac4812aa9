//! Exclusive dual-direction ball sorter.

use log::{debug, warn};

use crate::hal::{Ball, BallSensor, Encoder, Motor};

/// Cycles a sort mode may run before the stuck-encoder warning repeats.
/// 250 cycles is five seconds at the default 20 ms period; a real sort
/// finishes in well under one second.
const STUCK_WARN_CYCLES: u32 = 250;

/// Direction a sort cycle moves the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortMode {
    Friendly,
    Enemy,
}

/// Latched sorter state machine driving the carousel motor plus an
/// auxiliary mixer motor toward an encoder-angle target.
///
/// At most one mode is ever active; `Option<SortMode>` makes the mutual
/// exclusion structural. A mode is entered by a manual button or by the
/// external classifier, but only while the opposite mode is idle. Once
/// running, a mode re-asserts its motor commands every cycle and goes to
/// completion regardless of later inputs: the same-mode guard merely
/// re-latches a mode that is already set, and the opposite-mode guard stays
/// blocked.
///
/// Completion stops both motors, resets the encoder, and returns to idle.
/// The friendly exit fires at an angle strictly above `+exit_degrees`, the
/// enemy exit strictly below `-exit_degrees`; the at-threshold sample still
/// runs in both directions. An encoder that never crosses the threshold
/// leaves the mode running indefinitely; that surfaces as a periodic
/// warning, never an error.
pub struct Sorter<M, E, B> {
    motor: M,
    mixer: M,
    encoder: E,
    sensor: B,
    power: i16,
    mixer_power: i16,
    exit_degrees: i32,
    mode: Option<SortMode>,
    cycles_in_mode: u32,
}

impl<M, E, B> Sorter<M, E, B>
where
    M: Motor,
    E: Encoder,
    B: BallSensor,
{
    pub fn new(
        motor: M,
        mixer: M,
        encoder: E,
        sensor: B,
        power: i16,
        mixer_power: i16,
        exit_degrees: i32,
    ) -> Self {
        Self {
            motor,
            mixer,
            encoder,
            sensor,
            power,
            mixer_power,
            exit_degrees,
            mode: None,
            cycles_in_mode: 0,
        }
    }

    /// The currently latched mode, if any.
    pub fn mode(&self) -> Option<SortMode> {
        self.mode
    }

    /// Run one cycle: latch a new mode from the manual buttons or the
    /// classifier, then drive or complete the active mode.
    pub fn update(&mut self, manual_friendly: bool, manual_enemy: bool) {
        let seen = self.sensor.read();

        if (manual_friendly || seen == Some(Ball::Friendly)) && self.mode != Some(SortMode::Enemy) {
            if self.mode.is_none() {
                debug!("sorter: friendly cycle start");
            }
            self.mode = Some(SortMode::Friendly);
        }
        if (manual_enemy || seen == Some(Ball::Enemy)) && self.mode != Some(SortMode::Friendly) {
            if self.mode.is_none() {
                debug!("sorter: enemy cycle start");
            }
            self.mode = Some(SortMode::Enemy);
        }

        match self.mode {
            Some(SortMode::Friendly) => {
                if self.encoder.angle() > self.exit_degrees {
                    self.finish();
                } else {
                    self.drive(self.power);
                }
            }
            Some(SortMode::Enemy) => {
                if self.encoder.angle() < -self.exit_degrees {
                    self.finish();
                } else {
                    self.drive(-self.power);
                }
            }
            None => {}
        }
    }

    fn drive(&mut self, power: i16) {
        self.motor.set_power(power);
        self.mixer.set_power(self.mixer_power);

        self.cycles_in_mode += 1;
        if self.cycles_in_mode % STUCK_WARN_CYCLES == 0 {
            warn!(
                "sorter: no exit after {} cycles, encoder may be stuck",
                self.cycles_in_mode
            );
        }
    }

    fn finish(&mut self) {
        self.motor.stop();
        self.mixer.stop();
        self.encoder.reset();
        self.mode = None;
        self.cycles_in_mode = 0;
        debug!("sorter: cycle complete");
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use nanorand::{Rng, WyRand};

    use super::*;

    struct SharedMotor<'a> {
        power: &'a Cell<i16>,
        stopped: &'a Cell<bool>,
    }

    impl Motor for SharedMotor<'_> {
        fn set_power(&mut self, power: i16) {
            self.power.set(power);
            self.stopped.set(false);
        }

        fn stop(&mut self) {
            self.power.set(0);
            self.stopped.set(true);
        }
    }

    struct SharedEncoder<'a> {
        angle: &'a Cell<i32>,
        resets: &'a Cell<u32>,
    }

    impl Encoder for SharedEncoder<'_> {
        fn angle(&mut self) -> i32 {
            self.angle.get()
        }

        fn reset(&mut self) {
            self.angle.set(0);
            self.resets.set(self.resets.get() + 1);
        }
    }

    struct SharedSensor<'a>(&'a Cell<Option<Ball>>);

    impl BallSensor for SharedSensor<'_> {
        fn read(&mut self) -> Option<Ball> {
            self.0.get()
        }
    }

    #[derive(Default)]
    struct Rig {
        motor_power: Cell<i16>,
        motor_stopped: Cell<bool>,
        mixer_power: Cell<i16>,
        mixer_stopped: Cell<bool>,
        angle: Cell<i32>,
        resets: Cell<u32>,
        ball: Cell<Option<Ball>>,
    }

    impl Rig {
        fn sorter(&self) -> Sorter<SharedMotor<'_>, SharedEncoder<'_>, SharedSensor<'_>> {
            Sorter::new(
                SharedMotor {
                    power: &self.motor_power,
                    stopped: &self.motor_stopped,
                },
                SharedMotor {
                    power: &self.mixer_power,
                    stopped: &self.mixer_stopped,
                },
                SharedEncoder {
                    angle: &self.angle,
                    resets: &self.resets,
                },
                SharedSensor(&self.ball),
                20,
                64,
                90,
            )
        }
    }

    #[test]
    fn manual_friendly_drives_until_past_ninety() {
        let rig = Rig::default();
        let mut sorter = rig.sorter();

        sorter.update(true, false);
        assert_eq!(sorter.mode(), Some(SortMode::Friendly));
        assert_eq!(rig.motor_power.get(), 20);
        assert_eq!(rig.mixer_power.get(), 64);

        // Still short of the boundary: keep driving, flags unchanged.
        rig.angle.set(85);
        sorter.update(false, false);
        assert_eq!(sorter.mode(), Some(SortMode::Friendly));
        assert_eq!(rig.motor_power.get(), 20);

        // At the boundary it still runs; the exit is strict.
        rig.angle.set(90);
        sorter.update(false, false);
        assert_eq!(sorter.mode(), Some(SortMode::Friendly));

        rig.angle.set(91);
        sorter.update(false, false);
        assert_eq!(sorter.mode(), None);
        assert!(rig.motor_stopped.get());
        assert!(rig.mixer_stopped.get());
        assert_eq!(rig.resets.get(), 1);
        assert_eq!(rig.angle.get(), 0);
    }

    #[test]
    fn enemy_exit_mirrors_below_minus_ninety() {
        let rig = Rig::default();
        let mut sorter = rig.sorter();

        sorter.update(false, true);
        assert_eq!(sorter.mode(), Some(SortMode::Enemy));
        assert_eq!(rig.motor_power.get(), -20);

        rig.angle.set(-90);
        sorter.update(false, false);
        assert_eq!(sorter.mode(), Some(SortMode::Enemy));

        rig.angle.set(-91);
        sorter.update(false, false);
        assert_eq!(sorter.mode(), None);
        assert!(rig.motor_stopped.get());
        assert_eq!(rig.resets.get(), 1);
    }

    #[test]
    fn classifier_latches_a_mode_without_buttons() {
        let rig = Rig::default();
        let mut sorter = rig.sorter();

        rig.ball.set(Some(Ball::Enemy));
        sorter.update(false, false);

        assert_eq!(sorter.mode(), Some(SortMode::Enemy));
        assert_eq!(rig.motor_power.get(), -20);
    }

    #[test]
    fn active_mode_blocks_the_opposite_entry() {
        let rig = Rig::default();
        let mut sorter = rig.sorter();

        sorter.update(true, false);
        assert_eq!(sorter.mode(), Some(SortMode::Friendly));

        // Manual and classifier enemy triggers are both ignored mid-cycle.
        rig.ball.set(Some(Ball::Enemy));
        sorter.update(false, true);
        assert_eq!(sorter.mode(), Some(SortMode::Friendly));
        assert_eq!(rig.motor_power.get(), 20);
    }

    #[test]
    fn friendly_round_trip_resets_exactly_once() {
        let rig = Rig::default();
        let mut sorter = rig.sorter();

        sorter.update(true, false);
        for angle in [20, 45, 70, 89] {
            rig.angle.set(angle);
            sorter.update(false, false);
            assert_eq!(sorter.mode(), Some(SortMode::Friendly));
        }

        rig.angle.set(95);
        sorter.update(false, false);
        sorter.update(false, false);
        sorter.update(false, false);

        assert_eq!(sorter.mode(), None);
        assert_eq!(rig.resets.get(), 1);
        assert!(rig.motor_stopped.get());
        assert!(rig.mixer_stopped.get());
    }

    #[test]
    fn modes_never_swap_without_passing_through_idle() {
        let rig = Rig::default();
        let mut sorter = rig.sorter();
        let mut rng = WyRand::new_seed(0x5EED);
        let mut last_mode = None;

        for _ in 0..10_000 {
            let bits = rng.generate::<u8>();
            rig.ball.set(match bits >> 6 {
                0 => Some(Ball::Friendly),
                1 => Some(Ball::Enemy),
                _ => None,
            });

            sorter.update(bits & 1 != 0, bits & 2 != 0);

            let mode = sorter.mode();
            if let (Some(last), Some(now)) = (last_mode, mode) {
                assert_eq!(last, now, "direction changed without completing");
            }
            last_mode = mode;

            // The carousel tracks whatever the motor was last told.
            match mode {
                Some(SortMode::Friendly) => {
                    rig.angle.set(rig.angle.get() + (bits >> 3 & 0b111) as i32 * 6);
                }
                Some(SortMode::Enemy) => {
                    rig.angle.set(rig.angle.get() - (bits >> 3 & 0b111) as i32 * 6);
                }
                None => {}
            }
        }
    }
}
