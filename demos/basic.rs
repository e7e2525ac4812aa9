use embedded_hal::blocking::delay::DelayMs;
use embedded_teleop::{
    Ball, BallSensor, Buttons, Config, Encoder, Joystick, Motor, Motors, Switch, Teleop,
};
use embedded_time::{clock, rate::Fraction, Clock, Instant};
use nalgebra::Vector3;

struct ExampleMotor(pub u8);

impl Motor for ExampleMotor {
    fn set_power(&mut self, power: i16) {
        println!("motor {} -> {}", self.0, power);
    }
}

struct ExampleJoystick;

impl Joystick for ExampleJoystick {
    fn axes(&mut self) -> Vector3<i16> {
        // Pretend the operator is pushing straight forward.
        Vector3::new(0, 100, 0)
    }

    fn buttons(&mut self) -> Buttons {
        Buttons::default()
    }
}

struct ExampleSwitch;

impl Switch for ExampleSwitch {
    fn is_active(&mut self) -> bool {
        false
    }
}

struct ExampleEncoder;

impl Encoder for ExampleEncoder {
    fn angle(&mut self) -> i32 {
        0
    }

    fn reset(&mut self) {}
}

struct ExampleBallSensor;

impl BallSensor for ExampleBallSensor {
    fn read(&mut self) -> Option<Ball> {
        None
    }
}

struct ExampleClock(std::time::Instant);

impl Clock for ExampleClock {
    type T = u32;

    const SCALING_FACTOR: Fraction = Fraction::new(1, 1000);

    fn try_now(&self) -> Result<Instant<Self>, clock::Error> {
        Ok(Instant::new(self.0.elapsed().as_millis() as u32))
    }
}

struct ExampleDelay;

impl DelayMs<u16> for ExampleDelay {
    fn delay_ms(&mut self, ms: u16) {
        std::thread::sleep(std::time::Duration::from_millis(ms.into()));
    }
}

fn main() {
    let motors = Motors {
        front_left: ExampleMotor(2),
        front_right: ExampleMotor(7),
        back_left: ExampleMotor(3),
        back_right: ExampleMotor(8),
        pickup: ExampleMotor(1),
        shooter: ExampleMotor(4),
        ramp: ExampleMotor(5),
        lift: ExampleMotor(6),
        sorter: ExampleMotor(9),
        sort_mixer: ExampleMotor(10),
    };

    let mut teleop = Teleop::new(
        ExampleJoystick,
        ExampleClock(std::time::Instant::now()),
        ExampleDelay,
        motors,
        (ExampleSwitch, ExampleSwitch),
        ExampleEncoder,
        ExampleBallSensor,
        Config::default(),
    );

    // A real firmware task would call `teleop.run()` and never return.
    for _ in 0..10 {
        teleop.cycle().unwrap();
        ExampleDelay.delay_ms(20);
    }
}
