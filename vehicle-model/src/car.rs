//! Car: a [`Vehicle`] plus engine/motion state and the operations that drive it.
//!
//! Every operation is infallible. Asking a car to do something its state
//! does not allow (driving before starting, accelerating while parked) is a
//! no-op that emits a rejection [`Notice`] instead of returning an error.

use crate::notice::{Notice, NoticeSink, TracingSink};
use crate::operation::Operation;
use crate::state::{CarState, CarStatus};
use crate::vehicle::{Named, SpeedLimited, Vehicle};

/// Amount a single accelerate/decelerate changes the speed by.
pub const SPEED_STEP: i32 = 10;

/// A car with an injected notice sink.
///
/// Invariants maintained by the operations:
/// - `driving` implies `started`
/// - `speed > 0` implies `driving`
/// - `speed` starts at 0 and only moves in steps of [`SPEED_STEP`], saturating
///   at `i32::MAX` and never dropping below 0
#[derive(Debug)]
pub struct Car<S: NoticeSink = TracingSink> {
    vehicle: Vehicle,
    started: bool,
    driving: bool,
    speed: i32,
    sink: S,
}

impl Car {
    /// Create a stopped car that logs its notices through `tracing`.
    pub fn new(name: impl Into<String>, max_speed: i32) -> Self {
        Self::with_sink(name, max_speed, TracingSink)
    }
}

impl<S: NoticeSink> Car<S> {
    /// Create a stopped car that reports its notices to `sink`.
    pub fn with_sink(name: impl Into<String>, max_speed: i32, sink: S) -> Self {
        Self {
            vehicle: Vehicle::new(name, max_speed),
            started: false,
            driving: false,
            speed: 0,
            sink,
        }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn name(&self) -> &str {
        self.vehicle.name()
    }

    /// Replace the car's name. Always succeeds.
    pub fn change_name(&mut self, new_name: impl Into<String>) {
        let new_name = new_name.into();
        let notice = Notice::Renamed {
            from: self.vehicle.name().to_string(),
            to: new_name.clone(),
        };
        self.vehicle.set_name(new_name);
        self.emit(notice);
    }

    pub fn max_speed(&self) -> i32 {
        self.vehicle.max_speed()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_driving(&self) -> bool {
        self.driving
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn state(&self) -> CarState {
        CarState::from_flags(self.started, self.driving)
    }

    pub fn status(&self) -> CarStatus {
        CarStatus {
            name: self.name().to_string(),
            max_speed: self.max_speed(),
            started: self.started,
            driving: self.driving,
            speed: self.speed,
            state: self.state(),
        }
    }

    /// Start the engine. Starting a running car changes nothing.
    pub fn start(&mut self) {
        self.started = true;
        self.emit(Notice::Started);
    }

    /// Stop the engine and reset all motion state, whatever it was.
    pub fn stop(&mut self) {
        self.speed = 0;
        self.started = false;
        self.driving = false;
        self.emit(Notice::Stopped);
    }

    /// Begin driving. Refused unless the engine is running.
    pub fn drive(&mut self) {
        if self.started {
            self.driving = true;
            self.emit(Notice::Driving);
        } else {
            self.emit(Notice::NotStarted);
        }
    }

    /// Raise the speed by one step while driving.
    ///
    /// The ceiling is checked before stepping, so a `max_speed` that is not a
    /// multiple of [`SPEED_STEP`] can be overshot by less than one step.
    pub fn accelerate(&mut self) {
        if !(self.started && self.driving) {
            self.emit(Notice::CannotAccelerate);
            return;
        }

        if self.speed < self.max_speed() {
            self.speed = self.speed.saturating_add(SPEED_STEP);
            self.emit(Notice::Accelerating { speed: self.speed });
        } else {
            self.emit(Notice::MaxSpeedReached {
                max_speed: self.max_speed(),
            });
        }
    }

    /// Lower the speed by one step while driving.
    pub fn decelerate(&mut self) {
        if !(self.started && self.driving) {
            self.emit(Notice::CannotDecelerate);
            return;
        }

        if self.speed > 0 {
            self.speed = self.speed.saturating_sub(SPEED_STEP).max(0);
            self.emit(Notice::Decelerating { speed: self.speed });
        } else {
            self.emit(Notice::AlreadyStopped);
        }
    }

    /// Run one operation.
    pub fn apply(&mut self, op: &Operation) {
        match op {
            Operation::Start => self.start(),
            Operation::Stop => self.stop(),
            Operation::Drive => self.drive(),
            Operation::Accelerate => self.accelerate(),
            Operation::Decelerate => self.decelerate(),
            Operation::ChangeName(name) => self.change_name(name.as_str()),
        }
    }

    fn emit(&self, notice: Notice) {
        self.sink.notify(self.vehicle.name(), &notice);
    }
}

impl<S: NoticeSink> Named for Car<S> {
    fn change_name(&mut self, new_name: String) {
        Car::change_name(self, new_name)
    }

    fn name(&self) -> &str {
        Car::name(self)
    }
}

impl<S: NoticeSink> SpeedLimited for Car<S> {
    fn max_speed(&self) -> i32 {
        Car::max_speed(self)
    }
}

impl<S: NoticeSink> AsRef<Vehicle> for Car<S> {
    fn as_ref(&self) -> &Vehicle {
        &self.vehicle
    }
}
