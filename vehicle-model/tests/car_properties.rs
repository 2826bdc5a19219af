//! Property tests for car operations over arbitrary inputs and operation sequences.

use proptest::prelude::*;
use vehicle_model::{
    state::validate_transition, Car, CarState, Operation, RecordingSink, SPEED_STEP,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Start),
        Just(Operation::Stop),
        Just(Operation::Drive),
        Just(Operation::Accelerate),
        Just(Operation::Decelerate),
        "[A-Za-z0-9 ]{1,12}".prop_map(Operation::ChangeName),
    ]
}

/// Any operation, including renames to arbitrary (possibly empty) names.
fn arb_any_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Start),
        Just(Operation::Stop),
        Just(Operation::Drive),
        Just(Operation::Accelerate),
        Just(Operation::Decelerate),
        any::<String>().prop_map(Operation::ChangeName),
    ]
}

/// Ceilings weighted toward the everyday range, with the i32 extremes mixed in.
fn arb_max_speed() -> impl Strategy<Value = i32> {
    prop_oneof![
        4 => -50i32..300,
        1 => Just(i32::MIN),
        1 => Just(i32::MAX),
        1 => (i32::MAX - SPEED_STEP)..=i32::MAX,
        1 => any::<i32>(),
    ]
}

fn arb_operations() -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(arb_operation(), 0..40)
}

fn run(max_speed: i32, ops: &[Operation]) -> (Car<RecordingSink>, Vec<CarState>) {
    let mut car = Car::with_sink("TestCar", max_speed, RecordingSink::new());
    let mut states = vec![car.state()];
    for op in ops {
        car.apply(op);
        states.push(car.state());
    }
    (car, states)
}

proptest! {
    /// The ceiling given at construction is the one read back.
    #[test]
    fn max_speed_round_trips(name in ".{0,16}", max_speed in any::<i32>()) {
        let car = Car::with_sink(name, max_speed, RecordingSink::new());
        prop_assert_eq!(car.max_speed(), max_speed);
    }

    /// Renaming then reading gives back exactly the new name.
    #[test]
    fn change_name_round_trips(original in ".{0,16}", renamed in ".{0,32}") {
        let mut car = Car::with_sink(original, 5, RecordingSink::new());
        car.change_name(renamed.clone());
        prop_assert_eq!(car.name(), renamed.as_str());
    }

    /// Stop resets motion state no matter what came before.
    #[test]
    fn stop_always_resets(max_speed in arb_max_speed(), ops in arb_operations()) {
        let (mut car, _) = run(max_speed, &ops);
        car.stop();
        prop_assert!(!car.is_started());
        prop_assert!(!car.is_driving());
        prop_assert_eq!(car.speed(), 0);
    }

    /// Invariants hold after every step, and every step is a legal transition.
    #[test]
    fn invariants_hold_after_every_step(max_speed in arb_max_speed(), ops in arb_operations()) {
        let mut car = Car::with_sink("TestCar", max_speed, RecordingSink::new());
        let mut previous = car.state();
        for op in &ops {
            car.apply(op);
            let status = car.status();
            prop_assert!(status.invariant_violations().is_empty(), "{:?}", status);
            prop_assert!(validate_transition(previous, status.state).is_ok());
            previous = status.state;
        }
    }

    /// Every operation reports exactly one notice.
    #[test]
    fn one_notice_per_operation(ops in arb_operations()) {
        let (car, _) = run(100, &ops);
        prop_assert_eq!(car.sink().len(), ops.len());
    }

    /// Accelerating below the ceiling while driving raises the speed by one step.
    #[test]
    fn accelerate_below_ceiling_increases(max_speed in arb_max_speed(), steps in 0usize..30) {
        let mut car = Car::with_sink("TestCar", max_speed, RecordingSink::new());
        car.start();
        car.drive();
        for _ in 0..steps {
            car.accelerate();
        }
        let before = car.speed();
        car.accelerate();
        if before < max_speed {
            prop_assert_eq!(car.speed(), before.saturating_add(SPEED_STEP));
        } else {
            prop_assert_eq!(car.speed(), before);
        }
    }

    /// Decelerating while moving lowers the speed by one step and never below zero.
    #[test]
    fn decelerate_while_moving_decreases(max_speed in 1i32..300, steps in 1usize..30) {
        let mut car = Car::with_sink("TestCar", max_speed, RecordingSink::new());
        car.start();
        car.drive();
        for _ in 0..steps {
            car.accelerate();
        }
        let before = car.speed();
        car.decelerate();
        prop_assert!(car.speed() < before);
        prop_assert!(car.speed() >= 0);
    }

    /// Writing an operation out and reading it back gives the same operation.
    #[test]
    fn operation_text_round_trips(op in arb_any_operation()) {
        prop_assert_eq!(op.to_string().parse::<Operation>().unwrap(), op.clone());

        let json = serde_json::to_string(&op).unwrap();
        prop_assert_eq!(serde_json::from_str::<Operation>(&json).unwrap(), op);
    }

    /// Snapshots of a fresh car are sound for every ceiling.
    #[test]
    fn fresh_car_is_sound_for_any_ceiling(max_speed in any::<i32>()) {
        let car = Car::with_sink("TestCar", max_speed, RecordingSink::new());
        prop_assert!(car.status().invariant_violations().is_empty());
        prop_assert!(car.status().speed_ceiling() >= 0);
    }

    /// Speed stays zero when the car was never started.
    #[test]
    fn unstarted_car_never_moves(ops in prop::collection::vec(
        prop_oneof![Just(Operation::Drive), Just(Operation::Accelerate), Just(Operation::Decelerate)],
        0..20,
    )) {
        let (car, states) = run(100, &ops);
        prop_assert_eq!(car.speed(), 0);
        prop_assert!(!car.is_driving());
        prop_assert!(states.iter().all(|s| *s == CarState::Stopped));
    }
}
