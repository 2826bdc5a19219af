//! Outcome verification for scenario runs.
//!
//! Checks a run against the scenario's expectations, then walks the step
//! trace to make sure no step broke a car invariant or jumped between states
//! that no single operation connects.

use vehicle_model::state::validate_transition;
use vehicle_model::CarState;

use crate::failure::CategorizedFailure;
use crate::run::ScenarioOutcome;
use crate::scenario::Expectations;

/// Verify a scenario outcome.
///
/// Returns a list of failures (empty if everything holds).
pub fn verify_outcome(expect: &Expectations, outcome: &ScenarioOutcome) -> Vec<CategorizedFailure> {
    let mut failures = verify_final_state(expect, outcome);
    failures.extend(verify_notices(expect, outcome));
    failures.extend(verify_trace(outcome));
    failures
}

/// Compare the final car status with each expected field.
pub fn verify_final_state(
    expect: &Expectations,
    outcome: &ScenarioOutcome,
) -> Vec<CategorizedFailure> {
    let status = outcome.final_status();
    let mut failures = Vec::new();

    if let Some(started) = expect.started {
        if status.started != started {
            failures.push(CategorizedFailure::field_mismatch("started", started, status.started));
        }
    }

    if let Some(driving) = expect.driving {
        if status.driving != driving {
            failures.push(CategorizedFailure::field_mismatch("driving", driving, status.driving));
        }
    }

    if let Some(speed) = expect.speed {
        if status.speed != speed {
            failures.push(CategorizedFailure::field_mismatch("speed", speed, status.speed));
        }
    }

    if let Some(min) = expect.min_speed {
        if status.speed < min {
            failures.push(CategorizedFailure::field_mismatch(
                "speed",
                format!(">= {}", min),
                status.speed,
            ));
        }
    }

    if let Some(ref expected_state) = expect.state {
        match expected_state.parse::<CarState>() {
            Ok(state) if state == status.state => {}
            Ok(_) => failures.push(CategorizedFailure::field_mismatch(
                "state",
                expected_state,
                status.state,
            )),
            Err(e) => failures.push(CategorizedFailure::invalid_scenario(e.to_string())),
        }
    }

    if let Some(ref name) = expect.name {
        if status.name != *name {
            failures.push(CategorizedFailure::field_mismatch("name", name, &status.name));
        }
    }

    failures
}

/// Check that every expected notice kind was emitted at least once.
pub fn verify_notices(expect: &Expectations, outcome: &ScenarioOutcome) -> Vec<CategorizedFailure> {
    let seen = outcome.notice_kinds();

    expect
        .notices
        .iter()
        .filter(|kind| !seen.iter().any(|s| *s == kind.as_str()))
        .map(|kind| CategorizedFailure::missing_notice(kind.as_str(), &seen))
        .collect()
}

/// Check invariants and transitions step by step.
pub fn verify_trace(outcome: &ScenarioOutcome) -> Vec<CategorizedFailure> {
    let mut failures = Vec::new();
    let mut previous = outcome.initial.state;

    for violation in outcome.initial.invariant_violations() {
        failures.push(CategorizedFailure::invariant_broken(0, "construct", violation));
    }

    for (index, step) in outcome.steps.iter().enumerate() {
        let number = index + 1;

        for violation in step.status.invariant_violations() {
            failures.push(CategorizedFailure::invariant_broken(number, &step.op, violation));
        }

        if let Err(e) = validate_transition(previous, step.status.state) {
            failures.push(CategorizedFailure::illegal_transition(number, &step.op, e.to_string()));
        }

        previous = step.status.state;
    }

    failures
}
