//! Scenario execution
//!
//! Replays a scenario's steps against a fresh car and keeps a per-step trace
//! for the verifier.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info, warn};
use vehicle_model::{Car, CarStatus, Notice, Operation, RecordingSink};

use crate::failure::CategorizedFailure;
use crate::scenario::{load_scenario, scenario_paths, Scenario};
use crate::verify::verify_outcome;

/// State of the car after one step
#[derive(Debug, Clone)]
pub struct StepRecord {
    pub op: Operation,
    pub status: CarStatus,
    /// Notice emitted by this step, if any
    pub notice: Option<Notice>,
}

/// Everything observed while running a scenario
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    /// Status right after construction
    pub initial: CarStatus,
    pub steps: Vec<StepRecord>,
    /// All notices, oldest first
    pub notices: Vec<Notice>,
}

impl ScenarioOutcome {
    /// Status after the last step (or the initial status when there were none)
    pub fn final_status(&self) -> &CarStatus {
        self.steps
            .last()
            .map(|step| &step.status)
            .unwrap_or(&self.initial)
    }

    pub fn notice_kinds(&self) -> Vec<&'static str> {
        self.notices.iter().map(Notice::kind).collect()
    }
}

/// Result of running and verifying one scenario
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub name: String,
    pub outcome: Option<ScenarioOutcome>,
    pub failures: Vec<CategorizedFailure>,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run a scenario's steps against a freshly constructed car
pub fn run_scenario(scenario: &Scenario) -> ScenarioOutcome {
    let setup = &scenario.spec.car;
    let sink = RecordingSink::new();
    let mut car = Car::with_sink(setup.name.clone(), setup.max_speed, &sink);
    let initial = car.status();

    let mut steps = Vec::with_capacity(scenario.spec.steps.len());
    for op in &scenario.spec.steps {
        let before = sink.len();
        car.apply(op);
        let notice = if sink.len() > before { sink.last() } else { None };
        debug!(scenario = %scenario.name, op = %op, state = %car.state(), speed = car.speed(), "step");
        steps.push(StepRecord {
            op: op.clone(),
            status: car.status(),
            notice,
        });
    }

    ScenarioOutcome {
        initial,
        steps,
        notices: sink.notices(),
    }
}

/// Run and verify one scenario
pub fn check_scenario(scenario: &Scenario) -> ScenarioReport {
    let outcome = run_scenario(scenario);
    let failures = verify_outcome(&scenario.spec.expect, &outcome);

    if failures.is_empty() {
        info!(scenario = %scenario.name, "passed");
    } else {
        for failure in &failures {
            warn!(scenario = %scenario.name, "{}", failure);
        }
    }

    ScenarioReport {
        name: scenario.name.clone(),
        outcome: Some(outcome),
        failures,
    }
}

/// Run every scenario in a directory.
///
/// A scenario file that fails to load becomes a report with a single Setup
/// failure instead of aborting the whole run. Only an unreadable directory
/// is an error.
pub fn run_all(dir: &Path) -> Result<Vec<ScenarioReport>> {
    let mut reports = Vec::new();

    for path in scenario_paths(dir)? {
        let report = match load_scenario(&path) {
            Ok(scenario) => check_scenario(&scenario),
            Err(e) => {
                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                warn!(scenario = %name, "failed to load: {:#}", e);
                ScenarioReport {
                    name,
                    outcome: None,
                    failures: vec![CategorizedFailure::invalid_scenario(format!("{:#}", e))],
                }
            }
        };
        reports.push(report);
    }

    Ok(reports)
}
