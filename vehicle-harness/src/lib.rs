//! vehicle-harness library
//!
//! Scenario harness for the vehicle model: load scenario files, replay their
//! operations against a car, and verify final state, notices and invariants.

pub mod failure;
pub mod run;
pub mod scenario;
pub mod verify;

pub use failure::{CategorizedFailure, FailureCategory};
pub use run::{check_scenario, run_all, run_scenario, ScenarioOutcome, ScenarioReport, StepRecord};
