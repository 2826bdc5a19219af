//! Scenario loading and types
//!
//! This module handles parsing scenario files into structured types.

mod loader;
mod types;

pub use loader::{load_scenario, load_scenarios, scenario_paths};
pub use types::{CarSetup, Expectations, Scenario, ScenarioSpec};
