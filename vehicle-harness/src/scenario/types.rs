//! Scenario types for car behaviour testing

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use vehicle_model::Operation;

/// A parsed scenario from a scenario file
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Scenario name (file stem)
    pub name: String,
    /// Path to the scenario file
    pub path: PathBuf,
    /// The car to build, the steps to run and what to expect afterwards
    pub spec: ScenarioSpec,
}

/// Contents of a scenario JSON file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioSpec {
    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Car to construct before the first step
    pub car: CarSetup,
    /// Operations to apply, in order
    #[serde(default)]
    pub steps: Vec<Operation>,
    /// Expectations checked after the last step
    #[serde(default)]
    pub expect: Expectations,
}

/// Constructor arguments for the scenario's car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarSetup {
    pub name: String,
    pub max_speed: i32,
}

/// Expected final state. Every field is optional; absent fields are not checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Expectations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driving: Option<bool>,
    /// Exact final speed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<i32>,
    /// Lower bound on the final speed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_speed: Option<i32>,
    /// Final state name (`stopped`, `started`, `driving`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Notice kinds that must appear at least once
    #[serde(default)]
    pub notices: Vec<String>,
}

impl Expectations {
    /// True when nothing at all is checked
    pub fn is_empty(&self) -> bool {
        self.started.is_none()
            && self.driving.is_none()
            && self.speed.is_none()
            && self.min_speed.is_none()
            && self.state.is_none()
            && self.name.is_none()
            && self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_spec_deserialize() {
        let json = r#"{
            "description": "drive after start",
            "car": { "name": "TestCar", "max_speed": 100 },
            "steps": ["start", "drive", "accelerate"],
            "expect": {
                "driving": true,
                "speed": 10,
                "state": "driving",
                "notices": ["started", "accelerating"]
            }
        }"#;

        let spec: ScenarioSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.car.name, "TestCar");
        assert_eq!(spec.car.max_speed, 100);
        assert_eq!(
            spec.steps,
            vec![Operation::Start, Operation::Drive, Operation::Accelerate]
        );
        assert_eq!(spec.expect.speed, Some(10));
        assert_eq!(spec.expect.started, None);
        assert_eq!(spec.expect.notices.len(), 2);
    }

    #[test]
    fn test_steps_and_expect_default() {
        let json = r#"{ "car": { "name": "Idle", "max_speed": 0 } }"#;

        let spec: ScenarioSpec = serde_json::from_str(json).unwrap();
        assert!(spec.steps.is_empty());
        assert!(spec.expect.is_empty());
    }

    #[test]
    fn test_unknown_step_rejected() {
        let json = r#"{ "car": { "name": "X", "max_speed": 1 }, "steps": ["hover"] }"#;
        let result: Result<ScenarioSpec, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_expectation_rejected() {
        let json = r#"{ "car": { "name": "X", "max_speed": 1 }, "expect": { "sped": 10 } }"#;
        let result: Result<ScenarioSpec, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_expectations_is_empty() {
        let mut expect = Expectations::default();
        assert!(expect.is_empty());
        expect.min_speed = Some(1);
        assert!(!expect.is_empty());
    }
}
