use serde::{Deserialize, Serialize};

use crate::car::SPEED_STEP;
use crate::error::ModelError;

/// Motion state of a car, derived from its `started`/`driving` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarState {
    /// Engine off, not moving.
    Stopped,
    /// Engine running, not driving.
    Started,
    /// Engine running and driving.
    Driving,
}

impl CarState {
    pub fn from_flags(started: bool, driving: bool) -> Self {
        match (started, driving) {
            (true, true) => CarState::Driving,
            (true, false) => CarState::Started,
            (false, _) => CarState::Stopped,
        }
    }
}

impl std::fmt::Display for CarState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarState::Stopped => write!(f, "stopped"),
            CarState::Started => write!(f, "started"),
            CarState::Driving => write!(f, "driving"),
        }
    }
}

impl std::str::FromStr for CarState {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stopped" => Ok(CarState::Stopped),
            "started" => Ok(CarState::Started),
            "driving" => Ok(CarState::Driving),
            _ => Err(ModelError::InvalidState(s.to_string())),
        }
    }
}

/// Point-in-time snapshot of a car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarStatus {
    pub name: String,
    pub max_speed: i32,
    pub started: bool,
    pub driving: bool,
    pub speed: i32,
    pub state: CarState,
}

impl CarStatus {
    /// Highest speed the coarse ceiling can produce.
    ///
    /// Acceleration is only refused once `speed >= max_speed`, so a ceiling
    /// that is not a multiple of the step is overshot by less than one step.
    /// Saturates at `i32::MAX`.
    pub fn speed_ceiling(&self) -> i32 {
        self.max_speed.max(0).saturating_add(SPEED_STEP - 1)
    }

    /// Describe every car invariant this snapshot breaks. Empty when sound.
    pub fn invariant_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if self.driving && !self.started {
            violations.push("driving while not started".to_string());
        }

        if self.speed > 0 && !self.driving {
            violations.push(format!("speed {} while not driving", self.speed));
        }

        if self.speed < 0 {
            violations.push(format!("negative speed {}", self.speed));
        }

        if self.speed > self.speed_ceiling() {
            violations.push(format!(
                "speed {} above ceiling {} (max speed {})",
                self.speed,
                self.speed_ceiling(),
                self.max_speed
            ));
        }

        if self.state != CarState::from_flags(self.started, self.driving) {
            violations.push(format!(
                "state '{}' does not match flags started={} driving={}",
                self.state, self.started, self.driving
            ));
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(started: bool, driving: bool, speed: i32, max_speed: i32) -> CarStatus {
        CarStatus {
            name: "TestCar".to_string(),
            max_speed,
            started,
            driving,
            speed,
            state: CarState::from_flags(started, driving),
        }
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(CarState::from_flags(false, false), CarState::Stopped);
        assert_eq!(CarState::from_flags(true, false), CarState::Started);
        assert_eq!(CarState::from_flags(true, true), CarState::Driving);
    }

    #[test]
    fn test_state_parse_and_display() {
        for state in [CarState::Stopped, CarState::Started, CarState::Driving] {
            assert_eq!(state.to_string().parse::<CarState>().unwrap(), state);
        }
        assert_eq!(" Driving ".parse::<CarState>().unwrap(), CarState::Driving);
        assert_eq!(
            "parked".parse::<CarState>(),
            Err(ModelError::InvalidState("parked".to_string()))
        );
    }

    #[test]
    fn test_status_serializes_state_snake_case() {
        let json = serde_json::to_value(status(true, true, 10, 100)).unwrap();
        assert_eq!(json["state"], "driving");
        assert_eq!(json["speed"], 10);
        assert_eq!(json["max_speed"], 100);
    }

    #[test]
    fn test_sound_statuses_have_no_violations() {
        assert!(status(false, false, 0, 100).invariant_violations().is_empty());
        assert!(status(true, false, 0, 100).invariant_violations().is_empty());
        assert!(status(true, true, 100, 100).invariant_violations().is_empty());
        // coarse clamp overshoot is tolerated
        assert!(status(true, true, 10, 5).invariant_violations().is_empty());
    }

    #[test]
    fn test_violations_reported() {
        let mut broken = status(false, false, 20, 100);
        broken.driving = true;
        broken.state = CarState::Driving;
        let violations = broken.invariant_violations();
        assert!(violations.iter().any(|v| v.contains("driving while not started")));
        assert!(violations.iter().any(|v| v.contains("does not match flags")));

        let idle_speed = status(true, false, 10, 100).invariant_violations();
        assert_eq!(idle_speed, vec!["speed 10 while not driving".to_string()]);

        let too_fast = status(true, true, 120, 100).invariant_violations();
        assert_eq!(too_fast.len(), 1);
        assert!(too_fast[0].contains("above ceiling 109"));

        let negative = status(true, true, -10, 100).invariant_violations();
        assert_eq!(negative, vec!["negative speed -10".to_string()]);
    }

    #[test]
    fn test_ceiling_for_non_positive_max_speed() {
        assert_eq!(status(false, false, 0, 0).speed_ceiling(), 9);
        assert_eq!(status(false, false, 0, -40).speed_ceiling(), 9);
        assert_eq!(status(false, false, 0, i32::MIN).speed_ceiling(), 9);
    }

    #[test]
    fn test_ceiling_saturates_at_i32_max() {
        assert_eq!(status(false, false, 0, i32::MAX).speed_ceiling(), i32::MAX);
        assert_eq!(status(false, false, 0, i32::MAX - 3).speed_ceiling(), i32::MAX);

        let top = status(true, true, i32::MAX, i32::MAX);
        assert!(top.invariant_violations().is_empty());
    }
}
