use crate::error::{ModelError, Result};
use crate::state::schema::CarState;

/// Validate that a single car operation can move a car from `from` to `to`.
///
/// Staying put is always allowed, since every refused operation is a no-op.
pub fn validate_transition(from: CarState, to: CarState) -> Result<()> {
    let valid = from == to
        || match from {
            CarState::Stopped => matches!(to, CarState::Started),
            CarState::Started => matches!(to, CarState::Driving | CarState::Stopped),
            // Only stop leaves driving; there is no "stop driving" operation
            CarState::Driving => matches!(to, CarState::Stopped),
        };

    if valid {
        Ok(())
    } else {
        Err(ModelError::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

/// Get the states reachable from `from` in one operation, excluding `from` itself.
pub fn valid_transitions(from: CarState) -> Vec<CarState> {
    match from {
        CarState::Stopped => vec![CarState::Started],
        CarState::Started => vec![CarState::Driving, CarState::Stopped],
        CarState::Driving => vec![CarState::Stopped],
    }
}
