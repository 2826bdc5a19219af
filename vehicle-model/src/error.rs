use thiserror::Error;

/// Error types for vehicle-model parsing and validation.
///
/// Car operations themselves never fail; these cover the textual surfaces
/// (states, operations) and state machine checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid state value: {0}. Valid values: stopped, started, driving")]
    InvalidState(String),

    #[error("Invalid state transition: cannot go from '{from}' to '{to}'")]
    InvalidTransition { from: String, to: String },

    #[error("Unknown operation: {0}. Valid operations: start, stop, drive, accelerate, decelerate, change_name <name>")]
    UnknownOperation(String),

    #[error("Operation '{0}' requires an argument")]
    MissingArgument(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
