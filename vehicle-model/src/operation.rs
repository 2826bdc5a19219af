//! Car operations as values, with a compact textual form.
//!
//! `start`, `stop`, `drive`, `accelerate`, `decelerate` and
//! `change_name <new name>`. Serde uses the same text, so a list of
//! operations is a plain JSON array of strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operation {
    Start,
    Stop,
    Drive,
    Accelerate,
    Decelerate,
    ChangeName(String),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Start => write!(f, "start"),
            Operation::Stop => write!(f, "stop"),
            Operation::Drive => write!(f, "drive"),
            Operation::Accelerate => write!(f, "accelerate"),
            Operation::Decelerate => write!(f, "decelerate"),
            Operation::ChangeName(name) => write!(f, "change_name {}", name),
        }
    }
}

impl FromStr for Operation {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim_start();
        let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, Some(rest)),
            None => (trimmed.trim_end(), None),
        };

        match verb.to_lowercase().as_str() {
            "start" => Ok(Operation::Start),
            "stop" => Ok(Operation::Stop),
            "drive" => Ok(Operation::Drive),
            "accelerate" => Ok(Operation::Accelerate),
            "decelerate" => Ok(Operation::Decelerate),
            // The name is everything after the first separator, inner spaces
            // kept. An empty name still needs the separator.
            "change_name" => match rest {
                Some(name) => Ok(Operation::ChangeName(name.to_string())),
                None => Err(ModelError::MissingArgument("change_name".to_string())),
            },
            _ => Err(ModelError::UnknownOperation(s.to_string())),
        }
    }
}

impl TryFrom<String> for Operation {
    type Error = ModelError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Operation> for String {
    fn from(op: Operation) -> Self {
        op.to_string()
    }
}
