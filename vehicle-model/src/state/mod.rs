pub mod schema;
pub mod transitions;

pub use schema::{CarState, CarStatus};
pub use transitions::{valid_transitions, validate_transition};
