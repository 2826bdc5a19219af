//! vehicle-model library
//!
//! A base [`Vehicle`] (name plus fixed speed ceiling) and a [`Car`] that
//! embeds it and adds engine and motion state. Car operations report what
//! they did through an injected [`NoticeSink`].

pub mod car;
pub mod config;
pub mod error;
pub mod logging;
pub mod notice;
pub mod operation;
pub mod state;
pub mod vehicle;

// Re-export main types for convenience
pub use car::{Car, SPEED_STEP};
pub use error::{ModelError, Result};
pub use notice::{Notice, NoticeSink, RecordingSink, TracingSink};
pub use operation::Operation;
pub use state::{CarState, CarStatus};
pub use vehicle::{Named, SpeedLimited, Vehicle};
