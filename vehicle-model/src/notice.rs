//! Status notices emitted by car operations, and the sinks that receive them.
//!
//! Every car operation that changes or refuses to change motion state emits
//! exactly one [`Notice`]. Where the notices go is decided by the
//! [`NoticeSink`] the car was built with: [`TracingSink`] logs them,
//! [`RecordingSink`] keeps them for inspection.

use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

use tracing::info;

/// A human-readable status notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Started,
    Stopped,
    Driving,
    /// Drive was requested before the engine was started.
    NotStarted,
    Accelerating { speed: i32 },
    MaxSpeedReached { max_speed: i32 },
    /// Accelerate was requested while not started or not driving.
    CannotAccelerate,
    Decelerating { speed: i32 },
    AlreadyStopped,
    /// Decelerate was requested while not started or not driving.
    CannotDecelerate,
    Renamed { from: String, to: String },
}

impl Notice {
    /// Stable snake_case tag for this notice.
    pub fn kind(&self) -> &'static str {
        match self {
            Notice::Started => "started",
            Notice::Stopped => "stopped",
            Notice::Driving => "driving",
            Notice::NotStarted => "not_started",
            Notice::Accelerating { .. } => "accelerating",
            Notice::MaxSpeedReached { .. } => "max_speed_reached",
            Notice::CannotAccelerate => "cannot_accelerate",
            Notice::Decelerating { .. } => "decelerating",
            Notice::AlreadyStopped => "already_stopped",
            Notice::CannotDecelerate => "cannot_decelerate",
            Notice::Renamed { .. } => "renamed",
        }
    }

    /// True for notices that accompany a refused operation.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Notice::NotStarted | Notice::CannotAccelerate | Notice::CannotDecelerate
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Started => write!(f, "Car started."),
            Notice::Stopped => write!(f, "Car stopped."),
            Notice::Driving => write!(f, "Car is being driven."),
            Notice::NotStarted => write!(
                f,
                "Car is not started. Please start the car before driving."
            ),
            Notice::Accelerating { speed } => {
                write!(f, "Car is accelerating. Current speed: {}", speed)
            }
            Notice::MaxSpeedReached { max_speed } => {
                write!(f, "Maximum speed reached: {}", max_speed)
            }
            Notice::CannotAccelerate => write!(
                f,
                "Car is not started or not in driving mode. Please start the car and begin driving before accelerating."
            ),
            Notice::Decelerating { speed } => {
                write!(f, "Car is decelerating. Current speed: {}", speed)
            }
            Notice::AlreadyStopped => write!(f, "Car has already stopped."),
            Notice::CannotDecelerate => write!(
                f,
                "Car is not started or not in driving mode. Please start the car and begin driving before decelerating."
            ),
            Notice::Renamed { from, to } => write!(f, "Car renamed from '{}' to '{}'.", from, to),
        }
    }
}

/// Receiver for status notices.
pub trait NoticeSink {
    /// Called once per notice, with the name the car had when it was emitted.
    fn notify(&self, car: &str, notice: &Notice);
}

impl<T: NoticeSink + ?Sized> NoticeSink for &T {
    fn notify(&self, car: &str, notice: &Notice) {
        (**self).notify(car, notice)
    }
}

impl<T: NoticeSink + ?Sized> NoticeSink for Arc<T> {
    fn notify(&self, car: &str, notice: &Notice) {
        (**self).notify(car, notice)
    }
}

/// Default sink: forwards notices to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NoticeSink for TracingSink {
    fn notify(&self, car: &str, notice: &Notice) {
        info!(car = %car, kind = notice.kind(), "{}", notice);
    }
}

/// Sink that keeps every notice in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all notices received so far, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    /// Kinds of all notices received so far, oldest first.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.notices.borrow().iter().map(Notice::kind).collect()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.notices.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.borrow().is_empty()
    }

    /// Remove and return all notices received so far.
    pub fn take(&self) -> Vec<Notice> {
        self.notices.take()
    }
}

impl NoticeSink for RecordingSink {
    fn notify(&self, _car: &str, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}
