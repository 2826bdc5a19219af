//! Failure categorization for scenario runs
//!
//! Categorizes failures to help identify root causes:
//! - Setup: the scenario file itself is missing or malformed
//! - State: the car ended in a different state than expected
//! - Notice: an expected status notice was never emitted
//! - Invariant: a car invariant or state transition rule was broken mid-run

use std::fmt;

/// Category of failure for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    /// Scenario could not be loaded or parsed
    Setup,
    /// Final car state differs from the expectation
    State,
    /// Expected notice missing from the notice stream
    Notice,
    /// Invariant or transition rule violated during the run
    Invariant,
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureCategory::Setup => write!(f, "Setup"),
            FailureCategory::State => write!(f, "State"),
            FailureCategory::Notice => write!(f, "Notice"),
            FailureCategory::Invariant => write!(f, "Invariant"),
        }
    }
}

/// A failure with category and details
#[derive(Debug, Clone)]
pub struct CategorizedFailure {
    /// Category of the failure
    pub category: FailureCategory,
    /// Short description of what failed
    pub message: String,
    /// Optional additional details
    pub details: Option<String>,
}

impl CategorizedFailure {
    /// Create a new categorized failure
    pub fn new(category: FailureCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the failure
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors for common failures

    /// Scenario file could not be read or parsed
    pub fn invalid_scenario(details: impl Into<String>) -> Self {
        Self::new(FailureCategory::Setup, "Invalid scenario").with_details(details)
    }

    /// A final-state field differs from the expectation
    pub fn field_mismatch(
        field: &str,
        expected: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        Self::new(FailureCategory::State, format!("Final {} mismatch", field))
            .with_details(format!("Expected: {}, Actual: {}", expected, actual))
    }

    /// An expected notice kind was never emitted
    pub fn missing_notice(kind: impl Into<String>, seen: &[&str]) -> Self {
        Self::new(
            FailureCategory::Notice,
            format!("Expected notice not emitted: {}", kind.into()),
        )
        .with_details(format!("Emitted: [{}]", seen.join(", ")))
    }

    /// A step broke a car invariant
    pub fn invariant_broken(step: usize, op: impl fmt::Display, violation: impl Into<String>) -> Self {
        Self::new(
            FailureCategory::Invariant,
            format!("Invariant broken after step {} ({})", step, op),
        )
        .with_details(violation)
    }

    /// A step moved the car between states no single operation connects
    pub fn illegal_transition(step: usize, op: impl fmt::Display, details: impl Into<String>) -> Self {
        Self::new(
            FailureCategory::Invariant,
            format!("Illegal transition at step {} ({})", step, op),
        )
        .with_details(details)
    }
}

impl fmt::Display for CategorizedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " - {}", details)?;
        }
        Ok(())
    }
}
