//! Structured error types for input validation.
//!
//! Commands return `anyhow::Result` at the boundary; these categorized
//! errors carry the details of rejected user input and convert into
//! anyhow errors transparently.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidelineError {
    /// The given temperature scale is not one of C, F or K.
    InvalidScale { input: String },
    /// The given score is not a non-negative integer.
    InvalidScore { input: String },
}

impl SidelineError {
    pub fn invalid_scale(input: impl Into<String>) -> Self {
        SidelineError::InvalidScale {
            input: input.into(),
        }
    }

    pub fn invalid_score(input: impl Into<String>) -> Self {
        SidelineError::InvalidScore {
            input: input.into(),
        }
    }
}

impl fmt::Display for SidelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SidelineError::InvalidScale { input } => {
                write!(f, "invalid scale {input:?}: use C, F, or K")
            }
            SidelineError::InvalidScore { input } => {
                write!(f, "invalid score {input:?}: expected a non-negative integer")
            }
        }
    }
}

impl std::error::Error for SidelineError {}
