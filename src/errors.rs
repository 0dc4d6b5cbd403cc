// src/errors.rs

//! Crate-wide error types.

use std::path::PathBuf;

use thiserror::Error;

/// Every constraint violated by one validation pass, in the order the checks
/// ran. Never constructed with an empty list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .errors.join("\n"))]
pub struct ValidationError {
    errors: Vec<String>,
}

impl ValidationError {
    pub(crate) fn new(errors: Vec<String>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { errors }
    }

    /// Human-readable messages, one per violated constraint.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// Failure of a single load attempt.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source was read but does not describe a valid configuration.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The source could not be obtained at all. The cause is only logged.
    #[error("Unable to load configuration at path '{}'.", .path.display())]
    Unreadable { path: PathBuf },
}

impl LoadError {
    /// Validation messages, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&[String]> {
        match self {
            LoadError::Invalid(err) => Some(err.errors()),
            LoadError::Unreadable { .. } => None,
        }
    }
}

/// Reasons a schedule string is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("expected 5 or 6 cron fields, found {0}")]
    FieldCount(usize),

    #[error("cron macros are not supported (got '{0}')")]
    Macro(String),

    #[error("invalid cron expression: {0}")]
    Syntax(String),
}

pub type Result<T> = std::result::Result<T, LoadError>;
