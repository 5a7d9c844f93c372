//! Error types for the planner library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Plan not found for the given ID
    #[error("Workout plan with ID {id} not found")]
    PlanNotFound { id: u64 },
    /// Week not found for the given ID
    #[error("Week with ID {id} not found")]
    WeekNotFound { id: u64 },
    /// Day not found for the given ID
    #[error("Day with ID {id} not found")]
    DayNotFound { id: u64 },
    /// Exercise not found for the given ID
    #[error("Exercise with ID {id} not found")]
    ExerciseNotFound { id: u64 },
    /// Set not found for the given ID
    #[error("Set with ID {id} not found")]
    SetNotFound { id: u64 },
    /// A sibling already holds the requested ordinal
    #[error("{kind} number {ordinal} already exists under parent {parent_id}")]
    DuplicateStructure {
        kind: &'static str,
        ordinal: u32,
        parent_id: u64,
    },
    /// Ordinal out of range or an operation-specific precondition failed
    #[error("Cannot {operation}: {reason}")]
    InvalidStructure {
        operation: &'static str,
        reason: String,
    },
    /// Structural mutation attempted against an inactive plan
    #[error("Workout plan with ID {id} is not active")]
    PlanInactive { id: u64 },
    /// The plan already has an assigned lifter
    #[error("Workout plan {plan_id} is already assigned to lifter {lifter_id}")]
    PlanAlreadyAssigned { plan_id: u64, lifter_id: u64 },
    /// The lifter already holds another active plan
    #[error("Lifter {lifter_id} already has an active workout plan")]
    LifterAlreadyAssigned { lifter_id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl PlannerError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a structure validation error for an operation.
    pub fn invalid_structure(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidStructure {
            operation,
            reason: reason.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlannerError::database_error(message, e))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
