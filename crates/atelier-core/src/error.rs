//! Error types for the stage planning library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all tracker and engine operations.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Total estimated duration missing, zero, negative, or too small to
    /// cover every stage
    #[error("Invalid duration: {reason}")]
    InvalidDuration { reason: String },
    /// Start date missing or not a valid calendar date
    #[error("Invalid start date '{value}': {reason}")]
    InvalidStartDate { value: String, reason: String },
    /// Stage catalog empty or malformed
    #[error("Invalid stage catalog: {reason}")]
    InvalidCatalog { reason: String },
    /// Project not found for the given ID
    #[error("Project with ID {id} not found")]
    ProjectNotFound { id: u64 },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
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

impl PlanError {
    /// Creates a duration validation error.
    pub fn invalid_duration(reason: impl Into<String>) -> Self {
        Self::InvalidDuration {
            reason: reason.into(),
        }
    }

    /// Creates a start-date validation error.
    pub fn invalid_start_date(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidStartDate {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates a catalog validation error.
    pub fn invalid_catalog(reason: impl Into<String>) -> Self {
        Self::InvalidCatalog {
            reason: reason.into(),
        }
    }

    /// Creates an input validation error for a named field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// True for errors caused by caller-supplied input; the calling layer
    /// maps these to a client error rather than a server error.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDuration { .. }
                | Self::InvalidStartDate { .. }
                | Self::InvalidCatalog { .. }
                | Self::ProjectNotFound { .. }
                | Self::InvalidInput { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlanError::database_error(message, e))
    }
}

/// Result type alias for tracker and engine operations
pub type Result<T> = std::result::Result<T, PlanError>;
