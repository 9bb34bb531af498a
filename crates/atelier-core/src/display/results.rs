//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create,
//! update, and delete operations with consistent messaging and resource
//! display.

use std::fmt;

use crate::models::{Project, StageUpload};

/// Wrapper type for displaying the result of create operations.
///
/// The wrapper formats creation results with:
/// - Success message with resource type and ID
/// - Full details of the created resource
/// - Consistent markdown structure
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Project> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created project with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<StageUpload> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Recorded upload for stage {} of project {}",
            self.resource.stage_no, self.resource.project_no
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// The wrapper can track and display specific changes made during the
/// update, providing users with clear feedback about what was modified.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Project> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated project with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
///
/// This provides consistent formatting for deletion results, including
/// confirmation messages and resource identification.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Project> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted project '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}
