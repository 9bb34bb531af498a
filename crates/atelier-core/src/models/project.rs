//! Project model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::ProjectPhase;

/// Represents a tracked design/construction project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Unique identifier for the project row
    pub id: u64,

    /// External project number (e.g. "20250001"), unique per project
    pub project_no: String,

    /// Title of the project
    pub title: String,

    /// Detailed multi-line description of the project
    pub description: Option<String>,

    /// Overall phase of the project
    #[serde(default)]
    pub phase: ProjectPhase,

    /// Planned first day of stage 1
    pub start_date: Option<Date>,

    /// Total estimated duration in calendar days
    pub estimated_days: Option<i64>,

    /// Timestamp when the project was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the project was last modified (UTC)
    pub updated_at: Timestamp,
}

/// Summary information about a project with stage completion statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Project row ID
    pub id: u64,

    /// External project number
    pub project_no: String,

    /// Title of the project
    pub title: String,

    /// Overall phase of the project
    pub phase: ProjectPhase,

    /// Planned first day of stage 1
    pub start_date: Option<Date>,

    /// Total estimated duration in calendar days
    pub estimated_days: Option<i64>,

    /// Number of distinct stages with at least one recorded upload
    pub completed_stages: u32,

    /// Creation timestamp
    pub created_at: Timestamp,
}

impl ProjectSummary {
    /// Create a summary from a project row and its completed-stage count.
    pub fn from_project(project: Project, completed_stages: u32) -> Self {
        Self {
            id: project.id,
            project_no: project.project_no,
            title: project.title,
            phase: project.phase,
            start_date: project.start_date,
            estimated_days: project.estimated_days,
            completed_stages,
            created_at: project.created_at,
        }
    }
}
