//! Filter types for querying projects.

use super::ProjectPhase;

/// Filter options for querying projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    /// Filter by title (case-insensitive partial match)
    pub title_contains: Option<String>,

    /// Filter by external project number (exact match)
    pub project_no: Option<String>,

    /// Filter by overall phase
    pub phase: Option<ProjectPhase>,
}

impl From<&crate::params::ListProjects> for ProjectFilter {
    fn from(params: &crate::params::ListProjects) -> Self {
        Self {
            title_contains: params.title.clone(),
            project_no: None,
            phase: params.phase,
        }
    }
}
