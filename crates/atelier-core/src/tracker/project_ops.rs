//! Project operations for the Tracker.

use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{PlanError, Result},
    models::{Project, ProjectFilter, ProjectSummary},
    params::{CreateProject, Id, UpdateProject},
};

impl Tracker {
    /// Creates a new project from validated parameters.
    pub async fn create_project(&self, params: &CreateProject) -> Result<Project> {
        let (phase, start_date) = params.validate()?;

        let db_path = self.db_path.clone();
        let project_no = params.project_no.clone();
        let title = params.title.clone();
        let description = params.description.clone();
        let estimated_days = params.estimated_days;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_project(
                &project_no,
                &title,
                description.as_deref(),
                phase,
                start_date,
                estimated_days,
            )
        })
        .await
        .map_err(|e| PlanError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a project by its ID.
    pub async fn get_project(&self, params: &Id) -> Result<Option<Project>> {
        let db_path = self.db_path.clone();
        let project_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_project(project_id)
        })
        .await
        .map_err(|e| PlanError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists project summaries with optional filtering.
    pub async fn list_project_rows(
        &self,
        filter: Option<ProjectFilter>,
    ) -> Result<Vec<ProjectSummary>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_projects(filter.as_ref())
        })
        .await
        .map_err(|e| PlanError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Applies a partial update to a project.
    pub async fn update_project_row(&self, params: &UpdateProject) -> Result<Option<Project>> {
        let (phase, start_date) = params.validate()?;

        let db_path = self.db_path.clone();
        let id = params.id;
        let title = params.title.clone();
        let description = params.description.clone();
        let estimated_days = params.estimated_days;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_project(
                id,
                title.as_deref(),
                description.as_deref(),
                phase,
                start_date,
                estimated_days,
            )
        })
        .await
        .map_err(|e| PlanError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a project and all its recorded uploads.
    /// This operation cannot be undone.
    pub async fn delete_project_by_id(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let project_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_project(project_id)
        })
        .await
        .map_err(|e| PlanError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
