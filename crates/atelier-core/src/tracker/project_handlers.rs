//! Project handler operations that return formatted wrapper types for the
//! Tracker.

use super::Tracker;
use crate::{
    error::Result,
    models::{Project, ProjectFilter},
    params::{CreateProject, DeleteProject, Id, ListProjects, UpdateProject},
};

impl Tracker {
    /// Handle listing projects with optional phase/title filtering.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use atelier_core::{params::ListProjects, TrackerBuilder};
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let params = ListProjects::default();
    /// let summaries = tracker.list_projects(&params).await?;
    /// # Result::<(), atelier_core::PlanError>::Ok(())
    /// # };
    /// ```
    pub async fn list_projects(
        &self,
        params: &ListProjects,
    ) -> Result<crate::display::ProjectSummaries> {
        let filter = Some(ProjectFilter::from(params));
        let summaries = self.list_project_rows(filter).await?;
        Ok(crate::display::ProjectSummaries(summaries))
    }

    /// Handle showing a single project.
    ///
    /// Returns `None` if no project with the given ID exists.
    pub async fn show_project(&self, params: &Id) -> Result<Option<Project>> {
        self.get_project(params).await
    }

    /// Handle creating a new project.
    ///
    /// Returns the created project row for confirmation.
    pub async fn create_project_result(&self, params: &CreateProject) -> Result<Project> {
        self.create_project(params).await
    }

    /// Handle applying a partial update to a project.
    ///
    /// Only the fields present in `params` change; the rest keep their
    /// stored values. Returns the updated row, or `None` if the project
    /// doesn't exist.
    pub async fn update_project(&self, params: &UpdateProject) -> Result<Option<Project>> {
        self.update_project_row(params).await
    }

    /// Handle permanently deleting a project with confirmation.
    ///
    /// Removes the project and every upload recorded for it. This operation
    /// cannot be undone, so it requires the explicit `confirmed` flag. Uses
    /// get-before-delete to return the deleted row for confirmation, or
    /// `None` if the project doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` if `confirmed` is false.
    pub async fn delete_project(&self, params: &DeleteProject) -> Result<Option<Project>> {
        if !params.confirmed {
            return Err(crate::PlanError::InvalidInput {
                field: "confirmed".to_string(),
                reason: "Project deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.".to_string(),
            });
        }

        let id_params = Id { id: params.id };
        let project = self.get_project(&id_params).await?;

        if project.is_some() {
            self.delete_project_by_id(&id_params).await?;
        }

        Ok(project)
    }
}
