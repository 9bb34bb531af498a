//! Stage-plan and upload handler operations for the Tracker.

use super::Tracker;
use crate::{
    catalog::StageCatalog,
    engine::{self, today_in_reporting_zone, PlanRequest},
    error::{PlanError, Result},
    models::{StagePlan, StageUpload},
    params::{Id, RecordUpload, RenameStage, StagePlanParams},
};

impl Tracker {
    /// Handle computing a project's classified stage plan.
    ///
    /// Resolves the scheduling inputs in priority order: an override from
    /// `params` wins, then the stored project row. A project with neither a
    /// stored start date nor a `start` override cannot be planned, and
    /// likewise for the estimated duration.
    ///
    /// The completion set and stage-name overrides are snapshotted in a
    /// single database pass before the engine runs.
    ///
    /// # Errors
    ///
    /// * `PlanError::ProjectNotFound` - no project with the given ID
    /// * `PlanError::InvalidStartDate` - no start date available or the
    ///   override is malformed
    /// * `PlanError::InvalidDuration` - no duration available or the
    ///   override is non-positive
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use atelier_core::{params::StagePlanParams, TrackerBuilder};
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let params = StagePlanParams {
    ///     id: 1,
    ///     start: None,
    ///     days: Some(120),
    /// };
    /// let plan = tracker.stage_plan(&params).await?;
    /// # Result::<(), atelier_core::PlanError>::Ok(())
    /// # };
    /// ```
    pub async fn stage_plan(&self, params: &StagePlanParams) -> Result<StagePlan> {
        let start_override = params.validate()?;

        let project = self
            .get_project(&Id { id: params.id })
            .await?
            .ok_or(PlanError::ProjectNotFound { id: params.id })?;

        let start_date = start_override.or(project.start_date).ok_or_else(|| {
            PlanError::invalid_start_date(
                "none",
                "project has no stored start date and no override was given",
            )
        })?;
        let total_days = params
            .days
            .or(project.estimated_days)
            .ok_or_else(|| {
                PlanError::invalid_duration(
                    "project has no stored estimated duration and no override was given",
                )
            })?;

        let (name_overrides, completed) = self.plan_inputs(project.project_no.clone()).await?;
        let catalog = StageCatalog::with_names(&name_overrides);
        let today = today_in_reporting_zone()?;

        let request = PlanRequest {
            project_no: project.project_no,
            start_date,
            total_days,
            phase: project.phase,
        };

        engine::build_plan(&request, &catalog, &completed, today)
    }

    /// Handle recording a stage completion artifact.
    ///
    /// Validates the stage number and file name, resolves the project, and
    /// stores the upload row. Recording an upload marks the stage completed
    /// in every subsequent plan.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::ProjectNotFound` if the project doesn't exist.
    pub async fn record_upload(&self, params: &RecordUpload) -> Result<StageUpload> {
        params.validate()?;

        let project = self
            .get_project(&Id {
                id: params.project_id,
            })
            .await?
            .ok_or(PlanError::ProjectNotFound {
                id: params.project_id,
            })?;

        self.insert_upload(project.project_no, params.stage_no, params.file_name.clone())
            .await
    }

    /// Handle listing all recorded uploads for a project.
    ///
    /// Rows come back ordered by stage number, then upload time.
    pub async fn list_uploads(&self, params: &Id) -> Result<crate::display::StageUploads> {
        let project = self
            .get_project(params)
            .await?
            .ok_or(PlanError::ProjectNotFound { id: params.id })?;

        let uploads = self.uploads_for(project.project_no).await?;
        Ok(crate::display::StageUploads(uploads))
    }

    /// Handle overriding a stage's display name.
    ///
    /// The override applies to all projects; weights are never affected.
    pub async fn rename_stage(&self, params: &RenameStage) -> Result<()> {
        params.validate()?;
        self.upsert_stage_name(params.stage_no, params.name.clone())
            .await
    }
}
