//! Stage upload and stage-name operations for the Tracker.

use std::collections::{BTreeSet, HashMap};

use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{PlanError, Result},
    models::StageUpload,
};

impl Tracker {
    /// Records a completion artifact for a stage of a project.
    pub(crate) async fn insert_upload(
        &self,
        project_no: String,
        stage_no: u8,
        file_name: String,
    ) -> Result<StageUpload> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.record_upload(&project_no, stage_no, &file_name)
        })
        .await
        .map_err(|e| PlanError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all recorded uploads for a project.
    pub(crate) async fn uploads_for(&self, project_no: String) -> Result<Vec<StageUpload>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_uploads(&project_no)
        })
        .await
        .map_err(|e| PlanError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Snapshots the engine's collaborator data in one pass: the stage-name
    /// overrides and the project's completion set.
    pub(crate) async fn plan_inputs(
        &self,
        project_no: String,
    ) -> Result<(HashMap<u8, String>, BTreeSet<u8>)> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let overrides = db.stage_name_overrides()?;
            let completed = db.completed_stages(&project_no)?;
            Ok::<_, PlanError>((overrides, completed))
        })
        .await
        .map_err(|e| PlanError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Sets or replaces the display-name override for a stage.
    pub(crate) async fn upsert_stage_name(&self, stage_no: u8, name: String) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_stage_name(stage_no, &name)
        })
        .await
        .map_err(|e| PlanError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
