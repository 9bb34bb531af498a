//! Stage upload queries: the completion record store.

use std::collections::BTreeSet;

use jiff::Timestamp;
use rusqlite::{params, types::Type};

use crate::{
    error::{DatabaseResultExt, PlanError, Result},
    models::StageUpload,
};

const INSERT_UPLOAD_SQL: &str =
    "INSERT INTO stage_uploads (project_no, stage_no, file_name, uploaded_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_UPLOADS_SQL: &str = "SELECT id, project_no, stage_no, file_name, uploaded_at FROM stage_uploads WHERE project_no = ?1 ORDER BY stage_no ASC, uploaded_at ASC";
const SELECT_COMPLETED_STAGES_SQL: &str =
    "SELECT DISTINCT stage_no FROM stage_uploads WHERE project_no = ?1";

impl super::Database {
    /// Records a completion artifact for a stage of a project.
    pub fn record_upload(
        &mut self,
        project_no: &str,
        stage_no: u8,
        file_name: &str,
    ) -> Result<StageUpload> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        tx.execute(
            INSERT_UPLOAD_SQL,
            params![project_no, stage_no as i64, file_name, now.to_string()],
        )
        .map_err(|e| PlanError::database_error("Failed to insert stage upload", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(StageUpload {
            id,
            project_no: project_no.into(),
            stage_no,
            file_name: file_name.into(),
            uploaded_at: now,
        })
    }

    /// Lists all recorded uploads for a project, ordered by stage.
    pub fn list_uploads(&self, project_no: &str) -> Result<Vec<StageUpload>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_UPLOADS_SQL)
            .map_err(|e| PlanError::database_error("Failed to prepare query", e))?;

        let uploads = stmt
            .query_map(params![project_no], |row| {
                Ok(StageUpload {
                    id: row.get::<_, i64>(0)? as u64,
                    project_no: row.get(1)?,
                    stage_no: row.get::<_, i64>(2)? as u8,
                    file_name: row.get(3)?,
                    uploaded_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(
                        |e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)),
                    )?,
                })
            })
            .map_err(|e| PlanError::database_error("Failed to query stage uploads", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlanError::database_error("Failed to fetch stage uploads", e));
        uploads
    }

    /// Returns the set of stage numbers with at least one recorded upload
    /// for the project. An empty set is valid: no stages completed yet.
    pub fn completed_stages(&self, project_no: &str) -> Result<BTreeSet<u8>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_COMPLETED_STAGES_SQL)
            .map_err(|e| PlanError::database_error("Failed to prepare query", e))?;

        let stages = stmt
            .query_map(params![project_no], |row| Ok(row.get::<_, i64>(0)? as u8))
            .map_err(|e| PlanError::database_error("Failed to query completed stages", e))?
            .collect::<std::result::Result<BTreeSet<_>, _>>()
            .map_err(|e| PlanError::database_error("Failed to fetch completed stages", e));
        stages
    }
}
