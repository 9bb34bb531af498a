//! Stage-name override queries.
//!
//! The `stage_names` table holds optional display-name overrides for stages
//! 1..=8; the catalog merges them over the built-in defaults.

use std::collections::HashMap;

use rusqlite::params;

use crate::error::{DatabaseResultExt, PlanError, Result};

const UPSERT_STAGE_NAME_SQL: &str = "INSERT INTO stage_names (stage_no, name) VALUES (?1, ?2) ON CONFLICT(stage_no) DO UPDATE SET name = excluded.name";
const SELECT_STAGE_NAMES_SQL: &str = "SELECT stage_no, name FROM stage_names ORDER BY stage_no ASC";

impl super::Database {
    /// Sets or replaces the display-name override for a stage.
    pub fn set_stage_name(&mut self, stage_no: u8, name: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(UPSERT_STAGE_NAME_SQL, params![stage_no as i64, name])
            .map_err(|e| PlanError::database_error("Failed to upsert stage name", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Returns all stored stage-name overrides, keyed by stage number.
    pub fn stage_name_overrides(&self) -> Result<HashMap<u8, String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_STAGE_NAMES_SQL)
            .map_err(|e| PlanError::database_error("Failed to prepare query", e))?;

        let overrides = stmt
            .query_map([], |row| {
                Ok((row.get::<_, i64>(0)? as u8, row.get::<_, String>(1)?))
            })
            .map_err(|e| PlanError::database_error("Failed to query stage names", e))?
            .collect::<std::result::Result<HashMap<_, _>, _>>()
            .map_err(|e| PlanError::database_error("Failed to fetch stage names", e));
        overrides
    }
}
