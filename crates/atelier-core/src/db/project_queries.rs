//! Project CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, PlanError, Result},
    models::{Project, ProjectFilter, ProjectPhase, ProjectSummary},
};

// Optimized SQL queries as const strings for compile-time optimization
const INSERT_PROJECT_SQL: &str = "INSERT INTO projects (project_no, title, description, phase, start_date, estimated_days, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const PROJECT_COLUMNS: &str =
    "id, project_no, title, description, phase, start_date, estimated_days, created_at, updated_at";
const CHECK_PROJECT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)";
const DELETE_PROJECT_UPLOADS_SQL: &str =
    "DELETE FROM stage_uploads WHERE project_no = (SELECT project_no FROM projects WHERE id = ?1)";
const DELETE_PROJECT_SQL: &str = "DELETE FROM projects WHERE id = ?1";

/// Maps a row of `PROJECT_COLUMNS` onto a [`Project`].
fn project_from_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    let phase_str: String = row.get(4)?;
    let start_date = row
        .get::<_, Option<String>>(5)?
        .map(|s| {
            s.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })
        })
        .transpose()?;

    Ok(Project {
        id: row.get::<_, i64>(0)? as u64,
        project_no: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        phase: ProjectPhase::parse_lenient(&phase_str),
        start_date,
        estimated_days: row.get(6)?,
        created_at: row.get::<_, String>(7)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e))
        })?,
        updated_at: row.get::<_, String>(8)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(8, Type::Text, Box::new(e))
        })?,
    })
}

impl super::Database {
    /// Creates a new project row.
    ///
    /// The phase is stored lowercase; the start date is stored as
    /// `YYYY-MM-DD` text.
    pub fn create_project(
        &mut self,
        project_no: &str,
        title: &str,
        description: Option<&str>,
        phase: ProjectPhase,
        start_date: Option<Date>,
        estimated_days: Option<i64>,
    ) -> Result<Project> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();
        let start_str = start_date.map(|d| d.to_string());

        tx.execute(
            INSERT_PROJECT_SQL,
            params![
                project_no,
                title,
                description,
                phase.as_str(),
                start_str.as_deref(),
                estimated_days,
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| PlanError::database_error("Failed to insert project", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Project {
            id,
            project_no: project_no.into(),
            title: title.into(),
            description: description.map(String::from),
            phase,
            start_date,
            estimated_days,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a project by its ID.
    pub fn get_project(&self, id: u64) -> Result<Option<Project>> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| PlanError::database_error("Failed to prepare query", e))?;

        stmt.query_row(params![id as i64], project_from_row)
            .optional()
            .map_err(|e| PlanError::database_error("Failed to query project", e))
    }

    /// Lists projects as summaries with completed-stage counts, optionally
    /// filtered, newest first.
    pub fn list_projects(&self, filter: Option<&ProjectFilter>) -> Result<Vec<ProjectSummary>> {
        let mut query = format!(
            "SELECT {PROJECT_COLUMNS}, \
             (SELECT COUNT(DISTINCT u.stage_no) FROM stage_uploads u \
              WHERE u.project_no = projects.project_no) AS completed_stages \
             FROM projects"
        );

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(f) = filter {
            if let Some(ref title) = f.title_contains {
                conditions.push("title LIKE ?");
                params_vec.push(Box::new(format!("%{title}%")));
            }

            if let Some(ref project_no) = f.project_no {
                conditions.push("project_no = ?");
                params_vec.push(Box::new(project_no.clone()));
            }

            if let Some(ref phase) = f.phase {
                conditions.push("phase = ?");
                params_vec.push(Box::new(phase.as_str().to_string()));
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY created_at DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| PlanError::database_error("Failed to prepare query", e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let summaries: Vec<ProjectSummary> = stmt
            .query_map(&params_refs[..], |row| {
                let project = project_from_row(row)?;
                let completed_stages: i64 = row.get(9)?;
                Ok(ProjectSummary::from_project(project, completed_stages as u32))
            })
            .map_err(|e| PlanError::database_error("Failed to query projects", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlanError::database_error("Failed to fetch projects", e))?;

        Ok(summaries)
    }

    /// Applies a partial update to a project row.
    ///
    /// Only the provided fields change; `updated_at` is always refreshed.
    /// Returns the updated project, or None if the project doesn't exist.
    #[allow(clippy::too_many_arguments)]
    pub fn update_project(
        &mut self,
        id: u64,
        title: Option<&str>,
        description: Option<&str>,
        phase: Option<ProjectPhase>,
        start_date: Option<Date>,
        estimated_days: Option<i64>,
    ) -> Result<Option<Project>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_PROJECT_EXISTS_SQL, params![id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| PlanError::database_error("Failed to check project existence", e))?;
        if !exists {
            return Ok(None);
        }

        let mut assignments = vec!["updated_at = ?"];
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> =
            vec![Box::new(Timestamp::now().to_string())];

        if let Some(title) = title {
            assignments.push("title = ?");
            params_vec.push(Box::new(title.to_string()));
        }
        if let Some(description) = description {
            assignments.push("description = ?");
            params_vec.push(Box::new(description.to_string()));
        }
        if let Some(phase) = phase {
            assignments.push("phase = ?");
            params_vec.push(Box::new(phase.as_str().to_string()));
        }
        if let Some(start_date) = start_date {
            assignments.push("start_date = ?");
            params_vec.push(Box::new(start_date.to_string()));
        }
        if let Some(estimated_days) = estimated_days {
            assignments.push("estimated_days = ?");
            params_vec.push(Box::new(estimated_days));
        }

        let query = format!(
            "UPDATE projects SET {} WHERE id = ?",
            assignments.join(", ")
        );
        params_vec.push(Box::new(id as i64));
        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        tx.execute(&query, &params_refs[..])
            .map_err(|e| PlanError::database_error("Failed to update project", e))?;

        let select = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?1");
        let project = tx
            .query_row(&select, params![id as i64], project_from_row)
            .optional()
            .map_err(|e| PlanError::database_error("Failed to query updated project", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(project)
    }

    /// Permanently deletes a project and all its recorded stage uploads.
    /// This operation cannot be undone.
    pub fn delete_project(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_PROJECT_EXISTS_SQL, params![id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| PlanError::database_error("Failed to check project existence", e))?;

        if !exists {
            return Err(PlanError::ProjectNotFound { id });
        }

        // Uploads reference the project by number, not by row ID, so they
        // must go before the project row does.
        tx.execute(DELETE_PROJECT_UPLOADS_SQL, params![id as i64])
            .map_err(|e| PlanError::database_error("Failed to delete project uploads", e))?;

        tx.execute(DELETE_PROJECT_SQL, params![id as i64])
            .map_err(|e| PlanError::database_error("Failed to delete project", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
