//! Parameter structures for Atelier operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI today, other front ends later) without
//! framework-specific derives or dependencies. Interface layers define their
//! own wrapper structs (with clap derives and the like) and convert into
//! these via `From` implementations, keeping the core free of UI concerns.
//!
//! Parameters that carry user-entered text (dates, phase codes, stage
//! numbers) expose a `validate()` method that parses the text into domain
//! types and maps failures onto the library's error taxonomy.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::STAGE_COUNT,
    error::{PlanError, Result},
    models::ProjectPhase,
};

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like show_project, list_uploads, stage_plan defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProject {
    /// External project number, unique per project (required)
    pub project_no: String,
    /// Title of the project (required)
    pub title: String,
    /// Optional detailed description of the project
    pub description: Option<String>,
    /// Overall phase code ('waiting', 'design', 'build', 'finished');
    /// defaults to 'waiting'
    pub phase: Option<String>,
    /// Planned first day of stage 1 as 'YYYY-MM-DD'
    pub start_date: Option<String>,
    /// Total estimated duration in calendar days
    pub estimated_days: Option<i64>,
}

impl CreateProject {
    /// Validate and parse the textual fields.
    ///
    /// # Errors
    ///
    /// * `PlanError::InvalidInput` - empty project number or title, or an
    ///   unknown phase code
    /// * `PlanError::InvalidStartDate` - malformed start date
    /// * `PlanError::InvalidDuration` - non-positive estimated days
    pub fn validate(&self) -> Result<(ProjectPhase, Option<Date>)> {
        if self.project_no.trim().is_empty() {
            return Err(PlanError::invalid_input(
                "project_no",
                "Project number must not be empty",
            ));
        }
        if self.title.trim().is_empty() {
            return Err(PlanError::invalid_input("title", "Title must not be empty"));
        }

        let phase = parse_phase(self.phase.as_deref())?;
        let start_date = parse_start_date(self.start_date.as_deref())?;
        validate_estimated_days(self.estimated_days)?;

        Ok((phase, start_date))
    }
}

/// Parameters for listing projects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListProjects {
    /// Only show projects in this phase
    #[serde(default)]
    pub phase: Option<ProjectPhase>,
    /// Only show projects whose title contains this text
    #[serde(default)]
    pub title: Option<String>,
}

/// Parameters for updating an existing project.
///
/// Allows partial updates: only the provided fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProject {
    /// Project ID to update (required)
    pub id: u64,
    /// Updated title of the project
    pub title: Option<String>,
    /// Updated detailed description of the project
    pub description: Option<String>,
    /// New overall phase code ('waiting', 'design', 'build', 'finished')
    pub phase: Option<String>,
    /// New planned first day of stage 1 as 'YYYY-MM-DD'
    pub start_date: Option<String>,
    /// New total estimated duration in calendar days
    pub estimated_days: Option<i64>,
}

impl UpdateProject {
    /// Validate and parse the textual fields.
    ///
    /// Returns the parsed phase and start date when supplied.
    pub fn validate(&self) -> Result<(Option<ProjectPhase>, Option<Date>)> {
        let phase = match self.phase.as_deref() {
            Some(code) => Some(parse_phase(Some(code))?),
            None => None,
        };
        let start_date = parse_start_date(self.start_date.as_deref())?;
        validate_estimated_days(self.estimated_days)?;
        Ok((phase, start_date))
    }
}

/// Parameters for permanently deleting a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteProject {
    /// Project ID to delete
    pub id: u64,
    /// Explicit confirmation flag; deletion is refused without it
    pub confirmed: bool,
}

/// Parameters for recording a stage completion artifact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordUpload {
    /// ID of the project the artifact belongs to
    pub project_id: u64,
    /// Stage number (1..=8) the artifact completes
    pub stage_no: u8,
    /// Name of the uploaded file
    pub file_name: String,
}

impl RecordUpload {
    /// Validate the stage number and file name.
    pub fn validate(&self) -> Result<()> {
        validate_stage_no(self.stage_no)?;
        if self.file_name.trim().is_empty() {
            return Err(PlanError::invalid_input(
                "file_name",
                "File name must not be empty",
            ));
        }
        Ok(())
    }
}

/// Parameters for overriding a stage's display name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameStage {
    /// Stage number (1..=8) to rename
    pub stage_no: u8,
    /// New display name
    pub name: String,
}

impl RenameStage {
    /// Validate the stage number and name.
    pub fn validate(&self) -> Result<()> {
        validate_stage_no(self.stage_no)?;
        if self.name.trim().is_empty() {
            return Err(PlanError::invalid_input("name", "Name must not be empty"));
        }
        Ok(())
    }
}

/// Parameters for computing a project's stage plan.
///
/// The optional start/days overrides support ad-hoc previews without
/// touching the stored project row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StagePlanParams {
    /// ID of the project to plan
    pub id: u64,
    /// Override the stored start date ('YYYY-MM-DD')
    pub start: Option<String>,
    /// Override the stored estimated duration in days
    pub days: Option<i64>,
}

impl StagePlanParams {
    /// Validate and parse the override fields.
    pub fn validate(&self) -> Result<Option<Date>> {
        let start = parse_start_date(self.start.as_deref())?;
        validate_estimated_days(self.days)?;
        Ok(start)
    }
}

fn parse_phase(code: Option<&str>) -> Result<ProjectPhase> {
    match code {
        None => Ok(ProjectPhase::Waiting),
        Some(code) => ProjectPhase::from_str(code).map_err(|_| {
            PlanError::invalid_input(
                "phase",
                format!(
                    "Invalid phase: {code}. Must be 'waiting', 'design', 'build', or 'finished'"
                ),
            )
        }),
    }
}

fn parse_start_date(value: Option<&str>) -> Result<Option<Date>> {
    match value {
        None => Ok(None),
        Some(value) => value
            .parse::<Date>()
            .map(Some)
            .map_err(|e| PlanError::invalid_start_date(value, e.to_string())),
    }
}

fn validate_estimated_days(days: Option<i64>) -> Result<()> {
    match days {
        Some(days) if days <= 0 => Err(PlanError::invalid_duration(format!(
            "estimated days must be positive, got {days}"
        ))),
        _ => Ok(()),
    }
}

fn validate_stage_no(stage_no: u8) -> Result<()> {
    if (1..=STAGE_COUNT).contains(&stage_no) {
        Ok(())
    } else {
        Err(PlanError::invalid_input(
            "stage_no",
            format!("Stage number must be between 1 and {STAGE_COUNT}, got {stage_no}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn create_project_parses_phase_and_date() {
        let params = CreateProject {
            project_no: "20250001".to_string(),
            title: "Lakeside Flat".to_string(),
            description: None,
            phase: Some("design".to_string()),
            start_date: Some("2025-01-01".to_string()),
            estimated_days: Some(100),
        };

        let (phase, start) = params.validate().expect("params should validate");
        assert_eq!(phase, ProjectPhase::Design);
        assert_eq!(start, Some(date(2025, 1, 1)));
    }

    #[test]
    fn create_project_defaults_to_waiting() {
        let params = CreateProject {
            project_no: "20250001".to_string(),
            title: "Lakeside Flat".to_string(),
            ..Default::default()
        };

        let (phase, start) = params.validate().expect("params should validate");
        assert_eq!(phase, ProjectPhase::Waiting);
        assert_eq!(start, None);
    }

    #[test]
    fn create_project_rejects_empty_project_no() {
        let params = CreateProject {
            project_no: "  ".to_string(),
            title: "Lakeside Flat".to_string(),
            ..Default::default()
        };

        match params.validate().unwrap_err() {
            PlanError::InvalidInput { field, .. } => assert_eq!(field, "project_no"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn create_project_rejects_bad_phase() {
        let params = CreateProject {
            project_no: "20250001".to_string(),
            title: "Lakeside Flat".to_string(),
            phase: Some("demolition".to_string()),
            ..Default::default()
        };

        match params.validate().unwrap_err() {
            PlanError::InvalidInput { field, reason } => {
                assert_eq!(field, "phase");
                assert!(reason.contains("demolition"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn create_project_rejects_bad_date() {
        let params = CreateProject {
            project_no: "20250001".to_string(),
            title: "Lakeside Flat".to_string(),
            start_date: Some("01/02/2025".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            params.validate().unwrap_err(),
            PlanError::InvalidStartDate { .. }
        ));
    }

    #[test]
    fn create_project_rejects_non_positive_days() {
        let params = CreateProject {
            project_no: "20250001".to_string(),
            title: "Lakeside Flat".to_string(),
            estimated_days: Some(0),
            ..Default::default()
        };

        assert!(matches!(
            params.validate().unwrap_err(),
            PlanError::InvalidDuration { .. }
        ));
    }

    #[test]
    fn update_project_accepts_finished_capitalized() {
        let params = UpdateProject {
            id: 1,
            phase: Some("Finished".to_string()),
            ..Default::default()
        };

        let (phase, _) = params.validate().expect("params should validate");
        assert_eq!(phase, Some(ProjectPhase::Finished));
    }

    #[test]
    fn record_upload_rejects_stage_out_of_range() {
        let params = RecordUpload {
            project_id: 1,
            stage_no: 9,
            file_name: "plan.pdf".to_string(),
        };

        match params.validate().unwrap_err() {
            PlanError::InvalidInput { field, .. } => assert_eq!(field, "stage_no"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn stage_plan_params_parse_overrides() {
        let params = StagePlanParams {
            id: 1,
            start: Some("2025-06-01".to_string()),
            days: Some(60),
        };

        let start = params.validate().expect("params should validate");
        assert_eq!(start, Some(date(2025, 6, 1)));
    }
}
