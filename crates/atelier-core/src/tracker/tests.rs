//! Tests for the tracker module.

use tempfile::TempDir;

use super::*;
use crate::{
    error::PlanError,
    models::{FlowStatus, LampStatus, ProjectPhase},
    params::{
        CreateProject, DeleteProject, Id, ListProjects, RecordUpload, RenameStage, StagePlanParams,
        UpdateProject,
    },
};

/// Helper function to create a test tracker
async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

fn sample_project(project_no: &str) -> CreateProject {
    CreateProject {
        project_no: project_no.to_string(),
        title: "Hillside House".to_string(),
        description: Some("Two-storey residence".to_string()),
        phase: Some("design".to_string()),
        start_date: Some("2099-01-01".to_string()),
        estimated_days: Some(100),
    }
}

#[tokio::test]
async fn test_create_and_show_project() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let created = tracker
        .create_project(&sample_project("20250001"))
        .await
        .expect("Failed to create project");

    assert_eq!(created.project_no, "20250001");
    assert_eq!(created.title, "Hillside House");
    assert_eq!(created.phase, ProjectPhase::Design);
    assert_eq!(created.estimated_days, Some(100));

    let shown = tracker
        .show_project(&Id { id: created.id })
        .await
        .expect("Failed to show project")
        .expect("Project should exist");
    assert_eq!(shown, created);
}

#[tokio::test]
async fn test_show_missing_project_returns_none() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let shown = tracker
        .show_project(&Id { id: 42 })
        .await
        .expect("Failed to query project");
    assert!(shown.is_none());
}

#[tokio::test]
async fn test_create_rejects_duplicate_project_no() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    tracker
        .create_project(&sample_project("20250001"))
        .await
        .expect("Failed to create project");

    let result = tracker.create_project(&sample_project("20250001")).await;
    assert!(matches!(result, Err(PlanError::Database { .. })));
}

#[tokio::test]
async fn test_list_projects_with_filters() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    tracker
        .create_project(&sample_project("20250001"))
        .await
        .expect("Failed to create project");
    tracker
        .create_project(&CreateProject {
            project_no: "20250002".to_string(),
            title: "Garden Pavilion".to_string(),
            phase: Some("waiting".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create project");

    let all = tracker
        .list_projects(&ListProjects::default())
        .await
        .expect("Failed to list projects");
    assert_eq!(all.len(), 2);

    let design = tracker
        .list_projects(&ListProjects {
            phase: Some(ProjectPhase::Design),
            title: None,
        })
        .await
        .expect("Failed to list projects");
    assert_eq!(design.len(), 1);
    assert_eq!(design[0].project_no, "20250001");

    let by_title = tracker
        .list_projects(&ListProjects {
            phase: None,
            title: Some("Pavilion".to_string()),
        })
        .await
        .expect("Failed to list projects");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "Garden Pavilion");
}

#[tokio::test]
async fn test_update_project_partial() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let created = tracker
        .create_project(&sample_project("20250001"))
        .await
        .expect("Failed to create project");

    let updated = tracker
        .update_project(&UpdateProject {
            id: created.id,
            phase: Some("build".to_string()),
            estimated_days: Some(120),
            ..Default::default()
        })
        .await
        .expect("Failed to update project")
        .expect("Project should exist");

    assert_eq!(updated.phase, ProjectPhase::Build);
    assert_eq!(updated.estimated_days, Some(120));
    // Untouched fields keep their stored values
    assert_eq!(updated.title, "Hillside House");
    assert_eq!(updated.project_no, "20250001");
}

#[tokio::test]
async fn test_update_missing_project_returns_none() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let updated = tracker
        .update_project(&UpdateProject {
            id: 42,
            title: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to run update");
    assert!(updated.is_none());
}

#[tokio::test]
async fn test_delete_project_requires_confirmation() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let created = tracker
        .create_project(&sample_project("20250001"))
        .await
        .expect("Failed to create project");

    let result = tracker
        .delete_project(&DeleteProject {
            id: created.id,
            confirmed: false,
        })
        .await;
    assert!(matches!(result, Err(PlanError::InvalidInput { .. })));

    // Project is still there
    let shown = tracker
        .show_project(&Id { id: created.id })
        .await
        .expect("Failed to show project");
    assert!(shown.is_some());
}

#[tokio::test]
async fn test_delete_project_removes_uploads() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let created = tracker
        .create_project(&sample_project("20250001"))
        .await
        .expect("Failed to create project");

    tracker
        .record_upload(&RecordUpload {
            project_id: created.id,
            stage_no: 1,
            file_name: "survey.pdf".to_string(),
        })
        .await
        .expect("Failed to record upload");

    let deleted = tracker
        .delete_project(&DeleteProject {
            id: created.id,
            confirmed: true,
        })
        .await
        .expect("Failed to delete project")
        .expect("Project should have existed");
    assert_eq!(deleted.id, created.id);

    let shown = tracker
        .show_project(&Id { id: created.id })
        .await
        .expect("Failed to query project");
    assert!(shown.is_none());
}

#[tokio::test]
async fn test_record_upload_unknown_project() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let result = tracker
        .record_upload(&RecordUpload {
            project_id: 42,
            stage_no: 1,
            file_name: "survey.pdf".to_string(),
        })
        .await;
    assert!(matches!(
        result,
        Err(PlanError::ProjectNotFound { id: 42 })
    ));
}

#[tokio::test]
async fn test_list_uploads_in_stage_order() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let created = tracker
        .create_project(&sample_project("20250001"))
        .await
        .expect("Failed to create project");

    for (stage_no, file_name) in [(3, "staking.pdf"), (1, "survey.pdf")] {
        tracker
            .record_upload(&RecordUpload {
                project_id: created.id,
                stage_no,
                file_name: file_name.to_string(),
            })
            .await
            .expect("Failed to record upload");
    }

    let uploads = tracker
        .list_uploads(&Id { id: created.id })
        .await
        .expect("Failed to list uploads");
    assert_eq!(uploads.len(), 2);
    assert_eq!(uploads[0].stage_no, 1);
    assert_eq!(uploads[1].stage_no, 3);
}

#[tokio::test]
async fn test_stage_plan_allocates_and_schedules() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let created = tracker
        .create_project(&sample_project("20250001"))
        .await
        .expect("Failed to create project");

    let plan = tracker
        .stage_plan(&StagePlanParams {
            id: created.id,
            start: None,
            days: None,
        })
        .await
        .expect("Failed to compute stage plan");

    assert_eq!(plan.project_no, "20250001");
    assert_eq!(plan.total_days, 100);
    assert_eq!(plan.stages.len(), 8);
    assert_eq!(plan.stages.iter().map(|s| s.days).sum::<i64>(), 100);

    // Design phase, start far in the future: doing, no lamps
    for stage in &plan.stages {
        assert_eq!(stage.flow, FlowStatus::Doing);
        assert_eq!(stage.lamp, LampStatus::None);
    }
}

#[tokio::test]
async fn test_stage_plan_overrides_win() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let created = tracker
        .create_project(&sample_project("20250001"))
        .await
        .expect("Failed to create project");

    let plan = tracker
        .stage_plan(&StagePlanParams {
            id: created.id,
            start: Some("2099-06-01".to_string()),
            days: Some(40),
        })
        .await
        .expect("Failed to compute stage plan");

    assert_eq!(plan.total_days, 40);
    assert_eq!(plan.start_date, jiff::civil::date(2099, 6, 1));
    assert_eq!(plan.stages.iter().map(|s| s.days).sum::<i64>(), 40);
}

#[tokio::test]
async fn test_stage_plan_upload_marks_stage_green() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let created = tracker
        .create_project(&sample_project("20250001"))
        .await
        .expect("Failed to create project");

    tracker
        .record_upload(&RecordUpload {
            project_id: created.id,
            stage_no: 2,
            file_name: "case-study.pdf".to_string(),
        })
        .await
        .expect("Failed to record upload");

    let plan = tracker
        .stage_plan(&StagePlanParams {
            id: created.id,
            start: None,
            days: None,
        })
        .await
        .expect("Failed to compute stage plan");

    let stage2 = &plan.stages[1];
    assert_eq!(stage2.number, 2);
    assert_eq!(stage2.flow, FlowStatus::Completed);
    assert_eq!(stage2.lamp, LampStatus::Green);
    // Other stages are unaffected
    assert_eq!(plan.stages[0].flow, FlowStatus::Doing);
}

#[tokio::test]
async fn test_stage_plan_long_past_start_goes_red() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let created = tracker
        .create_project(&CreateProject {
            project_no: "20250001".to_string(),
            title: "Old Project".to_string(),
            phase: Some("build".to_string()),
            start_date: Some("2000-01-01".to_string()),
            estimated_days: Some(100),
            ..Default::default()
        })
        .await
        .expect("Failed to create project");

    let plan = tracker
        .stage_plan(&StagePlanParams {
            id: created.id,
            start: None,
            days: None,
        })
        .await
        .expect("Failed to compute stage plan");

    // Every stage ended decades ago
    for stage in &plan.stages {
        assert_eq!(stage.lamp, LampStatus::Red);
        assert!(stage.overdue_days >= 7);
    }
}

#[tokio::test]
async fn test_stage_plan_waiting_project_never_alerts() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let created = tracker
        .create_project(&CreateProject {
            project_no: "20250001".to_string(),
            title: "Not Started".to_string(),
            phase: Some("waiting".to_string()),
            start_date: Some("2000-01-01".to_string()),
            estimated_days: Some(100),
            ..Default::default()
        })
        .await
        .expect("Failed to create project");

    let plan = tracker
        .stage_plan(&StagePlanParams {
            id: created.id,
            start: None,
            days: None,
        })
        .await
        .expect("Failed to compute stage plan");

    for stage in &plan.stages {
        assert_eq!(stage.flow, FlowStatus::Waiting);
        assert_eq!(stage.lamp, LampStatus::None);
        assert_eq!(stage.overdue_days, 0);
    }
}

#[tokio::test]
async fn test_stage_plan_missing_inputs() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let created = tracker
        .create_project(&CreateProject {
            project_no: "20250001".to_string(),
            title: "Bare Project".to_string(),
            ..Default::default()
        })
        .await
        .expect("Failed to create project");

    // No start date anywhere
    let result = tracker
        .stage_plan(&StagePlanParams {
            id: created.id,
            start: None,
            days: Some(100),
        })
        .await;
    assert!(matches!(result, Err(PlanError::InvalidStartDate { .. })));

    // No duration anywhere
    let result = tracker
        .stage_plan(&StagePlanParams {
            id: created.id,
            start: Some("2099-01-01".to_string()),
            days: None,
        })
        .await;
    assert!(matches!(result, Err(PlanError::InvalidDuration { .. })));
}

#[tokio::test]
async fn test_stage_plan_unknown_project() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let result = tracker
        .stage_plan(&StagePlanParams {
            id: 42,
            start: None,
            days: None,
        })
        .await;
    assert!(matches!(
        result,
        Err(PlanError::ProjectNotFound { id: 42 })
    ));
}

#[tokio::test]
async fn test_rename_stage_shows_up_in_plans() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let created = tracker
        .create_project(&sample_project("20250001"))
        .await
        .expect("Failed to create project");

    tracker
        .rename_stage(&RenameStage {
            stage_no: 1,
            name: "Measurement".to_string(),
        })
        .await
        .expect("Failed to rename stage");

    let plan = tracker
        .stage_plan(&StagePlanParams {
            id: created.id,
            start: None,
            days: None,
        })
        .await
        .expect("Failed to compute stage plan");

    assert_eq!(plan.stages[0].name, "Measurement");
    assert_eq!(plan.stages[1].name, "Case Study");

    // Renaming again replaces the override
    tracker
        .rename_stage(&RenameStage {
            stage_no: 1,
            name: "Site Measurement".to_string(),
        })
        .await
        .expect("Failed to rename stage");

    let plan = tracker
        .stage_plan(&StagePlanParams {
            id: created.id,
            start: None,
            days: None,
        })
        .await
        .expect("Failed to compute stage plan");
    assert_eq!(plan.stages[0].name, "Site Measurement");
}

#[tokio::test]
async fn test_rename_stage_rejects_out_of_range() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let result = tracker
        .rename_stage(&RenameStage {
            stage_no: 9,
            name: "Extra".to_string(),
        })
        .await;
    assert!(matches!(result, Err(PlanError::InvalidInput { .. })));
}
