//! Core library for the Atelier stage tracking application.
//!
//! This crate provides the core business logic for tracking design and
//! construction projects through their eight-stage lifecycle: data models,
//! the planning engine, database operations, and error handling.
//!
//! # Planning Engine
//!
//! The heart of the crate is the pure [`engine`] module, which turns a
//! project's start date and estimated duration into a classified stage plan:
//! weighted day allocation, contiguous calendar layout, and per-stage status
//! classification. The [`tracker`] layer wires it to the SQLite stores.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for
//!   direct formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use atelier_core::{params::CreateProject, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a tracker instance
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! // Create a new project
//! let create_params = CreateProject {
//!     project_no: "20250001".to_string(),
//!     title: "Hillside House".to_string(),
//!     description: None,
//!     phase: Some("design".to_string()),
//!     start_date: Some("2025-01-01".to_string()),
//!     estimated_days: Some(100),
//! };
//!
//! let project = tracker.create_project(&create_params).await?;
//! println!("Created project: {}", project);
//!
//! // Compute its stage plan
//! use atelier_core::params::StagePlanParams;
//! let plan = tracker
//!     .stage_plan(&StagePlanParams {
//!         id: project.id,
//!         start: None,
//!         days: None,
//!     })
//!     .await?;
//! println!("{}", plan);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod tracker;

// Re-export commonly used types
pub use catalog::{StageCatalog, STAGE_COUNT};
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, LocalDateTime, OperationStatus, ProjectSummaries, StageUploads,
    UpdateResult,
};
pub use engine::{build_plan, today_in_reporting_zone, PlanRequest, REPORTING_ZONE};
pub use error::{PlanError, Result};
pub use models::{
    AllocatedStage, FlowStatus, LampStatus, Project, ProjectFilter, ProjectPhase, ProjectSummary,
    ScheduledStage, StageDefinition, StagePlan, StageReport, StageUpload,
};
pub use params::{
    CreateProject, DeleteProject, Id, ListProjects, RecordUpload, RenameStage, StagePlanParams,
    UpdateProject,
};
pub use tracker::{Tracker, TrackerBuilder};
