//! Data models for projects, stages, and plan output.
//!
//! This module contains the core domain models of the Atelier stage tracking
//! system. Display implementations live in [`crate::display::models`] to keep
//! data structures and presentation logic apart.
//!
//! Two families of types live here:
//!
//! - **Persistent rows** ([`Project`], [`StageUpload`]): loaded from and
//!   stored to the SQLite database by the tracker layer.
//! - **Engine values** ([`StageDefinition`], [`AllocatedStage`],
//!   [`ScheduledStage`], [`StageReport`], [`StagePlan`]): transient, computed
//!   fresh per plan request and never persisted.

pub mod filters;
pub mod project;
pub mod stage;
pub mod status;
pub mod upload;


// Re-export all public types at the models level
pub use filters::ProjectFilter;
pub use project::{Project, ProjectSummary};
pub use stage::{AllocatedStage, ScheduledStage, StageDefinition, StagePlan, StageReport};
pub use status::{FlowStatus, LampStatus, ProjectPhase};
pub use upload::StageUpload;
