//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic.
//!
//! ## Parameter Wrapper Pattern Implementation
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! Each command defines a CLI-specific argument structure with clap derives
//! and converts it into the framework-free core parameter type via `From`.
//! This keeps CLI concerns (help text, flags, aliases) in the CLI layer
//! while core types remain interface-agnostic, and makes the conversion
//! explicit and verifiable at compile time.

use anyhow::Result;
use atelier_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    models::ProjectPhase,
    params::*,
    Tracker,
};
use clap::{Args, Subcommand, ValueEnum};

use crate::renderer::TerminalRenderer;

/// Command handler that pairs the tracker with a terminal renderer.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Create a new project
///
/// CLI wrapper for CreateProject that adds clap-specific argument handling
/// including short/long flags, help text generation, and input validation.
#[derive(Args)]
pub struct CreateProjectArgs {
    /// External project number (e.g. 20250001); must be unique
    pub project_no: String,
    /// Title of the project
    pub title: String,
    /// Optional description providing more context about the project
    #[arg(
        short,
        long,
        help = "Optional description providing more context about the project"
    )]
    pub description: Option<String>,
    /// Overall phase of the project
    #[arg(short, long, help = "Overall phase (waiting, design, build, finished)")]
    pub phase: Option<PhaseArg>,
    /// Planned first day of stage 1
    #[arg(long, help = "Planned first day of stage 1 as YYYY-MM-DD")]
    pub start_date: Option<String>,
    /// Total estimated duration in calendar days
    #[arg(long, help = "Total estimated duration in calendar days")]
    pub days: Option<i64>,
}

impl From<CreateProjectArgs> for CreateProject {
    fn from(val: CreateProjectArgs) -> Self {
        CreateProject {
            project_no: val.project_no,
            title: val.title,
            description: val.description,
            phase: val.phase.map(|p| p.to_string()),
            start_date: val.start_date,
            estimated_days: val.days,
        }
    }
}

/// List all projects
///
/// Display every tracked project as a summary line with its phase and
/// stage-completion count. Filters narrow the list by phase or title text.
#[derive(Args)]
pub struct ListProjectsArgs {
    /// Only show projects in this phase
    #[arg(short, long, help = "Only show projects in this phase")]
    pub phase: Option<PhaseArg>,
    /// Only show projects whose title contains this text
    #[arg(short, long, help = "Only show projects whose title contains this text")]
    pub title: Option<String>,
}

impl From<ListProjectsArgs> for ListProjects {
    fn from(val: ListProjectsArgs) -> Self {
        ListProjects {
            phase: val.phase.map(Into::into),
            title: val.title,
        }
    }
}

/// Show details of a specific project
#[derive(Args)]
pub struct ShowProjectArgs {
    /// ID of the project to display
    #[arg(help = "Unique identifier of the project to show details for")]
    pub id: u64,
}

impl From<ShowProjectArgs> for Id {
    fn from(val: ShowProjectArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a project's details
///
/// Allows modifying any aspect of an existing project. Only the provided
/// fields change; the rest keep their stored values.
#[derive(Args)]
pub struct UpdateProjectArgs {
    #[arg(help = "Unique identifier of the project to update")]
    pub id: u64,
    #[arg(short, long, help = "Updated title for the project")]
    pub title: Option<String>,
    #[arg(short, long, help = "Updated description for the project")]
    pub description: Option<String>,
    #[arg(short, long, help = "New overall phase (waiting, design, build, finished)")]
    pub phase: Option<PhaseArg>,
    #[arg(long, help = "New planned first day of stage 1 as YYYY-MM-DD")]
    pub start_date: Option<String>,
    #[arg(long, help = "New total estimated duration in calendar days")]
    pub days: Option<i64>,
}

impl UpdateProjectArgs {
    /// Human-readable list of the fields this update touches.
    fn describe_changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if self.title.is_some() {
            changes.push("Updated title".to_string());
        }
        if self.description.is_some() {
            changes.push("Updated description".to_string());
        }
        if let Some(phase) = self.phase {
            changes.push(format!("Changed phase to {phase}"));
        }
        if let Some(start) = &self.start_date {
            changes.push(format!("Changed start date to {start}"));
        }
        if let Some(days) = self.days {
            changes.push(format!("Changed estimated days to {days}"));
        }
        changes
    }
}

impl From<UpdateProjectArgs> for UpdateProject {
    fn from(val: UpdateProjectArgs) -> Self {
        UpdateProject {
            id: val.id,
            title: val.title,
            description: val.description,
            phase: val.phase.map(|p| p.to_string()),
            start_date: val.start_date,
            estimated_days: val.days,
        }
    }
}

/// Delete a project permanently
#[derive(Args)]
pub struct DeleteProjectArgs {
    /// ID of the project to delete
    #[arg(help = "Unique identifier of the project to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteProjectArgs> for DeleteProject {
    fn from(val: DeleteProjectArgs) -> Self {
        DeleteProject {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a new project
    #[command(alias = "c")]
    Create(CreateProjectArgs),
    /// List all projects
    #[command(aliases = ["l", "ls"])]
    List(ListProjectsArgs),
    /// Show details of a specific project
    #[command(alias = "s")]
    Show(ShowProjectArgs),
    /// Update a project's details
    #[command(alias = "u")]
    Update(UpdateProjectArgs),
    /// Delete a project permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteProjectArgs),
}

/// Compute a project's stage plan
///
/// Distributes the estimated duration across the eight stages by weight,
/// lays them out on the calendar from the start date, and classifies each
/// stage with a flow status and overdue lamp. The overrides preview a
/// different schedule without touching the stored project.
#[derive(Args)]
pub struct StagePlanArgs {
    /// ID of the project to plan
    #[arg(help = "Unique identifier of the project to compute the plan for")]
    pub id: u64,
    /// Override the stored start date
    #[arg(long, help = "Override the stored start date as YYYY-MM-DD")]
    pub start: Option<String>,
    /// Override the stored estimated duration
    #[arg(long, help = "Override the stored estimated duration in days")]
    pub days: Option<i64>,
}

impl From<StagePlanArgs> for StagePlanParams {
    fn from(val: StagePlanArgs) -> Self {
        StagePlanParams {
            id: val.id,
            start: val.start,
            days: val.days,
        }
    }
}

/// Mark a stage completed by recording its deliverable
///
/// A stage counts as completed once at least one file is recorded for it;
/// completed stages show green in every subsequent plan regardless of the
/// project's phase.
#[derive(Args)]
pub struct CompleteStageArgs {
    /// ID of the project the stage belongs to
    #[arg(help = "Unique identifier of the project the stage belongs to")]
    pub project_id: u64,
    /// Stage number (1-8) the deliverable completes
    #[arg(help = "Stage number (1-8) the deliverable completes")]
    pub stage_no: u8,
    /// Name of the delivered file
    pub file_name: String,
}

impl From<CompleteStageArgs> for RecordUpload {
    fn from(val: CompleteStageArgs) -> Self {
        RecordUpload {
            project_id: val.project_id,
            stage_no: val.stage_no,
            file_name: val.file_name,
        }
    }
}

/// List the recorded deliverables for a project
#[derive(Args)]
pub struct ListUploadsArgs {
    /// ID of the project to list deliverables for
    #[arg(help = "Unique identifier of the project to list deliverables for")]
    pub id: u64,
}

impl From<ListUploadsArgs> for Id {
    fn from(val: ListUploadsArgs) -> Self {
        Id { id: val.id }
    }
}

/// Override a stage's display name
///
/// The new name applies to every project's plans; stage weights are fixed
/// and never change.
#[derive(Args)]
pub struct RenameStageArgs {
    /// Stage number (1-8) to rename
    #[arg(help = "Stage number (1-8) to rename")]
    pub stage_no: u8,
    /// New display name for the stage
    pub name: String,
}

impl From<RenameStageArgs> for RenameStage {
    fn from(val: RenameStageArgs) -> Self {
        RenameStage {
            stage_no: val.stage_no,
            name: val.name,
        }
    }
}

#[derive(Subcommand)]
pub enum StageCommands {
    /// Compute a project's stage plan
    #[command(alias = "p")]
    Plan(StagePlanArgs),
    /// Mark a stage completed by recording its deliverable
    #[command(alias = "c")]
    Complete(CompleteStageArgs),
    /// List the recorded deliverables for a project
    #[command(alias = "u")]
    Uploads(ListUploadsArgs),
    /// Override a stage's display name
    #[command(alias = "r")]
    Rename(RenameStageArgs),
}

/// Command-line argument representation of project phase values
///
/// This enum provides the CLI interface for phase codes, converting between
/// user-friendly command arguments and the core phase enum. Used with the
/// `--phase` flag in project commands.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum PhaseArg {
    /// Project has not started yet
    Waiting,
    /// Design work is underway
    Design,
    /// Construction work is underway
    Build,
    /// Project is finished
    Finished,
}

impl std::fmt::Display for PhaseArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhaseArg::Waiting => write!(f, "waiting"),
            PhaseArg::Design => write!(f, "design"),
            PhaseArg::Build => write!(f, "build"),
            PhaseArg::Finished => write!(f, "finished"),
        }
    }
}

impl From<PhaseArg> for ProjectPhase {
    fn from(val: PhaseArg) -> Self {
        match val {
            PhaseArg::Waiting => ProjectPhase::Waiting,
            PhaseArg::Design => ProjectPhase::Design,
            PhaseArg::Build => ProjectPhase::Build,
            PhaseArg::Finished => ProjectPhase::Finished,
        }
    }
}

// ============================================================================
// Command Handlers
// ============================================================================

impl Cli {
    /// Create a new command handler.
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    /// Dispatch a `project` subcommand.
    pub async fn handle_project_command(self, command: ProjectCommands) -> Result<()> {
        match command {
            ProjectCommands::Create(args) => {
                let project = self.tracker.create_project_result(&args.into()).await?;
                self.renderer
                    .render(&CreateResult::new(project).to_string())
            }
            ProjectCommands::List(args) => self.list_projects(&args.into()).await,
            ProjectCommands::Show(args) => {
                let id = args.id;
                match self.tracker.show_project(&args.into()).await? {
                    Some(project) => self.renderer.render(&project.to_string()),
                    None => self.render_not_found(id),
                }
            }
            ProjectCommands::Update(args) => {
                let id = args.id;
                let changes = args.describe_changes();
                match self.tracker.update_project(&args.into()).await? {
                    Some(project) => self
                        .renderer
                        .render(&UpdateResult::with_changes(project, changes).to_string()),
                    None => self.render_not_found(id),
                }
            }
            ProjectCommands::Delete(args) => {
                let id = args.id;
                match self.tracker.delete_project(&args.into()).await? {
                    Some(project) => self
                        .renderer
                        .render(&DeleteResult::new(project).to_string()),
                    None => self.render_not_found(id),
                }
            }
        }
    }

    /// Dispatch a `stage` subcommand.
    pub async fn handle_stage_command(self, command: StageCommands) -> Result<()> {
        match command {
            StageCommands::Plan(args) => {
                let plan = self.tracker.stage_plan(&args.into()).await?;
                self.renderer.render(&plan.to_string())
            }
            StageCommands::Complete(args) => {
                let upload = self.tracker.record_upload(&args.into()).await?;
                self.renderer.render(&CreateResult::new(upload).to_string())
            }
            StageCommands::Uploads(args) => {
                let uploads = self.tracker.list_uploads(&args.into()).await?;
                self.renderer
                    .render(&format!("# Uploads\n\n{uploads}"))
            }
            StageCommands::Rename(args) => {
                let stage_no = args.stage_no;
                let name = args.name.clone();
                self.tracker.rename_stage(&args.into()).await?;
                self.renderer.render(
                    &OperationStatus::success(format!("Stage {stage_no} renamed to '{name}'"))
                        .to_string(),
                )
            }
        }
    }

    /// List projects and render the summaries.
    pub async fn list_projects(&self, params: &ListProjects) -> Result<()> {
        let summaries = self.tracker.list_projects(params).await?;
        self.renderer.render(&format!("# Projects\n\n{summaries}"))
    }

    fn render_not_found(&self, id: u64) -> Result<()> {
        self.renderer.render(
            &OperationStatus::failure(format!("Project with ID {id} not found")).to_string(),
        )
    }
}
