//! Stage planning and allocation engine.
//!
//! The engine turns a project's scheduling inputs into a classified stage
//! plan in three steps, each its own submodule:
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │  Allocator   │    │   Schedule   │    │  Classifier  │
//! │ (allocate)   │───▶│  (layout)    │───▶│ (classify)   │
//! └──────────────┘    └──────────────┘    └──────────────┘
//!  weighted days       contiguous dates    flow + lamp
//! ```
//!
//! Everything here is a pure, synchronous computation: the completion set and
//! "today" are snapshots taken by the caller, never live references, so
//! identical inputs always produce identical plans and concurrent calls need
//! no coordination.

use std::collections::BTreeSet;

use jiff::civil::Date;

use crate::{
    catalog::StageCatalog,
    error::Result,
    models::{ProjectPhase, StagePlan, StageReport},
};

pub mod allocate;
pub mod classify;
pub mod schedule;


pub use allocate::allocate;
pub use classify::{classify, today_in_reporting_zone, Classification, REPORTING_ZONE};
pub use schedule::layout;

/// Inputs for building one project's stage plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// External project number the plan is computed for
    pub project_no: String,

    /// First planned day of stage 1
    pub start_date: Date,

    /// Total estimated duration in calendar days (positive)
    pub total_days: i64,

    /// Overall phase of the project
    pub phase: ProjectPhase,
}

/// Builds the full classified stage plan for one project.
///
/// Runs allocation once, layout once, then classification per stage, and
/// returns the rows in ascending stage-number order. `completed` is the set
/// of stage numbers with at least one recorded upload; `today` is the
/// current date in the reporting zone (see
/// [`today_in_reporting_zone`]).
///
/// # Errors
///
/// Any sub-step failure aborts the whole call with the originating error:
/// `InvalidDuration` or `InvalidCatalog` from allocation, `InvalidStartDate`
/// from layout.
pub fn build_plan(
    request: &PlanRequest,
    catalog: &StageCatalog,
    completed: &BTreeSet<u8>,
    today: Date,
) -> Result<StagePlan> {
    let allocated = allocate(request.total_days, catalog.stages())?;
    let scheduled = layout(request.start_date, allocated)?;

    let stages = scheduled
        .into_iter()
        .map(|stage| {
            let is_completed = completed.contains(&stage.number);
            let classification = classify(&stage, is_completed, request.phase, today);
            StageReport {
                number: stage.number,
                name: stage.name,
                weight: stage.weight,
                days: stage.days,
                planned_start: stage.planned_start,
                planned_end: stage.planned_end,
                flow: classification.flow,
                lamp: classification.lamp,
                overdue_days: classification.overdue_days,
            }
        })
        .collect();

    Ok(StagePlan {
        project_no: request.project_no.clone(),
        start_date: request.start_date,
        total_days: request.total_days,
        stages,
    })
}
