//! Stage value types produced by the planning engine.
//!
//! These types form a pipeline: a [`StageDefinition`] from the catalog gains
//! a day count to become an [`AllocatedStage`], gains planned dates to become
//! a [`ScheduledStage`], and gains classification to become the final
//! [`StageReport`] row. A [`StagePlan`] bundles the eight report rows with
//! the echoed request inputs.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{FlowStatus, LampStatus};

/// A stage as defined by the catalog: number, display name, and the fixed
/// fraction of total duration it receives.
///
/// Invariant: within a catalog, numbers 1..=8 each appear exactly once.
/// Weights need not sum to exactly 1.0 but are interpreted as fractions of
/// the total duration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StageDefinition {
    /// Stage number (1..=8)
    pub number: u8,

    /// Display name of the stage
    pub name: String,

    /// Fraction of total duration allocated to this stage
    pub weight: f64,
}

/// A stage with its share of the total duration resolved to whole days.
///
/// Produced by the day allocator; across a plan the `days` fields sum to the
/// requested total exactly, and every `days` is at least 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocatedStage {
    /// Stage number (1..=8)
    pub number: u8,

    /// Display name of the stage
    pub name: String,

    /// Fraction of total duration allocated to this stage
    pub weight: f64,

    /// Whole calendar days assigned to this stage
    pub days: i64,
}

/// An allocated stage laid out on the calendar.
///
/// Consecutive stages tile the calendar without gaps or overlaps: the next
/// stage starts the day after this one ends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledStage {
    /// Stage number (1..=8)
    pub number: u8,

    /// Display name of the stage
    pub name: String,

    /// Fraction of total duration allocated to this stage
    pub weight: f64,

    /// Whole calendar days assigned to this stage
    pub days: i64,

    /// First planned day of the stage
    pub planned_start: Date,

    /// Last planned day of the stage (inclusive)
    pub planned_end: Date,
}

impl ScheduledStage {
    /// Builds a scheduled stage from its allocation and planned date range.
    pub fn new(stage: AllocatedStage, planned_start: Date, planned_end: Date) -> Self {
        Self {
            number: stage.number,
            name: stage.name,
            weight: stage.weight,
            days: stage.days,
            planned_start,
            planned_end,
        }
    }
}

/// Final per-stage output row: schedule plus classification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StageReport {
    /// Stage number (1..=8)
    pub number: u8,

    /// Display name of the stage
    pub name: String,

    /// Fraction of total duration allocated to this stage
    pub weight: f64,

    /// Whole calendar days assigned to this stage
    pub days: i64,

    /// First planned day of the stage
    pub planned_start: Date,

    /// Last planned day of the stage (inclusive)
    pub planned_end: Date,

    /// Lifecycle bucket of the stage
    pub flow: FlowStatus,

    /// Overdue lamp color
    pub lamp: LampStatus,

    /// Whole days past the planned end; 0 when not overdue
    pub overdue_days: i64,
}

/// A complete stage plan for one project: the echoed request inputs plus the
/// eight classified stage rows in ascending stage-number order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StagePlan {
    /// Project number the plan was computed for
    pub project_no: String,

    /// Start date the schedule was laid out from
    pub start_date: Date,

    /// Total estimated duration distributed across the stages
    pub total_days: i64,

    /// One report row per stage
    pub stages: Vec<StageReport>,
}
