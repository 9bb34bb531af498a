//! Status enumerations for projects and stages.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of a project's overall phase.
///
/// The phase code drives the base flow status of every stage in the plan.
/// Codes unknown to this enum are folded to [`ProjectPhase::Waiting`] by
/// [`ProjectPhase::parse_lenient`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectPhase {
    /// Project has not started yet
    #[default]
    Waiting,

    /// Design work is underway
    Design,

    /// Construction work is underway
    Build,

    /// Project is finished
    Finished,
}

impl FromStr for ProjectPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "waiting" => Ok(ProjectPhase::Waiting),
            "design" => Ok(ProjectPhase::Design),
            "build" => Ok(ProjectPhase::Build),
            "finished" => Ok(ProjectPhase::Finished),
            _ => Err(format!("Invalid project phase: {s}")),
        }
    }
}

impl ProjectPhase {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectPhase::Waiting => "waiting",
            ProjectPhase::Design => "design",
            ProjectPhase::Build => "build",
            ProjectPhase::Finished => "finished",
        }
    }

    /// Parse a stored phase code, folding unrecognized values to `Waiting`.
    ///
    /// Parsing is case-insensitive; legacy rows stored `Finished`
    /// capitalized.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or(ProjectPhase::Waiting)
    }
}

/// Lifecycle bucket of a single stage within a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlowStatus {
    /// Stage work has not started
    Waiting,

    /// Stage work is underway
    Doing,

    /// Stage work product has been delivered
    Completed,
}

impl FromStr for FlowStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "waiting" => Ok(FlowStatus::Waiting),
            "doing" => Ok(FlowStatus::Doing),
            "completed" => Ok(FlowStatus::Completed),
            _ => Err(format!("Invalid flow status: {s}")),
        }
    }
}

impl FlowStatus {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowStatus::Waiting => "waiting",
            FlowStatus::Doing => "doing",
            FlowStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `✓ Completed` - Checkmark for delivered stages
    /// - `➤ Doing` - Arrow for active stages
    /// - `○ Waiting` - Circle for stages not yet started
    pub fn with_icon(&self) -> &'static str {
        match self {
            FlowStatus::Completed => "✓ Completed",
            FlowStatus::Doing => "➤ Doing",
            FlowStatus::Waiting => "○ Waiting",
        }
    }
}

/// Traffic-light-style overdue indicator shown per stage.
///
/// Distinct from [`FlowStatus`]: the lamp only signals schedule pressure.
/// A stage lights up the day after its planned end passes, never on the due
/// date itself, and escalates to red after a full week of delay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LampStatus {
    /// No alert: stage is waiting, on schedule, or due today
    None,

    /// Stage is completed
    Green,

    /// Stage is overdue by less than a week
    Orange,

    /// Stage is overdue by a week or more
    Red,
}

impl FromStr for LampStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(LampStatus::None),
            "green" => Ok(LampStatus::Green),
            "orange" => Ok(LampStatus::Orange),
            "red" => Ok(LampStatus::Red),
            _ => Err(format!("Invalid lamp status: {s}")),
        }
    }
}

impl LampStatus {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LampStatus::None => "none",
            LampStatus::Green => "green",
            LampStatus::Orange => "orange",
            LampStatus::Red => "red",
        }
    }

    /// Get lamp with consistent icon formatting for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            LampStatus::None => "○ None",
            LampStatus::Green => "✓ Green",
            LampStatus::Orange => "▲ Orange",
            LampStatus::Red => "✖ Red",
        }
    }
}
