//! Status classification: flow status and overdue lamp per stage.

use jiff::{civil::Date, tz::TimeZone, Timestamp};

use crate::{
    error::{PlanError, Result},
    models::{FlowStatus, LampStatus, ProjectPhase, ScheduledStage},
};

/// Time zone all overdue comparisons are evaluated in.
///
/// Both "today" and the planned dates are interpreted in this zone so the
/// classification never depends on the server-local zone.
pub const REPORTING_ZONE: &str = "Asia/Taipei";

/// Days of delay at which the lamp escalates from orange to red.
const RED_THRESHOLD_DAYS: i64 = 7;

/// Classification result for one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Lifecycle bucket of the stage
    pub flow: FlowStatus,

    /// Overdue lamp color
    pub lamp: LampStatus,

    /// Whole days past the planned end; 0 when not overdue
    pub overdue_days: i64,
}

/// Returns the current date in the reporting zone.
///
/// # Errors
///
/// Returns `PlanError::Configuration` if the reporting zone is missing from
/// the system's time zone database.
pub fn today_in_reporting_zone() -> Result<Date> {
    let tz = TimeZone::get(REPORTING_ZONE).map_err(|e| PlanError::Configuration {
        message: format!("reporting zone '{REPORTING_ZONE}' unavailable: {e}"),
    })?;
    Ok(Timestamp::now().to_zoned(tz).date())
}

/// Classifies one scheduled stage.
///
/// The flow status depends only on the project's overall phase and the
/// completion flag: `waiting` projects leave every stage waiting, `design`
/// and `build` put every stage in progress, `finished` completes them, and a
/// recorded completion forces `Completed` regardless of phase.
///
/// The lamp is derived from the final flow status:
///
/// - Waiting stages never alert.
/// - Completed stages show green.
/// - In-progress stages compare `today` against the planned end: the due
///   date itself stays dark, the first day past it lights orange, and a
///   delay of [`RED_THRESHOLD_DAYS`] or more escalates to red.
pub fn classify(
    stage: &ScheduledStage,
    is_completed: bool,
    phase: ProjectPhase,
    today: Date,
) -> Classification {
    let flow = if is_completed {
        FlowStatus::Completed
    } else {
        match phase {
            ProjectPhase::Waiting => FlowStatus::Waiting,
            ProjectPhase::Design | ProjectPhase::Build => FlowStatus::Doing,
            ProjectPhase::Finished => FlowStatus::Completed,
        }
    };

    let (lamp, overdue_days) = match flow {
        FlowStatus::Waiting => (LampStatus::None, 0),
        FlowStatus::Completed => (LampStatus::Green, 0),
        FlowStatus::Doing => {
            let overdue = i64::from((today - stage.planned_end).get_days());
            if overdue >= RED_THRESHOLD_DAYS {
                (LampStatus::Red, overdue)
            } else if overdue > 0 {
                (LampStatus::Orange, overdue)
            } else {
                (LampStatus::None, 0)
            }
        }
    };

    Classification {
        flow,
        lamp,
        overdue_days,
    }
}
