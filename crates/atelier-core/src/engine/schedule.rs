//! Schedule layout: contiguous calendar tiling of allocated stages.

use jiff::{civil::Date, ToSpan};

use crate::{
    error::{PlanError, Result},
    models::{AllocatedStage, ScheduledStage},
};

/// Lays the allocated stages out as contiguous date ranges from `start_date`.
///
/// Stages are processed strictly in the order given (ascending stage number):
/// each stage starts where the cursor sits and ends `days - 1` later, and the
/// cursor moves to the following day. Consecutive stages therefore never gap
/// or overlap.
///
/// # Errors
///
/// Returns `InvalidStartDate` when the date arithmetic leaves the supported
/// calendar range.
pub fn layout(start_date: Date, stages: Vec<AllocatedStage>) -> Result<Vec<ScheduledStage>> {
    let mut cursor = start_date;
    let mut scheduled = Vec::with_capacity(stages.len());

    for stage in stages {
        let planned_start = cursor;
        let planned_end = planned_start
            .checked_add((stage.days - 1).days())
            .map_err(|e| date_range_error(start_date, &e))?;
        cursor = planned_end
            .checked_add(1.day())
            .map_err(|e| date_range_error(start_date, &e))?;
        scheduled.push(ScheduledStage::new(stage, planned_start, planned_end));
    }

    Ok(scheduled)
}

fn date_range_error(start_date: Date, source: &jiff::Error) -> PlanError {
    PlanError::invalid_start_date(
        start_date.to_string(),
        format!("schedule leaves the supported date range: {source}"),
    )
}
