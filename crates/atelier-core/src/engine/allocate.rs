//! Day allocation: weighted distribution with exact-sum rounding correction.
//!
//! Proportional allocation with naive rounding rarely sums exactly to the
//! requested total. This module applies a largest-remainder correction:
//! leftover days go to the stages with the largest fractional rounding error
//! first, and excess days are taken from the stages with the smallest error
//! first, so the per-stage counts stay close to their ideal share while the
//! sum lands on the total exactly.

use crate::{
    error::{PlanError, Result},
    models::{AllocatedStage, StageDefinition},
};

/// Working allocation state for one stage during correction.
struct Slot {
    idx: usize,
    days: i64,
    frac: f64,
}

/// Distributes `total_days` across the stages by weight.
///
/// Guarantees for every accepted input: the returned day counts sum to
/// `total_days` exactly, every count is at least 1, and stages come back in
/// the catalog's order.
///
/// # Errors
///
/// - `InvalidDuration` when `total_days` is not positive or is smaller than
///   the number of stages (a one-day floor per stage would otherwise break
///   the exact-sum guarantee).
/// - `InvalidCatalog` when no stages are supplied.
pub fn allocate(total_days: i64, stages: &[StageDefinition]) -> Result<Vec<AllocatedStage>> {
    if total_days <= 0 {
        return Err(PlanError::invalid_duration(format!(
            "total days must be positive, got {total_days}"
        )));
    }
    if stages.is_empty() {
        return Err(PlanError::invalid_catalog("no stages to allocate days to"));
    }
    if total_days < stages.len() as i64 {
        return Err(PlanError::invalid_duration(format!(
            "total days ({total_days}) must cover at least one day per stage ({})",
            stages.len()
        )));
    }

    // Round half away from zero, tracking the fractional remainder that
    // drives the correction ordering.
    let mut slots: Vec<Slot> = stages
        .iter()
        .enumerate()
        .map(|(idx, stage)| {
            let exact = total_days as f64 * stage.weight;
            Slot {
                idx,
                days: exact.round() as i64,
                frac: exact - exact.floor(),
            }
        })
        .collect();

    let sum: i64 = slots.iter().map(|s| s.days).sum();
    let diff = total_days - sum;

    if diff > 0 {
        // Hand surplus days to the largest remainders first, cycling when
        // the surplus exceeds the stage count.
        slots.sort_by(|a, b| b.frac.total_cmp(&a.frac).then(a.idx.cmp(&b.idx)));
        let len = slots.len();
        for k in 0..diff as usize {
            slots[k % len].days += 1;
        }
    } else if diff < 0 {
        absorb(&mut slots, -diff);
    }

    // Degenerate weights can round a stage to zero days; raise it to the
    // one-day floor and take the raise back from the largest allocations.
    let mut raised = 0;
    for slot in &mut slots {
        if slot.days < 1 {
            raised += 1 - slot.days;
            slot.days = 1;
        }
    }
    if raised > 0 {
        absorb(&mut slots, raised);
    }

    slots.sort_by_key(|s| s.idx);
    Ok(slots
        .iter()
        .map(|slot| {
            let stage = &stages[slot.idx];
            AllocatedStage {
                number: stage.number,
                name: stage.name.clone(),
                weight: stage.weight,
                days: slot.days,
            }
        })
        .collect())
}

/// Removes `need` days from the slots, one per eligible slot per pass,
/// smallest remainder and largest allocation first, never reducing a slot
/// below one day.
///
/// Feasible whenever the running sum exceeds the slot count, which the
/// `total_days >= stages.len()` check guarantees.
fn absorb(slots: &mut [Slot], mut need: i64) {
    while need > 0 {
        slots.sort_by(|a, b| {
            a.frac
                .total_cmp(&b.frac)
                .then(b.days.cmp(&a.days))
                .then(a.idx.cmp(&b.idx))
        });
        for slot in slots.iter_mut() {
            if need > 0 && slot.days > 1 {
                slot.days -= 1;
                need -= 1;
            }
        }
    }
}
