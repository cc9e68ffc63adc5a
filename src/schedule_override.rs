//! Schedule Override Ledger
//!
//! Overrides replace the default template of a program slot. They come from
//! two user actions: swapping two workouts within a phase, and "set as
//! today". Every operation takes the current list and returns a new one;
//! nothing here mutates its input. Persisting the returned list is the
//! caller's job.

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Phase, PhaseCounts, SlotOverride, WorkoutSlot};

/// ---------------------------------------------------------------------------
/// Swap Validation
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SwapError {
    #[error("Cannot swap a slot with itself")]
    SameSlot,

    #[error("Swaps must be within the same phase")]
    CrossPhase,
}

/// Shape handed back to the app so the message can be shown as-is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<(), SwapError>> for SwapValidation {
    fn from(result: Result<(), SwapError>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                error: None,
            },
            Err(e) => Self {
                valid: false,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Must pass before `build_swap_overrides` is called
pub fn validate_swap(slot_a: &WorkoutSlot, slot_b: &WorkoutSlot) -> Result<(), SwapError> {
    if is_same_slot(slot_a, slot_b) {
        return Err(SwapError::SameSlot);
    }
    if !is_same_phase(slot_a, slot_b) {
        return Err(SwapError::CrossPhase);
    }
    Ok(())
}

/// ---------------------------------------------------------------------------
/// Lookups
/// ---------------------------------------------------------------------------

pub fn is_same_slot(a: &WorkoutSlot, b: &WorkoutSlot) -> bool {
    a == b
}

pub fn is_same_phase(a: &WorkoutSlot, b: &WorkoutSlot) -> bool {
    a.phase == b.phase
}

pub fn find_override<'a>(overrides: &'a [SlotOverride], slot: &WorkoutSlot) -> Option<&'a SlotOverride> {
    overrides.iter().find(|o| is_same_slot(&o.slot(), slot))
}

pub fn get_overrides_for_phase(overrides: &[SlotOverride], phase: Phase) -> Vec<SlotOverride> {
    overrides.iter().filter(|o| o.phase == phase).cloned().collect()
}

pub fn count_overrides_by_phase(overrides: &[SlotOverride]) -> PhaseCounts {
    overrides.iter().fold(PhaseCounts::default(), |mut counts, o| {
        match o.phase {
            Phase::Gpp => counts.gpp += 1,
            Phase::Spp => counts.spp += 1,
            Phase::Ssp => counts.ssp += 1,
        }
        counts
    })
}

/// ---------------------------------------------------------------------------
/// Updates (return new lists)
/// ---------------------------------------------------------------------------

pub fn remove_overrides(overrides: &[SlotOverride], slots_to_remove: &[WorkoutSlot]) -> Vec<SlotOverride> {
    overrides
        .iter()
        .filter(|o| !slots_to_remove.iter().any(|s| is_same_slot(&o.slot(), s)))
        .cloned()
        .collect()
}

/// Reset a phase to its default schedule
pub fn remove_phase_overrides(overrides: &[SlotOverride], phase: Phase) -> Vec<SlotOverride> {
    overrides.iter().filter(|o| o.phase != phase).cloned().collect()
}

/// Cross-assign templates: slot A gets B's template and slot B gets A's.
/// Existing overrides for either slot are replaced; all others are kept.
pub fn build_swap_overrides(
    existing: &[SlotOverride],
    slot_a: &WorkoutSlot,
    slot_b: &WorkoutSlot,
    template_id_a: &str,
    template_id_b: &str,
) -> Vec<SlotOverride> {
    let mut result = remove_overrides(existing, &[*slot_a, *slot_b]);
    result.push(SlotOverride::new(*slot_a, template_id_b));
    result.push(SlotOverride::new(*slot_b, template_id_a));

    debug!(
        phase = %slot_a.phase,
        kept = result.len() - 2,
        "built swap overrides"
    );
    result
}

/// "Set as today": move the chosen workout onto today's slot by swapping the two
pub fn build_set_as_today_overrides(
    existing: &[SlotOverride],
    today_slot: &WorkoutSlot,
    chosen_slot: &WorkoutSlot,
    today_template_id: &str,
    chosen_template_id: &str,
) -> Result<Vec<SlotOverride>, SwapError> {
    validate_swap(today_slot, chosen_slot)?;
    Ok(build_swap_overrides(
        existing,
        today_slot,
        chosen_slot,
        today_template_id,
        chosen_template_id,
    ))
}

/// ---------------------------------------------------------------------------
/// Today's Focus
/// ---------------------------------------------------------------------------

/// True once local midnight has passed since the focus was set.
/// Compares local calendar dates, not elapsed time.
pub fn should_clear_today_focus(focus_set_at_ms: i64, now_ms: i64) -> bool {
    let set_at = Local.timestamp_millis_opt(focus_set_at_ms).single();
    let now = Local.timestamp_millis_opt(now_ms).single();
    match (set_at, now) {
        (Some(set_at), Some(now)) => set_at.date_naive() != now.date_naive(),
        // Unrepresentable timestamp: treat the focus as stale
        _ => true,
    }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
