//! Commands for program calendar lookups and override edits

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{
    date_for_slot, first_training_date, format_week_range, program_end_date, slot_for_date,
    total_workouts, workouts_in_range,
};
use crate::models::{CalendarWorkout, SlotOverride, WorkoutSlot};
use crate::schedule_override::{build_swap_overrides, validate_swap, SwapValidation};
use crate::week_mapping::{program_week_for_date, ProgramWeek};

/// Program start, training days and phase length for one athlete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramParams {
    pub start: NaiveDate,
    pub training_days: Vec<u32>,
    pub weeks_per_phase: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramSummary {
    pub first_training_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_workouts: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateLookup {
    pub date: NaiveDate,
    pub week_label: String,
    pub slot: Option<WorkoutSlot>,
    pub program_week: Option<ProgramWeek>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapOutcome {
    pub validation: SwapValidation,
    /// Unchanged input when the swap is rejected
    pub overrides: Vec<SlotOverride>,
}

pub fn list_workouts(params: &ProgramParams, from: NaiveDate, to: NaiveDate) -> Vec<CalendarWorkout> {
    workouts_in_range(params.start, &params.training_days, from, to, params.weeks_per_phase)
}

pub fn lookup_date(params: &ProgramParams, date: NaiveDate) -> DateLookup {
    DateLookup {
        date,
        week_label: format_week_range(date),
        slot: slot_for_date(params.start, &params.training_days, date, params.weeks_per_phase),
        program_week: program_week_for_date(params.start, &params.training_days, date, params.weeks_per_phase),
    }
}

pub fn lookup_slot(params: &ProgramParams, slot: WorkoutSlot) -> Result<NaiveDate, String> {
    date_for_slot(params.start, &params.training_days, slot, params.weeks_per_phase)
        .map_err(|e| format!("Failed to map slot {}: {}", slot, e))
}

pub fn summarize(params: &ProgramParams) -> Result<ProgramSummary, String> {
    let first = first_training_date(params.start, &params.training_days).map_err(|e| e.to_string())?;
    let end_date = program_end_date(params.start, &params.training_days, params.weeks_per_phase)
        .map_err(|e| e.to_string())?;

    Ok(ProgramSummary {
        first_training_date: first.date,
        end_date,
        total_workouts: total_workouts(&params.training_days, params.weeks_per_phase),
    })
}

/// Validate and apply a swap to an override list given as JSON
pub fn swap(
    overrides_json: &str,
    slot_a: WorkoutSlot,
    slot_b: WorkoutSlot,
    template_a: &str,
    template_b: &str,
) -> Result<SwapOutcome, String> {
    let existing: Vec<SlotOverride> =
        serde_json::from_str(overrides_json).map_err(|e| format!("Failed to parse overrides: {}", e))?;

    let result = validate_swap(&slot_a, &slot_b);
    let overrides = match result {
        Ok(()) => build_swap_overrides(&existing, &slot_a, &slot_b, template_a, template_b),
        Err(_) => existing,
    };

    Ok(SwapOutcome {
        validation: SwapValidation::from(result),
        overrides,
    })
}
