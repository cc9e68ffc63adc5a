//! Program-week lookups on top of the calendar mapper.
//!
//! Program weeks are Sunday-Saturday calendar weeks counted from the week
//! holding the first training date. With a mid-week start the slot weeks
//! run ahead of the calendar weeks, so a calendar week can hold workouts
//! from two slot weeks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{
    absolute_index, date_for_slot, slot_for_date, start_of_week, validate_weeks_per_phase, ScheduleError,
    TrainingWeek, PHASE_COUNT,
};
use crate::models::{CalendarWorkout, Phase, WorkoutSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramWeek {
    pub phase: Phase,
    /// Week within the phase, 1-based
    pub week: u32,
    /// Week across the whole program, 1-based
    pub week_of_program: u32,
}

/// Next workout on or after `date`. `None` once the program is over.
pub fn current_slot(
    program_start: NaiveDate,
    training_days: &[u32],
    date: NaiveDate,
    weeks_per_phase: u32,
) -> Option<WorkoutSlot> {
    let week = TrainingWeek::new(training_days).ok()?;
    let first = week.first_on_or_after(program_start)?.date;
    let next = week.first_on_or_after(date.max(first))?.date;
    slot_for_date(program_start, training_days, next, weeks_per_phase)
}

/// Calendar week of the program that `date` falls in. `None` before the
/// first training week and after the last SSP week.
pub fn program_week_for_date(
    program_start: NaiveDate,
    training_days: &[u32],
    date: NaiveDate,
    weeks_per_phase: u32,
) -> Option<ProgramWeek> {
    validate_weeks_per_phase(weeks_per_phase).ok()?;
    let first = TrainingWeek::new(training_days).ok()?.first_on_or_after(program_start)?;

    let weeks_in = (start_of_week(date) - start_of_week(first.date)).num_weeks();
    if weeks_in < 0 || weeks_in >= (PHASE_COUNT * weeks_per_phase) as i64 {
        return None;
    }

    let offset = weeks_in as u32;
    Some(ProgramWeek {
        phase: Phase::from_index(offset / weeks_per_phase)?,
        week: offset % weeks_per_phase + 1,
        week_of_program: offset + 1,
    })
}

/// Weekday (0 = Sunday) that template day `day` lands on in a full week
pub fn weekday_for_day(training_days: &[u32], day: u32) -> Option<u32> {
    let week = TrainingWeek::new(training_days).ok()?;
    let idx = day.checked_sub(1)? as usize;
    week.days().get(idx).copied()
}

/// All slots of one program week in day order
pub fn week_slots(training_days: &[u32], phase: Phase, week: u32) -> Result<Vec<WorkoutSlot>, ScheduleError> {
    let training_week = TrainingWeek::new(training_days)?;
    Ok((1..=training_week.workouts_per_week())
        .map(|day| WorkoutSlot::new(phase, week, day))
        .collect())
}

/// Dated workouts of one program week
pub fn week_workouts(
    program_start: NaiveDate,
    training_days: &[u32],
    phase: Phase,
    week: u32,
    weeks_per_phase: u32,
) -> Result<Vec<CalendarWorkout>, ScheduleError> {
    let workouts_per_week = TrainingWeek::new(training_days)?.workouts_per_week();
    week_slots(training_days, phase, week)?
        .into_iter()
        .map(|slot| -> Result<CalendarWorkout, ScheduleError> {
            let date = date_for_slot(program_start, training_days, slot, weeks_per_phase)?;
            let absolute_workout_index = absolute_index(slot, workouts_per_week, weeks_per_phase)
                .ok_or(ScheduleError::InvalidSlot { week: slot.week, day: slot.day })?;
            Ok(CalendarWorkout {
                date,
                slot,
                absolute_workout_index,
            })
        })
        .collect()
}
