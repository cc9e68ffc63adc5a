//! Calendar Mapper
//!
//! Converts abstract program coordinates (phase, week, day) into calendar
//! dates and back. A program is three phases (GPP -> SPP -> SSP) of
//! `weeks_per_phase` weeks, each with one workout per training day.
//!
//! Workouts are numbered by an absolute index:
//!   phase_index * weeks_per_phase * n + (week - 1) * n + (day - 1)
//! where n is the number of training days per week. Index 0 falls on the
//! first training day on or after the program start, so a program created
//! mid-week starts that same week.
//!
//! Training days are 0 = Sunday .. 6 = Saturday.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{CalendarWorkout, Phase, WorkoutSlot};

pub const DEFAULT_WEEKS_PER_PHASE: u32 = 4;
pub const PHASE_COUNT: u32 = 3;
/// Longest accepted phase, one year
pub const MAX_WEEKS_PER_PHASE: u32 = 52;
const DAYS_PER_WEEK: u32 = 7;
/// Slack added to the walk limit in `slot_for_date`
const WALK_SAFETY_MARGIN: u32 = 50;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("Training days cannot be empty")]
    EmptyTrainingDays,

    #[error("Invalid training day: {0} (expected 0-6)")]
    InvalidTrainingDay(u32),

    #[error("Invalid slot: week {week}, day {day}")]
    InvalidSlot { week: u32, day: u32 },

    #[error("Invalid weeks per phase: {0} (expected 1-{max})", max = MAX_WEEKS_PER_PHASE)]
    InvalidWeeksPerPhase(u32),

    #[error("Date out of range")]
    DateOutOfRange,

    #[error("Unknown phase: {0}")]
    UnknownPhase(String),

    #[error("Malformed slot: {0} (expected PHASE:WEEK:DAY)")]
    MalformedSlot(String),
}

/// ---------------------------------------------------------------------------
/// Training Week
/// ---------------------------------------------------------------------------

/// Sorted, de-duplicated set of weekly training days
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingWeek {
    days: Vec<u32>,
}

impl TrainingWeek {
    pub fn new(training_days: &[u32]) -> Result<Self, ScheduleError> {
        if let Some(bad) = training_days.iter().find(|d| **d >= DAYS_PER_WEEK) {
            return Err(ScheduleError::InvalidTrainingDay(*bad));
        }
        let mut days = training_days.to_vec();
        days.sort_unstable();
        days.dedup();
        if days.is_empty() {
            return Err(ScheduleError::EmptyTrainingDays);
        }
        Ok(Self { days })
    }

    pub fn days(&self) -> &[u32] {
        &self.days
    }

    /// Never zero
    pub fn workouts_per_week(&self) -> u32 {
        self.days.len() as u32
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains(&day_of_week(date))
    }

    /// First training date on or after `start`. `None` only at the end of
    /// the representable calendar.
    pub fn first_on_or_after(&self, start: NaiveDate) -> Option<FirstTrainingDate> {
        let dow = day_of_week(start);
        let (offset, day_index) = match self.days.iter().position(|d| *d >= dow) {
            Some(idx) => (self.days[idx] - dow, idx),
            None => (DAYS_PER_WEEK - dow + self.days[0], 0),
        };
        Some(FirstTrainingDate {
            date: start.checked_add_signed(Duration::days(offset as i64))?,
            day_index,
        })
    }

    /// Step from one training date to the next
    fn advance(&self, date: NaiveDate, day_index: usize) -> Option<(NaiveDate, usize)> {
        let current = *self.days.get(day_index)?;
        let (gap, next_index) = match self.days.get(day_index + 1) {
            Some(next) => (next - current, day_index + 1),
            None => (DAYS_PER_WEEK - current + self.days[0], 0),
        };
        Some((date.checked_add_signed(Duration::days(gap as i64))?, next_index))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstTrainingDate {
    pub date: NaiveDate,
    /// Position of `date` within the sorted training days
    pub day_index: usize,
}

pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// ---------------------------------------------------------------------------
/// Slot <-> Index
/// ---------------------------------------------------------------------------

/// `None` for week or day 0 and on overflow
pub fn absolute_index(slot: WorkoutSlot, workouts_per_week: u32, weeks_per_phase: u32) -> Option<u32> {
    let per_phase = weeks_per_phase.checked_mul(workouts_per_week)?;
    slot.phase
        .index()
        .checked_mul(per_phase)?
        .checked_add(slot.week.checked_sub(1)?.checked_mul(workouts_per_week)?)?
        .checked_add(slot.day.checked_sub(1)?)
}

/// Inverse of `absolute_index`. `None` past the end of SSP.
pub fn slot_for_index(index: u32, workouts_per_week: u32, weeks_per_phase: u32) -> Option<WorkoutSlot> {
    let per_phase = weeks_per_phase.checked_mul(workouts_per_week)?;
    if per_phase == 0 {
        return None;
    }
    let phase = Phase::from_index(index / per_phase)?;
    let within = index % per_phase;
    Some(WorkoutSlot {
        phase,
        week: within / workouts_per_week + 1,
        day: within % workouts_per_week + 1,
    })
}

pub fn validate_weeks_per_phase(weeks_per_phase: u32) -> Result<(), ScheduleError> {
    if weeks_per_phase == 0 || weeks_per_phase > MAX_WEEKS_PER_PHASE {
        return Err(ScheduleError::InvalidWeeksPerPhase(weeks_per_phase));
    }
    Ok(())
}

fn validate_slot(slot: WorkoutSlot, workouts_per_week: u32, weeks_per_phase: u32) -> Result<(), ScheduleError> {
    if slot.week == 0 || slot.day == 0 || slot.week > weeks_per_phase || slot.day > workouts_per_week {
        return Err(ScheduleError::InvalidSlot {
            week: slot.week,
            day: slot.day,
        });
    }
    Ok(())
}

/// ---------------------------------------------------------------------------
/// Program Mapping
/// ---------------------------------------------------------------------------

/// Earliest date on or after `start_date` that is a training day
pub fn first_training_date(start_date: NaiveDate, training_days: &[u32]) -> Result<FirstTrainingDate, ScheduleError> {
    TrainingWeek::new(training_days)?
        .first_on_or_after(start_date)
        .ok_or(ScheduleError::DateOutOfRange)
}

/// Calendar date of a program slot
pub fn date_for_slot(
    program_start: NaiveDate,
    training_days: &[u32],
    slot: WorkoutSlot,
    weeks_per_phase: u32,
) -> Result<NaiveDate, ScheduleError> {
    let week = TrainingWeek::new(training_days)?;
    validate_weeks_per_phase(weeks_per_phase)?;
    validate_slot(slot, week.workouts_per_week(), weeks_per_phase)?;

    let target = absolute_index(slot, week.workouts_per_week(), weeks_per_phase).ok_or(ScheduleError::InvalidSlot {
        week: slot.week,
        day: slot.day,
    })?;
    let first = week
        .first_on_or_after(program_start)
        .ok_or(ScheduleError::DateOutOfRange)?;

    let (mut date, mut day_index) = (first.date, first.day_index);
    for _ in 0..target {
        (date, day_index) = week
            .advance(date, day_index)
            .ok_or(ScheduleError::DateOutOfRange)?;
    }

    debug!(phase = %slot.phase, week = slot.week, day = slot.day, %date, "mapped slot to date");
    Ok(date)
}

/// Program slot scheduled on `date`, if any.
///
/// `None` for non-training days, dates before the first training date and
/// dates past the end of the program.
pub fn slot_for_date(
    program_start: NaiveDate,
    training_days: &[u32],
    date: NaiveDate,
    weeks_per_phase: u32,
) -> Option<WorkoutSlot> {
    let week = TrainingWeek::new(training_days).ok()?;
    validate_weeks_per_phase(weeks_per_phase).ok()?;
    if !week.contains(date) {
        return None;
    }

    let first = week.first_on_or_after(program_start)?;
    if date < first.date {
        return None;
    }

    let total = total_workouts(training_days, weeks_per_phase);
    let limit = total + WALK_SAFETY_MARGIN;

    let (mut current, mut day_index) = (first.date, first.day_index);
    let mut index = 0;
    while current < date {
        if index >= limit {
            debug!(%date, limit, "date lies past the program horizon");
            return None;
        }
        (current, day_index) = week.advance(current, day_index)?;
        index += 1;
    }

    if current != date || index >= total {
        return None;
    }

    slot_for_index(index, week.workouts_per_week(), weeks_per_phase)
}

/// Every scheduled workout between `start` and `end`, inclusive
pub fn workouts_in_range(
    program_start: NaiveDate,
    training_days: &[u32],
    start: NaiveDate,
    end: NaiveDate,
    weeks_per_phase: u32,
) -> Vec<CalendarWorkout> {
    let workouts_per_week = match TrainingWeek::new(training_days) {
        Ok(week) => week.workouts_per_week(),
        Err(_) => return Vec::new(),
    };

    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter_map(|date| {
            let slot = slot_for_date(program_start, training_days, date, weeks_per_phase)?;
            Some(CalendarWorkout {
                date,
                slot,
                absolute_workout_index: absolute_index(slot, workouts_per_week, weeks_per_phase)?,
            })
        })
        .collect()
}

/// Workouts across all three phases. Invalid training days or phase
/// lengths count as none.
pub fn total_workouts(training_days: &[u32], weeks_per_phase: u32) -> u32 {
    let Ok(week) = TrainingWeek::new(training_days) else {
        return 0;
    };
    if validate_weeks_per_phase(weeks_per_phase).is_err() {
        return 0;
    }
    PHASE_COUNT
        .checked_mul(weeks_per_phase)
        .and_then(|weeks| weeks.checked_mul(week.workouts_per_week()))
        .unwrap_or(0)
}

/// Date of the last workout (final day of the final SSP week)
pub fn program_end_date(
    program_start: NaiveDate,
    training_days: &[u32],
    weeks_per_phase: u32,
) -> Result<NaiveDate, ScheduleError> {
    let week = TrainingWeek::new(training_days)?;
    validate_weeks_per_phase(weeks_per_phase)?;
    let last = WorkoutSlot::new(Phase::Ssp, weeks_per_phase, week.workouts_per_week());
    date_for_slot(program_start, training_days, last, weeks_per_phase)
}

/// ---------------------------------------------------------------------------
/// Display Helpers (weeks start on Sunday)
/// ---------------------------------------------------------------------------

pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(day_of_week(date) as i64)
}

pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date) + Duration::days(6)
}

/// Sunday through Saturday of the week containing `date`
pub fn week_days(date: NaiveDate) -> Vec<NaiveDate> {
    start_of_week(date).iter_days().take(DAYS_PER_WEEK as usize).collect()
}

/// Month grid for the month containing `date`, padded with neighbouring
/// months' dates to whole Sunday-Saturday weeks
pub fn month_calendar_days(date: NaiveDate) -> Vec<NaiveDate> {
    let first = date - Duration::days(date.day0() as i64);
    let last = first
        .iter_days()
        .take_while(|d| d.month() == first.month())
        .last()
        .unwrap_or(first);

    start_of_week(first)
        .iter_days()
        .take_while(|d| *d <= end_of_week(last))
        .collect()
}

/// "Feb 1 - 7, 2026", "Mar 29 - Apr 4, 2026", "Dec 28, 2025 - Jan 3, 2026"
pub fn format_week_range(date: NaiveDate) -> String {
    let start = start_of_week(date);
    let end = end_of_week(date);

    if start.year() != end.year() {
        format!("{} - {}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
    } else if start.month() != end.month() {
        format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
    } else {
        format!("{} - {}", start.format("%b %-d"), end.format("%-d, %Y"))
    }
}

/// "February 2026"
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
