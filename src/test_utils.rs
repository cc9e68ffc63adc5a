//! Test utilities and fixtures shared by unit tests
//!
//! - Date helpers
//! - Mock prescription / exercise factories
//! - Override fixtures

use chrono::{Local, NaiveDate, TimeZone};

use crate::models::{
  BodyweightPrescription, Prescription, Progressions, SlotOverride, TemplateExercise, WorkoutSlot,
};

/// Monday / Wednesday / Friday
pub const MON_WED_FRI: [u32; 3] = [1, 3, 5];

/// ---------------------------------------------------------------------------
/// Date Helpers
/// ---------------------------------------------------------------------------

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Epoch milliseconds for a local wall-clock time
pub fn local_ms(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> i64 {
  Local
    .with_ymd_and_hms(year, month, day, hour, minute, 0)
    .earliest()
    .expect("valid local time")
    .timestamp_millis()
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

pub fn mock_prescription(sets: u32, reps: u32, rest_seconds: u32) -> Prescription {
  Prescription {
    sets,
    reps,
    rest_seconds,
  }
}

pub fn mock_bodyweight(reps: &str, rest_seconds: u32) -> BodyweightPrescription {
  BodyweightPrescription {
    reps: reps.to_string(),
    rest_seconds,
  }
}

pub fn mock_progressions(easier: Option<&str>, harder: Option<&str>) -> Progressions {
  Progressions {
    easier: easier.map(str::to_string),
    harder: harder.map(str::to_string),
  }
}

pub fn mock_exercise(slug: &str, reps: &str, equipment: Option<Vec<&str>>) -> TemplateExercise {
  TemplateExercise {
    slug: slug.to_string(),
    sets: 3,
    reps: reps.to_string(),
    rest_seconds: 60,
    equipment: equipment.map(|items| items.into_iter().map(str::to_string).collect()),
    progressions: None,
  }
}

pub fn mock_override(slot: WorkoutSlot, template_id: &str) -> SlotOverride {
  SlotOverride::new(slot, template_id)
}
