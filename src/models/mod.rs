pub mod prescription;
pub mod schedule;

pub use prescription::{
  BodyweightPrescription, Prescription, Progressions, RpeTarget, ScaledBodyweightPrescription,
  ScaledPrescription, TemplateExercise,
};
pub use schedule::{CalendarWorkout, Phase, PhaseCounts, SlotOverride, TodayFocus, WorkoutSlot};
