use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Program phase. Order is fixed: GPP, then SPP, then SSP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Phase {
  /// General physical preparation
  #[serde(rename = "GPP")]
  Gpp,
  /// Specific physical preparation
  #[serde(rename = "SPP")]
  Spp,
  /// Sport-specific preparation
  #[serde(rename = "SSP")]
  Ssp,
}

impl Phase {
  pub const ALL: [Phase; 3] = [Phase::Gpp, Phase::Spp, Phase::Ssp];

  pub fn index(self) -> u32 {
    match self {
      Phase::Gpp => 0,
      Phase::Spp => 1,
      Phase::Ssp => 2,
    }
  }

  pub fn from_index(index: u32) -> Option<Self> {
    Self::ALL.get(index as usize).copied()
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Phase::Gpp => "GPP",
      Phase::Spp => "SPP",
      Phase::Ssp => "SSP",
    }
  }
}

impl std::fmt::Display for Phase {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for Phase {
  type Err = crate::calendar::ScheduleError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "GPP" => Ok(Phase::Gpp),
      "SPP" => Ok(Phase::Spp),
      "SSP" => Ok(Phase::Ssp),
      _ => Err(crate::calendar::ScheduleError::UnknownPhase(s.to_string())),
    }
  }
}

/// Position in the periodized program. `week` and `day` are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkoutSlot {
  pub phase: Phase,
  pub week: u32,
  pub day: u32,
}

impl WorkoutSlot {
  pub fn new(phase: Phase, week: u32, day: u32) -> Self {
    Self { phase, week, day }
  }
}

impl std::fmt::Display for WorkoutSlot {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}:{}:{}", self.phase, self.week, self.day)
  }
}

/// "GPP:1:2" -> GPP week 1 day 2
impl std::str::FromStr for WorkoutSlot {
  type Err = crate::calendar::ScheduleError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let malformed = || crate::calendar::ScheduleError::MalformedSlot(s.to_string());
    let parts: Vec<&str> = s.trim().split(':').collect();
    let [phase, week, day] = parts.as_slice() else {
      return Err(malformed());
    };
    Ok(Self {
      phase: phase.parse()?,
      week: week.parse().map_err(|_| malformed())?,
      day: day.parse().map_err(|_| malformed())?,
    })
  }
}

/// Substitute template assigned to a slot, replacing the default schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotOverride {
  pub phase: Phase,
  pub week: u32,
  pub day: u32,
  pub template_id: String,
}

impl SlotOverride {
  pub fn new(slot: WorkoutSlot, template_id: impl Into<String>) -> Self {
    Self {
      phase: slot.phase,
      week: slot.week,
      day: slot.day,
      template_id: template_id.into(),
    }
  }

  pub fn slot(&self) -> WorkoutSlot {
    WorkoutSlot::new(self.phase, self.week, self.day)
  }
}

/// A dated workout. `absolute_workout_index` orders every workout across all phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarWorkout {
  pub date: NaiveDate,
  pub slot: WorkoutSlot,
  pub absolute_workout_index: u32,
}

/// Override totals per phase; every phase is always present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseCounts {
  #[serde(rename = "GPP")]
  pub gpp: usize,
  #[serde(rename = "SPP")]
  pub spp: usize,
  #[serde(rename = "SSP")]
  pub ssp: usize,
}

impl PhaseCounts {
  pub fn get(&self, phase: Phase) -> usize {
    match phase {
      Phase::Gpp => self.gpp,
      Phase::Spp => self.spp,
      Phase::Ssp => self.ssp,
    }
  }
}

/// "Set as today" choice, valid until local midnight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayFocus {
  pub template_id: String,
  pub set_at_ms: i64,
}

impl TodayFocus {
  pub fn is_expired(&self, now_ms: i64) -> bool {
    crate::schedule_override::should_clear_today_focus(self.set_at_ms, now_ms)
  }
}
