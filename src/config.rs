//! Environment configuration
//!
//! Values come from the process environment (a `.env` file is loaded in
//! `run()` first). Anything unset falls back to the defaults below.

use chrono::NaiveDate;
use std::env;

use crate::calendar::{TrainingWeek, DEFAULT_WEEKS_PER_PHASE, MAX_WEEKS_PER_PHASE};

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

pub const WEEKS_PER_PHASE_VAR: &str = "PROGRAM_WEEKS_PER_PHASE";
pub const TRAINING_DAYS_VAR: &str = "PROGRAM_TRAINING_DAYS";
pub const START_DATE_VAR: &str = "PROGRAM_START_DATE";

const DEFAULT_TRAINING_DAYS: [u32; 3] = [1, 3, 5];

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
  #[error("Missing configuration: {0}")]
  MissingConfig(String),

  #[error("Invalid value for {key}: {value}")]
  Invalid { key: String, value: String },
}

/// ---------------------------------------------------------------------------
/// Program Config
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramConfig {
  pub weeks_per_phase: u32,
  /// Sorted, de-duplicated, 0 = Sunday
  pub training_days: Vec<u32>,
  pub program_start: Option<NaiveDate>,
}

impl Default for ProgramConfig {
  fn default() -> Self {
    Self {
      weeks_per_phase: DEFAULT_WEEKS_PER_PHASE,
      training_days: DEFAULT_TRAINING_DAYS.to_vec(),
      program_start: None,
    }
  }
}

impl ProgramConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    let defaults = Self::default();

    let weeks_per_phase = match env::var(WEEKS_PER_PHASE_VAR) {
      Ok(raw) => parse_weeks_per_phase(&raw)?,
      Err(_) => defaults.weeks_per_phase,
    };

    let training_days = match env::var(TRAINING_DAYS_VAR) {
      Ok(raw) => parse_training_days(&raw)?,
      Err(_) => defaults.training_days,
    };

    let program_start = match env::var(START_DATE_VAR) {
      Ok(raw) => Some(parse_date(START_DATE_VAR, &raw)?),
      Err(_) => None,
    };

    Ok(Self {
      weeks_per_phase,
      training_days,
      program_start,
    })
  }

  /// Program start, required by commands that map dates
  pub fn require_start(&self) -> Result<NaiveDate, ConfigError> {
    self
      .program_start
      .ok_or_else(|| ConfigError::MissingConfig(START_DATE_VAR.into()))
  }
}

fn invalid(key: &str, value: &str) -> ConfigError {
  ConfigError::Invalid {
    key: key.to_string(),
    value: value.to_string(),
  }
}

fn parse_weeks_per_phase(raw: &str) -> Result<u32, ConfigError> {
  let weeks = raw
    .trim()
    .parse::<u32>()
    .map_err(|_| invalid(WEEKS_PER_PHASE_VAR, raw))?;
  check_weeks_per_phase(weeks)
}

/// 1 through `MAX_WEEKS_PER_PHASE`
pub fn check_weeks_per_phase(weeks: u32) -> Result<u32, ConfigError> {
  if (1..=MAX_WEEKS_PER_PHASE).contains(&weeks) {
    Ok(weeks)
  } else {
    Err(invalid(WEEKS_PER_PHASE_VAR, &weeks.to_string()))
  }
}

/// "1,3,5" -> [1, 3, 5]
pub fn parse_training_days(raw: &str) -> Result<Vec<u32>, ConfigError> {
  let days = raw
    .split(',')
    .map(|part| part.trim().parse::<u32>())
    .collect::<Result<Vec<_>, _>>()
    .map_err(|_| invalid(TRAINING_DAYS_VAR, raw))?;

  TrainingWeek::new(&days)
    .map(|week| week.days().to_vec())
    .map_err(|_| invalid(TRAINING_DAYS_VAR, raw))
}

pub fn parse_date(key: &str, raw: &str) -> Result<NaiveDate, ConfigError> {
  NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| invalid(key, raw))
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn test_defaults_when_unset() {
    temp_env::with_vars_unset([WEEKS_PER_PHASE_VAR, TRAINING_DAYS_VAR, START_DATE_VAR], || {
      let config = ProgramConfig::from_env().unwrap();
      assert_eq!(config, ProgramConfig::default());
      assert_eq!(config.weeks_per_phase, 4);
      assert_eq!(config.training_days, vec![1, 3, 5]);
      assert!(config.require_start().is_err());
    });
  }

  #[test]
  #[serial]
  fn test_reads_env() {
    temp_env::with_vars(
      [
        (WEEKS_PER_PHASE_VAR, Some("6")),
        (TRAINING_DAYS_VAR, Some("5, 2,2,0")),
        (START_DATE_VAR, Some("2026-02-02")),
      ],
      || {
        let config = ProgramConfig::from_env().unwrap();
        assert_eq!(config.weeks_per_phase, 6);
        assert_eq!(config.training_days, vec![0, 2, 5]);
        assert_eq!(config.require_start(), Ok(NaiveDate::from_ymd_opt(2026, 2, 2).unwrap()));
      },
    );
  }

  #[test]
  #[serial]
  fn test_invalid_weeks_per_phase() {
    for raw in ["0", "53", "4294967295", "four"] {
      temp_env::with_var(WEEKS_PER_PHASE_VAR, Some(raw), || {
        let err = ProgramConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }), "{}", raw);
      });
    }
  }

  #[test]
  #[serial]
  fn test_longest_phase_accepted() {
    temp_env::with_var(WEEKS_PER_PHASE_VAR, Some("52"), || {
      assert_eq!(ProgramConfig::from_env().unwrap().weeks_per_phase, MAX_WEEKS_PER_PHASE);
    });
  }

  #[test]
  #[serial]
  fn test_invalid_training_days() {
    for raw in ["", "1,8", "mon,wed"] {
      temp_env::with_var(TRAINING_DAYS_VAR, Some(raw), || {
        let err = ProgramConfig::from_env().unwrap_err();
        assert_eq!(err.to_string(), format!("Invalid value for {}: {}", TRAINING_DAYS_VAR, raw));
      });
    }
  }

  #[test]
  #[serial]
  fn test_invalid_start_date() {
    temp_env::with_var(START_DATE_VAR, Some("02/02/2026"), || {
      assert!(ProgramConfig::from_env().is_err());
    });
  }
}
