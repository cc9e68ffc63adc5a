pub mod calendar;
pub mod prescription;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use crate::config::{check_weeks_per_phase, parse_training_days, ProgramConfig};
use crate::intensity::Intensity;
use crate::models::WorkoutSlot;
use calendar::ProgramParams;

#[derive(Debug, Parser)]
#[command(
  name = "athlete-program",
  about = "Periodized program calculator",
  long_about = "Scale workout prescriptions by intensity and map program slots onto calendar dates."
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Command,

  /// Enable debug logging
  #[arg(long, short = 'v', global = true)]
  pub verbose: bool,
}

/// Program inputs shared by calendar commands; fall back to the environment
#[derive(Debug, Clone, clap::Args)]
pub struct ProgramArgs {
  /// Program start date (YYYY-MM-DD)
  #[arg(long)]
  pub start: Option<NaiveDate>,

  /// Training days, comma-separated, 0 = Sunday
  #[arg(long)]
  pub days: Option<String>,

  /// Weeks per phase
  #[arg(long)]
  pub weeks_per_phase: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Scale a loaded exercise
  Scale {
    #[arg(long)]
    sets: u32,
    #[arg(long)]
    reps: u32,
    #[arg(long)]
    rest: u32,
    /// Low, Moderate or High
    #[arg(long, default_value = "Moderate")]
    intensity: Intensity,
    #[arg(long)]
    one_rep_max: Option<f64>,
  },

  /// Scale a bodyweight exercise
  ScaleBodyweight {
    /// Exercise slug
    #[arg(long)]
    exercise: String,
    /// Reps or duration text, e.g. "12", "30s", "AMRAP"
    #[arg(long)]
    reps: String,
    #[arg(long)]
    rest: u32,
    #[arg(long, default_value = "Moderate")]
    intensity: Intensity,
    #[arg(long)]
    easier: Option<String>,
    #[arg(long)]
    harder: Option<String>,
  },

  /// Estimate a one-rep max (Epley)
  Estimate { weight: f64, reps: u32 },

  /// Load for a fraction of a one-rep max
  Target {
    one_rep_max: f64,
    /// Fraction of the one-rep max, e.g. 0.78
    percent: f64,
  },

  /// List scheduled workouts in a date range
  Calendar {
    #[command(flatten)]
    program: ProgramArgs,
    #[arg(long)]
    from: NaiveDate,
    #[arg(long)]
    to: NaiveDate,
  },

  /// Resolve the workout scheduled on a date
  Slot {
    #[command(flatten)]
    program: ProgramArgs,
    date: NaiveDate,
  },

  /// Resolve the date of a slot, e.g. GPP:1:2
  Date {
    #[command(flatten)]
    program: ProgramArgs,
    slot: WorkoutSlot,
  },

  /// Program length and end date
  Summary {
    #[command(flatten)]
    program: ProgramArgs,
  },

  /// Swap two slots in an override list
  Swap {
    /// Existing overrides as JSON
    #[arg(long, default_value = "[]")]
    overrides: String,
    #[arg(long)]
    slot_a: WorkoutSlot,
    #[arg(long)]
    slot_b: WorkoutSlot,
    #[arg(long)]
    template_a: String,
    #[arg(long)]
    template_b: String,
  },
}

impl ProgramArgs {
  /// Merge flags over the environment config
  pub fn resolve(&self, config: &ProgramConfig) -> Result<ProgramParams, String> {
    let start = match self.start {
      Some(start) => start,
      None => config.require_start().map_err(|e| e.to_string())?,
    };
    let training_days = match &self.days {
      Some(raw) => parse_training_days(raw).map_err(|e| e.to_string())?,
      None => config.training_days.clone(),
    };

    let weeks_per_phase = match self.weeks_per_phase {
      Some(weeks) => check_weeks_per_phase(weeks).map_err(|e| e.to_string())?,
      None => config.weeks_per_phase,
    };

    Ok(ProgramParams {
      start,
      training_days,
      weeks_per_phase,
    })
  }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, String> {
  serde_json::to_value(value).map_err(|e| format!("Failed to serialize result: {}", e))
}

/// Run one command and return its JSON result
pub fn execute(command: &Command, config: &ProgramConfig) -> Result<Value, String> {
  match command {
    Command::Scale {
      sets,
      reps,
      rest,
      intensity,
      one_rep_max,
    } => to_json(&prescription::scale(*sets, *reps, *rest, *intensity, *one_rep_max)),
    Command::ScaleBodyweight {
      exercise,
      reps,
      rest,
      intensity,
      easier,
      harder,
    } => to_json(&prescription::scale_body(
      exercise,
      reps,
      *rest,
      *intensity,
      easier.clone(),
      harder.clone(),
    )),
    Command::Estimate { weight, reps } => to_json(&prescription::estimate(*weight, *reps)),
    Command::Target { one_rep_max, percent } => to_json(&prescription::target(*one_rep_max, *percent)?),
    Command::Calendar { program, from, to } => {
      let params = program.resolve(config)?;
      to_json(&calendar::list_workouts(&params, *from, *to))
    }
    Command::Slot { program, date } => {
      let params = program.resolve(config)?;
      to_json(&calendar::lookup_date(&params, *date))
    }
    Command::Date { program, slot } => {
      let params = program.resolve(config)?;
      to_json(&calendar::lookup_slot(&params, *slot)?)
    }
    Command::Summary { program } => {
      let params = program.resolve(config)?;
      to_json(&calendar::summarize(&params)?)
    }
    Command::Swap {
      overrides,
      slot_a,
      slot_b,
      template_a,
      template_b,
    } => to_json(&calendar::swap(overrides, *slot_a, *slot_b, template_a, template_b)?),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::*;

  fn run_cli(args: &[&str]) -> Result<Value, String> {
    let cli = Cli::try_parse_from(std::iter::once("athlete-program").chain(args.iter().copied()))
      .map_err(|e| e.to_string())?;
    execute(&cli.command, &ProgramConfig::default())
  }

  #[test]
  fn test_cli_definition() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
  }

  #[test]
  fn test_execute_scale() {
    let json = run_cli(&["scale", "--sets", "4", "--reps", "8", "--rest", "60", "--intensity", "High", "--one-rep-max", "200"]).unwrap();
    assert_eq!(json["sets"], 5);
    assert_eq!(json["reps"], 7);
    assert_eq!(json["restSeconds"], 45);
    assert_eq!(json["weight"], 175.0);
    assert_eq!(json["percentOf1RM"], 88);
  }

  #[test]
  fn test_execute_date_uses_flags() {
    let json = run_cli(&["date", "--start", "2026-02-02", "--days", "1,3,5", "SPP:1:1"]).unwrap();
    assert_eq!(json, serde_json::json!("2026-03-02"));
  }

  #[test]
  fn test_execute_summary_requires_start() {
    let err = run_cli(&["summary"]).unwrap_err();
    assert!(err.contains("PROGRAM_START_DATE"), "{}", err);
  }

  #[test]
  fn test_resolve_prefers_flags() {
    let config = ProgramConfig {
      weeks_per_phase: 6,
      training_days: vec![2, 4],
      program_start: Some(ymd(2026, 1, 5)),
    };
    let args = ProgramArgs {
      start: None,
      days: Some("1,3,5".to_string()),
      weeks_per_phase: None,
    };
    let params = args.resolve(&config).unwrap();
    assert_eq!(params.start, ymd(2026, 1, 5));
    assert_eq!(params.training_days, MON_WED_FRI.to_vec());
    assert_eq!(params.weeks_per_phase, 6);
  }

  #[test]
  fn test_resolve_rejects_oversized_phase() {
    let args = ProgramArgs {
      start: Some(ymd(2026, 2, 2)),
      days: None,
      weeks_per_phase: Some(u32::MAX),
    };
    let err = args.resolve(&ProgramConfig::default()).unwrap_err();
    assert!(err.contains("PROGRAM_WEEKS_PER_PHASE"), "{}", err);

    let err = run_cli(&["summary", "--start", "2026-02-02", "--weeks-per-phase", "1000000000"]).unwrap_err();
    assert!(err.contains("Invalid value"), "{}", err);
  }

  #[test]
  fn test_execute_target_rejects_whole_percent() {
    assert!(run_cli(&["target", "200", "78"]).is_err());
    let json = run_cli(&["target", "200", "0.78"]).unwrap();
    assert_eq!(json["weight"], 155.0);
  }
}
