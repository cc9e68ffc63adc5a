use serde::{Deserialize, Serialize};

/// Base instruction for a loaded exercise, as written in a workout template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
  pub sets: u32,
  pub reps: u32,
  pub rest_seconds: u32,
}

/// Target effort band on the RPE scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpeTarget {
  pub min: u32,
  pub max: u32,
}

/// Loaded prescription after intensity scaling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledPrescription {
  pub sets: u32,
  pub reps: u32,
  pub rest_seconds: u32,
  /// Only present when the athlete's one-rep max is known
  #[serde(skip_serializing_if = "Option::is_none")]
  pub weight: Option<f64>,
  #[serde(rename = "percentOf1RM")]
  pub percent_of_1rm: u32,
  pub rpe_target: RpeTarget,
}

/// Bodyweight instruction. `reps` is free-form: "10", "30s", "AMRAP", "8 each side"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyweightPrescription {
  pub reps: String,
  pub rest_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledBodyweightPrescription {
  pub exercise_slug: String,
  pub is_substituted: bool,
  pub reps: String,
  pub rest_seconds: u32,
  pub rpe_target: RpeTarget,
}

/// Easier/harder variants of a bodyweight exercise
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progressions {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub easier: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub harder: Option<String>,
}

/// One exercise entry of a workout template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateExercise {
  pub slug: String,
  pub sets: u32,
  pub reps: String,
  pub rest_seconds: u32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub equipment: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub progressions: Option<Progressions>,
}
