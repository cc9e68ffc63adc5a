//! Intensity Scaling
//!
//! Maps a template's base prescription onto a concrete per-set prescription
//! for one of three intensity levels. The boundary values live in a single
//! table (`IntensityConfig`) so they can be audited in one place.
//!
//! Floors: at least 1 set, at least 1 rep, at least 15s rest.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{
    BodyweightPrescription, Prescription, Progressions, RpeTarget, ScaledBodyweightPrescription,
    ScaledPrescription, TemplateExercise,
};
use crate::one_rep_max::is_bodyweight;
use crate::reps::{self, RepsUnit};

const MIN_SETS: u32 = 1;
const MIN_REPS: u32 = 1;
const MIN_REST_SECONDS: u32 = 15;

// ---------------------------------------------------------------------------
/// Intensity Level
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Intensity {
    Low,
    #[default]
    Moderate,
    High,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Low, Intensity::Moderate, Intensity::High];

    pub fn config(self) -> &'static IntensityConfig {
        match self {
            Intensity::Low => &LOW,
            Intensity::Moderate => &MODERATE,
            Intensity::High => &HIGH,
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
        }
    }
}

impl std::str::FromStr for Intensity {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            _ => Err(format!("Unknown intensity: {}", s)),
        }
    }
}

// ---------------------------------------------------------------------------
/// Configuration Table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityConfig {
    /// Fraction of 1RM, low end
    pub one_rm_min: f64,
    /// Fraction of 1RM, high end
    pub one_rm_max: f64,
    pub sets_multiplier: f64,
    pub reps_multiplier: f64,
    pub rest_multiplier: f64,
    pub rpe: RpeTarget,
    /// Bodyweight rep-count multiplier
    pub bodyweight_reps_multiplier: f64,
    /// Bodyweight hold/duration multiplier
    pub bodyweight_duration_multiplier: f64,
}

impl IntensityConfig {
    /// Midpoint of the 1RM range
    pub fn one_rm_fraction(&self) -> f64 {
        (self.one_rm_min + self.one_rm_max) / 2.0
    }

    pub fn percent_of_1rm(&self) -> u32 {
        (self.one_rm_fraction() * 100.0).round() as u32
    }

    pub fn bodyweight_multiplier(&self, unit: RepsUnit) -> f64 {
        match unit {
            RepsUnit::Reps => self.bodyweight_reps_multiplier,
            RepsUnit::Seconds => self.bodyweight_duration_multiplier,
        }
    }
}

pub const LOW: IntensityConfig = IntensityConfig {
    one_rm_min: 0.60,
    one_rm_max: 0.70,
    sets_multiplier: 0.75,
    reps_multiplier: 1.0,
    rest_multiplier: 1.25,
    rpe: RpeTarget { min: 5, max: 6 },
    bodyweight_reps_multiplier: 0.67,
    bodyweight_duration_multiplier: 0.67,
};

pub const MODERATE: IntensityConfig = IntensityConfig {
    one_rm_min: 0.75,
    one_rm_max: 0.80,
    sets_multiplier: 1.0,
    reps_multiplier: 1.0,
    rest_multiplier: 1.0,
    rpe: RpeTarget { min: 6, max: 7 },
    bodyweight_reps_multiplier: 1.0,
    bodyweight_duration_multiplier: 1.0,
};

pub const HIGH: IntensityConfig = IntensityConfig {
    one_rm_min: 0.85,
    one_rm_max: 0.90,
    sets_multiplier: 1.25,
    reps_multiplier: 0.85,
    rest_multiplier: 0.75,
    rpe: RpeTarget { min: 8, max: 9 },
    bodyweight_reps_multiplier: 1.33,
    bodyweight_duration_multiplier: 1.33,
};

fn scale_count(base: u32, multiplier: f64, floor: u32) -> u32 {
    ((base as f64 * multiplier).round() as u32).max(floor)
}

// ---------------------------------------------------------------------------
// Scaling
// ---------------------------------------------------------------------------

/// Scale a loaded exercise. `weight` is only filled in when a 1RM is known.
pub fn scale_weighted(
    prescription: &Prescription,
    intensity: Intensity,
    one_rep_max: Option<f64>,
) -> ScaledPrescription {
    let config = intensity.config();

    let weight = one_rep_max
        .filter(|orm| *orm > 0.0)
        .map(|orm| (orm * config.one_rm_fraction()).round());

    ScaledPrescription {
        sets: scale_count(prescription.sets, config.sets_multiplier, MIN_SETS),
        reps: scale_count(prescription.reps, config.reps_multiplier, MIN_REPS),
        rest_seconds: scale_count(prescription.rest_seconds, config.rest_multiplier, MIN_REST_SECONDS),
        weight,
        percent_of_1rm: config.percent_of_1rm(),
        rpe_target: config.rpe,
    }
}

/// Scale a bodyweight exercise, swapping in the easier/harder variant when
/// one is available for the chosen intensity.
pub fn scale_bodyweight(
    prescription: &BodyweightPrescription,
    intensity: Intensity,
    base_exercise_slug: &str,
    progressions: Option<&Progressions>,
) -> ScaledBodyweightPrescription {
    let config = intensity.config();

    let unit = reps::parse(&prescription.reps)
        .map(|parsed| parsed.unit)
        .unwrap_or(RepsUnit::Reps);
    let reps = reps::scale(&prescription.reps, config.bodyweight_multiplier(unit));

    let variant = match intensity {
        Intensity::Low => progressions.and_then(|p| p.easier.as_deref()),
        Intensity::Moderate => None,
        Intensity::High => progressions.and_then(|p| p.harder.as_deref()),
    };
    let exercise_slug = variant.unwrap_or(base_exercise_slug).to_string();
    let is_substituted = exercise_slug != base_exercise_slug;

    ScaledBodyweightPrescription {
        exercise_slug,
        is_substituted,
        reps,
        rest_seconds: scale_count(prescription.rest_seconds, config.rest_multiplier, MIN_REST_SECONDS),
        rpe_target: config.rpe,
    }
}

// ---------------------------------------------------------------------------
/// Exercise Dispatch
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScaledExercise {
    Weighted(ScaledPrescription),
    Bodyweight(ScaledBodyweightPrescription),
}

/// Pick the weighted or bodyweight path for a template exercise.
///
/// Loaded exercises only take the weighted path when their reps text is a
/// plain rep count; holds, per-side work and AMRAP sets stay free-form.
pub fn scale_exercise(
    exercise: &TemplateExercise,
    intensity: Intensity,
    one_rep_max: Option<f64>,
) -> ScaledExercise {
    let weighted_reps = if is_bodyweight(exercise.equipment.as_deref()) {
        None
    } else {
        reps::parse(&exercise.reps)
            .filter(|parsed| parsed.unit == RepsUnit::Reps && parsed.suffix.is_none())
            .map(|parsed| parsed.value.round() as u32)
    };

    match weighted_reps {
        Some(reps) => {
            let base = Prescription {
                sets: exercise.sets,
                reps,
                rest_seconds: exercise.rest_seconds,
            };
            debug!(slug = %exercise.slug, %intensity, "scaling weighted exercise");
            ScaledExercise::Weighted(scale_weighted(&base, intensity, one_rep_max))
        }
        None => {
            let base = BodyweightPrescription {
                reps: exercise.reps.clone(),
                rest_seconds: exercise.rest_seconds,
            };
            debug!(slug = %exercise.slug, %intensity, "scaling bodyweight exercise");
            ScaledExercise::Bodyweight(scale_bodyweight(
                &base,
                intensity,
                &exercise.slug,
                exercise.progressions.as_ref(),
            ))
        }
    }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
