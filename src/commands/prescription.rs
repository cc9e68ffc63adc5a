//! Commands for intensity scaling and load targets

use serde::Serialize;

use crate::intensity::{scale_bodyweight, scale_weighted, Intensity};
use crate::models::{
    BodyweightPrescription, Prescription, Progressions, ScaledBodyweightPrescription,
    ScaledPrescription,
};
use crate::one_rep_max::{estimate_one_rep_max, target_weight};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OneRepMaxEstimate {
    pub weight: f64,
    pub reps: u32,
    /// 0 when the input can't produce an estimate
    pub one_rep_max: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadTarget {
    pub one_rep_max: f64,
    pub percent: f64,
    pub weight: f64,
}

/// Scale a loaded exercise
pub fn scale(
    sets: u32,
    reps: u32,
    rest_seconds: u32,
    intensity: Intensity,
    one_rep_max: Option<f64>,
) -> ScaledPrescription {
    let base = Prescription {
        sets,
        reps,
        rest_seconds,
    };
    scale_weighted(&base, intensity, one_rep_max)
}

/// Scale a bodyweight exercise with optional easier/harder variants
pub fn scale_body(
    exercise: &str,
    reps: &str,
    rest_seconds: u32,
    intensity: Intensity,
    easier: Option<String>,
    harder: Option<String>,
) -> ScaledBodyweightPrescription {
    let base = BodyweightPrescription {
        reps: reps.to_string(),
        rest_seconds,
    };
    let progressions = (easier.is_some() || harder.is_some()).then_some(Progressions { easier, harder });
    scale_bodyweight(&base, intensity, exercise, progressions.as_ref())
}

pub fn estimate(weight: f64, reps: u32) -> OneRepMaxEstimate {
    OneRepMaxEstimate {
        weight,
        reps,
        one_rep_max: estimate_one_rep_max(weight, reps),
    }
}

/// `percent` is a fraction of the one-rep max (0.78, not 78)
pub fn target(one_rep_max: f64, percent: f64) -> Result<LoadTarget, String> {
    if !(0.0..=1.0).contains(&percent) {
        return Err(format!("Percent must be a fraction between 0 and 1: {}", percent));
    }
    Ok(LoadTarget {
        one_rep_max,
        percent,
        weight: target_weight(one_rep_max, percent),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_command() {
        let scaled = scale(4, 8, 60, Intensity::High, Some(200.0));
        assert_eq!(scaled.weight, Some(175.0));
        assert_eq!(scaled.sets, 5);
    }

    #[test]
    fn test_scale_body_without_variants() {
        let scaled = scale_body("plank", "45s", 30, Intensity::Low, None, None);
        assert_eq!(scaled.exercise_slug, "plank");
        assert_eq!(scaled.reps, "30s");
        assert_eq!(scaled.rest_seconds, 38);
    }

    #[test]
    fn test_target_takes_fraction() {
        assert_eq!(target(200.0, 0.78).unwrap().weight, 155.0);
        assert_eq!(target(200.0, 0.76).unwrap().weight, 152.5);
        assert_eq!(target(200.0, 1.0).unwrap().weight, 200.0);
    }

    #[test]
    fn test_target_rejects_percentages() {
        for percent in [1.5, 78.0, -0.5, f64::NAN] {
            let err = target(200.0, percent).unwrap_err();
            assert!(err.contains("fraction"), "{}", err);
        }
    }

    #[test]
    fn test_estimate_invalid_is_zero() {
        assert_eq!(estimate(0.0, 5).one_rep_max, 0.0);
        assert_eq!(estimate(100.0, 10).one_rep_max, 133.0);
    }
}
