//! One-rep-max estimation and load targets

/// Smallest load increment we prescribe (plates / dumbbells)
pub const LOAD_INCREMENT: f64 = 2.5;

/// Estimate a one-rep max with the Epley formula.
///
/// Returns 0 for invalid input (no weight or no reps). A single rep is
/// already a 1RM and comes back unchanged.
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
    if weight <= 0.0 || reps == 0 {
        return 0.0;
    }
    if reps == 1 {
        return weight;
    }
    (weight * (1.0 + reps as f64 / 30.0)).round()
}

/// Load for `percent` (a fraction, 0.0-1.0) of a 1RM, rounded to the nearest 2.5
pub fn target_weight(one_rep_max: f64, percent: f64) -> f64 {
    (one_rep_max * percent / LOAD_INCREMENT).round() * LOAD_INCREMENT
}

/// No equipment, or bodyweight only
pub fn is_bodyweight<S: AsRef<str>>(equipment: Option<&[S]>) -> bool {
    match equipment {
        None => true,
        Some([]) => true,
        Some([only]) => only.as_ref() == "bodyweight",
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epley_estimate() {
        assert_eq!(estimate_one_rep_max(100.0, 10), 133.0);
        assert_eq!(estimate_one_rep_max(200.0, 5), 233.0);
    }

    #[test]
    fn test_single_rep_is_unchanged() {
        assert_eq!(estimate_one_rep_max(142.5, 1), 142.5);
    }

    #[test]
    fn test_invalid_input_returns_zero() {
        assert_eq!(estimate_one_rep_max(0.0, 5), 0.0);
        assert_eq!(estimate_one_rep_max(-20.0, 5), 0.0);
        assert_eq!(estimate_one_rep_max(100.0, 0), 0.0);
    }

    #[test]
    fn test_target_weight_rounds_to_increment() {
        assert_eq!(target_weight(200.0, 0.78), 155.0);
        assert_eq!(target_weight(200.0, 0.76), 152.5);
        assert_eq!(target_weight(0.0, 0.8), 0.0);
    }

    #[test]
    fn test_is_bodyweight() {
        assert!(is_bodyweight::<&str>(None));
        assert!(is_bodyweight::<&str>(Some(&[][..])));
        assert!(is_bodyweight(Some(&["bodyweight"][..])));
        assert!(!is_bodyweight(Some(&["dumbbell"][..])));
        assert!(!is_bodyweight(Some(&["bodyweight", "pull-up bar"][..])));
    }
}
