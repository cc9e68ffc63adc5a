//! Onboarding defaults derived from the athlete intake answers

use serde::{Deserialize, Serialize};

use crate::intensity::Intensity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Novice,
    Moderate,
    Advanced,
}

impl SkillLevel {
    /// From years of structured training
    pub fn from_years(years_experience: f64) -> Self {
        if years_experience < 1.0 {
            SkillLevel::Novice
        } else if years_experience < 4.0 {
            SkillLevel::Moderate
        } else {
            SkillLevel::Advanced
        }
    }

    /// Starting intensity before the athlete picks one
    pub fn default_intensity(self) -> Intensity {
        match self {
            SkillLevel::Novice => Intensity::Low,
            SkillLevel::Moderate => Intensity::Moderate,
            SkillLevel::Advanced => Intensity::High,
        }
    }
}

/// Suggested weekly training days (0 = Sunday) for a days-per-week answer.
/// Spreads sessions to leave rest days between them where possible.
pub fn default_training_days(days_per_week: u32) -> Vec<u32> {
    match days_per_week {
        1 => vec![1],
        2 => vec![1, 4],
        3 => vec![1, 3, 5],
        4 => vec![1, 2, 4, 5],
        5 => vec![1, 2, 3, 4, 5],
        6 => vec![1, 2, 3, 4, 5, 6],
        7 => (0..7).collect(),
        _ => Vec::new(),
    }
}
