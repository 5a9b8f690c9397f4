//! Activity levels and TDEE multipliers
//!
//! The factor table is fixed at compile time and its order is the order used
//! whenever valid keys are listed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::EnergyError;

/// Qualitative activity level used to scale BMR into TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// No exercise, mostly sitting
    Sedentary,
    /// 2-3 light workouts/week
    LightlyActive,
    /// 3-5 workouts/week
    ModeratelyActive,
    /// Intense training, manual job
    VeryActive,
    /// Athlete-level training
    SuperActive,
}

// ============================================================================
// Activity Factor Table
// ============================================================================

/// Activity level multipliers, in definition order
pub static ACTIVITY_FACTORS: [(ActivityLevel, f64); 5] = [
    (ActivityLevel::Sedentary, 1.2),
    (ActivityLevel::LightlyActive, 1.375),
    (ActivityLevel::ModeratelyActive, 1.55),
    (ActivityLevel::VeryActive, 1.725),
    (ActivityLevel::SuperActive, 1.9),
];

impl ActivityLevel {
    /// Table key for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::SuperActive => "super_active",
        }
    }

    /// Human-readable label, e.g. "Lightly active"
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly active",
            ActivityLevel::ModeratelyActive => "Moderately active",
            ActivityLevel::VeryActive => "Very active",
            ActivityLevel::SuperActive => "Super active",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "No exercise, mostly sitting",
            ActivityLevel::LightlyActive => "2-3 light workouts/week",
            ActivityLevel::ModeratelyActive => "3-5 workouts/week",
            ActivityLevel::VeryActive => "Intense training, manual job",
            ActivityLevel::SuperActive => "Athlete-level training",
        }
    }

    /// Multiplier applied to BMR for this level
    pub fn factor(&self) -> f64 {
        // Table rows follow variant declaration order
        ACTIVITY_FACTORS[*self as usize].1
    }

    /// Look up an already-normalized table key
    pub fn from_key(key: &str) -> Option<Self> {
        ACTIVITY_FACTORS
            .iter()
            .map(|(level, _)| *level)
            .find(|level| level.as_str() == key)
    }

    /// Iterate all levels in table order
    pub fn all() -> impl Iterator<Item = ActivityLevel> {
        ACTIVITY_FACTORS.iter().map(|(level, _)| *level)
    }
}

/// Normalize user input into a table key: lowercase, spaces to underscores
pub fn normalize_activity_key(input: &str) -> String {
    input.to_lowercase().replace(' ', "_")
}

/// Comma-separated list of valid keys, in table order
pub fn valid_activity_keys() -> String {
    ActivityLevel::all()
        .map(|level| level.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for ActivityLevel {
    type Err = EnergyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_activity_key(s);
        ActivityLevel::from_key(&key).ok_or_else(|| {
            EnergyError::invalid(format!(
                "Invalid activity level. Choose from: {}",
                valid_activity_keys()
            ))
        })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_values() {
        assert_eq!(ActivityLevel::Sedentary.factor(), 1.2);
        assert_eq!(ActivityLevel::LightlyActive.factor(), 1.375);
        assert_eq!(ActivityLevel::ModeratelyActive.factor(), 1.55);
        assert_eq!(ActivityLevel::VeryActive.factor(), 1.725);
        assert_eq!(ActivityLevel::SuperActive.factor(), 1.9);
    }

    #[test]
    fn test_table_rows_match_variants() {
        for (level, factor) in ACTIVITY_FACTORS.iter() {
            assert_eq!(level.factor(), *factor);
        }
    }

    #[test]
    fn test_table_order() {
        let keys: Vec<_> = ActivityLevel::all().map(|l| l.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "sedentary",
                "lightly_active",
                "moderately_active",
                "very_active",
                "super_active"
            ]
        );
    }

    #[test]
    fn test_parse_normalizes_case_and_spaces() {
        assert_eq!(
            "Lightly Active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::LightlyActive
        );
        assert_eq!(
            "VERY_ACTIVE".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryActive
        );
        assert_eq!(
            "sedentary".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::Sedentary
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "extreme".parse::<ActivityLevel>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid activity level. Choose from: sedentary, lightly_active, \
             moderately_active, very_active, super_active"
        );
    }

    #[test]
    fn test_parse_does_not_trim() {
        // Only case and inner spaces are normalized
        assert!(" sedentary".parse::<ActivityLevel>().is_err());
        assert!("lightly-active".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_from_key_requires_normalized_input() {
        assert_eq!(
            ActivityLevel::from_key("super_active"),
            Some(ActivityLevel::SuperActive)
        );
        assert_eq!(ActivityLevel::from_key("Super Active"), None);
    }

    #[test]
    fn test_serde_uses_table_keys() {
        let json = serde_json::to_string(&ActivityLevel::ModeratelyActive).unwrap();
        assert_eq!(json, "\"moderately_active\"");
        let level: ActivityLevel = serde_json::from_str("\"very_active\"").unwrap();
        assert_eq!(level, ActivityLevel::VeryActive);
    }
}
