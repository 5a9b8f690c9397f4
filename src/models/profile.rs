//! Biometric profile model
//!
//! Caller-constructed inputs for the BMR calculation. Never stored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::energy::{mifflin_st_jeor, EnergyError, EnergyResult};

/// Upper bound on age accepted by [`BiometricProfile::validate`]
pub const MAX_AGE_YEARS: u32 = 150;

/// Gender, selecting the Mifflin-St Jeor constant offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = EnergyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(EnergyError::invalid("Gender must be 'male' or 'female'.")),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight, height, age and gender of one person
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiometricProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
}

impl BiometricProfile {
    pub fn new(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> Self {
        Self {
            weight_kg,
            height_cm,
            age,
            gender,
        }
    }

    /// Basal Metabolic Rate for this profile in kcal/day
    pub fn bmr(&self) -> f64 {
        mifflin_st_jeor(self.weight_kg, self.height_cm, self.age, self.gender)
    }

    /// Optional range check; the calculators themselves accept any numbers
    pub fn validate(&self) -> EnergyResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(EnergyError::invalid(format!(
                "Weight must be a positive number of kilograms, got {}.",
                self.weight_kg
            )));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(EnergyError::invalid(format!(
                "Height must be a positive number of centimeters, got {}.",
                self.height_cm
            )));
        }
        if self.age > MAX_AGE_YEARS {
            return Err(EnergyError::invalid(format!(
                "Age must be at most {} years, got {}.",
                MAX_AGE_YEARS, self.age
            )));
        }
        Ok(())
    }
}
