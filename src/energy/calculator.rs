//! BMR and TDEE calculators
//!
//! Pure functions: no state is read or written besides the static activity
//! factor table, so every call with the same inputs yields the same bits.

use crate::models::Gender;

use super::activity::ActivityLevel;
use super::error::EnergyResult;

/// Mifflin-St Jeor constant added for men
pub const MALE_OFFSET: f64 = 5.0;
/// Mifflin-St Jeor constant added for women
pub const FEMALE_OFFSET: f64 = -161.0;

/// Mifflin-St Jeor BMR with a typed gender
///
/// Formula: 10 * W(kg) + 6.25 * H(cm) - 5 * A + S
/// where S = +5 for men and -161 for women.
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base_bmr = (10.0 * weight_kg) + (6.25 * height_cm) - (5.0 * f64::from(age));

    match gender {
        Gender::Male => base_bmr + MALE_OFFSET,
        Gender::Female => base_bmr + FEMALE_OFFSET,
    }
}

/// TDEE for a typed activity level
pub fn tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.factor()
}

/// Calculate the Basal Metabolic Rate (BMR) in calories/day
///
/// # Arguments
/// * `weight_kg` - Weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age` - Age in years
/// * `gender` - "male" or "female", any case
///
/// # Errors
/// `InvalidInput` if the gender is not recognized.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: &str) -> EnergyResult<f64> {
    let gender: Gender = gender.parse().inspect_err(|_| {
        tracing::debug!("Rejected gender input '{}'", gender);
    })?;

    let bmr = mifflin_st_jeor(weight_kg, height_cm, age, gender);
    tracing::debug!(
        weight_kg,
        height_cm,
        age,
        gender = gender.as_str(),
        bmr,
        "Calculated BMR"
    );
    Ok(bmr)
}

/// Calculate the Total Daily Energy Expenditure (maintenance calories)
///
/// The activity level is lowercased and spaces become underscores before
/// lookup, so "Lightly Active" and "lightly_active" are the same level.
///
/// # Errors
/// `InvalidInput` listing every valid key if the level is not recognized.
pub fn calculate_tdee(bmr: f64, activity_level: &str) -> EnergyResult<f64> {
    let level: ActivityLevel = activity_level.parse().inspect_err(|_| {
        tracing::debug!("Rejected activity level input '{}'", activity_level);
    })?;

    let tdee = tdee(bmr, level);
    tracing::debug!(bmr, activity_level = level.as_str(), tdee, "Calculated TDEE");
    Ok(tdee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::{EnergyError, ACTIVITY_FACTORS};

    #[test]
    fn test_bmr_male_example() {
        let bmr = calculate_bmr(53.0, 165.0, 20, "male").unwrap();
        assert_eq!(bmr, 1466.25);
    }

    #[test]
    fn test_bmr_female_example() {
        let bmr = calculate_bmr(70.0, 170.0, 30, "female").unwrap();
        assert_eq!(bmr, 1451.5);
    }

    #[test]
    fn test_bmr_matches_formula() {
        let cases: [(f64, f64, u32); 3] = [(40.0, 150.0, 0), (81.3, 182.4, 45), (120.0, 200.0, 90)];
        for (w, h, a) in cases {
            let base = 10.0 * w + 6.25 * h - 5.0 * f64::from(a);
            assert!((calculate_bmr(w, h, a, "male").unwrap() - (base + 5.0)).abs() < 1e-9);
            assert!((calculate_bmr(w, h, a, "female").unwrap() - (base - 161.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bmr_gender_case_insensitive() {
        let lower = calculate_bmr(60.0, 170.0, 25, "male").unwrap();
        let title = calculate_bmr(60.0, 170.0, 25, "Male").unwrap();
        let upper = calculate_bmr(60.0, 170.0, 25, "MALE").unwrap();
        assert_eq!(lower.to_bits(), title.to_bits());
        assert_eq!(lower.to_bits(), upper.to_bits());
    }

    #[test]
    fn test_bmr_invalid_gender() {
        for gender in ["other", "", "man", "x"] {
            let result = calculate_bmr(53.0, 165.0, 20, gender);
            assert!(matches!(result, Err(EnergyError::InvalidInput(_))), "{gender:?}");
        }
    }

    #[test]
    fn test_bmr_does_not_range_check() {
        // Out-of-range values still compute; validation is opt-in on the profile
        let bmr = calculate_bmr(-10.0, 0.0, 200, "female").unwrap();
        assert_eq!(bmr, -100.0 - 1000.0 - 161.0);
    }

    #[test]
    fn test_tdee_each_level() {
        let bmr = 1500.0;
        let expected = [
            ("sedentary", 1.2),
            ("lightly_active", 1.375),
            ("moderately_active", 1.55),
            ("very_active", 1.725),
            ("super_active", 1.9),
        ];
        for (key, factor) in expected {
            assert_eq!(calculate_tdee(bmr, key).unwrap(), bmr * factor);
        }
        assert_eq!(ACTIVITY_FACTORS.len(), expected.len());
    }

    #[test]
    fn test_tdee_normalizes_input() {
        let spaced = calculate_tdee(1466.25, "Lightly Active").unwrap();
        let keyed = calculate_tdee(1466.25, "lightly_active").unwrap();
        assert_eq!(spaced.to_bits(), keyed.to_bits());
    }

    #[test]
    fn test_tdee_example() {
        let bmr = calculate_bmr(53.0, 165.0, 20, "male").unwrap();
        let tdee = calculate_tdee(bmr, "lightly_active").unwrap();
        assert_eq!(tdee, 2016.09375);
        assert_eq!(tdee.ceil(), 2017.0);
    }

    #[test]
    fn test_tdee_invalid_level() {
        let err = calculate_tdee(1500.0, "extreme").unwrap_err();
        assert_eq!(
            err,
            EnergyError::InvalidInput(
                "Invalid activity level. Choose from: sedentary, lightly_active, \
                 moderately_active, very_active, super_active"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_calls_are_idempotent() {
        let first = calculate_bmr(72.4, 178.2, 37, "Female").unwrap();
        let second = calculate_bmr(72.4, 178.2, 37, "Female").unwrap();
        assert_eq!(first.to_bits(), second.to_bits());

        let first = calculate_tdee(first, "Very Active").unwrap();
        let second = calculate_tdee(second, "Very Active").unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_typed_and_string_api_agree() {
        let typed = tdee(
            mifflin_st_jeor(53.0, 165.0, 20, Gender::Male),
            ActivityLevel::LightlyActive,
        );
        let stringly = calculate_tdee(
            calculate_bmr(53.0, 165.0, 20, "male").unwrap(),
            "lightly_active",
        )
        .unwrap();
        assert_eq!(typed.to_bits(), stringly.to_bits());
    }

    #[test]
    fn test_concurrent_calls() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| calculate_tdee(1466.25, "lightly_active").unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2016.09375);
        }
    }
}
