//! Energy expenditure module
//!
//! Mifflin-St Jeor BMR and activity-scaled TDEE.

pub mod activity;
pub mod calculator;
pub mod error;

pub use activity::{normalize_activity_key, valid_activity_keys, ActivityLevel, ACTIVITY_FACTORS};
pub use calculator::{
    calculate_bmr, calculate_tdee, mifflin_st_jeor, tdee, FEMALE_OFFSET, MALE_OFFSET,
};
pub use error::{EnergyError, EnergyResult};
