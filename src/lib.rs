//! Maintenance Calorie Calculator Library
//!
//! Mifflin-St Jeor BMR and activity-scaled TDEE.

pub mod build_info;
pub mod energy;
pub mod models;
pub mod tools;

pub use energy::{calculate_bmr, calculate_tdee, ActivityLevel, EnergyError, EnergyResult};
pub use models::{BiometricProfile, Gender};
