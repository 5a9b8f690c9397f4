//! Data models
//!
//! Plain value types passed into the energy calculators.

mod profile;

pub use profile::{BiometricProfile, Gender, MAX_AGE_YEARS};
