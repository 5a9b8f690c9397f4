//! mcal tools module
//!
//! Report builders on top of the energy calculators, used by the CLI.

pub mod activities;
pub mod report;
