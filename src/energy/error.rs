//! Energy calculation errors

use thiserror::Error;

/// Error returned by the BMR and TDEE calculators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnergyError {
    /// An input did not normalize to a recognized value
    #[error("{0}")]
    InvalidInput(String),
}

impl EnergyError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        EnergyError::InvalidInput(message.into())
    }
}

/// Result type for energy calculations
pub type EnergyResult<T> = Result<T, EnergyError>;
