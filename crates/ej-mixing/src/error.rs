//! Error types for mixing calculations.

use ej_core::EjError;
use thiserror::Error;

/// Errors that can occur while evaluating the mixing relations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MixingError {
    #[error("Domain error: {op} of {value} in {what}")]
    Domain {
        op: &'static str,
        what: &'static str,
        value: f64,
    },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type MixingResult<T> = Result<T, MixingError>;

impl From<EjError> for MixingError {
    fn from(e: EjError) -> Self {
        match e {
            EjError::NonFinite { what, .. } => MixingError::NonPhysical { what },
            EjError::OutOfDomain { what, .. } => MixingError::NonPhysical { what },
            EjError::InvalidArg { what } => MixingError::InvalidArg { what },
            EjError::Invariant { what } => MixingError::InvalidArg { what },
        }
    }
}

impl From<MixingError> for EjError {
    fn from(e: MixingError) -> Self {
        match e {
            MixingError::Domain { what, value, .. } => EjError::OutOfDomain { what, value },
            MixingError::NonPhysical { what } => EjError::InvalidArg { what },
            MixingError::InvalidArg { what } => EjError::InvalidArg { what },
        }
    }
}
