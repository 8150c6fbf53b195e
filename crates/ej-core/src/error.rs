use thiserror::Error;

pub type EjResult<T> = Result<T, EjError>;

#[derive(Error, Debug)]
pub enum EjError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value out of domain for {what}: {value}")]
    OutOfDomain { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
