//! Error type for the CLI front end.

/// Wraps errors from the case and mixing layers behind one interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Case error: {0}")]
    Case(#[from] ej_case::CaseError),

    #[error("Mixing error: {0}")]
    Mixing(#[from] ej_mixing::MixingError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type AppResult<T> = Result<T, AppError>;
