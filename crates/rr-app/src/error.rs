//! Error types for the rr-app service layer.

/// Application error type that wraps errors from the model crates and
/// provides a unified error interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for rr-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<rr_options::CatalogError> for AppError {
    fn from(err: rr_options::CatalogError) -> Self {
        AppError::Catalog(err.to_string())
    }
}
