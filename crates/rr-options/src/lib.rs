//! rr-options: option-set schema, catalog, seeded defaults, and validation.

pub mod catalog;
pub mod defaults;
pub mod schema;
pub mod validate;

pub use catalog::{OptionCatalog, RenameOutcome};
pub use defaults::{production_defaults, test_variant, PRODUCTION, TEST};
pub use schema::{OptionSet, RemoteJobSpec};
pub use validate::{require_keys, validate_remote_job};

use rr_core::AnalysisKind;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error taxonomy for catalog and option-set operations.
///
/// Every mutating operation either fully succeeds or fails with one of these
/// without touching catalog state.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No option set named '{name}' for {kind}")]
    NotFound { kind: AnalysisKind, name: String },

    #[error("Option set '{name}' already exists for {kind}")]
    Conflict { kind: AnalysisKind, name: String },
}
