//! Shared application service layer for ringrep.
//!
//! This crate provides a unified interface for front ends, centralizing
//! catalog editing, rename coordination against external selection
//! references, and batch-plan assembly.

pub mod batch;
pub mod catalog_service;
pub mod error;

// Re-export key types for convenience
pub use batch::{plan_batch, BatchItem, BatchPlan, BatchRequest};
pub use catalog_service::{
    list_option_sets, rename_option_set, OptionSetSummary, SelectedNames,
};
pub use error::{AppError, AppResult};
