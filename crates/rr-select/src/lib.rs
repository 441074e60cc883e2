//! Selection state for the analysis batch.
//!
//! A separate selection domain consumed by any front end: per-kind
//! include/recalc/replot flags plus the catalog-wide aggregate flags, with
//! the cascading consistency rules between them.
//!
//! # Design
//!
//! - Per-kind edits recompute their aggregate as the AND across all kinds.
//! - Aggregate edits push the value down to every kind.
//! - Nothing else re-derives a per-kind flag, so the rules cannot oscillate.

pub mod state;

pub use state::{KindFlags, SelectionState};
