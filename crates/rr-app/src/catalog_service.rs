//! Catalog editing services: summaries, selection references, and rename
//! coordination.

use rr_core::AnalysisKind;
use rr_options::{OptionCatalog, RenameOutcome, PRODUCTION};

use crate::error::AppResult;

/// Summary of an option set for listing.
#[derive(Debug, Clone)]
pub struct OptionSetSummary {
    pub name: String,
    pub parameter_count: usize,
    pub has_remote_job: bool,
}

/// List the option sets of a kind with summaries, in catalog order.
pub fn list_option_sets(catalog: &OptionCatalog, kind: AnalysisKind) -> Vec<OptionSetSummary> {
    catalog
        .list_names(kind)
        .into_iter()
        .map(|name| {
            let set = catalog
                .get(kind, name)
                .expect("listed name is present in the catalog");
            OptionSetSummary {
                name: set.name.clone(),
                parameter_count: set.parameters.len(),
                has_remote_job: set.remote_job.is_some(),
            }
        })
        .collect()
}

/// Per-kind "currently selected option set" references, owned by the view
/// layer's name selectors.
///
/// The catalog never reaches into this state; rename outcomes are applied
/// here by the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedNames {
    names: [String; AnalysisKind::COUNT],
}

impl Default for SelectedNames {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectedNames {
    /// Every kind starts on the seeded "production" set.
    pub fn new() -> Self {
        Self {
            names: std::array::from_fn(|_| PRODUCTION.to_string()),
        }
    }

    pub fn selected(&self, kind: AnalysisKind) -> &str {
        &self.names[kind.index()]
    }

    pub fn select(&mut self, kind: AnalysisKind, name: impl Into<String>) {
        self.names[kind.index()] = name.into();
    }

    /// Retarget the cached reference after a catalog rename. Only a
    /// reference that pointed at the old name moves.
    pub fn apply_rename(&mut self, kind: AnalysisKind, outcome: &RenameOutcome) {
        if let RenameOutcome::Renamed { old, new } = outcome {
            if self.names[kind.index()] == *old {
                self.names[kind.index()] = new.clone();
            }
        }
    }
}

/// Rename an option set and keep the external selection reference
/// consistent.
pub fn rename_option_set(
    catalog: &mut OptionCatalog,
    selected: &mut SelectedNames,
    kind: AnalysisKind,
    old: &str,
    new: &str,
) -> AppResult<RenameOutcome> {
    let outcome = catalog.rename(kind, old, new)?;
    selected.apply_rename(kind, &outcome);
    if let RenameOutcome::Renamed { old, new } = &outcome {
        tracing::debug!(kind = %kind, %old, %new, "renamed option set");
    }
    Ok(outcome)
}
