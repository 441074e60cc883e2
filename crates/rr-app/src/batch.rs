//! Batch-plan assembly: the downstream gate for the selection flags.

use rr_core::AnalysisKind;
use rr_options::{validate_remote_job, OptionCatalog, OptionSet};
use rr_select::SelectionState;

use crate::catalog_service::SelectedNames;
use crate::error::AppResult;

/// Request to assemble a batch plan.
pub struct BatchRequest<'a> {
    pub catalog: &'a OptionCatalog,
    pub selection: &'a SelectionState,
    pub selected: &'a SelectedNames,
    pub allowed_partitions: &'a [String],
}

/// One included analysis with its resolved option set and effective flags.
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub kind: AnalysisKind,
    pub options: OptionSet,
    pub recalc: bool,
    pub replot: bool,
}

/// Declarative batch plan handed to the external submission collaborator.
#[derive(Debug, Clone, Default)]
pub struct BatchPlan {
    pub items: Vec<BatchItem>,
}

/// Resolve the included kinds to their selected option sets, in batch order.
///
/// Excluded kinds contribute nothing even when their stored recalc/replot
/// flags are set. Any invalid remote directive on an included set aborts the
/// whole plan, so the collaborator never sees a partially validated batch.
pub fn plan_batch(request: &BatchRequest<'_>) -> AppResult<BatchPlan> {
    let mut items = Vec::new();
    for kind in request.selection.included_kinds() {
        let name = request.selected.selected(kind);
        let options = request.catalog.get(kind, name)?.clone();
        if let Some(remote) = &options.remote_job {
            validate_remote_job(remote, request.allowed_partitions)?;
        }
        items.push(BatchItem {
            kind,
            options,
            recalc: request.selection.effective_recalc(kind),
            replot: request.selection.effective_replot(kind),
        });
    }
    tracing::info!(items = items.len(), "assembled analysis batch plan");
    Ok(BatchPlan { items })
}
