//! Remote-job and parameter-schema validation.

use rr_core::Params;

use crate::schema::RemoteJobSpec;
use crate::{CatalogError, CatalogResult};

/// Validate a remote-job directive against the cluster partition allow-list.
///
/// Absent fields are valid; the entirely empty directive means "submit with
/// cluster defaults". The allow-list is externally supplied, not a fixed
/// enum.
pub fn validate_remote_job(
    spec: &RemoteJobSpec,
    allowed_partitions: &[String],
) -> CatalogResult<()> {
    if let Some(partition) = &spec.partition {
        if !allowed_partitions.iter().any(|p| p == partition) {
            return Err(CatalogError::Validation {
                field: "partition".to_string(),
                value: partition.clone(),
                reason: "unknown partition".to_string(),
            });
        }
    }

    if let Some(task_count) = spec.task_count {
        if task_count <= 0 {
            return Err(CatalogError::Validation {
                field: "task_count".to_string(),
                value: task_count.to_string(),
                reason: "must be a positive integer".to_string(),
            });
        }
    }

    if let Some(wall_time) = &spec.wall_time {
        let trimmed = wall_time.trim();
        if !trimmed.is_empty() && !is_hh_mm(trimmed) {
            return Err(CatalogError::Validation {
                field: "wall_time".to_string(),
                value: wall_time.clone(),
                reason: "must match HH:MM".to_string(),
            });
        }
    }

    Ok(())
}

/// `HH:MM` with both parts nonempty and numeric. Hours are unbounded: a
/// 30-hour limit is a valid scheduler request.
fn is_hh_mm(s: &str) -> bool {
    match s.split_once(':') {
        Some((hours, minutes)) => is_numeric(hours) && is_numeric(minutes),
        None => false,
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Check that every key of the externally supplied reference schema is
/// present in `params`. Extra keys are not rejected here; editors add
/// optional keys at runtime.
pub fn require_keys(reference: &Params, params: &Params) -> CatalogResult<()> {
    for key in reference.keys() {
        if !params.contains(key) {
            return Err(CatalogError::Validation {
                field: key.to_string(),
                value: "(absent)".to_string(),
                reason: "required parameter is missing".to_string(),
            });
        }
    }
    Ok(())
}
