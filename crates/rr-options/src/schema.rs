//! Option-set schema definitions.

use rr_core::Params;
use serde::{Deserialize, Serialize};

/// A named bundle of typed parameters governing one run of a specific
/// analysis kind.
///
/// Names are unique within the owning kind's catalog. The parameter keys and
/// their types are fixed per kind by an external schema; the seeded defaults
/// in [`crate::defaults`] carry the canonical key set for each kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSet {
    pub name: String,
    #[serde(default)]
    pub parameters: Params,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_job: Option<RemoteJobSpec>,
}

impl OptionSet {
    /// Empty option set with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Params::new(),
            remote_job: None,
        }
    }
}

/// Sparse, declarative cluster-submission directive.
///
/// Every field is independently optional: the originating editor enables
/// them one at a time, so absence carries meaning and must survive
/// serialization. The entirely empty directive is valid and means "submit
/// with cluster defaults".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteJobSpec {
    /// Cluster partition name, validated against a supplied allow-list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,

    /// Number of tasks requested from the scheduler. Positive when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_count: Option<i32>,

    /// Wall-time limit as `HH:MM`. Blank is treated as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_time: Option<String>,

    /// Run the job in scheduler diagnostic mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic_mode: Option<bool>,
}

impl RemoteJobSpec {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.partition.is_none()
            && self.task_count.is_none()
            && self.wall_time.is_none()
            && self.diagnostic_mode.is_none()
    }
}
