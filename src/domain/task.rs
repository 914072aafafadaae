//! Running instances of an application and their probe outcomes.

use serde::{Deserialize, Serialize};

/// One running instance of an application, as reported by the orchestrator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Task {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<u16>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub service_ports: Vec<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub staged_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub health_check_results: Vec<HealthCheckResult>,
}

impl Task {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_result(mut self, alive: bool) -> Self {
        self.health_check_results.push(HealthCheckResult {
            alive,
            task_id: Some(self.id.clone()),
            ..Default::default()
        });
        self
    }

    /// True when any recorded probe outcome reports the task as not alive.
    #[must_use]
    pub fn has_failing_check(&self) -> bool {
        self.health_check_results.iter().any(|r| !r.alive)
    }
}

/// Outcome of one probe against one task. Replaced on every poll.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HealthCheckResult {
    pub alive: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consecutive_failures: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_success: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_failure: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_success: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}
