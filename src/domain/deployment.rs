use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle for an in-flight change accepted by the orchestrator.
///
/// Returned by scale, restart, update, delete and version changes. Tracking
/// the deployment to completion is left to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Deployment {
    #[serde(rename = "deploymentId")]
    pub id: String,

    /// Application version the deployment converges to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} (version {})", self.id, version),
            None => write!(f, "{}", self.id),
        }
    }
}
