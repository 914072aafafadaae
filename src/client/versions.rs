//! Version history and version changes.

use tracing::{debug, info, warn};

use super::{path, Client};
use crate::domain::{Application, ApplicationVersion, ApplicationVersions, Deployment};
use crate::error::Result;
use crate::port::Transport;

impl<T: Transport> Client<T> {
    /// Version labels of `id`, most recent first as reported upstream.
    pub async fn list_versions(&self, id: &str) -> Result<ApplicationVersions> {
        let path = path::versions(id)?;
        self.fetch(&path).await
    }

    /// Whether `version` appears in the history of `id`. One round-trip.
    pub async fn has_version(&self, id: &str, version: &str) -> Result<bool> {
        Ok(self.list_versions(id).await?.contains(version))
    }

    /// Configuration of `id` as it was at `version`.
    pub async fn version(&self, id: &str, version: &str) -> Result<Application> {
        let path = path::version(id, version)?;
        self.fetch(&path).await
    }

    /// Roll `id` back or forward to a historical configuration.
    ///
    /// Labels unknown to the orchestrator are rejected by it and surface as
    /// transport failures.
    pub async fn change_version(
        &self,
        id: &str,
        version: &ApplicationVersion,
    ) -> Result<Deployment> {
        debug!(app_id = %id, version = %version.version, "Changing application version");
        let body = serde_json::to_value(version)?;

        match self.put_deployment(id, &body).await {
            Ok(deployment) => {
                info!(app_id = %id, version = %version.version, deployment = %deployment, "Version change accepted");
                Ok(deployment)
            }
            Err(err) => {
                warn!(app_id = %id, version = %version.version, error = %err, "Failed to change application version");
                Err(err)
            }
        }
    }
}
