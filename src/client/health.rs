use tracing::debug;

use super::Client;
use crate::domain::HealthSummary;
use crate::error::Result;
use crate::port::Transport;

impl<T: Transport> Client<T> {
    /// Whether every task of `id` passes its health checks.
    ///
    /// Fails with [`NotFound`](crate::error::Error::NotFound) when the
    /// application is not listed. See [`Application::is_healthy`] for the
    /// reduction.
    ///
    /// [`Application::is_healthy`]: crate::domain::Application::is_healthy
    pub async fn is_healthy(&self, id: &str) -> Result<bool> {
        self.require_present(id).await?;
        let app = self.get(id).await?;
        let healthy = app.is_healthy();
        debug!(app_id = %id, healthy, tasks = app.tasks.len(), "Evaluated application health");
        Ok(healthy)
    }

    /// Health accounting for `id` from a single snapshot.
    pub async fn health(&self, id: &str) -> Result<HealthSummary> {
        self.require_present(id).await?;
        Ok(self.get(id).await?.health_summary())
    }
}
