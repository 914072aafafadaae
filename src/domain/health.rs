//! Health aggregation over an application snapshot.
//!
//! The verdict is an all-must-pass reduction: a single probe result reporting
//! `alive = false` on any task makes the whole application unhealthy. An
//! application that declares no health checks, or has no tasks, is healthy.
//! Tasks with no recorded results count as passing.

use super::application::Application;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Unhealthy(String),
}

/// Counts behind a verdict, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthSummary {
    app_id: String,
    declared_checks: usize,
    tasks: usize,
    results: usize,
    failing_tasks: Vec<String>,
}

impl HealthSummary {
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn declared_checks(&self) -> usize {
        self.declared_checks
    }

    pub fn tasks(&self) -> usize {
        self.tasks
    }

    pub fn results(&self) -> usize {
        self.results
    }

    /// Identifiers of tasks with at least one failing probe result.
    pub fn failing_tasks(&self) -> &[String] {
        &self.failing_tasks
    }

    pub fn status(&self) -> HealthStatus {
        if self.declared_checks == 0 || self.tasks == 0 || self.failing_tasks.is_empty() {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy(format!(
                "{} of {} tasks failing health checks",
                self.failing_tasks.len(),
                self.tasks
            ))
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self.status(), HealthStatus::Healthy)
    }
}

impl Application {
    /// Reduce the task fleet's probe results to a single verdict.
    ///
    /// Short-circuits on the first failing result.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        if self.health_checks.is_empty() || self.tasks.is_empty() {
            return true;
        }
        !self.tasks.iter().any(|task| task.has_failing_check())
    }

    /// Full accounting of the snapshot. Agrees with [`Application::is_healthy`].
    #[must_use]
    pub fn health_summary(&self) -> HealthSummary {
        HealthSummary {
            app_id: self.id.clone(),
            declared_checks: self.health_checks.len(),
            tasks: self.tasks.len(),
            results: self
                .tasks
                .iter()
                .map(|task| task.health_check_results.len())
                .sum(),
            failing_tasks: self
                .tasks
                .iter()
                .filter(|task| task.has_failing_check())
                .map(|task| task.id.clone())
                .collect(),
        }
    }
}
