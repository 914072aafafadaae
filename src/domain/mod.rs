//! Orchestrator data model: applications, tasks, deployments and versions.

mod application;
mod deployment;
mod health;
mod task;
mod version;

pub use application::{
    Application, ApplicationEnvelope, Applications, Container, Docker, HealthCheck,
    HealthCommand, PortMapping, Volume,
};
pub use deployment::Deployment;
pub use health::{HealthStatus, HealthSummary};
pub use task::{HealthCheckResult, Task};
pub use version::{ApplicationVersion, ApplicationVersions};
