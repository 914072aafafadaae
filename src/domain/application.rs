//! Application descriptor as exchanged with the `/apps` resources.
//!
//! Field names follow the orchestrator's wire format exactly. Every optional
//! field is skipped on serialization when absent or empty, so a descriptor
//! built locally only carries what the caller set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::task::Task;

/// A declarative descriptor of a long-running workload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Application {
    /// Unique, stable identifier used as the resource key.
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmd: Option<String>,

    /// Placement constraints, e.g. `[["hostname", "UNIQUE"]]`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<Container>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpus: Option<f64>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub executor: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub health_checks: Vec<HealthCheck>,

    /// Declared instance count. Zero is a valid target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mem: Option<f64>,

    /// Observed tasks. Replaced wholesale on every fetch.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<u16>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub require_ports: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backoff_factor: Option<f64>,

    #[serde(skip_serializing_if = "is_zero")]
    pub tasks_running: u32,

    #[serde(skip_serializing_if = "is_zero")]
    pub tasks_staged: u32,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uris: Vec<String>,

    /// Opaque, server-assigned version label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(n: &u32) -> bool {
    *n == 0
}

impl Application {
    /// Create a descriptor carrying only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_cmd(mut self, cmd: impl Into<String>) -> Self {
        self.cmd = Some(cmd.into());
        self
    }

    #[must_use]
    pub fn with_resources(mut self, cpus: f64, mem: f64) -> Self {
        self.cpus = Some(cpus);
        self.mem = Some(mem);
        self
    }

    #[must_use]
    pub fn with_instances(mut self, instances: u32) -> Self {
        self.instances = Some(instances);
        self
    }

    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_constraint<I, S>(mut self, constraint: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints
            .push(constraint.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_health_check(mut self, check: HealthCheck) -> Self {
        self.health_checks.push(check);
        self
    }

    #[must_use]
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    #[must_use]
    pub fn with_container(mut self, container: Container) -> Self {
        self.container = Some(container);
        self
    }

    /// The caller-owned configuration only.
    ///
    /// Drops the server-assigned `version` and the observed task state. A
    /// `version` key in a replacement body is read as a rollback request.
    #[must_use]
    pub fn desired_state(&self) -> Self {
        Self {
            tasks: Vec::new(),
            tasks_running: 0,
            tasks_staged: 0,
            version: None,
            ..self.clone()
        }
    }
}

/// Full listing returned by `GET /apps`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Applications {
    #[serde(default)]
    pub apps: Vec<Application>,
}

/// Single-application envelope returned by `GET /apps/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationEnvelope {
    pub app: Application,
}

/// Container specification attached to an application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Container {
    /// Containerizer, e.g. `DOCKER`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker: Option<Docker>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<Volume>,
}

impl Container {
    /// A Docker container running `image` with bridge networking.
    pub fn docker(image: impl Into<String>) -> Self {
        Self {
            kind: Some("DOCKER".into()),
            docker: Some(Docker {
                image: image.into(),
                network: Some("BRIDGE".into()),
                port_mappings: Vec::new(),
            }),
            volumes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Docker {
    pub image: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub port_mappings: Vec<PortMapping>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortMapping {
    pub container_port: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Volume {
    pub container_path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_path: Option<String>,

    /// `RO` or `RW`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// A declared health probe. Results of running it live on each [`Task`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HealthCheck {
    /// `HTTP`, `TCP` or `COMMAND`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_index: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<HealthCommand>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub grace_period_seconds: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_seconds: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_consecutive_failures: Option<u32>,
}

impl HealthCheck {
    /// HTTP probe against `path` on the first declared port.
    pub fn http(path: impl Into<String>) -> Self {
        Self {
            protocol: Some("HTTP".into()),
            path: Some(path.into()),
            port_index: Some(0),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthCommand {
    pub value: String,
}
