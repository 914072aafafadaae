//! Marathon application lifecycle client.
//!
//! Create, inspect, update, scale, restart, version and delete long-running
//! applications on a Marathon cluster, and decide whether a running
//! application is healthy from its tasks' health-check results.
//!
//! # Modules
//!
//! - [`domain`] - Wire-format data model: applications, tasks, deployments, versions
//! - [`client`] - Lifecycle, health and version operations
//! - [`port`] - The [`port::Transport`] trait the client talks through
//! - [`adapter`] - HTTP implementation of the transport
//! - [`config`] - TOML configuration and logging setup
//! - [`error`] - Error types for the crate
//! - [`cli`] - `marathonctl` command definitions and handlers
//!
//! # Example
//!
//! ```no_run
//! use marathon_client::client::Client;
//! use marathon_client::config::MarathonConfig;
//!
//! # async fn run() -> marathon_client::error::Result<()> {
//! let client = Client::from_config(&MarathonConfig::default());
//! if client.exists("/web").await? && !client.is_healthy("/web").await? {
//!     client.restart("/web", false).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
