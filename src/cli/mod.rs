//! Command-line interface definitions.
//!
//! Defines the `marathonctl` command tree using `clap`. Each subcommand maps
//! onto one [`Client`](crate::client::Client) operation.

pub mod handler;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Manage applications on a Marathon cluster
#[derive(Parser, Debug)]
#[command(name = "marathonctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "marathon.toml")]
    pub config: PathBuf,

    /// Override the API base URL (e.g. http://127.0.0.1:8080/v2)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List application identifiers
    List,

    /// Show an application descriptor
    Get(AppArg),

    /// Create an application from a JSON descriptor
    Create(DescriptorArg),

    /// Replace an application's configuration from a JSON descriptor
    Update(DescriptorArg),

    /// Delete an application
    Delete(AppArg),

    /// Change an application's instance count
    Scale(ScaleArgs),

    /// Restart every task of an application
    Restart(RestartArgs),

    /// Report whether an application's tasks pass their health checks
    Health(AppArg),

    /// List an application's version history
    Versions(AppArg),

    /// Roll an application back or forward to a version from its history
    Rollback(RollbackArgs),
}

#[derive(Parser, Debug)]
pub struct AppArg {
    /// Application identifier (e.g. /group/web)
    pub id: String,
}

#[derive(Parser, Debug)]
pub struct DescriptorArg {
    /// Path to the JSON application descriptor
    pub file: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ScaleArgs {
    /// Application identifier
    pub id: String,

    /// Target instance count (0 drains the application)
    pub instances: u32,
}

#[derive(Parser, Debug)]
pub struct RestartArgs {
    /// Application identifier
    pub id: String,

    /// Override a deployment already in progress
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct RollbackArgs {
    /// Application identifier
    pub id: String,

    /// Version label, as printed by `versions`
    pub version: String,
}
