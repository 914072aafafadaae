//! Command handlers.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;

use super::{output, Commands};
use crate::client::Client;
use crate::domain::{Application, ApplicationVersion, Deployment, HealthStatus};
use crate::port::Transport;

/// Exit code for `health` when the application is unhealthy.
const UNHEALTHY: u8 = 2;

/// Run one command against the orchestrator.
pub async fn execute<T: Transport>(client: &Client<T>, command: Commands) -> anyhow::Result<ExitCode> {
    match command {
        Commands::List => {
            for id in client.list().await? {
                output::item(&id);
            }
        }
        Commands::Get(args) => {
            let app = client.get(&args.id).await?;
            output::document("application", &app)?;
        }
        Commands::Create(args) => {
            let app = read_descriptor(&args.file)?;
            let created = client.create(&app).await?;
            output::success(&format!("Created {}", created.id));
            if let Some(version) = &created.version {
                output::field("version", version);
            }
        }
        Commands::Update(args) => {
            let app = read_descriptor(&args.file)?;
            let deployment = client.update(&app).await?;
            accepted(&format!("Updating {}", app.id), &deployment);
        }
        Commands::Delete(args) => {
            let deployment = client.delete(&args.id).await?;
            accepted(&format!("Deleting {}", args.id), &deployment);
        }
        Commands::Scale(args) => {
            let deployment = client.scale(&args.id, args.instances).await?;
            accepted(
                &format!("Scaling {} to {} instances", args.id, args.instances),
                &deployment,
            );
        }
        Commands::Restart(args) => {
            let deployment = client.restart(&args.id, args.force).await?;
            accepted(&format!("Restarting {}", args.id), &deployment);
        }
        Commands::Health(args) => {
            let summary = client.health(&args.id).await?;
            output::section(summary.app_id());
            output::field("checks", summary.declared_checks());
            output::field("tasks", summary.tasks());
            output::field("results", summary.results());
            match summary.status() {
                HealthStatus::Healthy => output::success("healthy"),
                HealthStatus::Unhealthy(reason) => {
                    output::warning(&reason);
                    for task in summary.failing_tasks() {
                        output::field("failing", task);
                    }
                    return Ok(ExitCode::from(UNHEALTHY));
                }
            }
        }
        Commands::Versions(args) => {
            for version in client.list_versions(&args.id).await?.versions {
                output::item(&version);
            }
        }
        Commands::Rollback(args) => {
            if !client.has_version(&args.id, &args.version).await? {
                anyhow::bail!(
                    "version {} is not in the history of {}",
                    args.version,
                    args.id
                );
            }
            let deployment = client
                .change_version(&args.id, &ApplicationVersion::new(args.version.as_str()))
                .await?;
            accepted(
                &format!("Rolling {} to version {}", args.id, args.version),
                &deployment,
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn accepted(message: &str, deployment: &Deployment) {
    output::success(message);
    output::field("deployment", &deployment.id);
    if let Some(version) = &deployment.version {
        output::field("version", version);
    }
}

fn read_descriptor(path: &Path) -> anyhow::Result<Application> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read descriptor {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse descriptor {}", path.display()))
}
