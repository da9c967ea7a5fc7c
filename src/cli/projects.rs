//! Projects command - list projects, show or export a project's secrets.

use crate::cli::output;
use crate::core::api::{ApiClient, SecretsApi};
use crate::core::credentials::{CredentialStore, FileCredentials};
use crate::core::env;
use crate::error::Result;

/// List projects, or show/export secrets for one project.
pub fn execute(secrets: Option<&str>, export_env: bool, environment: &str) -> Result<()> {
    let token = FileCredentials::from_home()?.load()?;
    let api = ApiClient::new(token);
    run(&api, secrets, export_env, environment)
}

/// Command body, separated from `execute` for testing.
pub fn run(
    api: &dyn SecretsApi,
    secrets: Option<&str>,
    export_env: bool,
    environment: &str,
) -> Result<()> {
    if let Some(project_id) = secrets {
        if export_env {
            let filename = env::export_to_file(api, project_id, environment)?;
            output::success(&format!("{} file created successfully", filename));
        } else {
            show_secrets(api, project_id)?;
        }
        return Ok(());
    }

    let projects = api.projects()?;
    if projects.is_empty() {
        output::dimmed("you don't belong to any projects");
        return Ok(());
    }

    output::header("Projects you belong to");
    for p in &projects {
        output::list_item(&format!("{} (ID: {}, Role: {})", p.name, p.id, p.role));
    }

    Ok(())
}

/// Print a project's secrets with their environment-specific values.
fn show_secrets(api: &dyn SecretsApi, project_id: &str) -> Result<()> {
    let secrets = api.project_secrets(project_id)?;
    if secrets.is_empty() {
        output::dimmed("no secrets in this project");
        return Ok(());
    }

    output::header(&format!("Secrets for project {}", project_id));
    for secret in &secrets {
        println!("  {}:", output::key(&secret.key));
        for val in &secret.values {
            println!("    [{}] {}", val.environment, val.value);
        }
    }

    Ok(())
}
