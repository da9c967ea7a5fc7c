//! Import command - import secrets from a .env file.

use crate::cli::output;
use crate::core::api::{ApiClient, SecretsApi};
use crate::core::credentials::{CredentialStore, FileCredentials};
use crate::core::env;
use crate::error::Result;

/// Import secrets from a .env file into a project environment.
pub fn execute(project_id: &str, environment: &str, file: &str) -> Result<()> {
    let token = FileCredentials::from_home()?.load()?;
    let api = ApiClient::new(token);
    run(&api, project_id, environment, file)
}

/// Command body, separated from `execute` for testing.
pub fn run(
    api: &dyn SecretsApi,
    project_id: &str,
    environment: &str,
    file: &str,
) -> Result<()> {
    let outcomes = env::import(api, project_id, environment, file)?;
    if outcomes.is_empty() {
        output::dimmed("no secrets found in .env file");
        return Ok(());
    }

    println!(
        "Importing secrets into project {} (env: {}):",
        project_id, environment
    );
    for outcome in &outcomes {
        match &outcome.error {
            None => output::success(&outcome.key),
            Some(e) => output::error(&format!("{}: {}", outcome.key, e)),
        }
    }

    let imported = outcomes.iter().filter(|o| o.succeeded()).count();
    output::success(&format!(
        "import completed: {}/{} keys",
        imported,
        outcomes.len()
    ));

    Ok(())
}
