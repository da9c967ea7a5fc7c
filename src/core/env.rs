//! Import and export operations for .env files.
//!
//! Bridges the dotenv codec and the remote API: import posts each parsed
//! key as its own upsert request, export renders a project's secrets for
//! one environment back into .env text.

use tracing::debug;

use crate::core::api::SecretsApi;
use crate::core::dotenv;
use crate::core::model::UpsertSecret;
use crate::error::{Error, Result};

/// Result of importing one key.
///
/// A failed upsert is recorded here rather than aborting the batch.
#[derive(Debug)]
pub struct ImportOutcome {
    pub key: String,
    pub error: Option<Error>,
}

impl ImportOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Import secrets from a .env file into a project environment.
///
/// Reads and parses the file, then issues one upsert request per key,
/// sequentially. Per-key failures do not stop the remaining keys; each
/// outcome is reported independently. Returns an error only when the file
/// itself cannot be read.
pub fn import(
    api: &dyn SecretsApi,
    project_id: &str,
    environment: &str,
    path: &str,
) -> Result<Vec<ImportOutcome>> {
    let contents = std::fs::read_to_string(path)?;
    let entries = dotenv::parse(&contents);
    debug!("parsed {} entries from {}", entries.len(), path);

    let mut outcomes = Vec::with_capacity(entries.len());
    for (key, value) in &entries {
        let secret = UpsertSecret::single(key, environment, value);
        let error = api.upsert_secret(project_id, &secret).err();
        outcomes.push(ImportOutcome {
            key: key.clone(),
            error,
        });
    }

    Ok(outcomes)
}

/// Render a project's secrets for one environment as .env text.
pub fn export(api: &dyn SecretsApi, project_id: &str, environment: &str) -> Result<String> {
    let secrets = api.project_secrets(project_id)?;
    Ok(dotenv::serialize(&secrets, project_id, environment))
}

/// Write a project's secrets for one environment to `.env.<environment>`
/// in the current directory, truncating any existing file.
///
/// Returns the file name written.
pub fn export_to_file(
    api: &dyn SecretsApi,
    project_id: &str,
    environment: &str,
) -> Result<String> {
    let contents = export(api, project_id, environment)?;
    let filename = format!(".env.{}", environment);
    std::fs::write(&filename, contents)?;
    Ok(filename)
}
