//! Whoami command - show the logged-in user and their organizations.

use crate::cli::output;
use crate::core::api::{ApiClient, SecretsApi};
use crate::core::credentials::{CredentialStore, FileCredentials};
use crate::error::Result;

/// Show the current logged in user.
pub fn execute() -> Result<()> {
    let token = FileCredentials::from_home()?.load()?;
    let api = ApiClient::new(token);
    run(&api)
}

/// Fetch and print the user, separated from `execute` for testing.
pub fn run(api: &dyn SecretsApi) -> Result<()> {
    let user = api.current_user()?;

    output::success(&format!("Logged in as: {} ({})", user.name, user.email));
    println!();
    output::header("Organizations");
    for m in &user.memberships {
        output::list_item(&format!("{} (role: {})", m.organization.name, m.role));
    }

    Ok(())
}
