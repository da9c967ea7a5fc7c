//! Command-line interface.

pub mod completions;
pub mod import;
pub mod login;
pub mod output;
pub mod projects;
pub mod whoami;

use clap::{Parser, Subcommand};

use crate::core::constants;

/// SecretKeepR - manage your organization secrets from your terminal.
#[derive(Parser)]
#[command(
    name = "secretkeepr",
    about = "Manage your organization secrets securely from your terminal",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Login via browser to your SecretKeepR account
    Login,

    /// Show your current logged in user
    Whoami,

    /// List projects or show secrets for a project
    Projects {
        /// Show secrets for a project by ID
        #[arg(short, long, value_name = "PROJECT_ID")]
        secrets: Option<String>,

        /// Export the project's secrets to a .env file instead of printing
        #[arg(long, requires = "secrets")]
        export_env: bool,

        /// Environment to export secrets for
        #[arg(long, default_value = constants::DEFAULT_ENVIRONMENT)]
        env: String,
    },

    /// Import secrets from a local .env file into a project environment
    Import {
        /// Project ID to import secrets into
        #[arg(short, long)]
        project: String,

        /// Environment for the secrets
        #[arg(short, long, default_value = constants::DEFAULT_ENVIRONMENT)]
        env: String,

        /// Path to .env file
        #[arg(short, long, default_value = constants::ENV_FILE)]
        file: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Login => login::execute(),
        Whoami => whoami::execute(),
        Projects {
            secrets,
            export_env,
            env,
        } => projects::execute(secrets.as_deref(), export_env, &env),
        Import { project, env, file } => import::execute(&project, &env, &file),
        Completions { shell } => completions::execute(shell),
    }
}
