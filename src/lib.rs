//! SecretKeepR - command-line client for the SecretKeepR secrets service.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── login         # Browser login + token paste
//! │   ├── whoami        # Current user and memberships
//! │   ├── projects      # List projects, show/export secrets
//! │   ├── import        # Import a .env file into a project
//! │   └── completions   # Shell completions
//! └── core/             # Core client components
//!     ├── credentials   # Token storage (~/.secretkeepr)
//!     ├── api           # Authenticated REST client
//!     ├── model         # Project / Secret / User payloads
//!     ├── dotenv        # .env parse / serialize
//!     └── env           # Import/export operations
//! ```
//!
//! # Features
//!
//! - Bearer-token auth against the hosted SecretKeepR API
//! - Per-project, per-environment secret values
//! - Seamless .env file import and export
//! - Token cached locally with owner-only permissions

pub mod cli;
pub mod core;
pub mod error;
