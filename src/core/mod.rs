//! Core client components.
//!
//! This module contains the reusable logic for credential storage, the
//! authenticated API client, and .env file handling.

pub mod api;
pub mod constants;
pub mod credentials;
pub mod dotenv;
pub mod env;
pub mod model;
