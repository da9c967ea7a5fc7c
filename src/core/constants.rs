//! Constants used throughout secretkeepr.
//!
//! Centralizes magic strings and configuration values.

/// Base URL for the hosted SecretKeepR API.
pub const API_BASE_URL: &str = "https://secretkeepr.vercel.app/api";

/// URL of the browser login page where tokens are issued.
pub const LOGIN_URL: &str = "https://secretkeepr.vercel.app/admin/preferences";

/// Token file name relative to HOME (~/.secretkeepr).
pub const TOKEN_FILE: &str = ".secretkeepr";

/// Default environment for import and export.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Default .env file name for import.
pub const ENV_FILE: &str = ".env";
