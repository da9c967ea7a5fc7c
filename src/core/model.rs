//! API payload types.
//!
//! Typed serde structs for each endpoint. Decoding failures (malformed
//! JSON, missing fields) surface as `Error::Decode`, distinct from
//! transport-level errors.

use serde::{Deserialize, Serialize};

/// A project the user belongs to, with their role in it.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub role: String,
}

/// One environment-scoped value of a secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretValue {
    pub environment: String,
    pub value: String,
}

/// A secret with its per-environment values, in server-provided order.
#[derive(Debug, Clone, Deserialize)]
pub struct Secret {
    pub key: String,
    pub values: Vec<SecretValue>,
}

/// Wrapper for the `GET /projects/{id}/secrets` response.
#[derive(Debug, Deserialize)]
pub struct SecretsResponse {
    pub secrets: Vec<Secret>,
}

/// Request body for `POST /projects/{id}/secrets`.
///
/// A single-secret, single-environment write; batch import issues one
/// such request per key.
#[derive(Debug, Clone, Serialize)]
pub struct UpsertSecret {
    pub key: String,
    pub values: Vec<SecretValue>,
}

impl UpsertSecret {
    /// Build an upsert for one key under one environment.
    pub fn single(key: &str, environment: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            values: vec![SecretValue {
                environment: environment.to_string(),
                value: value.to_string(),
            }],
        }
    }
}

/// The logged-in user, as returned by `GET /user`.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub memberships: Vec<Membership>,
}

/// An organization membership with the user's role.
#[derive(Debug, Clone, Deserialize)]
pub struct Membership {
    pub role: String,
    pub organization: Organization,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    pub name: String,
}
