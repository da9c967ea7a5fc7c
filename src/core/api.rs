//! Authenticated client for the SecretKeepR REST API.
//!
//! Thin wrapper over a blocking reqwest client: every request carries the
//! bearer token, bodies are JSON, and responses are decoded into the typed
//! structs from [`crate::core::model`]. Non-2xx statuses become
//! `Error::Api` carrying the status text; connection failures stay
//! `Error::Transport`.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::debug;

use crate::core::constants;
use crate::core::model::{Project, Secret, SecretsResponse, UpsertSecret, User};
use crate::error::{Error, Result};

/// Typed surface of the remote API.
///
/// Commands and import/export operations take this as a trait object so
/// tests can substitute a fake.
pub trait SecretsApi {
    /// `GET /user` - the logged-in user with organization memberships.
    fn current_user(&self) -> Result<User>;

    /// `GET /projects` - all projects the user belongs to.
    fn projects(&self) -> Result<Vec<Project>>;

    /// `GET /projects/{id}/secrets` - a project's secrets, all environments.
    fn project_secrets(&self, project_id: &str) -> Result<Vec<Secret>>;

    /// `POST /projects/{id}/secrets` - create or update a single secret.
    fn upsert_secret(&self, project_id: &str, secret: &UpsertSecret) -> Result<()>;
}

/// Blocking HTTP client bound to a base URL and bearer token.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    /// Client against the hosted API.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, constants::API_BASE_URL)
    }

    /// Client against an arbitrary base URL.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// GET a path, returning the response body. Requires a 200 status.
    pub fn get(&self, path: &str) -> Result<String> {
        let url = self.url(path);
        debug!("GET {}", url);

        let resp = self.http.get(&url).bearer_auth(&self.token).send()?;
        let status = resp.status();
        debug!("GET {} -> {}", url, status);

        if status != StatusCode::OK {
            return Err(Error::Api(status_text(status)));
        }
        Ok(resp.text()?)
    }

    /// POST a JSON body to a path. Accepts 200 or 201.
    pub fn post(&self, path: &str, body: &impl Serialize) -> Result<String> {
        let url = self.url(path);
        debug!("POST {}", url);

        let resp = self.http.post(&url).bearer_auth(&self.token).json(body).send()?;
        let status = resp.status();
        debug!("POST {} -> {}", url, status);

        if status != StatusCode::OK && status != StatusCode::CREATED {
            return Err(Error::Api(status_text(status)));
        }
        Ok(resp.text()?)
    }

    /// PUT a JSON body to a path. Requires a 200 status.
    pub fn put(&self, path: &str, body: &impl Serialize) -> Result<String> {
        let url = self.url(path);
        debug!("PUT {}", url);

        let resp = self.http.put(&url).bearer_auth(&self.token).json(body).send()?;
        let status = resp.status();
        debug!("PUT {} -> {}", url, status);

        if status != StatusCode::OK {
            return Err(Error::Api(status_text(status)));
        }
        Ok(resp.text()?)
    }

    /// DELETE a path. Accepts 200 or 204.
    pub fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        debug!("DELETE {}", url);

        let resp = self.http.delete(&url).bearer_auth(&self.token).send()?;
        let status = resp.status();
        debug!("DELETE {} -> {}", url, status);

        if status != StatusCode::OK && status != StatusCode::NO_CONTENT {
            return Err(Error::Api(status_text(status)));
        }
        Ok(())
    }
}

impl SecretsApi for ApiClient {
    fn current_user(&self) -> Result<User> {
        let body = self.get("/user")?;
        Ok(serde_json::from_str(&body)?)
    }

    fn projects(&self) -> Result<Vec<Project>> {
        let body = self.get("/projects")?;
        Ok(serde_json::from_str(&body)?)
    }

    fn project_secrets(&self, project_id: &str) -> Result<Vec<Secret>> {
        let body = self.get(&format!("/projects/{}/secrets", project_id))?;
        let resp: SecretsResponse = serde_json::from_str(&body)?;
        Ok(resp.secrets)
    }

    fn upsert_secret(&self, project_id: &str, secret: &UpsertSecret) -> Result<()> {
        self.post(&format!("/projects/{}/secrets", project_id), secret)?;
        Ok(())
    }
}

/// Status line in "404 Not Found" form, matching what the API reports.
fn status_text(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
