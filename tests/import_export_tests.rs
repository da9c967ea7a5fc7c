//! Tests for import/export operations against a fake API.

use std::cell::RefCell;
use std::path::PathBuf;

use secretkeepr::core::api::SecretsApi;
use secretkeepr::core::env;
use secretkeepr::core::model::{
    Membership, Organization, Project, Secret, SecretValue, UpsertSecret, User,
};
use secretkeepr::error::{Error, Result};
use tempfile::TempDir;

/// In-memory API double recording every upsert request.
#[derive(Default)]
struct FakeApi {
    secrets: Vec<Secret>,
    fail_keys: Vec<String>,
    upserts: RefCell<Vec<UpsertSecret>>,
}

impl FakeApi {
    fn with_secrets(secrets: Vec<Secret>) -> Self {
        Self {
            secrets,
            ..Default::default()
        }
    }

    fn failing_on(keys: &[&str]) -> Self {
        Self {
            fail_keys: keys.iter().map(|k| k.to_string()).collect(),
            ..Default::default()
        }
    }
}

impl SecretsApi for FakeApi {
    fn current_user(&self) -> Result<User> {
        Ok(User {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            memberships: vec![Membership {
                role: "owner".to_string(),
                organization: Organization {
                    name: "acme".to_string(),
                },
            }],
        })
    }

    fn projects(&self) -> Result<Vec<Project>> {
        Ok(vec![])
    }

    fn project_secrets(&self, _project_id: &str) -> Result<Vec<Secret>> {
        Ok(self.secrets.clone())
    }

    fn upsert_secret(&self, _project_id: &str, secret: &UpsertSecret) -> Result<()> {
        self.upserts.borrow_mut().push(secret.clone());
        if self.fail_keys.contains(&secret.key) {
            return Err(Error::Api("500 Internal Server Error".to_string()));
        }
        Ok(())
    }
}

fn secret(key: &str, values: &[(&str, &str)]) -> Secret {
    Secret {
        key: key.to_string(),
        values: values
            .iter()
            .map(|(env, val)| SecretValue {
                environment: env.to_string(),
                value: val.to_string(),
            })
            .collect(),
    }
}

fn write_env_file(temp: &TempDir, contents: &str) -> PathBuf {
    let path = temp.path().join("test.env");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn import_issues_one_upsert_per_key() {
    let temp = TempDir::new().unwrap();
    let path = write_env_file(&temp, "A=1\nB=2\nC=3\n");
    let api = FakeApi::default();

    let outcomes = env::import(&api, "proj-1", "development", path.to_str().unwrap()).unwrap();

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|o| o.succeeded()));

    let upserts = api.upserts.borrow();
    assert_eq!(upserts.len(), 3);
    for upsert in upserts.iter() {
        assert_eq!(upsert.values.len(), 1);
        assert_eq!(upsert.values[0].environment, "development");
    }
}

#[test]
fn import_continues_after_a_failed_key() {
    let temp = TempDir::new().unwrap();
    let path = write_env_file(&temp, "ALPHA=1\nBETA=2\nGAMMA=3\n");
    let api = FakeApi::failing_on(&["BETA"]);

    let outcomes = env::import(&api, "proj-1", "production", path.to_str().unwrap()).unwrap();

    // All three requests were still issued
    assert_eq!(api.upserts.borrow().len(), 3);

    let beta = outcomes.iter().find(|o| o.key == "BETA").unwrap();
    assert!(!beta.succeeded());
    assert!(matches!(beta.error, Some(Error::Api(_))));

    assert!(outcomes.iter().filter(|o| o.succeeded()).count() == 2);
}

#[test]
fn import_skips_malformed_lines_without_requests() {
    let temp = TempDir::new().unwrap();
    let path = write_env_file(&temp, "# header\n\nnot a pair\nKEY=value\n");
    let api = FakeApi::default();

    let outcomes = env::import(&api, "p", "development", path.to_str().unwrap()).unwrap();

    assert_eq!(outcomes.len(), 1);
    assert_eq!(api.upserts.borrow().len(), 1);
    assert_eq!(api.upserts.borrow()[0].key, "KEY");
}

#[test]
fn import_missing_file_is_an_io_error() {
    let api = FakeApi::default();

    let err = env::import(&api, "p", "development", "/nonexistent/.env").unwrap_err();
    assert!(matches!(err, Error::Io(_)), "got: {:?}", err);
    assert!(api.upserts.borrow().is_empty());
}

#[test]
fn export_renders_one_environment() {
    let api = FakeApi::with_secrets(vec![
        secret("A", &[("dev", "1"), ("prod", "2")]),
        secret("B", &[("prod", "3")]),
    ]);

    let out = env::export(&api, "proj-1", "dev").unwrap();

    assert!(out.starts_with("# Secrets for project proj-1 - Environment: dev\n\n"));
    assert!(out.contains("A=1\n"));
    assert!(!out.contains("A=2"));
    assert!(!out.contains("B="));
}

#[test]
fn export_to_file_writes_env_suffixed_file() {
    let original_dir = std::env::current_dir().unwrap();
    let temp = TempDir::new().unwrap();
    std::env::set_current_dir(&temp).unwrap();

    let api = FakeApi::with_secrets(vec![secret("KEY", &[("staging", "v")])]);
    let result = env::export_to_file(&api, "proj-1", "staging");

    let contents = result
        .map(|filename| std::fs::read_to_string(filename).unwrap())
        .unwrap();

    std::env::set_current_dir(&original_dir).unwrap();

    assert!(contents.contains("KEY=v\n"));
}

#[test]
fn whoami_and_projects_run_against_fake() {
    let api = FakeApi::with_secrets(vec![secret("K", &[("dev", "v")])]);

    secretkeepr::cli::whoami::run(&api).unwrap();
    secretkeepr::cli::projects::run(&api, None, false, "development").unwrap();
    secretkeepr::cli::projects::run(&api, Some("proj-1"), false, "development").unwrap();
    secretkeepr::cli::import::run(&api, "proj-1", "development", "/nonexistent").unwrap_err();
}
