//! Local credential storage.
//!
//! Persists the bearer token at `~/.secretkeepr` with owner-only
//! permissions. A missing token file is the "not logged in" signal for
//! every authenticated command.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::core::constants;
use crate::error::{Error, Result};

/// Storage for the single cached bearer token.
///
/// Commands take this as a trait object so tests can substitute an
/// in-memory store.
pub trait CredentialStore {
    /// Persist a token, replacing any previous one. Surrounding
    /// whitespace is trimmed before writing.
    fn save(&self, token: &str) -> Result<()>;

    /// Load the stored token, trimmed. Returns `Error::NotLoggedIn` when
    /// no token has been saved.
    fn load(&self) -> Result<String>;
}

/// File-backed credential store.
pub struct FileCredentials {
    path: PathBuf,
}

impl FileCredentials {
    /// Store at the default location, `~/.secretkeepr`.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
        Ok(Self {
            path: home.join(constants::TOKEN_FILE),
        })
    }

    /// Store at an arbitrary path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CredentialStore for FileCredentials {
    fn save(&self, token: &str) -> Result<()> {
        let token = token.trim();
        fs::write(&self.path, token)?;

        // Restrict permissions on the token file (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        debug!("saved token to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<String> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::NotLoggedIn
            } else {
                Error::Io(e)
            }
        })?;
        Ok(contents.trim().to_string())
    }
}
