//! Session credential storage.
//!
//! Stores the bearer token in `<quill home>/session.json` with restricted
//! permissions (0600). The token is opaque: nothing here validates or
//! inspects its contents, and it is never logged in full.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// On-disk shape of the session file.
#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    token: String,
}

/// Holds the single session credential, persisted across process restarts.
///
/// Exclusively owns the credential: every component that needs the token
/// reads it through a shared reference to this store at call time.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store backed by a specific file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a store backed by the default session path.
    pub fn open_default() -> Self {
        Self::new(paths::session_path())
    }

    /// Returns the current credential, or `None` when unauthenticated.
    ///
    /// A missing, empty, or unreadable session file all read as absent;
    /// an unreadable file is logged but never surfaced as an error.
    pub fn get(&self) -> Option<String> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read session file");
                return None;
            }
        };

        let session: SessionFile = match serde_json::from_str(&contents) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "malformed session file");
                return None;
            }
        };

        let token = session.token.trim();
        if token.is_empty() {
            return None;
        }
        Some(token.to_string())
    }

    /// Persists a credential; subsequent `get` calls return it until cleared.
    pub fn set(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(&SessionFile {
            token: token.to_string(),
        })
        .context("Failed to serialize session")?;

        // Write with restricted permissions
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, contents)
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        Ok(())
    }

    /// Removes the credential. A missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", self.path.display())),
        }
    }
}
