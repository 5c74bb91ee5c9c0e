// choose-client/src/session.rs
// Bearer token storage and session-expiry signal

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Holder for at most one bearer token.
///
/// Each call is atomic on its own. Contents are never validated.
pub trait TokenStore: Send + Sync + std::fmt::Debug {
    fn get(&self) -> Option<String>;

    /// Overwrite any existing token
    fn set(&self, token: &str);

    /// Clear the token. No-op when none is stored.
    fn remove(&self);
}

/// Emitted once per 401 response, after the token has been cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionExpired;

/// Process-local token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn set(&self, token: &str) {
        *self.token.write() = Some(token.to_string());
    }

    fn remove(&self) {
        self.token.write().take();
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredToken {
    auth_token: String,
}

/// Token store backed by a JSON file, so the session survives restarts.
///
/// The file holds `{"auth_token": "..."}`. Reads are served from memory;
/// writes go through to disk. A failed disk write is logged and the
/// in-memory value still changes. An empty file means no token, which is
/// what `remove` leaves behind when the file cannot be deleted.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    token: RwLock<Option<String>>,
}

impl FileTokenStore {
    /// Open the store at `path`, loading a previously saved token if any
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let token = Self::load(&path);
        Self {
            path,
            token: RwLock::new(token),
        }
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Option<String> {
        if !path.exists() {
            return None;
        }
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read token file");
                return None;
            }
        };
        if json.trim().is_empty() {
            return None;
        }
        match serde_json::from_str::<StoredToken>(&json) {
            Ok(stored) => Some(stored.auth_token),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable token file");
                None
            }
        }
    }

    fn save(&self, token: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&StoredToken {
            auth_token: token.to_string(),
        })?;
        fs::write(&self.path, json)
    }

    fn delete(&self) -> std::io::Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to delete token file, truncating it");
            fs::write(&self.path, "")?;
        }
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn set(&self, token: &str) {
        let mut guard = self.token.write();
        if let Err(e) = self.save(token) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist token");
        }
        *guard = Some(token.to_string());
    }

    fn remove(&self) {
        let mut guard = self.token.write();
        if let Err(e) = self.delete() {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to clear token file");
        }
        *guard = None;
    }
}
