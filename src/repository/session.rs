//! Session store: the logged-in user record kept in durable client storage
//!
//! Presence of a record means "logged in". There is no expiry and no refresh;
//! the record lives until logout clears it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::AppResult;
use crate::models::User;

/// Storage key of the session record
pub const SESSION_KEY: &str = "lm_user";

/// Access to the stored session record.
///
/// Calls are synchronous: one read or write each, no locking across calls.
pub trait SessionRepository: Send + Sync {
    /// Stored user, or `None` when logged out.
    /// Unreadable or corrupted records also read as `None`.
    fn get(&self) -> Option<User>;

    /// Store `user`, replacing any previous record
    fn set(&self, user: &User) -> AppResult<()>;

    /// Remove the stored record. Clearing an empty store is not an error.
    fn clear(&self) -> AppResult<()>;
}

fn decode(raw: &str, origin: &str) -> Option<User> {
    match serde_json::from_str(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("Ignoring corrupted session record in {}: {}", origin, e);
            None
        }
    }
}

/// Session record stored as a JSON file
#[derive(Debug, Clone)]
pub struct FileSessionRepository {
    path: PathBuf,
}

impl FileSessionRepository {
    /// Store the record as `<dir>/lm_user.json`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", SESSION_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionRepository for FileSessionRepository {
    fn get(&self) -> Option<User> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode(&raw, &self.path.display().to_string()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Cannot read session record {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn set(&self, user: &User) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(user)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// In-process session store, holding the serialized record like the file
/// store does
#[derive(Debug, Default)]
pub struct MemorySessionRepository {
    raw: Mutex<Option<String>>,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-serialized content as-is
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned slot still holds a complete string
        self.raw.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionRepository for MemorySessionRepository {
    fn get(&self) -> Option<User> {
        self.slot().as_deref().and_then(|raw| decode(raw, "memory"))
    }

    fn set(&self, user: &User) -> AppResult<()> {
        *self.slot() = Some(serde_json::to_string(user)?);
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        *self.slot() = None;
        Ok(())
    }
}
