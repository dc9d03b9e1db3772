//! Session persistence
//!
//! The session user record is serialized as-is under a fixed key and
//! restored verbatim at startup. No schema versioning, no migration.

use std::fs;
use std::path::{Path, PathBuf};

use eduguard_access::SessionUser;
use tracing::debug;

use crate::error::{SessionError, SessionResult};

/// Fixed storage key for the session user record
const SESSION_FILE: &str = "session_user.json";

/// Repository trait for storing and retrieving the session user
pub trait SessionRepository: Send + Sync {
    /// Load the persisted session user, if any
    fn load(&self) -> SessionResult<Option<SessionUser>>;

    /// Persist the session user record whole
    fn save(&self, user: &SessionUser) -> SessionResult<()>;

    /// Delete any persisted session user
    fn clear(&self) -> SessionResult<()>;
}

/// File-based session repository
#[derive(Debug, Clone)]
pub struct FileSessionRepository {
    path: PathBuf,
}

impl FileSessionRepository {
    /// Create a repository storing under the default base directory
    /// (`~/.eduguard/`)
    pub fn new() -> SessionResult<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            SessionError::ConfigError("Could not determine home directory".to_string())
        })?;
        Ok(Self::with_dir(home.join(".eduguard")))
    }

    /// Create a repository storing under a custom base directory
    pub fn with_dir<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            path: base_dir.as_ref().join(SESSION_FILE),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionRepository for FileSessionRepository {
    fn load(&self) -> SessionResult<Option<SessionUser>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let user = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), "session user restored from storage");
        Ok(Some(user))
    }

    fn save(&self, user: &SessionUser) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(user)?;

        // Write to temp file, then rename
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &self.path)?;

        debug!(path = %self.path.display(), "session user persisted");
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            debug!(path = %self.path.display(), "session user cleared from storage");
        }
        Ok(())
    }
}

/// In-memory session repository (for testing)
#[derive(Default)]
pub struct InMemorySessionRepository {
    user: std::sync::RwLock<Option<SessionUser>>,
}

impl InMemorySessionRepository {
    /// Create an empty in-memory repository
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn load(&self) -> SessionResult<Option<SessionUser>> {
        let user = self
            .user
            .read()
            .map_err(|e| SessionError::Internal(format!("Failed to read session: {}", e)))?;
        Ok(user.clone())
    }

    fn save(&self, user: &SessionUser) -> SessionResult<()> {
        let mut stored = self
            .user
            .write()
            .map_err(|e| SessionError::Internal(format!("Failed to write session: {}", e)))?;
        *stored = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        let mut stored = self
            .user
            .write()
            .map_err(|e| SessionError::Internal(format!("Failed to write session: {}", e)))?;
        *stored = None;
        Ok(())
    }
}
