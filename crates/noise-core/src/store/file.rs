//! File-backed session store
//!
//! Persists the `token` / `user` entries as a small JSON object so a
//! terminal client keeps its session between invocations.

use crate::error::{CoreError, Result};
use crate::ports::SessionStore;
use noise_types::{SessionCredential, TOKEN_KEY, USER_KEY};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Session file name inside the noise home directory
pub const SESSION_FILE_NAME: &str = "session.json";

/// Get the noise home directory (~/.noise-monitor), overridable by `NOISE_HOME`
pub fn noise_home() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("NOISE_HOME") {
        return Ok(PathBuf::from(path));
    }
    let home = dirs::home_dir()
        .ok_or_else(|| CoreError::Storage("could not find home directory".to_string()))?;
    Ok(home.join(".noise-monitor"))
}

type Entries = BTreeMap<String, String>;

pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Store at `~/.noise-monitor/session.json`
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(noise_home()?.join(SESSION_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// An unparseable file reads as empty and is replaced on the next write
    fn read_entries(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Entries::new());
        }
        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!("Ignoring unreadable session file {:?}: {}", self.path, e);
                Ok(Entries::new())
            }
        }
    }

    fn write_entries(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)?;

        // Restrict to owner only, the file holds a bearer token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&self.path, perms)?;
        }

        debug!("Wrote session file {:?}", self.path);
        Ok(())
    }

    fn read_key(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        Ok(self.read_entries()?.remove(key))
    }

    fn update(&self, apply: impl FnOnce(&mut Entries)) -> Result<()> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        let mut entries = self.read_entries()?;
        apply(&mut entries);
        self.write_entries(&entries)
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Result<Option<String>> {
        self.read_key(TOKEN_KEY)
    }

    fn user(&self) -> Result<Option<String>> {
        self.read_key(USER_KEY)
    }

    fn set(&self, credential: &SessionCredential) -> Result<()> {
        let user = serde_json::to_string(&credential.user)?;
        self.update(|entries| {
            entries.insert(USER_KEY.to_string(), user);
            match &credential.token {
                Some(token) => entries.insert(TOKEN_KEY.to_string(), token.clone()),
                None => entries.remove(TOKEN_KEY),
            };
        })
    }

    fn clear(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|entries| {
            entries.remove(TOKEN_KEY);
            entries.remove(USER_KEY);
        })
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> CoreError {
    CoreError::Storage("session file lock poisoned".to_string())
}
