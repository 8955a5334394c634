//! Durable session persistence.
//!
//! ARCHITECTURE
//! ============
//! A session is persisted as one JSON record `{ "token": ..., "user": {...} }`
//! under one key, so token and user are written and removed together. Each
//! frontend picks the medium: the browser client uses `localStorage`, the CLI
//! uses [`FileSessionStore`], tests use [`MemorySessionStore`].
//!
//! ERROR HANDLING
//! ==============
//! `load` never fails. Anything unreadable, undecodable, or carrying an empty
//! token reads as "no session"; callers start logged out instead of crashing.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs::{self, OpenOptions};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::user::Session;

/// Error returned when a session cannot be written or removed.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem access failed.
    #[error("session file I/O failed: {0}")]
    Io(#[from] io::Error),
    /// The session could not be serialized.
    #[error("session encode failed: {0}")]
    Encode(#[from] serde_json::Error),
    /// The storage medium is not reachable (e.g. storage disabled in the browser).
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
}

/// Persistence for the single current session.
pub trait SessionStore {
    /// Read the persisted session. Malformed data reads as `None`.
    fn load(&self) -> Option<Session>;

    /// Persist `session`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or written.
    fn save(&self, session: &Session) -> Result<(), StoreError>;

    /// Remove the persisted session. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium refuses the removal.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Encode a session into its persisted record.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] if serialization fails.
pub fn encode_session(session: &Session) -> Result<String, StoreError> {
    Ok(serde_json::to_string(session)?)
}

/// Decode a persisted record, treating anything unusable as no session.
#[must_use]
pub fn decode_session(raw: &str) -> Option<Session> {
    match serde_json::from_str::<Session>(raw) {
        Ok(session) if !session.token.trim().is_empty() => Some(session),
        Ok(_) => {
            tracing::warn!("persisted session has empty token; ignoring");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "persisted session is malformed; ignoring");
            None
        }
    }
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// Process-local store holding the encoded record.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: Mutex<Option<String>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an arbitrary raw record, as if written by an earlier run.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: Mutex::new(Some(raw.into())) }
    }

    /// The raw record currently held, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.raw().as_deref().and_then(decode_session)
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        let encoded = encode_session(session)?;
        *self.raw.lock().unwrap_or_else(PoisonError::into_inner) = Some(encoded);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.raw.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

// =============================================================================
// FILE STORE
// =============================================================================

/// Store backed by a single JSON file.
///
/// Writes go to a per-process sibling temp file that is renamed over the
/// target, so a reader never observes a half-written record. On unix the file
/// is readable by its owner only, since it holds a bearer token.
#[derive(Clone, Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(ToOwned::to_owned).unwrap_or_default();
        name.push(format!(".{}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }
}

fn write_private(path: &Path, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Session> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode_session(&raw),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session file unreadable; ignoring");
                None
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        let encoded = encode_session(session)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let temp = self.temp_path();
        if let Err(e) = write_private(&temp, &encoded).and_then(|()| fs::rename(&temp, &self.path)) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn load(&self) -> Option<Session> {
        (**self).load()
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        (**self).save(session)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}
