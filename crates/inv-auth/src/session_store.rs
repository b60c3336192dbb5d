//! Single source of truth for "who is logged in."

use crate::{AuthError, AuthResult, Session};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{info, warn};

/// File-backed session state.
///
/// Mutations write through to disk before touching in-memory state, so a
/// crash mid-mutation can leave an orphaned file but never an in-memory
/// session with no persisted backing.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    current: Option<Session>,
}

impl SessionStore {
    /// Create a store over the given session file. No IO happens until
    /// [`restore`](Self::restore) runs.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            current: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Raw bearer token of the current session.
    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.raw_token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Load the persisted session, if one survives scrutiny.
    ///
    /// Fails soft: a missing file means "anonymous"; a corrupt file or a
    /// stored token that no longer decodes clears storage and also means
    /// "anonymous". Callers never see an error.
    pub fn restore(&mut self) -> Option<&Session> {
        self.current = None;

        if !self.path.exists() {
            return None;
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Unreadable session file at {:?}: {e}", self.path);
                return None;
            }
        };

        let stored: Session = match serde_json::from_str(&contents) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Corrupt session file at {:?}: {e}", self.path);
                self.clear_file();
                return None;
            }
        };

        // Re-derive the identity from the raw token so the stored file can
        // never disagree with what the token actually says.
        match Session::from_token(&stored.raw_token) {
            Ok(session) => {
                info!("Restored session for {}", session.subject);
                self.current = Some(session);
                self.current.as_ref()
            }
            Err(e) => {
                warn!("Stored token no longer decodes: {e}");
                self.clear_file();
                None
            }
        }
    }

    /// Exchange a raw token for an authenticated session.
    ///
    /// On decode or persistence failure the prior session (if any) is left
    /// untouched; the file is written before in-memory state changes.
    #[track_caller]
    pub fn login(&mut self, raw_token: &str) -> AuthResult<&Session> {
        let session = Session::from_token(raw_token)?;
        self.persist(&session)?;

        info!("Signed in as {}", session.subject);
        Ok(&*self.current.insert(session))
    }

    /// Clear both storage and in-memory state. Idempotent; storage failures
    /// are logged, never surfaced.
    pub fn logout(&mut self) {
        self.clear_file();
        if let Some(session) = self.current.take() {
            info!("Signed out {}", session.subject);
        }
    }

    fn clear_file(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to remove session file at {:?}: {e}", self.path);
            }
        }
    }

    /// Atomic write: temp file, fsync, rename.
    #[track_caller]
    fn persist(&self, session: &Session) -> AuthResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| AuthError::storage(dir.to_path_buf(), e))?;
        }

        let json = serde_json::to_string_pretty(session).map_err(AuthError::serialization)?;
        let temp_path = self
            .path
            .with_extension(format!("json.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| AuthError::storage(temp_path.clone(), e))?;
            file.write_all(json.as_bytes())
                .map_err(|e| AuthError::storage(temp_path.clone(), e))?;
            file.sync_all()
                .map_err(|e| AuthError::storage(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            AuthError::atomic_rename(temp_path.clone(), self.path.clone(), e)
        })
    }
}
