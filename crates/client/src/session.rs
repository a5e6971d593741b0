//! Persisted session state.
//!
//! The only locally persisted entity: one JSON-serialized [`User`] record,
//! written at login, read at screen mount, cleared at logout. [`Session`] is
//! the single writer; nothing else touches the record.

use std::path::PathBuf;
use std::sync::RwLock;

use async_trait::async_trait;
use fontory_common::{ClientError, ClientResult};
use fontory_models::User;
use tracing::debug;

/// Backing storage for the session record.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the raw record, `None` when no session exists.
    async fn read(&self) -> ClientResult<Option<String>>;

    /// Write the raw record.
    async fn write(&self, record: &str) -> ClientResult<()>;

    /// Remove the record; removing an absent record is not an error.
    async fn clear(&self) -> ClientResult<()>;
}

/// File-backed session store (the on-device storage).
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store persisting to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn read(&self) -> ClientResult<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(record) => Ok(Some(record)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::Storage(format!(
                "failed to read session record: {e}"
            ))),
        }
    }

    async fn write(&self, record: &str) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                ClientError::Storage(format!("failed to create session directory: {e}"))
            })?;
        }

        // Write-then-rename so a crash mid-write can never leave a torn
        // record behind; readers see either the old record or the new one.
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, record)
            .await
            .map_err(|e| ClientError::Storage(format!("failed to write session record: {e}")))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| ClientError::Storage(format!("failed to commit session record: {e}")))
    }

    async fn clear(&self) -> ClientResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::Storage(format!(
                "failed to clear session record: {e}"
            ))),
        }
    }
}

/// In-memory session store for tests.
#[derive(Default)]
pub struct MemorySessionStore {
    record: RwLock<Option<String>>,
}

impl MemorySessionStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn read(&self) -> ClientResult<Option<String>> {
        let guard = self
            .record
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(guard.clone())
    }

    async fn write(&self, record: &str) -> ClientResult<()> {
        let mut guard = self
            .record
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = Some(record.to_string());
        Ok(())
    }

    async fn clear(&self) -> ClientResult<()> {
        let mut guard = self
            .record
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = None;
        Ok(())
    }
}

/// Session lifecycle: initialized at login, read everywhere identity is
/// needed, torn down at logout.
pub struct Session {
    store: Box<dyn SessionStore>,
}

impl Session {
    /// Session backed by an arbitrary store.
    #[must_use]
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Session persisted to a file (device storage).
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(FileSessionStore::new(path)))
    }

    /// Session held in memory only.
    #[must_use]
    pub fn memory() -> Self {
        Self::new(Box::new(MemorySessionStore::new()))
    }

    /// The persisted user, or `None` when nobody is logged in.
    ///
    /// A record that exists but does not parse is a [`ClientError::Decode`],
    /// not an absent session: the caller should surface it rather than
    /// silently treat the user as logged out.
    pub async fn current_user(&self) -> ClientResult<Option<User>> {
        let Some(record) = self.store.read().await? else {
            return Ok(None);
        };
        let user: User = serde_json::from_str(&record)
            .map_err(|e| ClientError::Decode(format!("corrupt session record: {e}")))?;
        Ok(Some(user))
    }

    /// Persist the user record; called once, on successful login.
    pub async fn store_user(&self, user: &User) -> ClientResult<()> {
        let record = serde_json::to_string(user)?;
        self.store.write(&record).await?;
        debug!(user_id = %user.user_id, "Session stored");
        Ok(())
    }

    /// Clear the record unconditionally.
    pub async fn logout(&self) -> ClientResult<()> {
        self.store.clear().await?;
        debug!("Session cleared");
        Ok(())
    }
}
