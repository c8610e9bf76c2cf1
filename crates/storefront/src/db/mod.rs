//! Persistence for the catalog and wishlist.
//!
//! # Storage: key-value JSON
//!
//! The shop keeps three documents, each stored whole under its own key:
//!
//! - `shop_products` - Product list (JSON array)
//! - `shop_sections` - Collection names (JSON array)
//! - `wishlist` - Wishlisted product IDs (JSON array)
//!
//! Documents are read once at startup and rewritten after every mutation.
//! A missing or unreadable document falls back to the built-in defaults.
//!
//! Orders and sessions are never persisted here.

pub mod catalog;
pub mod wishlist;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use catalog::CatalogRepository;
pub use wishlist::WishlistRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Reading or writing the backing storage failed.
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key contains characters the store cannot use.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The blocking write task panicked or was cancelled.
    #[error("write task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Raw document storage.
pub trait KeyValueStore: Send + Sync {
    /// Read the document stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;

    /// Replace the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage cannot be written.
    fn put(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
}

/// Keys become file names, so only a safe subset is accepted.
fn validate_key(key: &str) -> Result<(), RepositoryError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(RepositoryError::InvalidKey(key.to_string()))
    }
}

/// One `<key>.json` file per document in a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, RepositoryError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        use std::io::Write;

        let path = self.path_for(key)?;
        // Write beside the target and rename so readers never see a partial file
        let mut file = tempfile::NamedTempFile::new_in(&self.dir)?;
        file.write_all(value.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&path).map_err(|e| RepositoryError::Io(e.error))?;
        Ok(())
    }
}

/// In-process store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        validate_key(key)?;
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        validate_key(key)?;
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Decode the document under `key`, or fall back to `default`.
///
/// Missing documents fall back quietly; unreadable ones are logged.
pub(crate) fn load_or_default<T, F>(store: &dyn KeyValueStore, key: &str, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "stored document is corrupt, using defaults");
                default()
            }
        },
        Ok(None) => {
            tracing::debug!(key, "no stored document, using defaults");
            default()
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read stored document, using defaults");
            default()
        }
    }
}

/// Encode `value` as JSON and store it under `key`.
pub(crate) fn save<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), RepositoryError>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.put(key, &raw)
}
