//! Session persistence
//!
//! The whole playground state is stored as one JSON document under a fixed
//! key, overwritten wholesale after every mutation. Storage failures are
//! logged and swallowed: the in-memory store stays authoritative for the
//! running session.

use crate::constants::{APP_DIR_NAME, SESSION_STORAGE_KEY};
use crate::data::{StorageError, json_value_to_text};
use crate::types::{ChartConfig, DataRow, SchemaField, SessionSnapshot};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;

// ============================================================================
// Storage backends
// ============================================================================

/// Session-scoped string key/value storage
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage with an optional byte quota
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes that would push keys plus values past `quota` bytes
    pub fn with_quota(quota: usize) -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
            quota: Some(quota),
        }
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock();
        if let Some(quota) = self.quota {
            let others: usize = items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.lock().remove(key);
        Ok(())
    }
}

/// One file per key inside a session directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
    quota: Option<usize>,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            quota: None,
        }
    }

    pub fn with_quota(mut self, quota: usize) -> Self {
        self.quota = Some(quota);
        self
    }

    /// Default directory for `session_id` under the platform cache dir
    pub fn default_dir(session_id: &str) -> Option<PathBuf> {
        dirs::cache_dir().map(|d| d.join(APP_DIR_NAME).join("sessions").join(session_id))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", safe))
    }

    /// Remove the session directory and everything in it
    pub fn destroy(&self) -> Result<(), StorageError> {
        match fs::remove_dir_all(&self.dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota {
            if value.len() > quota {
                return Err(StorageError::QuotaExceeded {
                    needed: value.len(),
                    quota,
                });
            }
        }

        fs::create_dir_all(&self.dir)?;
        // Atomic replace: temp file in the same dir, then rename
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.flush()?;
        tmp.persist(self.path_for(key)).map_err(|e| StorageError::Io(e.error))?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ============================================================================
// Snapshot persistence
// ============================================================================

/// Reads and writes the session snapshot through a [`SessionStorage`]
#[derive(Clone)]
pub struct SessionPersistence {
    storage: Arc<dyn SessionStorage>,
    key: String,
}

impl std::fmt::Debug for SessionPersistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionPersistence")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl SessionPersistence {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            key: SESSION_STORAGE_KEY.to_string(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &Arc<dyn SessionStorage> {
        &self.storage
    }

    /// Serialize and store the snapshot. Failures are logged, not returned.
    pub fn save(&self, snapshot: &SessionSnapshot) -> bool {
        let text = match serde_json::to_string(snapshot) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Failed to serialize session snapshot: {}", e);
                return false;
            }
        };

        match self.storage.set_item(&self.key, &text) {
            Ok(()) => {
                tracing::debug!(bytes = text.len(), "Session snapshot saved");
                true
            }
            Err(e) => {
                tracing::error!("Failed to save session snapshot: {}", e);
                false
            }
        }
    }

    /// Load the stored snapshot.
    ///
    /// Missing documents and text that is not a JSON object yield `None`.
    /// Anything else restores section by section, see [`restore_snapshot`].
    pub fn load(&self) -> Option<SessionSnapshot> {
        let text = match self.storage.get_item(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read session snapshot: {}", e);
                return None;
            }
        };

        let document: Value = match serde_json::from_str(&text) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!("Ignoring corrupt session snapshot: {}", e);
                return None;
            }
        };
        match document.as_object() {
            Some(document) => Some(restore_snapshot(document)),
            None => {
                tracing::warn!("Ignoring session snapshot: not a JSON object");
                None
            }
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.storage.remove_item(&self.key) {
            tracing::error!("Failed to clear session snapshot: {}", e);
        }
    }
}

// ============================================================================
// Restore
// ============================================================================

/// Rebuild a snapshot from a session document, one section at a time.
///
/// A bad entry costs only itself: malformed fields and charts are skipped
/// with a warning, chart keys that are missing take their defaults, and row
/// values of any JSON type are flattened to cell text.
pub fn restore_snapshot(document: &Map<String, Value>) -> SessionSnapshot {
    let schema = restore_entries(document, "schema", |entry| {
        SchemaField::deserialize(entry).ok()
    });
    let data = restore_entries(document, "data", |entry| {
        entry.as_object().map(|cells| {
            DataRow::from_pairs(cells.iter().map(|(k, v)| (k.clone(), json_value_to_text(v))))
        })
    });
    let charts = restore_entries(document, "charts", |entry| {
        ChartConfig::deserialize(entry)
            .ok()
            .filter(|chart| !chart.id.is_empty())
    });
    let active_chart = document
        .get("activeChart")
        .and_then(Value::as_str)
        .map(str::to_string);

    SessionSnapshot {
        schema,
        data,
        charts,
        active_chart,
    }
}

fn restore_entries<T>(
    document: &Map<String, Value>,
    section: &str,
    parse: impl Fn(&Value) -> Option<T>,
) -> Vec<T> {
    match document.get(section) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let parsed = parse(entry);
                if parsed.is_none() {
                    tracing::warn!(section, index, "Skipping malformed session entry");
                }
                parsed
            })
            .collect(),
        Some(_) => {
            tracing::warn!(section, "Ignoring session section: not an array");
            Vec::new()
        }
    }
}
