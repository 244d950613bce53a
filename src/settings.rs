//! User settings
//!
//! Stored as pretty JSON at `<config_dir>/data-playground/settings.json`.
//! Every field has a default, so partial or missing files load cleanly.

use crate::constants::{APP_DIR_NAME, DEFAULT_STORAGE_QUOTA_BYTES, SETTINGS_FILE_NAME};
use crate::render::Surface;
use crate::session::{FileStorage, MemoryStorage, SessionPersistence, SessionStorage};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Lives and dies with the process
    #[default]
    Memory,
    /// Session directory on disk
    File,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    /// Session directory for the file backend; defaults under the cache dir
    pub dir: Option<PathBuf>,
    /// Maximum snapshot size in bytes
    pub quota_bytes: usize,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            dir: None,
            quota_bytes: DEFAULT_STORAGE_QUOTA_BYTES,
        }
    }
}

impl StorageSettings {
    /// Build the persistence adapter these settings describe.
    ///
    /// `session_id` names the session directory when no explicit `dir` is
    /// configured. Falls back to memory storage if no directory can be
    /// determined.
    pub fn open(&self, session_id: &str) -> SessionPersistence {
        let storage: Arc<dyn SessionStorage> = match self.backend {
            StorageBackend::Memory => Arc::new(MemoryStorage::with_quota(self.quota_bytes)),
            StorageBackend::File => {
                match self.dir.clone().or_else(|| FileStorage::default_dir(session_id)) {
                    Some(dir) => Arc::new(FileStorage::new(dir).with_quota(self.quota_bytes)),
                    None => {
                        tracing::warn!("No cache directory available, using memory storage");
                        Arc::new(MemoryStorage::with_quota(self.quota_bytes))
                    }
                }
            }
        };
        SessionPersistence::new(storage)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Chart drawing surface
    pub chart: Surface,
    pub storage: StorageSettings,
    /// Default `tracing` filter directive; `RUST_LOG` wins when set
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            chart: Surface::default(),
            storage: StorageSettings::default(),
            log_filter: "info".to_string(),
        }
    }
}

/// Default settings file location
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

impl Settings {
    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`. A missing file gives defaults; a malformed one is
    /// logged and also gives defaults.
    pub fn load_from(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!("Failed to read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str(&text) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Invalid settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        let path = default_settings_path()
            .ok_or_else(|| anyhow::anyhow!("No config directory available"))?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
