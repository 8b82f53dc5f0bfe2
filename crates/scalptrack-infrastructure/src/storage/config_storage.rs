//! Configuration file storage.
//!
//! Loads the client configuration from ~/.config/scalptrack/config.toml and
//! caches it to avoid repeated file I/O.

use crate::paths::ScalptrackPaths;
use scalptrack_core::config::ClientConfig;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Configuration storage that loads and caches the client configuration.
///
/// The configuration is loaded lazily on first access. A missing file falls
/// back to defaults and a default file is written so the user has something
/// to edit.
#[derive(Debug, Clone)]
pub struct ConfigStorage {
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigStorage {
    /// Creates a new ConfigStorage with the default config path.
    pub fn new() -> Self {
        Self {
            path: ScalptrackPaths::config_file().ok(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a new ConfigStorage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get(&self) -> ClientConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load().unwrap_or_default();

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn load(&self) -> Result<ClientConfig, String> {
        let Some(path) = &self.path else {
            return Err("config path unavailable".to_string());
        };

        if !path.exists() {
            let default_config = ClientConfig::default();
            if let Err(e) = Self::write_default(path, &default_config) {
                tracing::warn!("[ConfigStorage] Could not write default config: {}", e);
            }
            return Ok(default_config);
        }

        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        toml::from_str(&content).map_err(|e| {
            tracing::warn!("[ConfigStorage] Invalid config file, using defaults: {}", e);
            e.to_string()
        })
    }

    fn write_default(path: &PathBuf, config: &ClientConfig) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let content = toml::to_string_pretty(config).map_err(|e| e.to_string())?;
        fs::write(path, content).map_err(|e| e.to_string())
    }
}

impl Default for ConfigStorage {
    fn default() -> Self {
        Self::new()
    }
}
