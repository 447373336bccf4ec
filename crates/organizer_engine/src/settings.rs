use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use organizer_logging::{organizer_info, organizer_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backup::backup_stamp_now;

pub const APP_CONFIG_FILENAME: &str = "config.json";
pub const FILE_MAP_FILENAME: &str = "file_map-config.json";

/// Persisted application settings (`config.json`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub enable_backup: bool,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub fn load_app_settings(path: &Path) -> Result<AppSettings, SettingsError> {
    let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Like [`load_app_settings`], falling back to defaults when the file is missing or broken.
pub fn load_app_settings_or_default(path: &Path) -> AppSettings {
    match load_app_settings(path) {
        Ok(settings) => {
            organizer_info!("Loaded settings from {:?}: {:?}", path, settings);
            settings
        }
        Err(SettingsError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            organizer_info!("No settings at {:?}; using defaults", path);
            AppSettings::default()
        }
        Err(err) => {
            organizer_warn!("{}; using defaults", err);
            AppSettings::default()
        }
    }
}

/// Where the engine finds its configuration and how it names backups.
#[derive(Clone)]
pub struct EngineSettings {
    pub file_map_path: PathBuf,
    pub app_config_path: PathBuf,
    pub backup_stamp: Arc<dyn Fn() -> String + Send + Sync>,
}

impl EngineSettings {
    /// Settings with both configuration files inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            file_map_path: dir.join(FILE_MAP_FILENAME),
            app_config_path: dir.join(APP_CONFIG_FILENAME),
            backup_stamp: Arc::new(backup_stamp_now),
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::in_dir(Path::new("."))
    }
}

impl fmt::Debug for EngineSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineSettings")
            .field("file_map_path", &self.file_map_path)
            .field("app_config_path", &self.app_config_path)
            .finish_non_exhaustive()
    }
}
