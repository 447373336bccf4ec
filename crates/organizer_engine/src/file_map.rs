use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Folder for files whose extension is not listed in the map.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Error)]
pub enum FileMapError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("malformed file map: {0}")]
    Json(#[from] serde_json::Error),
}

/// Folder name -> file extensions, as read from `file_map-config.json`.
///
/// Extensions are stored lowercase without the leading dot. Folders are ordered
/// by name, and the first folder listing an extension wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileMap {
    folders: Vec<(String, Vec<String>)>,
}

impl FileMap {
    pub fn load(path: &Path) -> Result<Self, FileMapError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, FileMapError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(text)?;
        let folders = raw
            .into_iter()
            .map(|(folder, extensions)| {
                let extensions = extensions
                    .iter()
                    .map(|ext| normalize_extension(ext))
                    .filter(|ext| !ext.is_empty())
                    .collect();
                (folder, extensions)
            })
            .collect();
        Ok(Self { folders })
    }

    pub fn folder_names(&self) -> impl Iterator<Item = &str> {
        self.folders.iter().map(|(name, _)| name.as_str())
    }

    /// Target folder for a file extension (with or without the dot).
    pub fn folder_for(&self, extension: &str) -> &str {
        let wanted = normalize_extension(extension);
        if wanted.is_empty() {
            return UNCATEGORIZED;
        }
        self.folders
            .iter()
            .find(|(_, extensions)| extensions.iter().any(|ext| *ext == wanted))
            .map(|(name, _)| name.as_str())
            .unwrap_or(UNCATEGORIZED)
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}
