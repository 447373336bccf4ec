use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use organizer_logging::{organizer_debug, organizer_info, organizer_warn};
use thiserror::Error;

use crate::{create_backup, EngineSettings, FileMap, FileMapError, PersistError};

/// Organizing this directory is always refused.
pub const WINDOWS_DIRECTORY: &str = "c:\\windows";

#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("Cannot organize files in the Windows directory.")]
    WindowsDirectory,
    #[error("Invalid path.")]
    InvalidPath,
    #[error("Could not read file map: {0}")]
    FileMap(#[from] FileMapError),
    #[error("Could not create backup: {0}")]
    Backup(#[from] PersistError),
    #[error("Could not read folder: {0}")]
    Io(#[from] io::Error),
    #[error("Organize worker failed: {0}")]
    Worker(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizeOutcome {
    pub files_organized: usize,
    pub backup_archive: Option<PathBuf>,
}

impl OrganizeOutcome {
    pub fn message(&self) -> String {
        format!("Organized {} files successfully!", self.files_organized)
    }
}

/// Sorts the top-level files of a folder into per-category sub-folders.
#[derive(Debug, Clone)]
pub struct FsOrganizer {
    settings: EngineSettings,
}

impl FsOrganizer {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn organize(&self, path: &str, is_backup: bool) -> Result<OrganizeOutcome, OrganizeError> {
        if path.eq_ignore_ascii_case(WINDOWS_DIRECTORY) {
            return Err(OrganizeError::WindowsDirectory);
        }
        let dir = Path::new(path);
        if !dir.is_dir() {
            return Err(OrganizeError::InvalidPath);
        }

        let file_map = FileMap::load(&self.settings.file_map_path)?;

        let backup_archive = if is_backup {
            let stamp = (self.settings.backup_stamp)();
            Some(create_backup(dir, &stamp)?)
        } else {
            None
        };

        for folder in file_map.folder_names() {
            if let Err(err) = fs::create_dir_all(dir.join(folder)) {
                organizer_warn!("Could not create folder {}: {}", folder, err);
            }
        }

        let mut files_organized = 0;
        for file in top_level_files(dir)? {
            let Some(name) = file.file_name() else {
                continue;
            };
            let extension = file
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default();
            let folder = dir.join(file_map.folder_for(&extension));
            let moved = fs::create_dir_all(&folder).and_then(|()| fs::rename(&file, folder.join(name)));
            match moved {
                Ok(()) => {
                    organizer_debug!("Moved {:?} to {:?}", name, folder);
                    files_organized += 1;
                }
                Err(err) => organizer_warn!("Could not move {:?} to {:?}: {}", name, folder, err),
            }
        }

        remove_empty_folders(dir);
        organizer_info!("Organized {} files in {:?}", files_organized, dir);
        Ok(OrganizeOutcome {
            files_organized,
            backup_archive,
        })
    }
}

/// Regular files directly inside `dir`, sorted by path.
pub(crate) fn top_level_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Recursively removes empty sub-folders of `dir`. `dir` itself is kept.
fn remove_empty_folders(dir: &Path) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            organizer_warn!("Could not scan {:?} for empty folders: {}", dir, err);
            return;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        remove_empty_folders(&path);
        let is_empty = fs::read_dir(&path)
            .map(|mut children| children.next().is_none())
            .unwrap_or(false);
        if is_empty {
            if let Err(err) = fs::remove_dir(&path) {
                organizer_warn!("Could not remove empty folder {:?}: {}", path, err);
            }
        }
    }
}
