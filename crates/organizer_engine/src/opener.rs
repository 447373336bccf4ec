use std::io;
use std::path::{Path, PathBuf};

use organizer_logging::{organizer_info, organizer_warn};
use thiserror::Error;

/// Hands a file to whatever opens it on this desktop.
pub trait Launcher: Send + Sync {
    fn launch(&self, path: &Path) -> io::Result<()>;
}

/// Opens files with the system's default application.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, path: &Path) -> io::Result<()> {
        open::that(path)
    }
}

#[derive(Debug, Error)]
pub enum OpenConfigError {
    #[error("Could not open config file")]
    Launch(#[source] io::Error),
    #[error("Could not open config file")]
    Worker(String),
}

pub fn open_config_file(launcher: &dyn Launcher, path: &Path) -> Result<PathBuf, OpenConfigError> {
    match launcher.launch(path) {
        Ok(()) => {
            organizer_info!("Opened config file {:?}", path);
            Ok(path.to_path_buf())
        }
        Err(err) => {
            organizer_warn!("Could not open config file {:?}: {}", path, err);
            Err(OpenConfigError::Launch(err))
        }
    }
}
