use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    open_config_file, EngineSettings, FsOrganizer, Launcher, OpenConfigError, OrganizeError,
    OrganizeOutcome, SystemLauncher,
};

/// The two commands the front end can issue.
#[async_trait::async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn organize_files(
        &self,
        path: String,
        is_backup: bool,
    ) -> Result<OrganizeOutcome, OrganizeError>;

    async fn open_config_file(&self) -> Result<PathBuf, OpenConfigError>;
}

/// Executes commands against the local filesystem on tokio's blocking pool.
#[derive(Clone)]
pub struct FsExecutor {
    organizer: Arc<FsOrganizer>,
    launcher: Arc<dyn Launcher>,
}

impl FsExecutor {
    pub fn new(settings: EngineSettings) -> Self {
        Self::with_launcher(settings, Arc::new(SystemLauncher))
    }

    pub fn with_launcher(settings: EngineSettings, launcher: Arc<dyn Launcher>) -> Self {
        Self {
            organizer: Arc::new(FsOrganizer::new(settings)),
            launcher,
        }
    }
}

#[async_trait::async_trait]
impl CommandExecutor for FsExecutor {
    async fn organize_files(
        &self,
        path: String,
        is_backup: bool,
    ) -> Result<OrganizeOutcome, OrganizeError> {
        let organizer = self.organizer.clone();
        tokio::task::spawn_blocking(move || organizer.organize(&path, is_backup))
            .await
            .unwrap_or_else(|err| Err(OrganizeError::Worker(err.to_string())))
    }

    async fn open_config_file(&self) -> Result<PathBuf, OpenConfigError> {
        let launcher = self.launcher.clone();
        let path = self.organizer.settings().file_map_path.clone();
        tokio::task::spawn_blocking(move || open_config_file(launcher.as_ref(), &path))
            .await
            .unwrap_or_else(|err| Err(OpenConfigError::Worker(err.to_string())))
    }
}
