//! Organizer engine: filesystem work behind the organize and open-config commands.
mod backup;
mod engine;
mod executor;
mod file_map;
mod opener;
mod organize;
mod persist;
mod settings;
mod types;

pub use backup::{backup_stamp_now, create_backup, BACKUP_DIR};
pub use engine::EngineHandle;
pub use executor::{CommandExecutor, FsExecutor};
pub use file_map::{FileMap, FileMapError, UNCATEGORIZED};
pub use opener::{open_config_file, Launcher, OpenConfigError, SystemLauncher};
pub use organize::{FsOrganizer, OrganizeError, OrganizeOutcome, WINDOWS_DIRECTORY};
pub use persist::{ensure_dir, AtomicFileWriter, PersistError};
pub use settings::{
    load_app_settings, load_app_settings_or_default, AppSettings, EngineSettings, SettingsError,
    APP_CONFIG_FILENAME, FILE_MAP_FILENAME,
};
pub use types::{EngineEvent, RequestId};
