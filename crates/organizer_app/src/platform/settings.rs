use std::env;

use anyhow::Context;
use organizer_engine::{load_app_settings_or_default, EngineSettings};

/// Engine settings rooted at the working directory, where the app keeps
/// `config.json` and `file_map-config.json`.
pub(crate) fn engine_settings() -> anyhow::Result<EngineSettings> {
    let dir = env::current_dir().context("resolving working directory")?;
    Ok(EngineSettings::in_dir(&dir))
}

/// Canonical backup flag from persisted configuration; `false` when unreadable.
pub(crate) fn load_backup_flag(settings: &EngineSettings) -> bool {
    load_app_settings_or_default(&settings.app_config_path).enable_backup
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn backup_flag_follows_config_json() {
        let temp = TempDir::new().unwrap();
        let settings = EngineSettings::in_dir(temp.path());
        assert!(!load_backup_flag(&settings));

        fs::write(&settings.app_config_path, r#"{"enableBackup": true}"#).unwrap();
        assert!(load_backup_flag(&settings));

        fs::write(&settings.app_config_path, r#"{"enableBackup": "yes"}"#).unwrap();
        assert!(!load_backup_flag(&settings));
    }
}
