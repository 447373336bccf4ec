use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use organizer_engine::{
    CommandExecutor, EngineEvent, EngineHandle, EngineSettings, FsExecutor, Launcher,
    OpenConfigError, OrganizeError, OrganizeOutcome, FILE_MAP_FILENAME,
};
use tempfile::TempDir;

#[derive(Default)]
struct RecordingLauncher {
    opened: Mutex<Vec<PathBuf>>,
    fail: bool,
}

impl Launcher for RecordingLauncher {
    fn launch(&self, path: &Path) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no handler"));
        }
        self.opened.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

fn config_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(FILE_MAP_FILENAME), r#"{"Images": [".png"]}"#).unwrap();
    dir
}

#[tokio::test]
async fn executor_opens_file_map_with_launcher() {
    let config = config_dir();
    let launcher = Arc::new(RecordingLauncher::default());
    let executor = FsExecutor::with_launcher(EngineSettings::in_dir(config.path()), launcher.clone());

    let opened = executor.open_config_file().await.unwrap();
    assert_eq!(opened, config.path().join(FILE_MAP_FILENAME));
    assert_eq!(launcher.opened.lock().unwrap().as_slice(), &[opened]);
}

#[tokio::test]
async fn executor_reports_launch_failure() {
    let config = config_dir();
    let launcher = Arc::new(RecordingLauncher {
        fail: true,
        ..Default::default()
    });
    let executor = FsExecutor::with_launcher(EngineSettings::in_dir(config.path()), launcher);

    let err = executor.open_config_file().await.unwrap_err();
    assert!(matches!(err, OpenConfigError::Launch(_)));
    assert_eq!(err.to_string(), "Could not open config file");
}

#[tokio::test]
async fn executor_organizes_on_blocking_pool() {
    let config = config_dir();
    let target = TempDir::new().unwrap();
    fs::write(target.path().join("pic.png"), "png").unwrap();
    let executor = FsExecutor::with_launcher(
        EngineSettings::in_dir(config.path()),
        Arc::new(RecordingLauncher::default()),
    );

    let outcome = executor
        .organize_files(target.path().to_string_lossy().into_owned(), false)
        .await
        .unwrap();
    assert_eq!(outcome.files_organized, 1);
    assert!(target.path().join("Images").join("pic.png").exists());
}

#[test]
fn handle_delivers_one_event_per_command() {
    organizer_logging::initialize_for_tests();
    let config = config_dir();
    let target = TempDir::new().unwrap();
    let executor = Arc::new(FsExecutor::with_launcher(
        EngineSettings::in_dir(config.path()),
        Arc::new(RecordingLauncher::default()),
    ));

    let (handle, events) = EngineHandle::spawn(executor).unwrap();
    handle.organize(1, target.path().to_string_lossy(), false);
    handle.open_config(2);

    let mut received: Vec<EngineEvent> = (0..2)
        .map(|_| events.recv_timeout(Duration::from_secs(10)).unwrap())
        .collect();
    received.sort_by_key(EngineEvent::request_id);

    match &received[0] {
        EngineEvent::OrganizeCompleted { request_id, result } => {
            assert_eq!(*request_id, 1);
            assert_eq!(result.as_ref().unwrap().files_organized, 0);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(matches!(
        &received[1],
        EngineEvent::ConfigOpened { request_id: 2, result: Ok(_) }
    ));
    assert!(events.recv_timeout(Duration::from_millis(50)).is_err());
}

#[test]
fn events_render_tagged_reply_text() {
    let organized = EngineEvent::OrganizeCompleted {
        request_id: 1,
        result: Ok(OrganizeOutcome {
            files_organized: 3,
            backup_archive: None,
        }),
    };
    assert_eq!(organized.reply_text(), "Success: Organized 3 files successfully!");

    let refused = EngineEvent::OrganizeCompleted {
        request_id: 2,
        result: Err(OrganizeError::WindowsDirectory),
    };
    assert_eq!(
        refused.reply_text(),
        "Error: Cannot organize files in the Windows directory."
    );

    let opened = EngineEvent::ConfigOpened {
        request_id: 3,
        result: Ok(PathBuf::from(FILE_MAP_FILENAME)),
    };
    assert_eq!(opened.reply_text(), "Success:Opened config file");

    let failed = EngineEvent::ConfigOpened {
        request_id: 4,
        result: Err(OpenConfigError::Worker("cancelled".to_string())),
    };
    assert_eq!(failed.reply_text(), "Error: Could not open config file");
}
