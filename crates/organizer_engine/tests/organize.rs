use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use organizer_engine::{
    EngineSettings, FsOrganizer, OrganizeError, BACKUP_DIR, UNCATEGORIZED,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const FILE_MAP: &str = r#"{
    "Images": [".jpg", ".png"],
    "Documents": [".pdf", ".txt"],
    "Videos": [".mp4"]
}"#;

struct Fixture {
    config: TempDir,
    target: TempDir,
}

impl Fixture {
    fn new() -> Self {
        organizer_logging::initialize_for_tests();
        let config = TempDir::new().unwrap();
        fs::write(config.path().join("file_map-config.json"), FILE_MAP).unwrap();
        let target = TempDir::new().unwrap();
        Self { config, target }
    }

    fn organizer(&self) -> FsOrganizer {
        let mut settings = EngineSettings::in_dir(self.config.path());
        settings.backup_stamp = Arc::new(|| "2024-01-02_03-04-05".to_string());
        FsOrganizer::new(settings)
    }

    fn add(&self, name: &str, content: &str) {
        fs::write(self.target.path().join(name), content).unwrap();
    }

    fn path(&self) -> &str {
        self.target.path().to_str().unwrap()
    }
}

fn sorted_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn moves_files_by_extension_and_drops_unused_folders() {
    let fixture = Fixture::new();
    fixture.add("photo.jpg", "jpg");
    fixture.add("scan.PDF", "pdf");
    fixture.add("notes.txt", "txt");
    fixture.add("tool.exe", "exe");
    fixture.add("README", "readme");

    let outcome = fixture.organizer().organize(fixture.path(), false).unwrap();
    assert_eq!(outcome.files_organized, 5);
    assert_eq!(outcome.backup_archive, None);
    assert_eq!(outcome.message(), "Organized 5 files successfully!");

    let root = fixture.target.path();
    assert_eq!(
        sorted_entries(root),
        vec!["Documents", "Images", UNCATEGORIZED]
    );
    assert_eq!(sorted_entries(&root.join("Images")), vec!["photo.jpg"]);
    assert_eq!(
        sorted_entries(&root.join("Documents")),
        vec!["notes.txt", "scan.PDF"]
    );
    assert_eq!(
        sorted_entries(&root.join(UNCATEGORIZED)),
        vec!["README", "tool.exe"]
    );
}

#[test]
fn backup_archive_holds_original_files() {
    let fixture = Fixture::new();
    fixture.add("a.jpg", "alpha");
    fixture.add("b.txt", "beta");

    let outcome = fixture.organizer().organize(fixture.path(), true).unwrap();
    let archive = outcome.backup_archive.expect("backup archive");
    assert_eq!(
        archive,
        fixture
            .target
            .path()
            .join(BACKUP_DIR)
            .join("backup-2024-01-02_03-04-05.zip")
    );

    let mut zip = zip::ZipArchive::new(fs::File::open(&archive).unwrap()).unwrap();
    assert_eq!(zip.len(), 2);
    let mut content = String::new();
    zip.by_name("b.txt")
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    assert_eq!(content, "beta");

    // The backup folder survives the empty-folder sweep; the files were still moved.
    assert_eq!(outcome.files_organized, 2);
    assert!(fixture.target.path().join("Images").join("a.jpg").exists());
}

#[test]
fn empty_nested_folders_are_removed() {
    let fixture = Fixture::new();
    let nested = fixture.target.path().join("old").join("deeper");
    fs::create_dir_all(&nested).unwrap();
    fs::create_dir_all(fixture.target.path().join("kept")).unwrap();
    fs::write(fixture.target.path().join("kept").join("x.bin"), "x").unwrap();

    let outcome = fixture.organizer().organize(fixture.path(), false).unwrap();
    assert_eq!(outcome.files_organized, 0);
    assert_eq!(sorted_entries(fixture.target.path()), vec!["kept"]);
}

#[test]
fn refuses_windows_directory() {
    let fixture = Fixture::new();
    let err = fixture.organizer().organize("C:\\Windows", false).unwrap_err();
    assert!(matches!(err, OrganizeError::WindowsDirectory));
    assert_eq!(
        err.to_string(),
        "Cannot organize files in the Windows directory."
    );
}

#[test]
fn refuses_missing_directory() {
    let fixture = Fixture::new();
    let missing = fixture.target.path().join("nope");
    let err = fixture
        .organizer()
        .organize(missing.to_str().unwrap(), true)
        .unwrap_err();
    assert!(matches!(err, OrganizeError::InvalidPath));
    assert_eq!(err.to_string(), "Invalid path.");
}

#[test]
fn missing_file_map_is_reported_before_touching_files() {
    let fixture = Fixture::new();
    fs::remove_file(fixture.config.path().join("file_map-config.json")).unwrap();
    fixture.add("a.jpg", "alpha");

    let err = fixture.organizer().organize(fixture.path(), true).unwrap_err();
    assert!(matches!(err, OrganizeError::FileMap(_)));
    assert_eq!(sorted_entries(fixture.target.path()), vec!["a.jpg"]);
}
