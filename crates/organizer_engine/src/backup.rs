use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use organizer_logging::organizer_info;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::organize::top_level_files;
use crate::{AtomicFileWriter, PersistError};

/// Sub-folder of the organized directory that receives backup archives.
pub const BACKUP_DIR: &str = "backup";

/// Local time formatted for backup file names.
pub fn backup_stamp_now() -> String {
    Local::now().format("%Y-%m-%d_%H-%M-%S").to_string()
}

/// Archives every top-level regular file of `dir` into `dir/backup/backup-{stamp}.zip`.
///
/// Entries are stored uncompressed under their file names.
pub fn create_backup(dir: &Path, stamp: &str) -> Result<PathBuf, PersistError> {
    let files = top_level_files(dir)?;
    let writer = AtomicFileWriter::new(dir.join(BACKUP_DIR));
    let filename = format!("backup-{stamp}.zip");

    let archive = writer.write_with(&filename, |file| {
        let mut zip = ZipWriter::new(file);
        let options = FileOptions::default().compression_method(CompressionMethod::Stored);
        for path in &files {
            let Some(name) = path.file_name() else {
                continue;
            };
            zip.start_file(name.to_string_lossy(), options)?;
            let mut source = File::open(path)?;
            io::copy(&mut source, &mut zip)?;
        }
        zip.finish()?;
        Ok(())
    })?;

    organizer_info!("Backed up {} files to {:?}", files.len(), archive);
    Ok(archive)
}
