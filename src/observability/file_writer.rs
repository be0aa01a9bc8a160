//! Rotating log file with size-based rotation and numbered backups.
//!
//! [`RotatingFile`] is handed to the fmt layer as its `MakeWriter`. Every
//! formatted event goes through a single mutex-guarded handle; before each
//! write the file size is checked and, once over the limit, the file is
//! shifted to `<name>.1` (older backups move up by one, the oldest beyond
//! the retention limit is deleted).

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files retained after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

pub struct RotatingFile {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Opened lazily on first write.
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            handle: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Path of the `n`th backup (`1` is the newest).
    #[must_use]
    pub fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.file_path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    /// Appends `buf`, rotating first if the file is over the limit.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be rotated, opened or written, or if the
    /// handle mutex is poisoned.
    pub fn write_bytes(&self, buf: &[u8]) -> io::Result<usize> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        if fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.max_bytes) {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *handle = Some(file);
        }

        let file = handle
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;
        file.write_all(buf)?;
        file.flush()?;
        Ok(buf.len())
    }

    fn rotate(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.file_path, self.backup_path(1))
    }
}

impl Write for &RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RotatingFile {
    type Writer = &'a RotatingFile;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}
