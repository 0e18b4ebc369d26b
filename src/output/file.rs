//! Append-only file output.

use super::{BufferedOutput, Output};
use crate::internal;
use crate::level::Level;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keeps the file open for its whole lifetime; every line is one `write_all`.
pub struct FileOutput {
    path: PathBuf,
    file: File,
}

impl FileOutput {
    /// Opens `path` for appending, expanding a leading `~` and creating missing parent
    /// directories.
    ///
    /// # Errors
    /// Non UTF-8 paths, directory creation and open failures.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = expand(path.as_ref())?;
        let file = open_append(&path)?;
        Ok(Self { path, file })
    }

    /// Same file handling as [`FileOutput::open`], batched through a [`BufferedOutput`].
    ///
    /// # Errors
    /// Everything [`FileOutput::open`] reports, plus a capacity below the minimum.
    pub fn open_buffered(
        path: impl AsRef<Path>,
        capacity: usize,
    ) -> Result<BufferedOutput<File>, crate::Error> {
        let path = expand(path.as_ref())?;
        BufferedOutput::new(open_append(&path)?, capacity)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `~/logs/app.log` style paths come straight from config files.
fn expand(path: &Path) -> Result<PathBuf, crate::Error> {
    let raw = path
        .to_str()
        .ok_or_else(|| crate::Error::InvalidPath(path.to_string_lossy().into_owned()))?;
    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

fn open_append(path: &Path) -> Result<File, crate::Error> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        match fs::create_dir_all(parent) {
            Ok(()) => {
                internal::debug(&format!("Created directory: {}", parent.display()));
            }
            Err(e) => {
                internal::error(&format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ));
                return Err(e.into());
            }
        }
    }

    internal::debug(&format!("Opening log file: {}", path.display()));
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

impl Output for FileOutput {
    fn write(&mut self, _level: Level, line: &str) -> Result<(), crate::Error> {
        let mut content = String::with_capacity(line.len() + 1);
        content.push_str(line);
        content.push('\n');
        self.file.write_all(content.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        self.file.flush()?;
        Ok(())
    }
}
