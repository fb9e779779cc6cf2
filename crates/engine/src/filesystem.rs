use crate::error::{EngineError, Result};
use log::debug;
use std::ffi::OsString;
use std::fs::FileType;
use std::path::Path;

/// One entry of a directory listing. Only the name and whether it is a
/// directory are read; nothing else is looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: OsString,
    pub is_dir: bool,
}

impl DirEntryInfo {
    pub fn new(name: impl Into<OsString>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }
}

/// Port for reading a single directory level.
pub trait DirectorySource {
    /// Entries of `dir`, in the order the underlying listing returns them.
    ///
    /// # Errors
    /// Returns [`EngineError::DirectoryUnreadable`] when `dir` cannot be opened
    /// or iterated.
    fn entries(&self, dir: &Path) -> Result<Vec<DirEntryInfo>>;

    /// Whether `path` names an existing regular file.
    fn is_file(&self, path: &Path) -> bool;
}

/// [`DirectorySource`] backed by `std::fs::read_dir`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDirectory;

impl DirectorySource for StdDirectory {
    fn entries(&self, dir: &Path) -> Result<Vec<DirEntryInfo>> {
        let unreadable = |source: std::io::Error| EngineError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;
            let is_dir = entry_is_dir(&entry.path(), entry.file_type());
            entries.push(DirEntryInfo::new(entry.file_name(), is_dir));
        }

        debug!("read {} entries from '{}'", entries.len(), dir.display());
        Ok(entries)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

// file_type() does not follow symlinks; a link to a directory is resolved
// through metadata so it still counts as a directory.
fn entry_is_dir(path: &Path, file_type: std::io::Result<FileType>) -> bool {
    match file_type {
        Ok(ft) if ft.is_symlink() => path.is_dir(),
        Ok(ft) => ft.is_dir(),
        Err(e) => {
            debug!("cannot stat '{}', treating it as a file: {e}", path.display());
            false
        }
    }
}
