//! Local filesystem provider for `file://` locations

use std::fs;
use std::path::Path;

use tracing::warn;

use super::{EntryInfo, EnumerateError, FileKind, Namespace};
use crate::location::Location;

/// Serves `file://` locations from the local filesystem.
///
/// Dot-files are hidden. Symbolic links report the kind of their target
/// (or `SymbolicLink` when dangling), with `is_symlink` set.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalNamespace;

impl LocalNamespace {
    pub fn new() -> Self {
        Self
    }
}

impl Namespace for LocalNamespace {
    fn supports(&self, location: &Location) -> bool {
        location.scheme() == "file"
    }

    fn query_kind(&self, location: &Location) -> Result<FileKind, EnumerateError> {
        let path = location.to_path().ok_or(EnumerateError::Unsupported)?;
        match fs::metadata(&path) {
            Ok(meta) => Ok(kind_of(&meta.file_type())),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(EnumerateError::NotFound)
            }
            Err(source) => Err(EnumerateError::Io { path, source }),
        }
    }

    fn enumerate(&self, location: &Location) -> Result<Vec<EntryInfo>, EnumerateError> {
        let path = location.to_path().ok_or(EnumerateError::Unsupported)?;
        let dir = fs::read_dir(&path).map_err(|source| EnumerateError::Io {
            path: path.clone(),
            source,
        })?;

        let mut entries = Vec::new();
        for dir_entry in dir {
            match dir_entry {
                Ok(dir_entry) => entries.push(entry_info(&dir_entry.path())),
                Err(e) => warn!(dir = %path.display(), error = %e, "skipping unreadable entry"),
            }
        }
        Ok(entries)
    }

    fn canonical(&self, location: &Location) -> String {
        location
            .to_path()
            .and_then(|path| fs::canonicalize(path).ok())
            .map(|path| Location::from_path(&path).uri().to_string())
            .unwrap_or_else(|| location.uri().to_string())
    }
}

fn kind_of(file_type: &fs::FileType) -> FileKind {
    if file_type.is_dir() {
        FileKind::Directory
    } else if file_type.is_file() {
        FileKind::Regular
    } else if file_type.is_symlink() {
        FileKind::SymbolicLink
    } else {
        FileKind::Special
    }
}

fn entry_info(path: &Path) -> EntryInfo {
    let file_name = path.file_name().unwrap_or_default();
    if file_name.to_str().is_none() {
        warn!(path = %path.display(), "name is not valid UTF-8, children will not be reachable");
    }
    let name = file_name.to_string_lossy().into_owned();

    let is_symlink = path.is_symlink();
    let kind = match fs::metadata(path) {
        Ok(meta) => kind_of(&meta.file_type()),
        Err(_) if is_symlink => FileKind::SymbolicLink,
        Err(_) => FileKind::Unknown,
    };
    let symlink_target = if is_symlink {
        fs::read_link(path)
            .ok()
            .map(|t| t.to_string_lossy().into_owned())
    } else {
        None
    };

    EntryInfo {
        is_hidden: name.starts_with('.'),
        display_name: name.clone(),
        name: Some(name),
        kind,
        is_symlink,
        symlink_target,
        target_uri: None,
    }
}
