//! Namespace described by a JSON snapshot
//!
//! A snapshot maps root URIs to directory listings:
//!
//! ```json
//! {
//!   "roots": {
//!     "network:///": {
//!       "children": [
//!         { "name": "fileserver", "display_name": "File Server",
//!           "type": "mountable", "target_uri": "smb://fileserver/" }
//!       ]
//!     },
//!     "smb://fileserver/": { "error": "Permission denied" }
//!   }
//! }
//! ```
//!
//! Locations below a root are resolved by walking `children` by name. The
//! longest matching root wins.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::{EntryInfo, EnumerateError, FileKind, Namespace};
use crate::location::Location;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("read failed for '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SnapshotDir {
    #[serde(default)]
    children: Vec<SnapshotEntry>,
    error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct SnapshotEntry {
    name: Option<String>,
    display_name: Option<String>,
    #[serde(rename = "type", default)]
    kind: FileKind,
    #[serde(default)]
    hidden: bool,
    symlink: Option<bool>,
    symlink_target: Option<String>,
    target_uri: Option<String>,
    #[serde(default)]
    children: Vec<SnapshotEntry>,
    error: Option<String>,
}

impl SnapshotEntry {
    fn to_info(&self) -> EntryInfo {
        EntryInfo {
            name: self.name.clone(),
            display_name: self
                .display_name
                .clone()
                .or_else(|| self.name.clone())
                .unwrap_or_default(),
            kind: self.kind,
            is_hidden: self.hidden,
            is_symlink: self.symlink.unwrap_or(self.symlink_target.is_some()),
            symlink_target: self.symlink_target.clone(),
            target_uri: self.target_uri.clone(),
        }
    }
}

/// What a location resolved to inside the snapshot.
enum Resolved<'a> {
    Root(&'a SnapshotDir),
    Entry(&'a SnapshotEntry),
}

/// An in-memory namespace loaded from JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotNamespace {
    roots: BTreeMap<String, SnapshotDir>,
}

impl SnapshotNamespace {
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let text = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse a snapshot. Nesting depth is unbounded so deep namespaces load.
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        let mut deserializer = serde_json::Deserializer::from_str(text);
        deserializer.disable_recursion_limit();
        let namespace = Self::deserialize(&mut deserializer)?;
        deserializer.end()?;
        Ok(namespace)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_value(value)?)
    }

    fn best_root<'s, 'l>(
        &'s self,
        location: &'l Location,
    ) -> Option<(&'s SnapshotDir, Vec<&'l str>)> {
        self.roots
            .iter()
            .filter_map(|(uri, dir)| {
                location
                    .segments_below(uri)
                    .map(|segments| (uri.len(), dir, segments))
            })
            .max_by_key(|(len, _, _)| *len)
            .map(|(_, dir, segments)| (dir, segments))
    }

    fn resolve(&self, location: &Location) -> Result<Resolved<'_>, EnumerateError> {
        let (root, segments) = self.best_root(location).ok_or(EnumerateError::NotFound)?;
        let mut current = Resolved::Root(root);
        for segment in segments {
            let children = match current {
                Resolved::Root(dir) => &dir.children,
                Resolved::Entry(entry) => &entry.children,
            };
            current = children
                .iter()
                .find(|c| c.name.as_deref() == Some(segment))
                .map(Resolved::Entry)
                .ok_or(EnumerateError::NotFound)?;
        }
        Ok(current)
    }
}

impl Namespace for SnapshotNamespace {
    fn supports(&self, location: &Location) -> bool {
        self.best_root(location).is_some()
    }

    fn query_kind(&self, location: &Location) -> Result<FileKind, EnumerateError> {
        match self.resolve(location)? {
            Resolved::Root(_) => Ok(FileKind::Directory),
            Resolved::Entry(entry) => Ok(entry.kind),
        }
    }

    fn enumerate(&self, location: &Location) -> Result<Vec<EntryInfo>, EnumerateError> {
        let (error, children) = match self.resolve(location)? {
            Resolved::Root(dir) => (&dir.error, &dir.children),
            Resolved::Entry(entry) => {
                if !entry.kind.includes_directory() {
                    return Err(EnumerateError::NotDirectory);
                }
                (&entry.error, &entry.children)
            }
        };
        if let Some(message) = error {
            return Err(EnumerateError::Failed(message.clone()));
        }
        Ok(children.iter().map(SnapshotEntry::to_info).collect())
    }
}
