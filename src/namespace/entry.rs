//! Attribute records produced by enumeration

use serde::{Deserialize, Serialize};

/// Classification of a namespace entry.
///
/// The discriminants match the numeric file-type codes used by desktop
/// virtual filesystems, which matters for [`FileKind::includes_directory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Unknown = 0,
    #[default]
    Regular = 1,
    Directory = 2,
    #[serde(alias = "symlink")]
    SymbolicLink = 3,
    Special = 4,
    Shortcut = 5,
    Mountable = 6,
}

impl FileKind {
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Bitwise "type includes directory" test on the file-type code.
    ///
    /// True for directories, symbolic links and mountables.
    pub fn includes_directory(self) -> bool {
        self.code() & FileKind::Directory.code() != 0
    }

    pub fn is_mountable(self) -> bool {
        self == FileKind::Mountable
    }
}

/// Attributes of one child, as returned by [`crate::Namespace::enumerate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: Option<String>,
    pub display_name: String,
    pub kind: FileKind,
    pub is_hidden: bool,
    pub is_symlink: bool,
    pub symlink_target: Option<String>,
    pub target_uri: Option<String>,
}

impl EntryInfo {
    /// A plain visible entry with `display_name` equal to `name`.
    pub fn new(name: impl Into<String>, kind: FileKind) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name: Some(name),
            kind,
            is_hidden: false,
            is_symlink: false,
            symlink_target: None,
            target_uri: None,
        }
    }

    /// Name used for sibling ordering; absent names sort as "".
    pub fn sort_key(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
