//! Namespace providers
//!
//! The walker never touches a concrete filesystem or network service. It sees
//! the namespace only through the [`Namespace`] trait:
//!
//! - `LocalNamespace`: `file://` locations backed by the local filesystem
//! - `SnapshotNamespace`: any scheme, backed by a JSON description
//! - `Router`: dispatches each location to the first provider supporting it

mod entry;
mod local;
mod router;
mod snapshot;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::location::Location;

pub use entry::{EntryInfo, FileKind};
pub use local::LocalNamespace;
pub use router::Router;
pub use snapshot::{SnapshotError, SnapshotNamespace};

/// Why a location could not be queried or enumerated.
///
/// The `Display` text is what the walker prints between brackets.
#[derive(Debug, Error)]
pub enum EnumerateError {
    #[error("No such file or directory")]
    NotFound,
    #[error("The file is not a directory")]
    NotDirectory,
    #[error("Operation not supported")]
    Unsupported,
    #[error("Error opening directory '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0}")]
    Failed(String),
}

/// A hierarchical namespace the walker can list.
pub trait Namespace {
    /// Whether this provider serves the given location at all.
    fn supports(&self, location: &Location) -> bool;

    /// Classify a location without listing it.
    fn query_kind(&self, location: &Location) -> Result<FileKind, EnumerateError>;

    /// List the children of a location. Records are owned by the caller and
    /// live only as long as it keeps them.
    fn enumerate(&self, location: &Location) -> Result<Vec<EntryInfo>, EnumerateError>;

    /// Identity used to recognise the same node reached by different
    /// locations. Defaults to the URI itself.
    fn canonical(&self, location: &Location) -> String {
        location.uri().to_string()
    }
}

impl<N: Namespace + ?Sized> Namespace for &N {
    fn supports(&self, location: &Location) -> bool {
        (**self).supports(location)
    }

    fn query_kind(&self, location: &Location) -> Result<FileKind, EnumerateError> {
        (**self).query_kind(location)
    }

    fn enumerate(&self, location: &Location) -> Result<Vec<EntryInfo>, EnumerateError> {
        (**self).enumerate(location)
    }

    fn canonical(&self, location: &Location) -> String {
        (**self).canonical(location)
    }
}

impl<N: Namespace + ?Sized> Namespace for Box<N> {
    fn supports(&self, location: &Location) -> bool {
        (**self).supports(location)
    }

    fn query_kind(&self, location: &Location) -> Result<FileKind, EnumerateError> {
        (**self).query_kind(location)
    }

    fn enumerate(&self, location: &Location) -> Result<Vec<EntryInfo>, EnumerateError> {
        (**self).enumerate(location)
    }

    fn canonical(&self, location: &Location) -> String {
        (**self).canonical(location)
    }
}
