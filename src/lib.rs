//! nettree - prints the network:/// namespace (or any other) as a tree

pub mod location;
pub mod logging;
pub mod namespace;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use location::Location;
pub use namespace::{
    EntryInfo, EnumerateError, FileKind, LocalNamespace, Namespace, Router, SnapshotError,
    SnapshotNamespace,
};
pub use output::{
    JsonCollector, JsonTree, OutputConfig, OutputStyle, Printer, TextFormatter, print_json,
};
pub use tree::{Position, TreeOutput, TreeWalker, WalkerConfig};
