//! JSON output formatting
//!
//! `JsonCollector` rebuilds the nested tree from the walker's event stream,
//! since JSON cannot be emitted until a subtree is complete.

use std::io::{self, Write};

use serde::Serialize;

use crate::location::Location;
use crate::namespace::{EntryInfo, FileKind};
use crate::tree::{Position, TreeOutput};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonNode {
    pub name: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symlink_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub cycle: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<JsonNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JsonTree {
    pub root: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub children: Vec<JsonNode>,
}

/// Collects walker events into a [`JsonTree`].
#[derive(Debug, Default)]
pub struct JsonCollector {
    tree: JsonTree,
    /// Open listings, one per level; the last node of each level owns the next.
    levels: Vec<Vec<JsonNode>>,
}

impl JsonCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close every listing deeper than `depth`, attaching it to its parent.
    fn fold_to(&mut self, depth: usize) {
        while self.levels.len() > depth.max(1) {
            let children = self.levels.pop().unwrap_or_default();
            if let Some(parent) = self.levels.last_mut().and_then(|l| l.last_mut()) {
                parent.children = children;
            }
        }
        while self.levels.len() < depth {
            self.levels.push(Vec::new());
        }
    }

    /// The node that owns listing `level`, or `None` for the root listing.
    fn owner_of(&mut self, level: usize) -> Option<&mut JsonNode> {
        self.fold_to(level);
        let parent_level = level.checked_sub(1)?;
        self.levels.get_mut(parent_level).and_then(|l| l.last_mut())
    }

    pub fn into_tree(mut self) -> JsonTree {
        self.fold_to(1);
        if let Some(top) = self.levels.pop() {
            self.tree.children = top;
        }
        self.tree
    }
}

impl TreeOutput for JsonCollector {
    fn root(&mut self, location: &Location) -> io::Result<()> {
        self.tree.root = location.uri().to_string();
        Ok(())
    }

    fn entry(&mut self, name: &str, entry: &EntryInfo, position: Position) -> io::Result<()> {
        self.fold_to(position.level + 1);
        let node = JsonNode {
            name: name.to_string(),
            display_name: entry.display_name.clone(),
            kind: entry.kind,
            hidden: entry.is_hidden,
            symlink_target: entry.symlink_target.clone().filter(|_| entry.is_symlink),
            target_uri: entry.target_uri.clone(),
            error: None,
            cycle: false,
            children: Vec::new(),
        };
        if let Some(level) = self.levels.get_mut(position.level) {
            level.push(node);
        }
        Ok(())
    }

    fn failure(&mut self, message: &str, position: Position) -> io::Result<()> {
        match self.owner_of(position.level) {
            Some(node) => node.error = Some(message.to_string()),
            None => self.tree.error = Some(message.to_string()),
        }
        Ok(())
    }

    fn cycle(&mut self, _location: &Location, position: Position) -> io::Result<()> {
        if let Some(node) = self.owner_of(position.level) {
            node.cycle = true;
        }
        Ok(())
    }
}

/// Write the tree as pretty-printed JSON.
pub fn write_json<W: Write>(tree: &JsonTree, mut out: W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut out, tree).map_err(io::Error::other)?;
    writeln!(out)
}

/// Print the tree as pretty-printed JSON to stdout.
pub fn print_json(tree: &JsonTree) -> io::Result<()> {
    write_json(tree, io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(level: usize, is_last: bool) -> Position {
        Position { level, pattern: 0, is_last }
    }

    fn dir(name: &str) -> EntryInfo {
        EntryInfo::new(name, FileKind::Directory)
    }

    #[test]
    fn test_nesting_follows_levels() {
        let mut c = JsonCollector::new();
        c.root(&Location::from_uri("network:///")).unwrap();
        c.entry("a", &dir("a"), pos(0, false)).unwrap();
        c.entry("x", &dir("x"), pos(1, true)).unwrap();
        c.entry("deep", &EntryInfo::new("deep", FileKind::Regular), pos(2, true))
            .unwrap();
        c.entry("b", &dir("b"), pos(0, true)).unwrap();
        let tree = c.into_tree();

        assert_eq!(tree.root, "network:///");
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].name, "a");
        assert_eq!(tree.children[0].children[0].name, "x");
        assert_eq!(tree.children[0].children[0].children[0].name, "deep");
        assert_eq!(tree.children[1].name, "b");
        assert!(tree.children[1].children.is_empty());
    }

    #[test]
    fn test_failures_attach_to_owner() {
        let mut c = JsonCollector::new();
        c.root(&Location::from_uri("network:///")).unwrap();
        c.entry("locked", &dir("locked"), pos(0, false)).unwrap();
        c.failure("permission denied", pos(1, true)).unwrap();
        c.entry("loop", &dir("loop"), pos(0, true)).unwrap();
        c.cycle(&Location::from_uri("network:///"), pos(1, true)).unwrap();
        let tree = c.into_tree();

        assert_eq!(tree.error, None);
        assert_eq!(tree.children[0].error.as_deref(), Some("permission denied"));
        assert!(tree.children[1].cycle);
    }

    #[test]
    fn test_root_failure() {
        let mut c = JsonCollector::new();
        c.root(&Location::from_uri("network:///")).unwrap();
        c.failure("Operation not supported", pos(0, true)).unwrap();
        let tree = c.into_tree();
        assert_eq!(tree.error.as_deref(), Some("Operation not supported"));
        assert!(tree.children.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let mut c = JsonCollector::new();
        c.root(&Location::from_uri("network:///")).unwrap();
        c.entry("f", &EntryInfo::new("f", FileKind::Regular), pos(0, true))
            .unwrap();
        let mut buf = Vec::new();
        write_json(&c.into_tree(), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "root": "network:///",
                "children": [ { "name": "f", "display_name": "f", "type": "regular" } ]
            })
        );
    }
}
