//! TreeWalker - depth-first listing of a namespace

use std::io;

use tracing::{debug, warn};

use crate::location::Location;
use crate::namespace::{EntryInfo, Namespace};

use super::config::WalkerConfig;
use super::sink::{Position, TreeOutput};

/// Walks a [`Namespace`] depth-first and streams every event to a [`TreeOutput`].
///
/// Enumeration failures never abort the walk: they become a single
/// `failure` event and that branch ends there. The only error returned is
/// one raised by the output itself.
pub struct TreeWalker<N> {
    namespace: N,
    config: WalkerConfig,
}

impl<N: Namespace> TreeWalker<N> {
    pub fn new(namespace: N, config: WalkerConfig) -> Self {
        Self { namespace, config }
    }

    /// Print the root line, then its subtree.
    pub fn walk<O: TreeOutput>(&self, root: &Location, output: &mut O) -> io::Result<()> {
        output.root(root)?;
        let mut branch = vec![self.namespace.canonical(root)];
        self.walk_node(root, 0, 0, &mut branch, output)?;
        output.finish()
    }

    fn walk_node<O: TreeOutput>(
        &self,
        location: &Location,
        level: usize,
        pattern: u64,
        branch: &mut Vec<String>,
        output: &mut O,
    ) -> io::Result<()> {
        // Mountables are reached through the target URI on their parent's listing
        match self.namespace.query_kind(location) {
            Ok(kind) if kind.is_mountable() => return Ok(()),
            Ok(_) => {}
            Err(e) => debug!(location = %location, error = %e, "kind query failed"),
        }

        let entries = match self.namespace.enumerate(location) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(location = %location, error = %e, "enumeration failed");
                let position = Position { level, pattern, is_last: true };
                return output.failure(&e.to_string(), position);
            }
        };

        let mut entries: Vec<EntryInfo> = entries
            .into_iter()
            .filter(|e| self.config.show_hidden || !e.is_hidden)
            .collect();
        entries.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));

        let total = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            let Some(name) = entry.name.as_deref() else {
                continue;
            };
            let position = Position { level, pattern, is_last: i + 1 == total };
            output.entry(name, entry, position)?;

            if !self.should_descend(entry) || !self.config.allows_level(level + 1) {
                continue;
            }

            let child = match entry.target_uri.as_deref() {
                Some(uri) if self.config.follow_symlinks => Some(Location::from_uri(uri)),
                Some(_) => None,
                None => Some(location.child(name)),
            };
            if let Some(child) = child {
                self.descend(&child, level + 1, position.child_pattern(), branch, output)?;
            }
        }

        Ok(())
    }

    fn should_descend(&self, entry: &EntryInfo) -> bool {
        entry.kind.includes_directory() && (self.config.follow_symlinks || !entry.is_symlink)
    }

    fn descend<O: TreeOutput>(
        &self,
        child: &Location,
        level: usize,
        pattern: u64,
        branch: &mut Vec<String>,
        output: &mut O,
    ) -> io::Result<()> {
        let identity = self.namespace.canonical(child);
        if self.config.cycle_guard && branch.contains(&identity) {
            warn!(location = %child, "cycle detected, not descending");
            let position = Position { level, pattern, is_last: true };
            return output.cycle(child, position);
        }

        debug!(location = %child, level, "descending");
        branch.push(identity);
        let result = self.walk_node(child, level, pattern, branch, output);
        branch.pop();
        result
    }
}
