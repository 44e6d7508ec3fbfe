//! Callback interface between the walker and the formatters

use std::io;

use crate::location::Location;
use crate::namespace::EntryInfo;

/// Where an event sits in the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Depth of the listing the event belongs to (root listing = 0).
    pub level: usize,
    /// Bit `i` set: the ancestor at level `i` has siblings after it.
    pub pattern: u64,
    /// Last sibling in its listing.
    pub is_last: bool,
}

impl Position {
    /// Mask handed down to the children of this entry.
    pub fn child_pattern(&self) -> u64 {
        if self.is_last {
            self.pattern
        } else {
            self.pattern | level_bit(self.level)
        }
    }

    /// Whether the ancestor at `level` still has siblings to come.
    pub fn has_more_at(&self, level: usize) -> bool {
        self.pattern & level_bit(level) != 0
    }
}

/// Single bit for `level`; levels past the mask width contribute nothing.
pub fn level_bit(level: usize) -> u64 {
    u32::try_from(level)
        .ok()
        .and_then(|shift| 1u64.checked_shl(shift))
        .unwrap_or(0)
}

/// Receives the walk as a stream of events, in traversal order.
pub trait TreeOutput {
    /// The resolved root, before anything else.
    fn root(&mut self, location: &Location) -> io::Result<()>;

    /// One listed entry. `name` is the entry's name, guaranteed present.
    fn entry(&mut self, name: &str, entry: &EntryInfo, position: Position) -> io::Result<()>;

    /// Enumeration of the node whose children would sit at `position.level` failed.
    fn failure(&mut self, message: &str, position: Position) -> io::Result<()>;

    /// A descent into `location` was refused because it is already on the branch.
    fn cycle(&mut self, location: &Location, position: Position) -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
