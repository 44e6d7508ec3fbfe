//! Namespace tree walking
//!
//! `TreeWalker` visits a namespace depth-first and streams events to any
//! `TreeOutput` implementation, using O(depth) memory.

mod config;
mod sink;
mod walker;

pub use config::WalkerConfig;
pub use sink::{Position, TreeOutput, level_bit};
pub use walker::TreeWalker;
