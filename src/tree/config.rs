//! Configuration types for the tree walker

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Include entries flagged as hidden.
    pub show_hidden: bool,
    /// Descend into symbolic links and follow target URIs.
    pub follow_symlinks: bool,
    /// Print the version instead of walking. Handled by the CLI.
    pub show_version: bool,
    /// Descend only this many levels below the root.
    pub max_depth: Option<usize>,
    /// Refuse to re-enter a location already on the current branch.
    pub cycle_guard: bool,
}

impl WalkerConfig {
    /// Whether children at `level` may still be listed.
    pub fn allows_level(&self, level: usize) -> bool {
        self.max_depth.is_none_or(|max| level < max)
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            follow_symlinks: false,
            show_version: false,
            max_depth: None,
            cycle_guard: true,
        }
    }
}
