//! Output configuration types

/// How listed entries are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// One flat line per entry, no indentation.
    #[default]
    Plain,
    /// Connector glyphs derived from the sibling bitmask.
    Tree,
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Only the tree style colors its output.
    pub use_color: bool,
    pub style: OutputStyle,
}
