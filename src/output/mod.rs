//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `printer` - Low-level line printer
//! - `text` - Streaming plain and tree-style text output
//! - `json` - JSON output

mod config;
mod json;
mod printer;
mod text;

pub use config::{OutputConfig, OutputStyle};
pub use json::{JsonCollector, JsonNode, JsonTree, print_json, write_json};
pub use printer::Printer;
pub use text::{TextFormatter, tree_prefix};
