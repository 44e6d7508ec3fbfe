//! Text formatter
//!
//! This module provides `TextFormatter`, which writes each walker event as
//! it arrives. The plain style prints flat lines; the tree style prefixes
//! them with connector glyphs rebuilt from the sibling bitmask.

use std::io;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::location::Location;
use crate::namespace::EntryInfo;
use crate::tree::{Position, TreeOutput};

use super::config::{OutputConfig, OutputStyle};
use super::printer::Printer;

/// Streaming text output, one line per event.
pub struct TextFormatter<W> {
    config: OutputConfig,
    printer: Printer<W>,
}

impl TextFormatter<StandardStream> {
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color && config.style == OutputStyle::Tree {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(config, StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self {
            config,
            printer: Printer::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.printer.into_inner()
    }

    fn is_tree(&self) -> bool {
        self.config.style == OutputStyle::Tree
    }

    /// Indentation plus connector for an event at `position`.
    fn emit_lead(&mut self, position: Position) -> io::Result<()> {
        if !self.is_tree() {
            return Ok(());
        }
        let lead = tree_prefix(position);
        self.printer.emit(&lead)
    }

    fn emit_bracketed(&mut self, text: &str, color: Color, position: Position) -> io::Result<()> {
        self.emit_lead(position)?;
        let line = format!("[{}]", text);
        if self.is_tree() {
            self.printer
                .emit_styled(&line, ColorSpec::new().set_fg(Some(color)))?;
            self.printer.emit_line("")
        } else {
            self.printer.emit_line(&line)
        }
    }
}

/// Connector prefix: one column per ancestor level, then the branch glyph.
pub fn tree_prefix(position: Position) -> String {
    let mut prefix = String::new();
    for level in 0..position.level {
        prefix.push_str(if position.has_more_at(level) { "│   " } else { "    " });
    }
    prefix.push_str(if position.is_last { "└── " } else { "├── " });
    prefix
}

impl<W: WriteColor> TreeOutput for TextFormatter<W> {
    fn root(&mut self, location: &Location) -> io::Result<()> {
        if self.is_tree() {
            self.printer.emit_styled(
                location.uri(),
                ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true),
            )?;
            self.printer.emit_line("")
        } else {
            self.printer.emit_line(location.uri())
        }
    }

    fn entry(&mut self, name: &str, entry: &EntryInfo, position: Position) -> io::Result<()> {
        self.emit_lead(position)?;

        if self.is_tree() && entry.kind.includes_directory() {
            self.printer.emit_styled(
                name,
                ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true),
            )?;
        } else {
            self.printer.emit(name)?;
        }

        // The symlink target is appended without a separator
        let redirect = match (&entry.target_uri, &entry.symlink_target) {
            (Some(uri), _) => Some(format!(" : {}", uri)),
            (None, Some(target)) if entry.is_symlink => Some(target.clone()),
            _ => None,
        };
        if let Some(redirect) = redirect {
            if self.is_tree() {
                self.printer
                    .emit_styled(&redirect, ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            } else {
                self.printer.emit(&redirect)?;
            }
        }

        self.printer.emit(" : ")?;
        self.printer.emit_line(&entry.display_name)
    }

    fn failure(&mut self, message: &str, position: Position) -> io::Result<()> {
        self.emit_bracketed(message, Color::Red, position)
    }

    fn cycle(&mut self, location: &Location, position: Position) -> io::Result<()> {
        let text = format!("cycle detected: {}", location);
        self.emit_bracketed(&text, Color::Yellow, position)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.printer.flush()
    }
}
