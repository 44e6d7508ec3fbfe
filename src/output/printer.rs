//! Line printer over a color-capable writer

use std::io::{self, Write};

use termcolor::{ColorSpec, WriteColor};

/// Appends text to an output stream, with optional styling.
pub struct Printer<W> {
    out: W,
}

impl<W: WriteColor> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Append text without a newline.
    pub fn emit(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    /// Append text followed by a newline.
    pub fn emit_line(&mut self, text: &str) -> io::Result<()> {
        self.emit(text)?;
        self.out.write_all(b"\n")
    }

    /// Append text in the given style, resetting afterwards.
    pub fn emit_styled(&mut self, text: &str, spec: &ColorSpec) -> io::Result<()> {
        self.out.set_color(spec)?;
        self.emit(text)?;
        self.out.reset()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
