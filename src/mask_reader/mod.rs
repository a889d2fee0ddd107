//! # Mask file ingestion
//!
//! Reading a MANGLE polygon file into a [`PolygonSet`](crate::polygon_set::PolygonSet).
//!
//! ## Overview
//! -----------------
//! - [`LineSource`] – the line-by-line input the reader consumes (line text, 1-based
//!   line number, source name, blank test),
//! - [`LineReader`] – the [`LineSource`] over any [`BufRead`] (files, in-memory text),
//! - `grammar` – `nom` parsers for the header, polygon and cap lines (and RA/Dec point lines),
//! - [`mask_file`] – the single-pass state machine and the `PolygonSet::from_*`
//!   constructors.
//!
//! ## File format
//! -----------------
//! ```text
//! 2 polygons
//! polygon 0 ( 1 caps, 1 weight, 0 pixel, 1.5707963267949 str):
//!  0.0 0.0 1.0 1.0
//! polygon 1 ( 2 caps, 0.5 weight, 0 pixel, 0.3 str):
//!  1.0 0.0 0.0 0.2
//!  0.0 1.0 0.0 -0.1
//! ```
//!
//! Any malformed header, polygon line or cap line, and any mismatch between the declared
//! and the actual number of polygons, is reported as a [`MaskError`] carrying the source
//! name and line number. A failed read never returns a partial set.

pub(crate) mod grammar;
pub mod mask_file;

use std::{
    fs::File,
    io::{BufRead, BufReader},
};

use camino::Utf8Path;

use crate::mask_errors::MaskError;

pub use mask_file::read_mask;

/// Sequential access to the lines of a text source.
///
/// Implementors must preserve file order and number lines from 1.
pub trait LineSource {
    /// Advance to the next line.
    ///
    /// Return
    /// ----------
    /// * `Ok(true)` if a line was read and is now the current line, `Ok(false)` once the
    ///   source is exhausted, or an I/O error.
    fn next_line(&mut self) -> Result<bool, MaskError>;

    /// Text of the current line, without its line terminator.
    fn current_line(&self) -> &str;

    /// 1-based number of the current line, `0` before the first read.
    fn line_number(&self) -> usize;

    /// Name used in diagnostics, usually the file path.
    fn source_name(&self) -> &str;

    /// `true` if the current line holds only whitespace.
    fn is_blank(&self) -> bool {
        self.current_line().trim().is_empty()
    }
}

/// A [`LineSource`] over any buffered reader.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    source_name: String,
    buffer: Vec<u8>,
    line: String,
    line_number: usize,
}

impl LineReader<BufReader<File>> {
    /// Open a file for line-by-line reading.
    ///
    /// Return
    /// ----------
    /// * The reader, or [`MaskError::IoError`] if the file cannot be opened.
    pub fn open(path: &Utf8Path) -> Result<Self, MaskError> {
        let file = File::open(path)?;
        Ok(LineReader::from_reader(path.as_str(), BufReader::new(file)))
    }
}

impl<'a> LineReader<&'a [u8]> {
    /// Read lines from an in-memory string.
    pub fn from_text(source_name: impl Into<String>, text: &'a str) -> Self {
        LineReader::from_reader(source_name, text.as_bytes())
    }
}

impl<R: BufRead> LineReader<R> {
    pub fn from_reader(source_name: impl Into<String>, reader: R) -> Self {
        LineReader {
            reader,
            source_name: source_name.into(),
            buffer: Vec::new(),
            line: String::new(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    /// Invalid UTF-8 is replaced by `U+FFFD`.
    fn next_line(&mut self) -> Result<bool, MaskError> {
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(false);
        }
        self.line_number += 1;

        while let Some(b'\n' | b'\r') = self.buffer.last() {
            self.buffer.pop();
        }
        self.line = String::from_utf8_lossy(&self.buffer).into_owned();
        Ok(true)
    }

    fn current_line(&self) -> &str {
        &self.line
    }

    fn line_number(&self) -> usize {
        self.line_number
    }

    fn source_name(&self) -> &str {
        &self.source_name
    }
}
