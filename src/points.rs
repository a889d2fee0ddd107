//! # RA/Dec point files
//!
//! Point catalogues fed to `skymask polyid` and `skymask trim` are plain text, one
//! position per line:
//!
//! ```text
//! # ra dec [anything else]
//! 185.25 -2.5 galaxy_17
//! 10.0 45.0
//! ```
//!
//! [`RaDecReader`] walks such a file through any [`LineSource`]. Blank lines and lines
//! whose first character is `#` are skipped; an indented `#` is not a comment. A line
//! that does not start with two reals yields [`MaskError::MalformedPointLine`]; the
//! iterator keeps going after it, so the caller decides whether to log and skip or to
//! stop.

use camino::Utf8Path;
use log::warn;

use crate::{
    constants::Degree,
    geometry::spherical_vector::SphericalVector,
    mask_errors::MaskError,
    mask_reader::{grammar::parse_radec_line, LineReader, LineSource},
};

/// Comment marker of point files.
const COMMENT_PREFIX: char = '#';

/// One position read from a point file.
#[derive(Debug, Clone, PartialEq)]
pub struct RaDecPoint {
    pub ra: Degree,
    pub dec: Degree,
    /// The whole input line, without its terminator.
    pub line: String,
    /// 1-based line number in the source.
    pub line_number: usize,
}

impl RaDecPoint {
    pub fn to_vector(&self) -> SphericalVector {
        SphericalVector::from_radec_degrees(self.ra, self.dec)
    }
}

/// Iterator over the positions of a point file.
///
/// Yields `Ok(RaDecPoint)` for every data line, `Err(MalformedPointLine)` for a data line
/// without a leading `ra dec` pair, and a single `Err(IoError)` before stopping if the
/// underlying source fails.
#[derive(Debug)]
pub struct RaDecReader<S> {
    source: S,
    exhausted: bool,
}

impl RaDecReader<LineReader<std::io::BufReader<std::fs::File>>> {
    /// Open a point file.
    ///
    /// Return
    /// ----------
    /// * The reader, or [`MaskError::IoError`] if the file cannot be opened.
    pub fn open(path: &Utf8Path) -> Result<Self, MaskError> {
        Ok(RaDecReader::new(LineReader::open(path)?))
    }
}

impl<S: LineSource> RaDecReader<S> {
    pub fn new(source: S) -> Self {
        RaDecReader {
            source,
            exhausted: false,
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.source_name()
    }

    /// Iterate over the valid points only, logging every malformed line at `warn` level.
    pub fn skip_malformed(self) -> impl Iterator<Item = Result<RaDecPoint, MaskError>> {
        self.filter(|item| match item {
            Err(err @ MaskError::MalformedPointLine { .. }) => {
                warn!("{err}, skipping it");
                false
            }
            _ => true,
        })
    }

    fn read_point(&self) -> Result<RaDecPoint, MaskError> {
        let line = self.source.current_line();
        let (_, (ra, dec)) =
            parse_radec_line(line).map_err(|_| MaskError::MalformedPointLine {
                source_name: self.source.source_name().to_string(),
                line_number: self.source.line_number(),
            })?;
        Ok(RaDecPoint {
            ra,
            dec,
            line: line.to_string(),
            line_number: self.source.line_number(),
        })
    }
}

impl<S: LineSource> Iterator for RaDecReader<S> {
    type Item = Result<RaDecPoint, MaskError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        loop {
            match self.source.next_line() {
                Ok(true) => {}
                Ok(false) => {
                    self.exhausted = true;
                    return None;
                }
                Err(err) => {
                    self.exhausted = true;
                    return Some(Err(err));
                }
            }
            if self.source.is_blank() || self.source.current_line().starts_with(COMMENT_PREFIX) {
                continue;
            }
            return Some(self.read_point());
        }
    }
}
