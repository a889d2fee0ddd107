//! Single-pass reader turning a [`LineSource`] into a [`PolygonSet`].
//!
//! The reader walks the source once:
//!
//! 1. the first line is the header `"<N> polygons"`, `N ≥ 1`,
//! 2. outside a polygon block, blank lines and unknown directives are skipped,
//! 3. a line starting with `polygon` opens a block whose `ncap` following lines are read
//!    unconditionally as caps,
//! 4. at end of input exactly `N` blocks must have been read.

use camino::Utf8Path;
use log::{debug, info, trace};

use crate::{
    constants::Caps,
    geometry::{cap::Cap, polygon::Polygon, spherical_vector::SphericalVector},
    mask_errors::MaskError,
    mask_reader::{
        grammar::{parse_cap_line, parse_header_line, parse_polygon_line, PolygonLine},
        LineReader, LineSource,
    },
    polygon_set::{PolygonSet, PolygonSetBuilder},
};

/// Keyword opening a polygon block.
const POLYGON_KEYWORD: &str = "polygon";

impl PolygonSet {
    /// Read a mask file.
    ///
    /// Arguments
    /// -----------------
    /// * `path`: path of the MANGLE polygon file.
    ///
    /// Return
    /// ----------
    /// * The loaded set, or the first [`MaskError`] met (I/O failure, malformed line,
    ///   polygon count mismatch).
    ///
    /// See also
    /// ------------
    /// * [`read_mask`] – The same reader over any [`LineSource`].
    pub fn from_file(path: impl AsRef<Utf8Path>) -> Result<Self, MaskError> {
        let mut source = LineReader::open(path.as_ref())?;
        read_mask(&mut source)
    }

    /// Read a mask held in memory; `source_name` labels the diagnostics.
    pub fn from_mask_str(source_name: &str, text: &str) -> Result<Self, MaskError> {
        read_mask(&mut LineReader::from_text(source_name, text))
    }

    /// Read a mask from an arbitrary [`LineSource`].
    pub fn from_line_source<S: LineSource>(source: &mut S) -> Result<Self, MaskError> {
        read_mask(source)
    }
}

/// Read a complete mask from `source`.
///
/// Arguments
/// -----------------
/// * `source`: the line source, positioned before its first line.
///
/// Return
/// ----------
/// * The [`PolygonSet`] in file order, or:
///   - [`MaskError::MalformedHeader`] if the first line does not start with a positive count,
///   - [`MaskError::MalformedPolygonLine`] for a `polygon` line that does not match the
///     grammar or declares fewer than one cap,
///   - [`MaskError::TooManyPolygons`] for a block beyond the declared count,
///   - [`MaskError::MalformedCapLine`] for a cap line that is not four reals, or missing,
///   - [`MaskError::TooFewPolygons`] if the input ends before the declared count is reached,
///   - [`MaskError::IoError`] if the source cannot be read.
pub fn read_mask<S: LineSource>(source: &mut S) -> Result<PolygonSet, MaskError> {
    let declared = read_header(source)?;
    let mut builder = PolygonSetBuilder::new(source.source_name(), declared);

    while source.next_line()? {
        if source.is_blank() {
            continue;
        }
        if !source.current_line().starts_with(POLYGON_KEYWORD) {
            trace!(
                "{}:{}: ignoring line {:?}",
                source.source_name(),
                source.line_number(),
                source.current_line()
            );
            continue;
        }

        let polygon_line = read_polygon_line(source)?;

        if builder.is_full() {
            return Err(MaskError::TooManyPolygons {
                source_name: source.source_name().to_string(),
                line_number: source.line_number(),
                declared,
            });
        }

        debug!(
            "{}:{}: polygon {} with {} caps",
            source.source_name(),
            source.line_number(),
            polygon_line.polyid,
            polygon_line.ncap
        );

        let caps = read_caps(source, polygon_line.ncap)?;
        builder.push(Polygon::new(
            polygon_line.polyid,
            polygon_line.pixel,
            caps,
            polygon_line.weight,
            polygon_line.area,
        )?)?;
    }

    let mask = builder.build()?;
    info!("Read {} polygons from {}", mask.len(), mask.source_name());
    Ok(mask)
}

fn read_header<S: LineSource>(source: &mut S) -> Result<usize, MaskError> {
    let source_name = source.source_name().to_string();
    let malformed = |count: i64| MaskError::MalformedHeader {
        source_name: source_name.clone(),
        count,
    };

    if !source.next_line()? {
        return Err(malformed(0));
    }

    match parse_header_line(source.current_line()) {
        Ok((_, count)) if count >= 1 => usize::try_from(count).map_err(|_| malformed(count)),
        Ok((_, count)) => Err(malformed(count)),
        Err(_) => Err(malformed(0)),
    }
}

fn read_polygon_line<S: LineSource>(source: &S) -> Result<PolygonLine, MaskError> {
    match parse_polygon_line(source.current_line()) {
        Ok((_, polygon_line)) if polygon_line.ncap >= 1 => Ok(polygon_line),
        _ => Err(MaskError::MalformedPolygonLine {
            source_name: source.source_name().to_string(),
            line_number: source.line_number(),
            line: source.current_line().to_string(),
        }),
    }
}

fn read_caps<S: LineSource>(source: &mut S, ncap: i32) -> Result<Caps, MaskError> {
    (0..ncap).map(|_| read_cap(source)).collect()
}

fn read_cap<S: LineSource>(source: &mut S) -> Result<Cap, MaskError> {
    if !source.next_line()? {
        return Err(MaskError::MalformedCapLine {
            source_name: source.source_name().to_string(),
            line_number: source.line_number() + 1,
            line: String::new(),
        });
    }

    let (_, (axis, m)) =
        parse_cap_line(source.current_line()).map_err(|_| MaskError::MalformedCapLine {
            source_name: source.source_name().to_string(),
            line_number: source.line_number(),
            line: source.current_line().to_string(),
        })?;

    Ok(Cap::new(SphericalVector::from_components_unchecked(axis), m))
}
