use thiserror::Error;

use crate::constants::PolyId;

/// Errors raised while loading or querying a sky mask.
///
/// The first six variants mirror the mask-file taxonomy: they carry the source name and,
/// where it applies, the 1-based line number of the offending line so a caller can print a
/// single diagnostic and decide what to do next. None of them terminate the process.
#[derive(Error, Debug)]
pub enum MaskError {
    #[error("polygons ({count}) must be positive in file: {source_name}")]
    MalformedHeader { source_name: String, count: i64 },

    #[error("polygon read error line {line_number} in file: {source_name}")]
    MalformedPolygonLine {
        source_name: String,
        line_number: usize,
        line: String,
    },

    #[error("too many polygons on line {line_number} in file: {source_name} (header declares {declared})")]
    TooManyPolygons {
        source_name: String,
        line_number: usize,
        declared: usize,
    },

    #[error("too few polygons read in file: {source_name}! Expected {declared}, read {read}")]
    TooFewPolygons {
        source_name: String,
        declared: usize,
        read: usize,
    },

    #[error("cap read error on line {line_number} in file: {source_name}")]
    MalformedCapLine {
        source_name: String,
        line_number: usize,
        line: String,
    },

    #[error("invalid polygon index: {index} (mask holds {len} polygons)")]
    InvalidIndex { index: usize, len: usize },

    #[error("polygon {0} has no caps")]
    EmptyPolygon(PolyId),

    #[error("degenerate direction vector: ({0}, {1}, {2})")]
    DegenerateVector(f64, f64, f64),

    #[error("couldn't read RA/DEC on line {line_number} in file {source_name}")]
    MalformedPointLine {
        source_name: String,
        line_number: usize,
    },

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl PartialEq for MaskError {
    fn eq(&self, other: &Self) -> bool {
        use MaskError::*;
        match (self, other) {
            (
                MalformedHeader {
                    source_name: a,
                    count: c1,
                },
                MalformedHeader {
                    source_name: b,
                    count: c2,
                },
            ) => a == b && c1 == c2,
            (
                MalformedPolygonLine {
                    source_name: a,
                    line_number: n1,
                    line: l1,
                },
                MalformedPolygonLine {
                    source_name: b,
                    line_number: n2,
                    line: l2,
                },
            ) => a == b && n1 == n2 && l1 == l2,
            (
                TooManyPolygons {
                    source_name: a,
                    line_number: n1,
                    declared: d1,
                },
                TooManyPolygons {
                    source_name: b,
                    line_number: n2,
                    declared: d2,
                },
            ) => a == b && n1 == n2 && d1 == d2,
            (
                TooFewPolygons {
                    source_name: a,
                    declared: d1,
                    read: r1,
                },
                TooFewPolygons {
                    source_name: b,
                    declared: d2,
                    read: r2,
                },
            ) => a == b && d1 == d2 && r1 == r2,
            (
                MalformedCapLine {
                    source_name: a,
                    line_number: n1,
                    line: l1,
                },
                MalformedCapLine {
                    source_name: b,
                    line_number: n2,
                    line: l2,
                },
            ) => a == b && n1 == n2 && l1 == l2,
            (InvalidIndex { index: i1, len: l1 }, InvalidIndex { index: i2, len: l2 }) => {
                i1 == i2 && l1 == l2
            }
            (EmptyPolygon(a), EmptyPolygon(b)) => a == b,
            (DegenerateVector(x1, y1, z1), DegenerateVector(x2, y2, z2)) => {
                x1.to_bits() == x2.to_bits()
                    && y1.to_bits() == y2.to_bits()
                    && z1.to_bits() == z2.to_bits()
            }
            (
                MalformedPointLine {
                    source_name: a,
                    line_number: n1,
                },
                MalformedPointLine {
                    source_name: b,
                    line_number: n2,
                },
            ) => a == b && n1 == n2,

            // io::Error is not comparable, match on its kind only
            (IoError(a), IoError(b)) => a.kind() == b.kind(),

            _ => false,
        }
    }
}

#[cfg(test)]
mod mask_errors_test {
    use super::*;

    #[test]
    fn test_diagnostic_names_line_and_source() {
        let err = MaskError::MalformedCapLine {
            source_name: "boss.ply".into(),
            line_number: 7,
            line: "1.0 2.0 bogus 0.5".into(),
        };
        assert_eq!(
            err.to_string(),
            "cap read error on line 7 in file: boss.ply"
        );

        let err = MaskError::TooFewPolygons {
            source_name: "boss.ply".into(),
            declared: 2,
            read: 1,
        };
        assert_eq!(
            err.to_string(),
            "too few polygons read in file: boss.ply! Expected 2, read 1"
        );
    }

    #[test]
    fn test_io_errors_compare_by_kind() {
        let a = MaskError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "a"));
        let b = MaskError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "b"));
        let c = MaskError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "a",
        ));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, MaskError::EmptyPolygon(3));
    }
}
