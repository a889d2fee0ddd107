mod common;

use std::io::Write;

use approx::assert_relative_eq;
use camino::Utf8Path;
use skymask::{
    mask_reader::{read_mask, LineReader},
    MaskAreaExt, MaskError, PolygonSet, SphericalVector,
};

use common::{data_file, load_mask};

#[test]
fn test_pole_mask_end_to_end() {
    let mask = load_mask("pole.ply");
    assert_eq!(mask.len(), 1);
    assert!(mask.source_name().ends_with("pole.ply"));

    let pole = SphericalVector::from_radec_degrees(0.0, 90.0);
    assert_eq!(mask.find_index(&pole), Some(0));
    assert_eq!(mask.find_polyid(&pole), Some(0));
    assert_eq!(mask.find_index_radec(0.0, -90.0), None);

    assert_relative_eq!(mask.total_area(0.0), 1.0);
    assert_relative_eq!(mask.weighted_total_area(0.0), 2.0);
    assert_eq!(mask.total_area(3.0), 0.0);
    assert_eq!(mask.weighted_total_area(3.0), 0.0);
}

#[test]
fn test_overlap_mask_layout() {
    let mask = load_mask("overlap.ply");
    assert_eq!(mask.len(), 3);
    let ids: Vec<_> = mask.iter().map(|p| p.polyid()).collect();
    assert_eq!(ids, vec![40, 10, 99]);
    let ncaps: Vec<_> = (&mask).into_iter().map(|p| p.ncap()).collect();
    assert_eq!(ncaps, vec![1, 2, 1]);
    assert_eq!(mask.polygon_from_index(2).unwrap().pixel(), 7);
}

fn read_err(name: &str) -> MaskError {
    PolygonSet::from_file(data_file(name)).unwrap_err()
}

#[test]
fn test_malformed_header_file() {
    assert_eq!(
        read_err("bad_header.ply"),
        MaskError::MalformedHeader {
            source_name: "tests/data/bad_header.ply".into(),
            count: 0
        }
    );
}

#[test]
fn test_too_few_polygons_file() {
    let err = read_err("too_few.ply");
    assert_eq!(
        err,
        MaskError::TooFewPolygons {
            source_name: "tests/data/too_few.ply".into(),
            declared: 2,
            read: 1
        }
    );
    assert_eq!(
        err.to_string(),
        "too few polygons read in file: tests/data/too_few.ply! Expected 2, read 1"
    );
}

#[test]
fn test_too_many_polygons_file() {
    assert!(matches!(
        read_err("too_many.ply"),
        MaskError::TooManyPolygons {
            line_number: 4,
            declared: 1,
            ..
        }
    ));
}

#[test]
fn test_zero_caps_file() {
    assert!(matches!(
        read_err("zero_caps.ply"),
        MaskError::MalformedPolygonLine { line_number: 2, .. }
    ));
}

#[test]
fn test_bad_cap_file() {
    let err = read_err("bad_cap.ply");
    assert_eq!(
        err,
        MaskError::MalformedCapLine {
            source_name: "tests/data/bad_cap.ply".into(),
            line_number: 4,
            line: "1.0 2.0 bogus 0.5".into()
        }
    );
    assert_eq!(
        err.to_string(),
        "cap read error on line 4 in file: tests/data/bad_cap.ply"
    );
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        PolygonSet::from_file(Utf8Path::new("tests/data/no_such_mask.ply")),
        Err(MaskError::IoError(_))
    ));
}

#[test]
fn test_mask_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "2 polygons").unwrap();
    writeln!(file, "polygon 5 ( 1 caps, 0.5 weight, 0 pixel, 0.25 str):").unwrap();
    writeln!(file, " 1.0 0.0 0.0 0.1").unwrap();
    writeln!(file, "polygon 6 ( 1 caps, 1.0 weight, 0 pixel, 0.75 str):").unwrap();
    writeln!(file, " -1.0 0.0 0.0 0.1").unwrap();
    file.flush().unwrap();

    let path = Utf8Path::from_path(file.path()).unwrap();
    let mask = PolygonSet::from_file(path).unwrap();
    assert_eq!(mask.source_name(), path.as_str());
    assert_eq!(mask.find_polyid_radec(0.0, 0.0), Some(5));
    assert_eq!(mask.find_polyid_radec(180.0, 0.0), Some(6));
    assert_eq!(mask.find_polyid_radec(90.0, 0.0), None);
    assert_relative_eq!(mask.total_area(0.0), 1.0);
    assert_relative_eq!(mask.weighted_total_area(0.0), 0.875);
    assert_relative_eq!(mask.total_area(0.75), 0.75);
}

#[test]
fn test_read_from_any_reader() {
    let text = std::fs::read(data_file("overlap.ply")).unwrap();
    let mut source = LineReader::from_reader("bytes", text.as_slice());
    let mask = read_mask(&mut source).unwrap();
    assert_eq!(mask.source_name(), "bytes");
    let text = std::str::from_utf8(&text).unwrap();
    let again = PolygonSet::from_line_source(&mut LineReader::from_text("bytes", text)).unwrap();
    assert_eq!(mask, again);
}
