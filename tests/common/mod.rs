use camino::Utf8PathBuf;
use skymask::PolygonSet;

pub fn data_file(name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from("tests/data").join(name)
}

pub fn load_mask(name: &str) -> PolygonSet {
    PolygonSet::from_file(data_file(name)).unwrap()
}
