pub mod aggregate;
pub mod constants;
pub mod conversion;
pub mod geometry;
pub mod mask_errors;
pub mod mask_reader;
pub mod points;
pub mod polygon_set;
pub mod trim;

pub use aggregate::MaskAreaExt;
pub use geometry::{Cap, Polygon, SphericalVector};
pub use mask_errors::MaskError;
pub use polygon_set::{PolygonSet, PolygonSetBuilder};
