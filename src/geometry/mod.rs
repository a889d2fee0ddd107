//! # Spherical geometry primitives
//!
//! The three building blocks of a sky mask, leaves first:
//!
//! - [`SphericalVector`](crate::geometry::spherical_vector::SphericalVector) – a unit
//!   direction, usually built from RA/Dec in degrees,
//! - [`Cap`](crate::geometry::cap::Cap) – a small cap or its complement,
//! - [`Polygon`](crate::geometry::polygon::Polygon) – an intersection of caps with its
//!   identity, weight and area.
//!
//! All three are immutable once built.

pub mod cap;
pub mod polygon;
pub mod spherical_vector;

pub use cap::Cap;
pub use polygon::Polygon;
pub use spherical_vector::SphericalVector;
