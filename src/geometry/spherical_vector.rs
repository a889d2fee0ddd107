//! # Unit vectors on the celestial sphere
//!
//! [`SphericalVector`] is the query type of every containment test. It is a thin `Copy`
//! wrapper over a [`nalgebra::Vector3`]. The public constructors always give unit length:
//!
//! - [`SphericalVector::from_radec_degrees`] converts equatorial coordinates (degrees),
//! - [`SphericalVector::new`] normalizes arbitrary Cartesian components and rejects
//!   zero-length or non-finite input.
//!
//! Cap centers read from a mask file are the exception: they are taken as written, with
//! no normalization.
//!
//! Containment only depends on the direction of the query point, so normalizing at
//! construction makes `contains` invariant under positive scaling of the input.

use nalgebra::Vector3;

use crate::{
    constants::{Degree, Radian, RADEG, UNIT_NORM_EPS},
    mask_errors::MaskError,
};

/// A direction on the sphere; unit length except for cap centers read from a mask file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalVector(Vector3<f64>);

impl SphericalVector {
    /// Build a direction from Cartesian components, normalizing them to unit length.
    ///
    /// Arguments
    /// -----------------
    /// * `x`, `y`, `z`: Cartesian components, any positive scale.
    ///
    /// Return
    /// ----------
    /// * The normalized vector, or [`MaskError::DegenerateVector`] if the input has zero
    ///   length or a non-finite component.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, MaskError> {
        let v = Vector3::new(x, y, z);
        let norm = v.norm();
        if !norm.is_finite() || norm == 0.0 {
            return Err(MaskError::DegenerateVector(x, y, z));
        }
        if (norm - 1.0).abs() <= UNIT_NORM_EPS {
            return Ok(SphericalVector(v));
        }
        Ok(SphericalVector(v / norm))
    }

    /// Wrap components that are already known to be a unit vector (or are taken as
    /// written, like the cap centers of a mask file).
    pub(crate) fn from_components_unchecked(x: [f64; 3]) -> Self {
        SphericalVector(Vector3::new(x[0], x[1], x[2]))
    }

    /// Build a direction from an azimuth and a polar angle, both in radians.
    ///
    /// Arguments
    /// -----------------
    /// * `az`: azimuthal angle, measured from the x axis towards the y axis.
    /// * `el`: polar angle, measured from the +z axis.
    pub fn from_polar(az: Radian, el: Radian) -> Self {
        let (sin_el, cos_el) = el.sin_cos();
        let (sin_az, cos_az) = az.sin_cos();
        SphericalVector(Vector3::new(sin_el * cos_az, sin_el * sin_az, cos_el))
    }

    /// Build a direction from right ascension and declination in degrees.
    ///
    /// Arguments
    /// -----------------
    /// * `ra`: right ascension in degrees.
    /// * `dec`: declination in degrees (+90 is the north celestial pole).
    ///
    /// Return
    /// ----------
    /// * The unit vector `(sin(el)cos(az), sin(el)sin(az), cos(el))` with `az = ra` and
    ///   `el = 90° − dec`, both converted to radians.
    pub fn from_radec_degrees(ra: Degree, dec: Degree) -> Self {
        Self::from_polar(ra * RADEG, (90.0 - dec) * RADEG)
    }

    /// Right ascension and declination of this direction, in degrees.
    ///
    /// The right ascension is wrapped into `[0, 360)`.
    pub fn to_radec_degrees(&self) -> (Degree, Degree) {
        let v = &self.0;
        let dec = v.z.clamp(-1.0, 1.0).asin() / RADEG;
        let ra = v.y.atan2(v.x) / RADEG;
        (ra.rem_euclid(360.0), dec)
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    pub fn as_vector(&self) -> &Vector3<f64> {
        &self.0
    }

    /// Dot product, i.e. the cosine of the angular separation for unit vectors.
    pub fn dot(&self, other: &SphericalVector) -> f64 {
        self.0.dot(&other.0)
    }
}

impl From<SphericalVector> for Vector3<f64> {
    fn from(v: SphericalVector) -> Self {
        v.0
    }
}

impl TryFrom<Vector3<f64>> for SphericalVector {
    type Error = MaskError;

    fn try_from(v: Vector3<f64>) -> Result<Self, Self::Error> {
        SphericalVector::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod spherical_vector_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_radec_north_pole() {
        let v = SphericalVector::from_radec_degrees(0.0, 90.0);
        assert_abs_diff_eq!(v.x(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(v.y(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(v.z(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_radec_equator() {
        let v = SphericalVector::from_radec_degrees(0.0, 0.0);
        assert_abs_diff_eq!(v.x(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(v.y(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(v.z(), 0.0, epsilon = 1e-15);

        let v = SphericalVector::from_radec_degrees(90.0, 0.0);
        assert_abs_diff_eq!(v.x(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(v.y(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(v.z(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_radec_round_trip() {
        let v = SphericalVector::from_radec_degrees(213.5, -31.25);
        let (ra, dec) = v.to_radec_degrees();
        assert_abs_diff_eq!(ra, 213.5, epsilon = 1e-10);
        assert_abs_diff_eq!(dec, -31.25, epsilon = 1e-10);
    }

    #[test]
    fn test_new_normalizes() {
        let v = SphericalVector::new(0.0, 0.0, 42.0).unwrap();
        assert_eq!(v.z(), 1.0);

        let v = SphericalVector::new(3.0, 4.0, 0.0).unwrap();
        assert_abs_diff_eq!(v.x(), 0.6, epsilon = 1e-15);
        assert_abs_diff_eq!(v.y(), 0.8, epsilon = 1e-15);
        assert_abs_diff_eq!(v.as_vector().norm(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_new_rejects_degenerate() {
        assert_eq!(
            SphericalVector::new(0.0, 0.0, 0.0),
            Err(MaskError::DegenerateVector(0.0, 0.0, 0.0))
        );
        assert!(SphericalVector::new(f64::NAN, 1.0, 0.0).is_err());
        assert!(SphericalVector::new(f64::INFINITY, 1.0, 0.0).is_err());
    }
}
