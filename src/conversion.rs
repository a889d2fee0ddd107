use crate::{
    constants::{Degree, Steradian, STERADIAN_TO_SQDEG},
    geometry::spherical_vector::SphericalVector,
};

/// Convert an equatorial position to a unit vector.
///
/// Arguments
/// ---------
/// * `ra`: right ascension in degrees
/// * `dec`: declination in degrees
///
/// Returns
/// -------
/// * `SphericalVector`: the direction with azimuth `ra` and polar angle `90° − dec`
///
/// See also
/// ------------
/// * [`SphericalVector::from_radec_degrees`] – Same conversion, as a constructor.
pub fn vector_from_radec_degrees(ra: Degree, dec: Degree) -> SphericalVector {
    SphericalVector::from_radec_degrees(ra, dec)
}

/// Solid angle in steradians → square degrees.
pub fn steradians_to_square_degrees(area: Steradian) -> f64 {
    area * STERADIAN_TO_SQDEG
}

/// Solid angle in square degrees → steradians.
pub fn square_degrees_to_steradians(area: f64) -> Steradian {
    area / STERADIAN_TO_SQDEG
}
