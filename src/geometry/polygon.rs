use crate::{
    constants::{Caps, PixelId, PolyId, Steradian},
    geometry::{cap::Cap, spherical_vector::SphericalVector},
    mask_errors::MaskError,
};

/// A mask polygon: the intersection of one or more spherical caps.
///
/// # Fields
///
/// * `polyid` - Identifier assigned by the mask file (not necessarily contiguous or unique)
/// * `pixel` - Sky-pixel tag from the mask file, carried as metadata only
/// * `caps` - The caps, in file order; never empty
/// * `weight` - Weight used by masking and veto filters
/// * `area` - Solid angle in steradians, as written in the file (never recomputed)
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    polyid: PolyId,
    pixel: PixelId,
    caps: Caps,
    weight: f64,
    area: Steradian,
}

impl Polygon {
    /// Create a new polygon
    ///
    /// Arguments
    /// ---------
    /// * `polyid`: identifier of the polygon
    /// * `pixel`: sky-pixel tag
    /// * `caps`: the caps bounding the polygon, at least one
    /// * `weight`: the polygon weight
    /// * `area`: the polygon area in steradians
    ///
    /// Return
    /// ------
    /// * the polygon, or [`MaskError::EmptyPolygon`] if `caps` is empty
    pub fn new(
        polyid: PolyId,
        pixel: PixelId,
        caps: impl IntoIterator<Item = Cap>,
        weight: f64,
        area: Steradian,
    ) -> Result<Self, MaskError> {
        let caps: Caps = caps.into_iter().collect();
        if caps.is_empty() {
            return Err(MaskError::EmptyPolygon(polyid));
        }
        Ok(Polygon {
            polyid,
            pixel,
            caps,
            weight,
            area,
        })
    }

    pub fn polyid(&self) -> PolyId {
        self.polyid
    }

    pub fn pixel(&self) -> PixelId {
        self.pixel
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn area(&self) -> Steradian {
        self.area
    }

    pub fn caps(&self) -> &[Cap] {
        &self.caps
    }

    pub fn ncap(&self) -> usize {
        self.caps.len()
    }

    /// `true` if `point` lies in every cap of the polygon.
    ///
    /// Caps are tested in stored order and the scan stops at the first cap that rejects
    /// the point.
    #[inline]
    pub fn contains(&self, point: &SphericalVector) -> bool {
        self.caps.iter().all(|cap| cap.contains(point))
    }
}

#[cfg(test)]
mod polygon_test {
    use super::*;

    fn cap_radec(ra: f64, dec: f64, m: f64) -> Cap {
        Cap::new(SphericalVector::from_radec_degrees(ra, dec), m)
    }

    #[test]
    fn test_empty_polygon_rejected() {
        let p = Polygon::new(12, 0, Vec::<Cap>::new(), 1.0, 0.1);
        assert_eq!(p, Err(MaskError::EmptyPolygon(12)));
    }

    #[test]
    fn test_band_polygon() {
        // Everything north of dec −30° minus everything north of dec 60°: a band.
        let ring = Polygon::new(
            1,
            0,
            [cap_radec(0.0, 90.0, 1.5), cap_radec(0.0, 90.0, -0.134)],
            1.0,
            2.0,
        )
        .unwrap();
        assert_eq!(ring.ncap(), 2);
        assert!(ring.contains(&SphericalVector::from_radec_degrees(45.0, 30.0)));
        assert!(!ring.contains(&SphericalVector::from_radec_degrees(45.0, 80.0)));
        assert!(!ring.contains(&SphericalVector::from_radec_degrees(45.0, -60.0)));
    }

    #[test]
    fn test_first_failing_cap_decides() {
        let point = SphericalVector::from_radec_degrees(0.0, 90.0);
        // The first cap is a zero-size cap that excludes every point; whatever follows,
        // including caps that would accept the point, cannot change the result.
        let excluding = cap_radec(0.0, 90.0, 0.0);
        let accepting = cap_radec(0.0, 90.0, 2.0);
        let p = Polygon::new(3, 0, [excluding, accepting, accepting], 1.0, 0.0).unwrap();
        assert!(!excluding.contains(&point));
        assert!(accepting.contains(&point));
        assert!(!p.contains(&point));

        let q = Polygon::new(4, 0, [accepting, accepting], 1.0, 0.0).unwrap();
        assert!(q.contains(&point));
    }
}
