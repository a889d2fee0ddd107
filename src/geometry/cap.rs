use crate::geometry::spherical_vector::SphericalVector;

/// A single spherical-cap constraint.
///
/// # Fields
///
/// * `center` - The direction of the cap axis
/// * `m` - Signed threshold on `1 − cos θ`. A non-negative value keeps the points closer
///   to `center` than the threshold (a small cap); a negative value keeps the points
///   farther away than `|m|` (the complement of a small cap).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cap {
    center: SphericalVector,
    m: f64,
}

impl Cap {
    pub fn new(center: SphericalVector, m: f64) -> Self {
        Cap { center, m }
    }

    pub fn center(&self) -> &SphericalVector {
        &self.center
    }

    pub fn m(&self) -> f64 {
        self.m
    }

    /// `true` if the cap is the complement of a small cap (`m < 0`).
    pub fn is_exclusion(&self) -> bool {
        self.m < 0.0
    }

    /// Test whether `point` lies in this cap.
    ///
    /// `cd = 1 − center·point` equals `2 sin²(θ/2)` for the angular separation `θ`, a
    /// monotonic function of the distance that avoids any trigonometry. Boundary points
    /// (`cd` equal to the threshold) are outside on both branches.
    #[inline]
    pub fn contains(&self, point: &SphericalVector) -> bool {
        let cd = 1.0 - self.center.dot(point);
        if self.m < 0.0 {
            cd > self.m.abs()
        } else {
            cd < self.m
        }
    }
}
