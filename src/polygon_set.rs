//! # Polygon collections and point lookup
//!
//! A [`PolygonSet`] owns every polygon of a mask, in file order, and answers the
//! point queries of the crate:
//!
//! - [`PolygonSet::find_index`] – index of the **first** polygon containing a point,
//! - [`PolygonSet::find_polyid`] – the file identifier of that polygon,
//! - index accessors (`polyid_from_index`, `weight_from_index`, `area_from_index`,
//!   `polygon_from_index`) that fail with [`MaskError::InvalidIndex`] out of range.
//!
//! ## First match
//! -----------------
//! The lookup is a linear scan that stops at the first polygon containing the point.
//! When a mask has overlapping polygons, the earlier one in the file wins; overlap
//! resolution is therefore controlled by the file ordering.
//!
//! ## Immutability
//! -----------------
//! A set is assembled once through [`PolygonSetBuilder`] (used by the mask reader, or
//! directly for programmatic masks) and exposes no mutation afterwards, so a shared
//! `&PolygonSet` can be queried from several threads without locking.

use std::slice::Iter;

use crate::{
    constants::{Degree, PolyId, Steradian},
    geometry::{polygon::Polygon, spherical_vector::SphericalVector},
    mask_errors::MaskError,
};

/// Upper bound on the storage a builder reserves up front from its declared count.
const MAX_PREALLOCATED_POLYGONS: usize = 1 << 16;

/// An immutable, ordered collection of mask polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonSet {
    source_name: String,
    polygons: Vec<Polygon>,
}

impl PolygonSet {
    /// Name of the source the set was read from (file path or caller-provided label).
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn iter(&self) -> Iter<'_, Polygon> {
        self.polygons.iter()
    }

    /// Index of the first polygon, in file order, that contains `point`.
    ///
    /// Arguments
    /// -----------------
    /// * `point`: the query direction.
    ///
    /// Return
    /// ----------
    /// * `Some(index)` for the lowest index whose polygon contains the point, `None` if no
    ///   polygon does. The scan stops at the first match.
    pub fn find_index(&self, point: &SphericalVector) -> Option<usize> {
        self.polygons.iter().position(|p| p.contains(point))
    }

    /// [`find_index`](PolygonSet::find_index) for a position given as RA/Dec in degrees.
    pub fn find_index_radec(&self, ra: Degree, dec: Degree) -> Option<usize> {
        self.find_index(&SphericalVector::from_radec_degrees(ra, dec))
    }

    /// Identifier of the first polygon containing `point`, `None` if there is none.
    pub fn find_polyid(&self, point: &SphericalVector) -> Option<PolyId> {
        self.find_index(point).map(|index| self.polygons[index].polyid())
    }

    /// [`find_polyid`](PolygonSet::find_polyid) for a position given as RA/Dec in degrees.
    pub fn find_polyid_radec(&self, ra: Degree, dec: Degree) -> Option<PolyId> {
        self.find_polyid(&SphericalVector::from_radec_degrees(ra, dec))
    }

    /// Weight of the first polygon containing `point`, or `0.0` outside the mask.
    pub fn weight_at(&self, point: &SphericalVector) -> f64 {
        self.find_index(point)
            .map(|index| self.polygons[index].weight())
            .unwrap_or(0.0)
    }

    /// Polygon stored at `index`.
    ///
    /// Return
    /// ----------
    /// * The polygon, or [`MaskError::InvalidIndex`] if `index >= len()`.
    pub fn polygon_from_index(&self, index: usize) -> Result<&Polygon, MaskError> {
        self.polygons.get(index).ok_or(MaskError::InvalidIndex {
            index,
            len: self.polygons.len(),
        })
    }

    pub fn polyid_from_index(&self, index: usize) -> Result<PolyId, MaskError> {
        Ok(self.polygon_from_index(index)?.polyid())
    }

    pub fn weight_from_index(&self, index: usize) -> Result<f64, MaskError> {
        Ok(self.polygon_from_index(index)?.weight())
    }

    pub fn area_from_index(&self, index: usize) -> Result<Steradian, MaskError> {
        Ok(self.polygon_from_index(index)?.area())
    }
}

impl<'a> IntoIterator for &'a PolygonSet {
    type Item = &'a Polygon;
    type IntoIter = Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}

/// Pre-sized assembly of a [`PolygonSet`].
///
/// The builder is created with the number of polygons the set must end up with and
/// refuses to produce a set of any other length.
///
/// ```
/// use skymask::geometry::{Cap, Polygon, SphericalVector};
/// use skymask::polygon_set::PolygonSetBuilder;
///
/// let pole = SphericalVector::from_radec_degrees(0.0, 90.0);
/// let mut builder = PolygonSetBuilder::new("north cap", 1);
/// builder
///     .push(Polygon::new(7, 0, [Cap::new(pole, 0.5)], 1.0, 1.05).unwrap())
///     .unwrap();
/// let mask = builder.build().unwrap();
/// assert_eq!(mask.find_polyid(&pole), Some(7));
/// ```
#[derive(Debug, Clone)]
pub struct PolygonSetBuilder {
    source_name: String,
    declared: usize,
    polygons: Vec<Polygon>,
}

impl PolygonSetBuilder {
    /// Arguments
    /// -----------------
    /// * `source_name`: label used in diagnostics (usually the mask file path).
    /// * `declared`: exact number of polygons the finished set must hold.
    pub fn new(source_name: impl Into<String>, declared: usize) -> Self {
        PolygonSetBuilder {
            source_name: source_name.into(),
            declared,
            polygons: Vec::with_capacity(declared.min(MAX_PREALLOCATED_POLYGONS)),
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn declared(&self) -> usize {
        self.declared
    }

    /// Number of polygons pushed so far.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// `true` once `declared` polygons have been pushed.
    pub fn is_full(&self) -> bool {
        self.polygons.len() >= self.declared
    }

    /// Append a polygon.
    ///
    /// Return
    /// ----------
    /// * [`MaskError::TooManyPolygons`] if the builder already holds `declared` polygons.
    ///   The line number of that error is `0`: a programmatic push has no source line.
    pub fn push(&mut self, polygon: Polygon) -> Result<(), MaskError> {
        if self.is_full() {
            return Err(MaskError::TooManyPolygons {
                source_name: self.source_name.clone(),
                line_number: 0,
                declared: self.declared,
            });
        }
        self.polygons.push(polygon);
        Ok(())
    }

    /// Finish the set.
    ///
    /// Return
    /// ----------
    /// * The immutable [`PolygonSet`], or [`MaskError::TooFewPolygons`] if fewer than
    ///   `declared` polygons were pushed.
    pub fn build(self) -> Result<PolygonSet, MaskError> {
        if self.polygons.len() != self.declared {
            return Err(MaskError::TooFewPolygons {
                source_name: self.source_name,
                declared: self.declared,
                read: self.polygons.len(),
            });
        }
        Ok(PolygonSet {
            source_name: self.source_name,
            polygons: self.polygons,
        })
    }
}
