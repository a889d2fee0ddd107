//! # Area and weight reductions over a mask
//!
//! Linear, order-independent reductions over the polygons of a mask:
//!
//! - [`MaskAreaExt::total_area`] – `Σ area` over polygons with `weight ≥ min_weight`,
//! - [`MaskAreaExt::weighted_total_area`] – `Σ area × weight` under the same filter,
//! - [`MaskAreaExt::summary`] – a [`MaskSummary`] (counts, weight range, area) used by
//!   `skymask info`.
//!
//! The trait is implemented for [`PolygonSet`] and for any `[Polygon]` slice, so the
//! same reductions apply to a loaded mask and to a caller-assembled selection.
//!
//! Areas are the ones written in the mask file (steradians); nothing is recomputed
//! from the caps.

use std::fmt;

use itertools::{Itertools, MinMaxResult};

use crate::{
    constants::Steradian, conversion::steradians_to_square_degrees, geometry::polygon::Polygon,
    polygon_set::PolygonSet,
};

/// Aggregate statistics of a mask, as returned by [`MaskAreaExt::summary`].
///
/// Fields
/// -----------------
/// * `polygons` – number of polygons.
/// * `caps` – total number of caps over all polygons.
/// * `min_weight`, `max_weight` – weight range (both `0.0` for an empty selection).
/// * `total_area` – unfiltered `Σ area`, in steradians.
/// * `weighted_area` – unfiltered `Σ area × weight`, in steradians.
///
/// Display
/// -----------------
/// * `format!("{}", summary)` – single line, e.g.
///   ```text
///   polygons=2, caps=3, weight=[0.25, 1], area=2.25 sr
///   ```
/// * `format!("{:#}", summary)` – multi-line table with the areas also in square degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskSummary {
    pub polygons: usize,
    pub caps: usize,
    pub min_weight: f64,
    pub max_weight: f64,
    pub total_area: Steradian,
    pub weighted_area: Steradian,
}

impl fmt::Display for MaskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Mask summary")?;
            writeln!(f, "------------")?;
            writeln!(f, "polygons      : {}", self.polygons)?;
            writeln!(f, "caps          : {}", self.caps)?;
            writeln!(
                f,
                "weight range  : [{}, {}]",
                self.min_weight, self.max_weight
            )?;
            writeln!(
                f,
                "total area    : {:.10} sr = {:.6} deg^2",
                self.total_area,
                steradians_to_square_degrees(self.total_area)
            )?;
            write!(
                f,
                "weighted area : {:.10} sr = {:.6} deg^2",
                self.weighted_area,
                steradians_to_square_degrees(self.weighted_area)
            )
        } else {
            write!(
                f,
                "polygons={}, caps={}, weight=[{}, {}], area={} sr",
                self.polygons, self.caps, self.min_weight, self.max_weight, self.total_area
            )
        }
    }
}

/// Area reductions over a collection of polygons.
pub trait MaskAreaExt {
    /// Polygons the reductions run over.
    fn area_polygons(&self) -> &[Polygon];

    /// Sum of `area` over every polygon whose weight is at least `min_weight`.
    ///
    /// Arguments
    /// -----------------
    /// * `min_weight`: inclusive weight threshold (`0.0` keeps every non-negative weight).
    ///
    /// Return
    /// ----------
    /// * The summed solid angle, in steradians. `0.0` if nothing passes the filter.
    ///
    /// See also
    /// ------------
    /// * [`MaskAreaExt::weighted_total_area`] – Same filter, area scaled by weight.
    fn total_area(&self, min_weight: f64) -> Steradian {
        self.area_polygons()
            .iter()
            .filter(|p| p.weight() >= min_weight)
            .map(Polygon::area)
            .sum()
    }

    /// Sum of `area × weight` over every polygon whose weight is at least `min_weight`.
    fn weighted_total_area(&self, min_weight: f64) -> Steradian {
        self.area_polygons()
            .iter()
            .filter(|p| p.weight() >= min_weight)
            .map(|p| p.area() * p.weight())
            .sum()
    }

    /// Counts, weight range and unfiltered areas of the collection.
    fn summary(&self) -> MaskSummary {
        let polygons = self.area_polygons();
        let (min_weight, max_weight) = match polygons
            .iter()
            .map(Polygon::weight)
            .minmax_by(f64::total_cmp)
        {
            MinMaxResult::NoElements => (0.0, 0.0),
            MinMaxResult::OneElement(w) => (w, w),
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
        };

        MaskSummary {
            polygons: polygons.len(),
            caps: polygons.iter().map(Polygon::ncap).sum(),
            min_weight,
            max_weight,
            total_area: polygons.iter().map(Polygon::area).sum(),
            weighted_area: polygons.iter().map(|p| p.area() * p.weight()).sum(),
        }
    }
}

impl MaskAreaExt for PolygonSet {
    fn area_polygons(&self) -> &[Polygon] {
        self.polygons()
    }
}

impl MaskAreaExt for [Polygon] {
    fn area_polygons(&self) -> &[Polygon] {
        self
    }
}
