//! # Weight-based point trimming
//!
//! Decide whether a sky position survives a mask, using the weight of the first polygon
//! that contains it.
//!
//! | [`TrimMode`]       | weight outside the mask | kept when                 |
//! |--------------------|-------------------------|---------------------------|
//! | `ByMask` (default) | `0.0`                   | `weight ≥ min_weight`     |
//! | `ToMask`           | point dropped           | `weight ≥ min_weight`     |
//! | `ByMaskReversed`   | `0.0`                   | `weight < min_weight`     |
//!
//! `ByMaskReversed` turns a mask into a veto: every point landing in a polygon of weight
//! at least `min_weight` is rejected, everything else goes through.

use std::fmt;

use crate::{geometry::spherical_vector::SphericalVector, polygon_set::PolygonSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrimMode {
    /// Keep points whose weight, `0.0` outside the mask, is at least the threshold.
    #[default]
    ByMask,
    /// Keep points inside a polygon of sufficient weight.
    ToMask,
    /// Inverse of [`TrimMode::ByMask`].
    ByMaskReversed,
}

/// A weight threshold and the rule applying it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrimFilter {
    pub min_weight: f64,
    pub mode: TrimMode,
}

impl TrimFilter {
    pub fn new(min_weight: f64, mode: TrimMode) -> Self {
        TrimFilter { min_weight, mode }
    }

    /// Whether `point` survives this filter against `mask`.
    ///
    /// Arguments
    /// -----------------
    /// * `mask`: the polygons; the first one containing `point` provides its weight.
    /// * `point`: the sky position.
    ///
    /// Return
    /// ----------
    /// * `true` if the point is kept under [`TrimFilter::mode`].
    pub fn keeps(&self, mask: &PolygonSet, point: &SphericalVector) -> bool {
        match self.mode {
            TrimMode::ToMask => mask
                .find_index(point)
                .is_some_and(|index| mask.polygons()[index].weight() >= self.min_weight),
            TrimMode::ByMask => mask.weight_at(point) >= self.min_weight,
            TrimMode::ByMaskReversed => mask.weight_at(point) < self.min_weight,
        }
    }
}

impl fmt::Display for TrimFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            TrimMode::ToMask => {
                write!(f, "keeping polygons of weight >= {}", self.min_weight)
            }
            TrimMode::ByMask => write!(f, "keeping weight >= {}", self.min_weight),
            TrimMode::ByMaskReversed => {
                write!(f, "vetoing weight >= {} (reversed)", self.min_weight)
            }
        }
    }
}

/// Running counts of a trimming pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrimStats {
    /// Points successfully read.
    pub read: usize,
    /// Points that passed the filter.
    pub kept: usize,
}

impl TrimStats {
    /// Count one point and return whether it was kept.
    pub fn record(&mut self, kept: bool) -> bool {
        self.read += 1;
        if kept {
            self.kept += 1;
        }
        kept
    }
}

impl fmt::Display for TrimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.read, self.kept)
    }
}
