//! # Constants and type definitions for skymask
//!
//! This module centralizes the **unit conversions** and the **common type aliases** used
//! throughout the crate.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians, steradians ↔ square degrees)
//! - Identifier aliases for polygons and sky pixels
//! - The inline container used to store the caps of a polygon

use crate::geometry::cap::Cap;
use smallvec::SmallVec;

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Steradians → square degrees, `(180/π)²`
pub const STERADIAN_TO_SQDEG: f64 =
    (180.0 / std::f64::consts::PI) * (180.0 / std::f64::consts::PI);

/// Tolerance used when checking that a vector has unit length
pub const UNIT_NORM_EPS: f64 = 1e-12;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Solid angle in steradians
pub type Steradian = f64;

/// Polygon identifier as written in the mask file
pub type PolyId = i32;
/// Sky-pixel tag attached to each polygon (inert metadata)
pub type PixelId = i32;

// -------------------------------------------------------------------------------------------------
// Data containers
// -------------------------------------------------------------------------------------------------

/// A small, inline-optimized container for the caps of a single polygon.
///
/// Most survey polygons are bounded by a handful of caps, so these stay on the stack.
pub type Caps = SmallVec<[Cap; 6]>;
