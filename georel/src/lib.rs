//! Spatial relations (disjoint, contains, within, intersects) between axis-aligned rectangles and points,
//! on a flat Cartesian plane or on a geodetic surface where longitude wraps at ±180°.

/// Spatial context: coordinate system flag and area calculators
pub mod context;

/// Geometric primitives and the relation algorithms between them
pub mod geometry;

/// Helper functions which do not belong to any specific module
pub mod util;
