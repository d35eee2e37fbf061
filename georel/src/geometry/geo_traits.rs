use crate::context::SpatialContext;
use crate::geometry::geo_enums::SpatialRelation;
use crate::geometry::primitives::Point;

/// Trait for types that can determine their [`SpatialRelation`] to `T`.
///
/// Implementations must be consistent with their counterpart:
/// `a.relate(&b) == b.relate(&a).transpose()`.
pub trait Relate<T> {
    fn relate(&self, other: &T) -> SpatialRelation;
}

/// Trait for shared properties of geometric primitives.
pub trait Shape {
    /// Geometric center of the shape
    fn center(&self) -> Point;

    /// Area of the interior of the shape.
    /// Planar if no `ctx` is given, otherwise computed by the context's [`AreaCalculator`](crate::context::AreaCalculator).
    fn area(&self, ctx: Option<&SpatialContext>) -> f64;

    /// Whether the shape has a non-degenerate interior
    fn has_area(&self) -> bool;
}
