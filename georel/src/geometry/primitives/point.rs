use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::context::{CoordSystem, SpatialContext};
use crate::geometry::geo_enums::SpatialRelation;
use crate::geometry::geo_traits::{Relate, Shape};
use crate::geometry::primitives::Rect;

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    /// Degenerate rectangle covering only `self`.
    /// Fails if either coordinate is NaN.
    pub fn bbox(&self, coords: CoordSystem) -> Result<Rect> {
        Rect::try_new(self.0, self.0, self.1, self.1, coords)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl Relate<Point> for Point {
    /// Two points only share their interior when they coincide.
    fn relate(&self, other: &Point) -> SpatialRelation {
        match self == other {
            true => SpatialRelation::Intersects,
            false => SpatialRelation::Disjoint,
        }
    }
}

impl Relate<Rect> for Point {
    fn relate(&self, rect: &Rect) -> SpatialRelation {
        rect.relate(self).transpose()
    }
}

impl Shape for Point {
    fn center(&self) -> Point {
        *self
    }

    fn area(&self, _ctx: Option<&SpatialContext>) -> f64 {
        0.0
    }

    fn has_area(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_zero_points_coincide() {
        let a = Point(0.0, 0.0);
        let b = Point(-0.0, 0.0);
        assert_eq!(a, b);
        assert_eq!(a.relate(&b), SpatialRelation::Intersects);
    }

    #[test]
    fn nan_point_does_not_coincide_with_itself() {
        let p = Point(f64::NAN, 0.0);
        let copy = p;
        assert_ne!(p, copy);
        assert_eq!(p.relate(&copy), SpatialRelation::Disjoint);
    }
}
