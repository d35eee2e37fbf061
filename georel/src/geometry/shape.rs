use anyhow::Result;

use crate::context::{CoordSystem, SpatialContext};
use crate::geometry::geo_enums::SpatialRelation;
use crate::geometry::geo_traits::{Relate, Shape};
use crate::geometry::primitives::{Point, Rect};

/// Closed set of all supported shape kinds.
///
/// Every kind relates to every other kind. Pairs without a specialized implementation
/// ask the other shape and transpose its answer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnyShape {
    Point(Point),
    Rect(Rect),
}

impl AnyShape {
    /// Bounding rectangle of the shape, interpreted in `coords`
    pub fn bbox(&self, coords: CoordSystem) -> Result<Rect> {
        match self {
            AnyShape::Point(p) => p.bbox(coords),
            AnyShape::Rect(r) => Ok(r.bbox().with_coords(coords)),
        }
    }
}

impl From<Point> for AnyShape {
    fn from(p: Point) -> Self {
        AnyShape::Point(p)
    }
}

impl From<Rect> for AnyShape {
    fn from(r: Rect) -> Self {
        AnyShape::Rect(r)
    }
}

impl Relate<AnyShape> for Rect {
    fn relate(&self, other: &AnyShape) -> SpatialRelation {
        match other {
            AnyShape::Point(p) => self.relate(p),
            AnyShape::Rect(r) => self.relate(r),
        }
    }
}

impl Relate<AnyShape> for Point {
    fn relate(&self, other: &AnyShape) -> SpatialRelation {
        match other {
            AnyShape::Point(p) => self.relate(p),
            //no specialized logic: let the other shape decide
            other => other.relate(self).transpose(),
        }
    }
}

impl Relate<Point> for AnyShape {
    fn relate(&self, other: &Point) -> SpatialRelation {
        match self {
            AnyShape::Point(p) => p.relate(other),
            AnyShape::Rect(r) => r.relate(other),
        }
    }
}

impl Relate<Rect> for AnyShape {
    fn relate(&self, other: &Rect) -> SpatialRelation {
        match self {
            AnyShape::Point(p) => p.relate(other),
            AnyShape::Rect(r) => r.relate(other),
        }
    }
}

impl Relate<AnyShape> for AnyShape {
    fn relate(&self, other: &AnyShape) -> SpatialRelation {
        match self {
            AnyShape::Point(p) => p.relate(other),
            AnyShape::Rect(r) => r.relate(other),
        }
    }
}

impl Shape for AnyShape {
    fn center(&self) -> Point {
        match self {
            AnyShape::Point(p) => p.center(),
            AnyShape::Rect(r) => r.center(),
        }
    }

    fn area(&self, ctx: Option<&SpatialContext>) -> f64 {
        match self {
            AnyShape::Point(p) => p.area(ctx),
            AnyShape::Rect(r) => r.area(ctx),
        }
    }

    fn has_area(&self) -> bool {
        match self {
            AnyShape::Point(p) => p.has_area(),
            AnyShape::Rect(r) => r.has_area(),
        }
    }
}
