use std::fmt::{Display, Formatter};

use anyhow::{Result, ensure};

use crate::context::{CoordSystem, SpatialContext};
use crate::geometry::error::GeometryError;
use crate::geometry::geo_enums::SpatialRelation;
use crate::geometry::geo_traits::{Relate, Shape};
use crate::geometry::interval::{LON_PERIOD, relate_lon_range, relate_range, unwrap_lon_range};
use crate::geometry::primitives::Point;
use crate::util::{assertions, normalize_lon_deg};

/// Axis-aligned rectangle.
///
/// In a [`CoordSystem::Geodetic`] system, `x_min > x_max` is valid and describes
/// a rectangle that crosses the antimeridian. `y_min <= y_max` always holds.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    coords: CoordSystem,
}

impl Rect {
    pub fn try_new(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        coords: CoordSystem,
    ) -> Result<Self> {
        validate_bounds(x_min, x_max, y_min, y_max)?;
        let rect = Rect {
            x_min,
            x_max,
            y_min,
            y_max,
            coords,
        };
        debug_assert!(assertions::rect_is_consistent(&rect), "{rect}");
        Ok(rect)
    }

    /// Builds a rectangle from bounds known to be valid.
    pub(crate) fn new_unchecked(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        coords: CoordSystem,
    ) -> Self {
        let rect = Rect {
            x_min,
            x_max,
            y_min,
            y_max,
            coords,
        };
        debug_assert!(validate_bounds(x_min, x_max, y_min, y_max).is_ok(), "{rect}");
        debug_assert!(assertions::rect_is_consistent(&rect), "{rect}");
        rect
    }

    pub fn from_corners(
        lower_left: Point,
        upper_right: Point,
        coords: CoordSystem,
    ) -> Result<Self> {
        Rect::try_new(
            lower_left.x(),
            upper_right.x(),
            lower_left.y(),
            upper_right.y(),
            coords,
        )
    }

    /// Returns a copy of `self` interpreted in another [`CoordSystem`].
    pub fn with_coords(self, coords: CoordSystem) -> Self {
        Rect { coords, ..self }
    }

    /// Replaces all four bounds of `self`.
    /// The bounds are validated first, on failure `self` is left unchanged.
    pub fn reset(&mut self, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<()> {
        validate_bounds(x_min, x_max, y_min, y_max)?;
        self.x_min = x_min;
        self.x_max = x_max;
        self.y_min = y_min;
        self.y_max = y_max;
        debug_assert!(assertions::rect_is_consistent(self), "{self}");
        Ok(())
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn coords(&self) -> CoordSystem {
        self.coords
    }

    /// Width of the rectangle, accounting for antimeridian crossing. Never negative.
    pub fn width(&self) -> f64 {
        let w = self.x_max - self.x_min;
        match w < 0.0 {
            //only when x_min > x_max, degrees assumed
            true => w + LON_PERIOD,
            false => w,
        }
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn crosses_dateline(&self) -> bool {
        self.x_min > self.x_max
    }

    pub fn bbox(&self) -> Rect {
        *self
    }

    /// Relation of `self`'s X-range to `[ext_x_min, ext_x_max]`.
    /// Longitudes wrap around in a geodetic system.
    pub fn relate_x_range(&self, ext_x_min: f64, ext_x_max: f64) -> SpatialRelation {
        match self.coords.is_geo() {
            true => relate_lon_range(self.x_min, self.x_max, ext_x_min, ext_x_max),
            false => relate_range(self.x_min, self.x_max, ext_x_min, ext_x_max),
        }
    }

    /// Relation of `self`'s Y-range to `[ext_y_min, ext_y_max]`
    pub fn relate_y_range(&self, ext_y_min: f64, ext_y_max: f64) -> SpatialRelation {
        relate_range(self.y_min, self.y_max, ext_y_min, ext_y_max)
    }
}

fn validate_bounds(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<()> {
    ensure!(
        ![x_min, x_max, y_min, y_max].iter().any(|v| v.is_nan()),
        GeometryError::NanCoordinate {
            x_min,
            x_max,
            y_min,
            y_max
        }
    );
    ensure!(y_min <= y_max, GeometryError::InvalidYRange { y_min, y_max });
    Ok(())
}

impl Relate<Point> for Rect {
    /// Points on the boundary are contained.
    fn relate(&self, point: &Point) -> SpatialRelation {
        let Point(mut p_x, p_y) = *point;
        if p_y > self.y_max || p_y < self.y_min {
            return SpatialRelation::Disjoint;
        }
        let (x_min, x_max) = match self.coords.is_geo() {
            true => {
                let (x_min, x_max) = unwrap_lon_range(self.x_min, self.x_max);
                //shift the point into the unwrapped range
                if p_x < x_min {
                    p_x += LON_PERIOD;
                } else if p_x > x_max {
                    p_x -= LON_PERIOD;
                } else {
                    return SpatialRelation::Contains;
                }
                (x_min, x_max)
            }
            false => (self.x_min, self.x_max),
        };
        match p_x < x_min || p_x > x_max {
            true => SpatialRelation::Disjoint,
            false => SpatialRelation::Contains,
        }
    }
}

impl Relate<Rect> for Rect {
    /// Combines the independent relations of the X- and Y-ranges.
    /// When the axes disagree, an axis whose ranges are identical defers to the other axis.
    fn relate(&self, other: &Rect) -> SpatialRelation {
        let y_rel = self.relate_y_range(other.y_min, other.y_max);
        if y_rel == SpatialRelation::Disjoint {
            return SpatialRelation::Disjoint;
        }

        let x_rel = self.relate_x_range(other.x_min, other.x_max);
        if x_rel == SpatialRelation::Disjoint {
            return SpatialRelation::Disjoint;
        }

        if x_rel == y_rel {
            return x_rel;
        }

        if self.x_min == other.x_min && self.x_max == other.x_max {
            return y_rel;
        }
        if self.y_min == other.y_min && self.y_max == other.y_max {
            return x_rel;
        }

        SpatialRelation::Intersects
    }
}

impl Shape for Rect {
    fn center(&self) -> Point {
        let y = self.height() / 2.0 + self.y_min;
        let x = match self.crosses_dateline() {
            //may fall outside the standard range
            true => normalize_lon_deg(self.width() / 2.0 + self.x_min),
            false => self.width() / 2.0 + self.x_min,
        };
        Point(x, y)
    }

    fn area(&self, ctx: Option<&SpatialContext>) -> f64 {
        match ctx {
            None => self.width() * self.height(),
            Some(ctx) => ctx.calculator().area(self),
        }
    }

    fn has_area(&self) -> bool {
        self.x_max != self.x_min && self.y_max != self.y_min
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect(minX={:?},maxX={:?},minY={:?},maxY={:?})",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_replaces_bounds() {
        let mut rect = Rect::try_new(0.0, 10.0, 0.0, 10.0, CoordSystem::Cartesian).unwrap();
        rect.reset(-5.0, 5.0, 1.0, 2.0).unwrap();
        assert_eq!(
            (rect.x_min(), rect.x_max(), rect.y_min(), rect.y_max()),
            (-5.0, 5.0, 1.0, 2.0)
        );
    }

    #[test]
    fn failed_reset_leaves_rect_untouched() {
        let mut rect = Rect::try_new(0.0, 10.0, 0.0, 10.0, CoordSystem::Cartesian).unwrap();
        let before = rect;
        let err = rect.reset(-5.0, 5.0, 3.0, 2.0).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GeometryError>(),
            Some(&GeometryError::InvalidYRange {
                y_min: 3.0,
                y_max: 2.0
            })
        );
        assert_eq!(rect, before);
    }

    #[test]
    fn reset_into_dateline_crossing_bounds() {
        let mut rect = Rect::try_new(0.0, 10.0, 0.0, 10.0, CoordSystem::Geodetic).unwrap();
        rect.reset(170.0, -170.0, -10.0, 10.0).unwrap();
        assert!(rect.crosses_dateline());
        assert_eq!(rect.width(), 20.0);
        assert!(assertions::rect_is_consistent(&rect));
    }

    #[test]
    fn nan_bounds_are_rejected() {
        let err = Rect::try_new(f64::NAN, 10.0, 0.0, 10.0, CoordSystem::Geodetic).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GeometryError>(),
            Some(GeometryError::NanCoordinate { .. })
        ));
    }

    #[test]
    fn infinite_bounds_are_accepted() {
        let rect = Rect::try_new(
            f64::NEG_INFINITY,
            f64::INFINITY,
            0.0,
            1.0,
            CoordSystem::Cartesian,
        )
        .unwrap();
        assert_eq!(rect.relate(&Point(1e300, 0.5)), SpatialRelation::Contains);
    }

    #[test]
    fn display() {
        let rect = Rect::try_new(170.0, -170.0, -10.5, 10.0, CoordSystem::Geodetic).unwrap();
        assert_eq!(
            rect.to_string(),
            "Rect(minX=170.0,maxX=-170.0,minY=-10.5,maxY=10.0)"
        );
    }

    #[test]
    fn center_of_dateline_crossing_rect_is_normalized() {
        let rect = Rect::try_new(170.0, -150.0, -10.0, 10.0, CoordSystem::Geodetic).unwrap();
        assert_eq!(rect.center(), Point(-170.0, 0.0));
    }
}
