use std::f64::consts::PI;
use std::fmt::Debug;

use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Point, Rect};

/// Interpretation of the X and Y coordinates of a shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordSystem {
    /// Unbounded Cartesian plane
    Cartesian,
    /// Longitude (X) and latitude (Y) in degrees, X wraps around at ±180°
    #[default]
    Geodetic,
}

impl CoordSystem {
    pub fn is_geo(self) -> bool {
        self == CoordSystem::Geodetic
    }
}

/// Trait for types that can compute the area of a [`Rect`].
pub trait AreaCalculator: Debug + Send + Sync {
    fn area(&self, rect: &Rect) -> f64;
}

/// Planar area: width times height
#[derive(Clone, Copy, Debug, Default)]
pub struct CartesianArea;

impl AreaCalculator for CartesianArea {
    fn area(&self, rect: &Rect) -> f64 {
        rect.width() * rect.height()
    }
}

/// Area of a longitude/latitude rectangle on a sphere, in square degrees.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeodesicSphereArea;

impl GeodesicSphereArea {
    /// Radius of the sphere, expressed in degrees (one radian)
    pub const RADIUS_DEG: f64 = 180.0 / PI;
}

impl AreaCalculator for GeodesicSphereArea {
    fn area(&self, rect: &Rect) -> f64 {
        //http://mathforum.org/library/drmath/view/63767.html
        let lat1 = rect.y_min().to_radians();
        let lat2 = rect.y_max().to_radians();
        PI / 180.0
            * Self::RADIUS_DEG
            * Self::RADIUS_DEG
            * (lat1.sin() - lat2.sin()).abs()
            * rect.width()
    }
}

/// Shared configuration for creating and measuring shapes:
/// the [`CoordSystem`] and the [`AreaCalculator`] to use.
#[derive(Debug)]
pub struct SpatialContext {
    coords: CoordSystem,
    calculator: Box<dyn AreaCalculator>,
}

impl SpatialContext {
    pub fn new(coords: CoordSystem, calculator: Box<dyn AreaCalculator>) -> Self {
        debug!("[CTX] new spatial context: {coords:?}, calculator: {calculator:?}");
        Self { coords, calculator }
    }

    /// Planar context with [`CartesianArea`]
    pub fn cartesian() -> Self {
        Self::new(CoordSystem::Cartesian, Box::new(CartesianArea))
    }

    /// Geodetic context with [`GeodesicSphereArea`]
    pub fn geo() -> Self {
        Self::new(CoordSystem::Geodetic, Box::new(GeodesicSphereArea))
    }

    pub fn coords(&self) -> CoordSystem {
        self.coords
    }

    pub fn is_geo(&self) -> bool {
        self.coords.is_geo()
    }

    pub fn calculator(&self) -> &dyn AreaCalculator {
        self.calculator.as_ref()
    }

    pub fn make_point(&self, x: f64, y: f64) -> Point {
        Point(x, y)
    }

    pub fn make_rect(&self, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Rect> {
        Rect::try_new(x_min, x_max, y_min, y_max, self.coords)
    }

    /// The rectangle covering every valid coordinate in this context
    pub fn world_bounds(&self) -> Rect {
        let (x_min, x_max, y_min, y_max) = match self.coords {
            CoordSystem::Geodetic => (-180.0, 180.0, -90.0, 90.0),
            CoordSystem::Cartesian => (f64::MIN, f64::MAX, f64::MIN, f64::MAX),
        };
        Rect::new_unchecked(x_min, x_max, y_min, y_max, self.coords)
    }

    /// Area of `shape`, measured by this context's [`AreaCalculator`]
    pub fn area(&self, shape: &impl Shape) -> f64 {
        shape.area(Some(self))
    }
}

impl Default for SpatialContext {
    fn default() -> Self {
        Self::geo()
    }
}
