use georel::context::{
    AreaCalculator, CartesianArea, CoordSystem, GeodesicSphereArea, SpatialContext,
};
use serde::{Deserialize, Serialize};

/// Configuration for evaluating relation queries
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RelateConfig {
    /// Interpretation of the coordinates of every shape in the query set
    pub coord_system: CoordSystem,
    /// How the area of rectangles is reported
    #[serde(default)]
    pub area_calculator: AreaCalculatorKind,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AreaCalculatorKind {
    /// Width times height
    Cartesian,
    /// Spherical area in square degrees
    #[default]
    GeodesicSphere,
}

impl RelateConfig {
    pub fn spatial_context(&self) -> SpatialContext {
        let calculator: Box<dyn AreaCalculator> = match self.area_calculator {
            AreaCalculatorKind::Cartesian => Box::new(CartesianArea),
            AreaCalculatorKind::GeodesicSphere => Box::new(GeodesicSphereArea),
        };
        SpatialContext::new(self.coord_system, calculator)
    }
}

impl Default for RelateConfig {
    fn default() -> Self {
        Self {
            coord_system: CoordSystem::Geodetic,
            area_calculator: AreaCalculatorKind::GeodesicSphere,
        }
    }
}
