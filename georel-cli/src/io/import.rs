use anyhow::{Context, Result};
use georel::context::CoordSystem;
use georel::geometry::AnyShape;
use georel::geometry::primitives::{Point, Rect};
use log::warn;

use crate::io::ext_repr::{ExtQuery, ExtShape};

/// Converts external representations of shapes into internal ones.
#[derive(Clone, Debug, Copy)]
pub struct Importer {
    pub coords: CoordSystem,
}

impl Importer {
    pub fn new(coords: CoordSystem) -> Importer {
        Importer { coords }
    }

    pub fn import_shape(&self, ext_shape: &ExtShape) -> Result<AnyShape> {
        match *ext_shape {
            ExtShape::Point { x, y } => Ok(Point(x, y).into()),
            ExtShape::Rectangle {
                x_min,
                x_max,
                y_min,
                y_max,
            } => {
                if !self.coords.is_geo() && x_min > x_max {
                    warn!(
                        "[IMPORT] x_min > x_max in a cartesian system, rectangle will not wrap around: {ext_shape:?}"
                    );
                }
                let rect = Rect::try_new(x_min, x_max, y_min, y_max, self.coords)?;
                Ok(rect.into())
            }
        }
    }

    /// Imports both shapes of a query
    pub fn import_query(&self, ext_query: &ExtQuery) -> Result<(AnyShape, AnyShape)> {
        let subject = self
            .import_shape(&ext_query.subject)
            .with_context(|| format!("invalid subject in query {}", ext_query.id))?;
        let other = self
            .import_shape(&ext_query.other)
            .with_context(|| format!("invalid other shape in query {}", ext_query.id))?;
        Ok((subject, other))
    }
}
