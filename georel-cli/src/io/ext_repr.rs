use serde::{Deserialize, Serialize};

/// Various ways to represent a shape
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtShape {
    Point { x: f64, y: f64 },
    /// Axis-aligned rectangle. `x_min > x_max` denotes a rectangle crossing the antimeridian (geodetic only)
    Rectangle {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}

/// A single relation query: how does `subject` relate to `other`?
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtQuery {
    /// Identifier of the query, echoed in the result
    pub id: u64,
    pub subject: ExtShape,
    pub other: ExtShape,
}

/// Named collection of queries, evaluated under a single spatial context
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtQuerySet {
    pub name: String,
    pub queries: Vec<ExtQuery>,
}
