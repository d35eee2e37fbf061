use georel::geometry::SpatialRelation;
use serde::{Deserialize, Serialize};

use crate::config::RelateConfig;

/// Outcome of a single query
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRelateResult {
    pub id: u64,
    pub relation: SpatialRelation,
    /// Description of the subject if it is a rectangle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_rect: Option<ExtRectSummary>,
}

/// Derived properties of a rectangle
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRectSummary {
    /// Canonical text rendering of the rectangle
    pub repr: String,
    pub width: f64,
    pub height: f64,
    /// Area as computed by the configured calculator
    pub area: f64,
    pub center: (f64, f64),
    pub crosses_dateline: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RelateOutput {
    pub name: String,
    pub results: Vec<ExtRelateResult>,
    pub config: RelateConfig,
}
