use thiserror::Error;

/// Named error kinds for geometric primitives that fail validation.
///
/// Returned wrapped in an [`anyhow::Error`]; use [`anyhow::Error::downcast_ref`] to recover the kind.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("invalid Y-range, y_min: {y_min} > y_max: {y_max}")]
    InvalidYRange { y_min: f64, y_max: f64 },
    #[error("NaN bound in rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}")]
    NanCoordinate {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}
