mod error;
pub mod geo_enums;
pub mod geo_traits;
pub mod interval;
pub mod primitives;
mod shape;

#[doc(inline)]
pub use error::GeometryError;
#[doc(inline)]
pub use geo_enums::SpatialRelation;
#[doc(inline)]
pub use shape::AnyShape;
