//! One-dimensional relations between closed ranges, with support for longitude ranges that wrap around the antimeridian.

use crate::geometry::geo_enums::SpatialRelation;

/// Span of a full revolution in degrees of longitude
pub const LON_PERIOD: f64 = 360.0;

/// Returns the [`SpatialRelation`] of the internal range `[int_min, int_max]` to the external range `[ext_min, ext_max]`.
/// Both ranges must satisfy `min <= max`.
///
/// Identical ranges are [`SpatialRelation::Contains`]: containment is tested before enclosure.
#[inline(always)]
pub fn relate_range(int_min: f64, int_max: f64, ext_min: f64, ext_max: f64) -> SpatialRelation {
    if ext_min > int_max || ext_max < int_min {
        return SpatialRelation::Disjoint;
    }
    if ext_min >= int_min && ext_max <= int_max {
        return SpatialRelation::Contains;
    }
    if ext_min <= int_min && ext_max >= int_max {
        return SpatialRelation::Within;
    }
    SpatialRelation::Intersects
}

/// Unwraps a longitude range that crosses the antimeridian (`min > max`),
/// so that the returned `max` is at least `min`. Regular ranges are returned as is.
#[inline(always)]
pub fn unwrap_lon_range(min: f64, max: f64) -> (f64, f64) {
    let raw_width = max - min;
    match raw_width < 0.0 {
        true => (min, min + (raw_width + LON_PERIOD)),
        false => (min, max),
    }
}

/// Returns the [`SpatialRelation`] of the internal longitude range to the external one.
/// Either range may cross the antimeridian.
///
/// Both ranges are unwrapped and, if needed, one of them is shifted by a full revolution
/// so that they lie in a common 360° window before being compared with [`relate_range`].
pub fn relate_lon_range(
    int_min: f64,
    int_max: f64,
    ext_min: f64,
    ext_max: f64,
) -> SpatialRelation {
    if int_max - int_min == LON_PERIOD {
        //internal range spans the globe
        return SpatialRelation::Contains;
    }
    let (mut int_min, mut int_max) = unwrap_lon_range(int_min, int_max);

    if ext_max - ext_min == LON_PERIOD {
        return SpatialRelation::Within;
    }
    let (mut ext_min, mut ext_max) = unwrap_lon_range(ext_min, ext_max);

    //shift to potentially overlap
    if int_max < ext_min {
        int_min += LON_PERIOD;
        int_max += LON_PERIOD;
    } else if ext_max < int_min {
        ext_min += LON_PERIOD;
        ext_max += LON_PERIOD;
    }

    relate_range(int_min, int_max, ext_min, ext_max)
}
