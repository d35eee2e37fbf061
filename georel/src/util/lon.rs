/// Maps a longitude in degrees into the canonical `[-180, 180]` range.
/// Values already within range are returned untouched.
pub fn normalize_lon_deg(lon_deg: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon_deg) {
        //common case, and avoids slight floating point shifting
        return lon_deg;
    }
    let off = (lon_deg + 180.0) % 360.0;
    if off < 0.0 {
        180.0 + off
    } else if off == 0.0 && lon_deg > 0.0 {
        180.0
    } else {
        -180.0 + off
    }
}
