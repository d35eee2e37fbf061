use crate::geometry::primitives::Rect;

//Various checks to verify the correctness of geometric primitives
//Used in debug_assert!() blocks

pub fn rect_is_consistent(rect: &Rect) -> bool {
    //NaN widths only arise from infinite bounds
    let width_ok = !(rect.width() < 0.0);
    let height_ok = rect.height() >= 0.0 || rect.height().is_nan();
    let dateline_ok = rect.crosses_dateline() == (rect.x_min() > rect.x_max());

    width_ok && height_ok && dateline_ok
}
