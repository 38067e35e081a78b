use crate::error::{AtlasError, Result};
use crate::model::Rect;

/// Computes the atlas size from placed rects.
///
/// The natural size is the maximum right/bottom edge over all rects. With
/// `power_of_two`, both sides become the smallest power of two covering the
/// longer natural side. No rects yield a 0x0 canvas.
pub fn compute_canvas_size<'a>(
    rects: impl IntoIterator<Item = &'a Rect>,
    power_of_two: bool,
) -> Result<(u32, u32)> {
    let mut width = 0u32;
    let mut height = 0u32;
    let mut any = false;
    for r in rects {
        any = true;
        width = width.max(r.right());
        height = height.max(r.bottom());
    }
    if !any || !power_of_two {
        return Ok((width, height));
    }
    let side = next_pow2(width.max(height))
        .ok_or(AtlasError::CanvasTooLarge { width, height })?;
    Ok((side, side))
}

/// Smallest power of two >= `v` (1 for 0), or `None` on overflow.
pub fn next_pow2(v: u32) -> Option<u32> {
    v.max(1).checked_next_power_of_two()
}
