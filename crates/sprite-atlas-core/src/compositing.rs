use image::RgbaImage;

/// Copy all of `src` into `canvas` with its top-left at (dx, dy).
/// Pixels falling outside the canvas are clipped.
pub fn blit_rgba(src: &RgbaImage, canvas: &mut RgbaImage, dx: u32, dy: u32) {
    let (cw, ch) = canvas.dimensions();
    let (sw, sh) = src.dimensions();
    for yy in 0..sh {
        let ty = dy.saturating_add(yy);
        if ty >= ch {
            break;
        }
        for xx in 0..sw {
            let tx = dx.saturating_add(xx);
            if tx >= cw {
                break;
            }
            canvas.put_pixel(tx, ty, *src.get_pixel(xx, yy));
        }
    }
}

/// Build a transparent `width x height` canvas and blit every buffer at its
/// origin. Areas not covered by any buffer stay fully transparent.
pub fn compose_canvas<'a>(
    width: u32,
    height: u32,
    items: impl IntoIterator<Item = (&'a RgbaImage, u32, u32)>,
) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);
    for (src, x, y) in items {
        blit_rgba(src, &mut canvas, x, y);
    }
    canvas
}
