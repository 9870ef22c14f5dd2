use image::{Rgba, RgbaImage};

use crate::assets::color::Rgb8;

/// Photographic overlay of one 8-bit channel.
///
/// `base < 0.5 ? 2*base*blend : 1 - 2*(1-base)*(1-blend)` in fixed point.
pub fn overlay_channel(base: u8, blend: u8) -> u8 {
    let b = u32::from(base);
    let l = u32::from(blend);
    if b < 128 {
        div255(2 * b * l).min(255) as u8
    } else {
        255 - div255(2 * (255 - b) * (255 - l)).min(255) as u8
    }
}

/// Recolor a layer by overlaying a flat color on its RGB channels.
///
/// Alpha is kept from the source pixel; fully transparent pixels stay fully transparent.
pub fn recolor(layer: &RgbaImage, color: Rgb8) -> RgbaImage {
    let tint = color.channels();
    let mut out = layer.clone();
    for px in out.pixels_mut() {
        let Rgba([r, g, b, a]) = *px;
        *px = Rgba([
            overlay_channel(r, tint[0]),
            overlay_channel(g, tint[1]),
            overlay_channel(b, tint[2]),
            a,
        ]);
    }
    out
}

/// Paste `layer` onto `canvas` at the origin, using the layer's alpha as the mask.
///
/// Every channel (alpha included) is interpolated as `src*a + dst*(1-a)`, so `a == 0` leaves the
/// canvas untouched and `a == 255` replaces it. Layers larger or smaller than the canvas are
/// clipped to the overlapping rectangle.
pub fn paste_masked(canvas: &mut RgbaImage, layer: &RgbaImage) {
    let w = canvas.width().min(layer.width());
    let h = canvas.height().min(layer.height());
    for y in 0..h {
        for x in 0..w {
            let src = layer.get_pixel(x, y).0;
            let a = src[3];
            if a == 0 {
                continue;
            }
            let dst = canvas.get_pixel_mut(x, y);
            if a == 255 {
                dst.0 = src;
                continue;
            }
            let inv = 255 - u32::from(a);
            for i in 0..4 {
                let s = u32::from(src[i]) * u32::from(a);
                let d = u32::from(dst.0[i]) * inv;
                dst.0[i] = div255(s + d) as u8;
            }
        }
    }
}

fn div255(x: u32) -> u32 {
    (x + 127) / 255
}
