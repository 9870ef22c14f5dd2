use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Dimensions that fit `(width, height)` inside a `bound` x `bound` box.
///
/// The longer edge becomes exactly `bound`; the shorter edge is scaled and truncated, never
/// below 1.
pub fn fit_dimensions(width: u32, height: u32, bound: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width.min(bound), height.min(bound));
    }
    let scaled = |short: u32, long: u32| -> u32 {
        let v = u64::from(bound) * u64::from(short) / u64::from(long);
        (v as u32).max(1)
    };
    if width > height {
        (bound, scaled(height, width))
    } else {
        (scaled(width, height), bound)
    }
}

/// Resample so the longest edge equals `bound`, preserving aspect ratio (Lanczos3).
pub fn fit_within(image: &RgbaImage, bound: u32) -> RgbaImage {
    let (w, h) = fit_dimensions(image.width(), image.height(), bound);
    imageops::resize(image, w, h, FilterType::Lanczos3)
}
