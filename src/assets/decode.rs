use image::RgbaImage;

use crate::foundation::error::{GoldfishError, GoldfishResult};

/// Decode an encoded layer (PNG in practice) into straight-alpha RGBA8.
pub fn decode_layer(bytes: &[u8]) -> GoldfishResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| GoldfishError::image(format!("decode layer from memory: {e}")))?;
    Ok(dyn_img.to_rgba8())
}
