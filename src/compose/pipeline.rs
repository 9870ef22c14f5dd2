use image::RgbaImage;

use crate::assets::color::parse_color;
use crate::assets::registry::{AssetRegistry, LayerKind};
use crate::compose::blend::{paste_masked, recolor};
use crate::foundation::error::GoldfishResult;
use crate::selector::TraitSet;

/// Build the composite for one trait set.
///
/// Stacking order is fixed: recolored background, recolored body, outline, eyes, mouth. Each
/// layer after the background is pasted at the origin with its own alpha as mask. The canvas
/// takes the background asset's dimensions.
#[tracing::instrument(skip(assets, traits), fields(body = traits.body_type, eyes = traits.eyes_type, mouth = traits.mouth_type))]
pub fn compose(assets: &AssetRegistry, traits: &TraitSet) -> GoldfishResult<RgbaImage> {
    let mode = traits.color_mode();
    let background_color = parse_color(&traits.background_color)?;
    let body_color = parse_color(&traits.body_color)?;

    let background = assets.load(LayerKind::Background, mode)?;
    let mut canvas = recolor(&background, background_color);

    let body = assets.load(LayerKind::Body(traits.body_type), mode)?;
    paste_masked(&mut canvas, &recolor(&body, body_color));

    for kind in [
        LayerKind::Outline,
        LayerKind::Eyes(traits.eyes_type),
        LayerKind::Mouth(traits.mouth_type),
    ] {
        let layer = assets.load(kind, mode)?;
        paste_masked(&mut canvas, &layer);
    }

    tracing::debug!(width = canvas.width(), height = canvas.height(), ?mode, "composed");
    Ok(canvas)
}
