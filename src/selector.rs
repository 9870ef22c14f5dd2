use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::assets::registry::{BODY_VARIANTS, ColorMode, EYES_VARIANTS, MOUTH_VARIANTS};
use crate::config::TraitPools;
use crate::foundation::error::{GoldfishError, GoldfishResult};

/// Randomized attributes of one generated item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitSet {
    pub background_color: String,
    pub body_type: u8,
    pub body_color: String,
    pub accent_color: String,
    pub eyes_type: u8,
    pub mouth_type: u8,
}

impl TraitSet {
    pub fn color_mode(&self) -> ColorMode {
        ColorMode::for_accent(&self.accent_color)
    }
}

/// Draw one trait set, each field independently and uniformly.
pub fn select_traits<R: Rng + ?Sized>(
    pools: &TraitPools,
    rng: &mut R,
) -> GoldfishResult<TraitSet> {
    let background_color = choose(&pools.background_color, "background_color", rng)?;
    let body_color = choose(&pools.body_color, "body_color", rng)?;
    let accent_color = choose(&pools.accent_color, "accent_color", rng)?;

    Ok(TraitSet {
        background_color,
        body_type: rng.random_range(1..=BODY_VARIANTS),
        body_color,
        accent_color,
        eyes_type: rng.random_range(1..=EYES_VARIANTS),
        mouth_type: rng.random_range(1..=MOUTH_VARIANTS),
    })
}

fn choose<R: Rng + ?Sized>(pool: &[String], name: &str, rng: &mut R) -> GoldfishResult<String> {
    pool.choose(rng)
        .cloned()
        .ok_or_else(|| GoldfishError::config(format!("'{name}' pool is empty")))
}
