//! Goldfish generates batches of layered character avatars.
//!
//! Each item draws a random [`TraitSet`], recolors the background and body layers with an overlay
//! blend, stacks outline/eyes/mouth on top, and exports a full-resolution WebP, a 120px PNG
//! thumbnail and a JSON metadata record under a shared sequence number.
//!
//! - Load [`TraitPools`] from `parameters.json`
//! - Point an [`AssetRegistry`] at the asset root and [`AssetRegistry::validate`] it
//! - Call [`run_batch`] with a seeded or entropy-backed RNG
#![forbid(unsafe_code)]

pub mod assets;
pub mod compose;
pub mod config;
pub mod dispatch;
pub mod export;
pub mod foundation;
pub mod logging;
pub mod selector;

pub use crate::assets::color::{Rgb8, parse_color};
pub use crate::assets::registry::{AssetRegistry, BLACK_ACCENT, ColorMode, LayerKind};
pub use crate::compose::blend::{overlay_channel, paste_masked, recolor};
pub use crate::compose::pipeline::compose;
pub use crate::compose::resize::{fit_dimensions, fit_within};
pub use crate::config::TraitPools;
pub use crate::dispatch::{
    BatchConfig, BatchReport, ItemFailure, generate_item, plan_batch, prepare_output_dirs,
    run_batch,
};
pub use crate::export::{Artifact, MetadataRecord, OutputDirs, THUMBNAIL_BOUND, export_item};
pub use crate::foundation::error::{GoldfishError, GoldfishResult};
pub use crate::selector::{TraitSet, select_traits};
