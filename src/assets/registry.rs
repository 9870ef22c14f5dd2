use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::assets::decode::decode_layer;
use crate::foundation::error::{GoldfishError, GoldfishResult};

/// Number of body-type variants (`body-type/1.png` ..= `body-type/34.png`).
pub const BODY_VARIANTS: u8 = 34;
/// Number of eyes variants per color mode.
pub const EYES_VARIANTS: u8 = 8;
/// Number of mouth variants per color mode.
pub const MOUTH_VARIANTS: u8 = 22;

/// Accent color that selects the black-outlined asset set.
pub const BLACK_ACCENT: &str = "#181818";

/// Which pre-authored outline/eyes/mouth set to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorMode {
    Black,
    White,
}

impl ColorMode {
    /// Exact string match against [`BLACK_ACCENT`]; anything else is white.
    pub fn for_accent(accent: &str) -> Self {
        if accent == BLACK_ACCENT {
            Self::Black
        } else {
            Self::White
        }
    }

    pub const ALL: [ColorMode; 2] = [ColorMode::Black, ColorMode::White];

    fn suffix(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

/// One asset category, with the 1-based variant where the category has several.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Background,
    Body(u8),
    Outline,
    Eyes(u8),
    Mouth(u8),
}

impl LayerKind {
    fn check_variant(self) -> GoldfishResult<()> {
        let (name, n, max) = match self {
            Self::Background | Self::Outline => return Ok(()),
            Self::Body(n) => ("body", n, BODY_VARIANTS),
            Self::Eyes(n) => ("eyes", n, EYES_VARIANTS),
            Self::Mouth(n) => ("mouth", n, MOUTH_VARIANTS),
        };
        if n == 0 || n > max {
            return Err(GoldfishError::config(format!(
                "{name} variant {n} out of range 1..={max}"
            )));
        }
        Ok(())
    }
}

/// Maps `(category, variant, color mode)` to asset files under a root directory.
///
/// Layout:
/// - `background.png`
/// - `body-type/{n}.png`
/// - `outline_{mode}.png`
/// - `eyes-type_{mode}/{n}.png`
/// - `mouth-type_{mode}/{n}.png`
#[derive(Clone, Debug)]
pub struct AssetRegistry {
    root: PathBuf,
}

impl AssetRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the file for a layer. `mode` is ignored for background and body layers.
    pub fn path_for(&self, kind: LayerKind, mode: ColorMode) -> GoldfishResult<PathBuf> {
        kind.check_variant()?;
        let rel = match kind {
            LayerKind::Background => PathBuf::from("background.png"),
            LayerKind::Body(n) => Path::new("body-type").join(format!("{n}.png")),
            LayerKind::Outline => PathBuf::from(format!("outline_{}.png", mode.suffix())),
            LayerKind::Eyes(n) => {
                Path::new(&format!("eyes-type_{}", mode.suffix())).join(format!("{n}.png"))
            }
            LayerKind::Mouth(n) => {
                Path::new(&format!("mouth-type_{}", mode.suffix())).join(format!("{n}.png"))
            }
        };
        Ok(self.root.join(rel))
    }

    /// Every path the generator can ever reference, deduplicated and sorted.
    pub fn all_paths(&self) -> GoldfishResult<Vec<PathBuf>> {
        let mut kinds = vec![LayerKind::Background, LayerKind::Outline];
        kinds.extend((1..=BODY_VARIANTS).map(LayerKind::Body));
        kinds.extend((1..=EYES_VARIANTS).map(LayerKind::Eyes));
        kinds.extend((1..=MOUTH_VARIANTS).map(LayerKind::Mouth));

        let mut out = BTreeSet::new();
        for kind in kinds {
            for mode in ColorMode::ALL {
                out.insert(self.path_for(kind, mode)?);
            }
        }
        Ok(out.into_iter().collect())
    }

    /// Check that every referenced asset exists, reporting all missing files at once.
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    pub fn validate(&self) -> GoldfishResult<()> {
        let missing: Vec<PathBuf> = self
            .all_paths()?
            .into_iter()
            .filter(|p| !p.is_file())
            .collect();
        if !missing.is_empty() {
            tracing::warn!(count = missing.len(), "asset set incomplete");
            return Err(GoldfishError::AssetNotFound(missing));
        }
        tracing::debug!("asset set complete");
        Ok(())
    }

    /// Read and decode one layer as straight-alpha RGBA8.
    pub fn load(&self, kind: LayerKind, mode: ColorMode) -> GoldfishResult<RgbaImage> {
        let path = self.path_for(kind, mode)?;
        let bytes = std::fs::read(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GoldfishError::asset_not_found(&path)
            } else {
                GoldfishError::io(&path, e)
            }
        })?;
        decode_layer(&bytes)
            .map_err(|e| GoldfishError::image(format!("'{}': {e}", path.display())))
    }
}
