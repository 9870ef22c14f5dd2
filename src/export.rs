use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::compose::resize::fit_within;
use crate::foundation::error::{GoldfishError, GoldfishResult};
use crate::selector::TraitSet;

/// Longest edge of the thumbnail written to `25ks/`.
pub const THUMBNAIL_BOUND: u32 = 120;

/// The three output directories a batch owns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputDirs {
    /// Full-resolution WebP images.
    pub generation: PathBuf,
    /// 120px-bound PNG thumbnails.
    pub thumbnails: PathBuf,
    /// One JSON record per item.
    pub metadata: PathBuf,
}

impl OutputDirs {
    /// Standard `generation/`, `25ks/`, `metadata/` layout under `root`.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            generation: root.join("generation"),
            thumbnails: root.join("25ks"),
            metadata: root.join("metadata"),
        }
    }

    pub fn all(&self) -> [&Path; 3] {
        [
            self.generation.as_path(),
            self.metadata.as_path(),
            self.thumbnails.as_path(),
        ]
    }
}

/// Files written for one item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub image: PathBuf,
    pub thumbnail: PathBuf,
    pub metadata: PathBuf,
}

impl Artifact {
    pub fn paths(dirs: &OutputDirs, n: u32) -> Self {
        Self {
            image: dirs.generation.join(format!("{n}.webp")),
            thumbnail: dirs.thumbnails.join(format!("{n}.png")),
            metadata: dirs.metadata.join(format!("{n}.json")),
        }
    }
}

/// Metadata record serialized to `metadata/{n}.json`. Field order is the output key order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    #[serde(rename = "Artwork Number")]
    pub artwork_number: String,
    #[serde(rename = "Background Color")]
    pub background_color: String,
    #[serde(rename = "Body Type")]
    pub body_type: String,
    #[serde(rename = "Body Color")]
    pub body_color: String,
    #[serde(rename = "Accent Color")]
    pub accent_color: String,
    #[serde(rename = "Eyes Type")]
    pub eyes_type: String,
    #[serde(rename = "Mouth Type")]
    pub mouth_type: String,
}

impl MetadataRecord {
    pub fn new(n: u32, traits: &TraitSet) -> Self {
        Self {
            artwork_number: format!("#{n}"),
            background_color: traits.background_color.clone(),
            body_type: format!("#{}", traits.body_type),
            body_color: traits.body_color.clone(),
            accent_color: traits.accent_color.clone(),
            eyes_type: format!("#{}", traits.eyes_type),
            mouth_type: format!("#{}", traits.mouth_type),
        }
    }

    /// Single-line JSON with `", "` and `": "` separators.
    pub fn to_json_bytes(&self) -> GoldfishResult<Vec<u8>> {
        let mut ser = serde_json::Serializer::with_formatter(Vec::new(), SpacedFormatter);
        self.serialize(&mut ser).map_err(|e| {
            GoldfishError::serde(format!("metadata {}: {e}", self.artwork_number))
        })?;
        Ok(ser.into_inner())
    }
}

/// Compact layout with a space after every `,` and `:`.
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> std::io::Result<()>
    where
        W: ?Sized + std::io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> std::io::Result<()>
    where
        W: ?Sized + std::io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> std::io::Result<()>
    where
        W: ?Sized + std::io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Write the full-resolution image, thumbnail and metadata for item `n`.
///
/// Writes happen in that order; a failure aborts the item and earlier files are left in place.
pub fn export_item(
    dirs: &OutputDirs,
    n: u32,
    composite: &RgbaImage,
    traits: &TraitSet,
    progress: bool,
) -> GoldfishResult<Artifact> {
    let artifact = Artifact::paths(dirs, n);

    save_image(composite, &artifact.image, ImageFormat::WebP)?;
    if progress {
        println!("Saved full-resolution image: {}", artifact.image.display());
    }

    let thumb = fit_within(composite, THUMBNAIL_BOUND);
    save_image(&thumb, &artifact.thumbnail, ImageFormat::Png)?;
    if progress {
        println!("Saved resized image: {}", artifact.thumbnail.display());
    }

    let json = MetadataRecord::new(n, traits).to_json_bytes()?;
    std::fs::write(&artifact.metadata, json)
        .map_err(|e| GoldfishError::io(&artifact.metadata, e))?;
    if progress {
        println!("Saved metadata: {}", artifact.metadata.display());
    }

    Ok(artifact)
}

fn save_image(img: &RgbaImage, path: &Path, format: ImageFormat) -> GoldfishResult<()> {
    img.save_with_format(path, format).map_err(|e| match e {
        image::ImageError::IoError(io) => GoldfishError::io(path, io),
        other => GoldfishError::image(format!("encode '{}': {other}", path.display())),
    })
}
