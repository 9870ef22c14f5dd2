#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

pub const W: u32 = 40;
pub const H: u32 = 30;

pub const BACKGROUND_GRAY: Rgba<u8> = Rgba([128, 128, 128, 255]);
pub const BODY_GRAY: Rgba<u8> = Rgba([160, 160, 160, 255]);
pub const OUTLINE_BLACK: Rgba<u8> = Rgba([1, 1, 1, 255]);
pub const OUTLINE_WHITE: Rgba<u8> = Rgba([254, 254, 254, 255]);
pub const EYES_BLACK: Rgba<u8> = Rgba([2, 2, 2, 255]);
pub const EYES_WHITE: Rgba<u8> = Rgba([250, 250, 250, 255]);
pub const MOUTH_BLACK: Rgba<u8> = Rgba([3, 3, 3, 255]);
pub const MOUTH_WHITE: Rgba<u8> = Rgba([251, 251, 251, 255]);

/// Body square covers `5..25` on both axes.
pub const BODY_SPAN: std::ops::Range<u32> = 5..25;
/// Outline is a full-width row.
pub const OUTLINE_ROW: u32 = 10;
pub const EYES_AT: (u32, u32) = (12, 12);
pub const MOUTH_AT: (u32, u32) = (15, 20);

pub fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "goldfish_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn write_png(path: &Path, img: &RgbaImage) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

fn single_pixel(at: (u32, u32), color: Rgba<u8>) -> RgbaImage {
    let mut img = RgbaImage::new(W, H);
    img.put_pixel(at.0, at.1, color);
    img
}

/// Write a complete synthetic asset tree under `root`.
pub fn write_assets(root: &Path) {
    write_png(
        &root.join("background.png"),
        &RgbaImage::from_pixel(W, H, BACKGROUND_GRAY),
    );

    let mut body = RgbaImage::new(W, H);
    for y in BODY_SPAN {
        for x in BODY_SPAN {
            body.put_pixel(x, y, BODY_GRAY);
        }
    }
    for n in 1..=34 {
        write_png(&root.join("body-type").join(format!("{n}.png")), &body);
    }

    for (mode, outline, eyes, mouth) in [
        ("black", OUTLINE_BLACK, EYES_BLACK, MOUTH_BLACK),
        ("white", OUTLINE_WHITE, EYES_WHITE, MOUTH_WHITE),
    ] {
        let mut row = RgbaImage::new(W, H);
        for x in 0..W {
            row.put_pixel(x, OUTLINE_ROW, outline);
        }
        write_png(&root.join(format!("outline_{mode}.png")), &row);

        for n in 1..=8 {
            write_png(
                &root.join(format!("eyes-type_{mode}")).join(format!("{n}.png")),
                &single_pixel(EYES_AT, eyes),
            );
        }
        for n in 1..=22 {
            write_png(
                &root.join(format!("mouth-type_{mode}")).join(format!("{n}.png")),
                &single_pixel(MOUTH_AT, mouth),
            );
        }
    }
}

pub const PARAMETERS_JSON: &str = r##"{
    "background_color": ["#ffcc00", "#3366ff", "teal"],
    "body_color": ["#ff0000", "#00ff00"],
    "accent_color": ["#181818", "#ffffff"]
}"##;

pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
