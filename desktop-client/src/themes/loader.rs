use std::path::{Path, PathBuf};

use common::logger::Logger;
use eframe::egui;
use image::RgbaImage;
use serde::Deserialize;

pub const CLASSIC_THEME_ID: &str = "classic";

const MANIFEST_FILE_NAME: &str = "themes.json";
const DEFAULT_FRAME_DURATION_MS: u64 = 80;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Builtin,
    Image,
    Animated,
}

/// One manifest entry. Image paths are relative to the themes directory.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ThemeEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ThemeKind,
    #[serde(default)]
    pub x_image: Option<String>,
    #[serde(default)]
    pub o_image: Option<String>,
    #[serde(default)]
    pub x_strip: Option<String>,
    #[serde(default)]
    pub o_strip: Option<String>,
    #[serde(default)]
    pub frames: Option<u32>,
    #[serde(default)]
    pub frame_duration_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ThemeManifest {
    themes: Vec<ThemeEntry>,
}

fn classic_entry() -> ThemeEntry {
    ThemeEntry {
        id: CLASSIC_THEME_ID.to_string(),
        name: "Classic X/O".to_string(),
        kind: ThemeKind::Builtin,
        x_image: None,
        o_image: None,
        x_strip: None,
        o_strip: None,
        frames: None,
        frame_duration_ms: None,
    }
}

/// Loaded, render-ready marks for both sides.
pub enum ThemeArt {
    Builtin,
    Static {
        x: egui::TextureHandle,
        o: egui::TextureHandle,
    },
    Animated {
        x_frames: Vec<egui::TextureHandle>,
        o_frames: Vec<egui::TextureHandle>,
        frame_duration_ms: u64,
    },
}

pub struct ActiveTheme {
    pub id: String,
    pub name: String,
    pub art: ThemeArt,
}

impl ActiveTheme {
    pub fn classic() -> Self {
        let entry = classic_entry();
        Self {
            id: entry.id,
            name: entry.name,
            art: ThemeArt::Builtin,
        }
    }
}

pub fn themes_dir() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join("themes");
    }
    PathBuf::from("themes")
}

pub fn manifest_path() -> PathBuf {
    themes_dir().join(MANIFEST_FILE_NAME)
}

/// Read the theme manifest. A missing or malformed manifest degrades to
/// the builtin classic theme; a classic entry is injected when absent so
/// the player can always switch back.
pub fn load_theme_entries(path: &Path, logger: &Logger) -> Vec<ThemeEntry> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            logger.error(&format!(
                "Theme manifest not readable at {}: {}",
                path.display(),
                e
            ));
            return vec![classic_entry()];
        }
    };

    match parse_manifest(&content) {
        Ok(entries) => entries,
        Err(e) => {
            logger.error(&format!("Invalid theme manifest: {}", e));
            vec![classic_entry()]
        }
    }
}

fn parse_manifest(content: &str) -> Result<Vec<ThemeEntry>, String> {
    let manifest: ThemeManifest =
        serde_json::from_str(content).map_err(|e| e.to_string())?;

    let mut themes = manifest.themes;
    if themes.is_empty() {
        return Err("manifest has no themes".to_string());
    }
    if !themes.iter().any(|theme| theme.id == CLASSIC_THEME_ID) {
        themes.insert(0, classic_entry());
    }
    Ok(themes)
}

/// Load a theme's assets and turn them into textures. `None` means the
/// theme could not be applied and the caller keeps the previous one.
pub fn apply_theme(
    entry: &ThemeEntry,
    base_dir: &Path,
    ctx: &egui::Context,
    logger: &Logger,
) -> Option<ActiveTheme> {
    let art = match entry.kind {
        ThemeKind::Builtin => ThemeArt::Builtin,
        ThemeKind::Image => {
            let (Some(x_rel), Some(o_rel)) = (&entry.x_image, &entry.o_image) else {
                logger.error(&format!(
                    "Image theme '{}' must name both x_image and o_image",
                    entry.id
                ));
                return None;
            };
            let x = load_image(base_dir, x_rel, logger)?;
            let o = load_image(base_dir, o_rel, logger)?;
            ThemeArt::Static {
                x: to_texture(ctx, &format!("{}_x", entry.id), &x),
                o: to_texture(ctx, &format!("{}_o", entry.id), &o),
            }
        }
        ThemeKind::Animated => {
            let (Some(x_rel), Some(o_rel)) = (&entry.x_strip, &entry.o_strip) else {
                logger.error(&format!(
                    "Animated theme '{}' must name both x_strip and o_strip",
                    entry.id
                ));
                return None;
            };
            let frames = entry.frames.unwrap_or(0);
            if frames == 0 {
                logger.error(&format!(
                    "Animated theme '{}' needs a positive frame count",
                    entry.id
                ));
                return None;
            }

            let x_strip = load_image(base_dir, x_rel, logger)?;
            let o_strip = load_image(base_dir, o_rel, logger)?;
            let x_frames = split_strip(&x_strip, frames);
            let o_frames = split_strip(&o_strip, frames);
            if x_frames.is_empty() || o_frames.is_empty() {
                logger.error(&format!("Animated theme '{}' produced no frames", entry.id));
                return None;
            }

            ThemeArt::Animated {
                x_frames: frames_to_textures(ctx, &format!("{}_x", entry.id), &x_frames),
                o_frames: frames_to_textures(ctx, &format!("{}_o", entry.id), &o_frames),
                frame_duration_ms: entry
                    .frame_duration_ms
                    .unwrap_or(DEFAULT_FRAME_DURATION_MS),
            }
        }
    };

    Some(ActiveTheme {
        id: entry.id.clone(),
        name: entry.name.clone(),
        art,
    })
}

fn load_image(base_dir: &Path, rel_path: &str, logger: &Logger) -> Option<RgbaImage> {
    let full_path = base_dir.join(rel_path);
    match image::open(&full_path) {
        Ok(img) => Some(img.to_rgba8()),
        Err(e) => {
            logger.error(&format!(
                "Failed to load theme image {}: {}",
                full_path.display(),
                e
            ));
            None
        }
    }
}

/// Split a horizontal strip into `frames` equal-width frames. Trailing
/// pixels that do not fill a whole frame are dropped.
fn split_strip(strip: &RgbaImage, frames: u32) -> Vec<RgbaImage> {
    if frames == 0 {
        return Vec::new();
    }
    let frame_width = strip.width() / frames;
    if frame_width == 0 {
        return Vec::new();
    }
    (0..frames)
        .map(|i| {
            image::imageops::crop_imm(strip, i * frame_width, 0, frame_width, strip.height())
                .to_image()
        })
        .collect()
}

fn frames_to_textures(
    ctx: &egui::Context,
    name: &str,
    frames: &[RgbaImage],
) -> Vec<egui::TextureHandle> {
    frames
        .iter()
        .enumerate()
        .map(|(i, frame)| to_texture(ctx, &format!("{}_{}", name, i), frame))
        .collect()
}

fn to_texture(ctx: &egui::Context, name: &str, img: &RgbaImage) -> egui::TextureHandle {
    let color_image = egui::ColorImage::from_rgba_unmultiplied(
        [img.width() as usize, img.height() as usize],
        img.as_raw(),
    );
    ctx.load_texture(name, color_image, Default::default())
}
