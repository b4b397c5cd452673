use anyhow::{Context, Result, bail};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

// --- Helper: Load and Sort Photo Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("failed to read photo directory {}", dir_path.display()))?;

    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if !path.is_file() {
            continue;
        }
        let is_image = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp" | "gif"));
        if is_image {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        bail!("no photos found in {}", dir_path.display());
    }
    debug!(count = paths.len(), "photo paths collected");
    Ok(paths)
}

/// EXIF orientation tag of a JPEG, 1 (upright) when absent or unreadable.
fn exif_orientation(bytes: &[u8], image_path: &Path) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!(path = %image_path.display(), error = %e, "could not read EXIF data");
            1
        }
    }
}

// --- Load Photo, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // Only JPEG carries reliable orientation data
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes, image_path)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow::anyhow!("failed to decode {}: {}", image_path.display(), e))?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW; mirrored variants are ignored
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("failed to create texture for {}: {}", image_path.display(), e))?;
    debug!(path = %image_path.display(), orientation, "photo loaded");
    Ok(texture)
}

/// Slide photos, loaded on first use.
pub struct PhotoCache {
    paths: Vec<PathBuf>,
    textures: HashMap<usize, Texture2D>,
    failed: HashSet<usize>,
}

impl PhotoCache {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            textures: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    /// Loads the photos of the given slides that are not loaded yet. A photo
    /// that fails once is not retried.
    pub fn ensure_loaded(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        slides: impl IntoIterator<Item = usize>,
    ) {
        for index in slides {
            if self.textures.contains_key(&index) || self.failed.contains(&index) {
                continue;
            }
            let Some(path) = self.paths.get(index) else {
                continue;
            };
            match load_texture_with_exif_rotation(rl, thread, path) {
                Ok(texture) => {
                    self.textures.insert(index, texture);
                }
                Err(e) => {
                    warn!(slide = index, error = %e, "photo unavailable");
                    self.failed.insert(index);
                }
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<&Texture2D> {
        self.textures.get(&index)
    }
}
