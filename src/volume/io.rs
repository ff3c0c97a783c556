//! I/O helpers for debug artifacts and JSON reports.
//!
//! - `save_slice_png`: write one axial slice of a volume to a grayscale PNG.
//! - `save_mask_slice_png`: write one axial slice of a label mask to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{LabelMask, ScalarVolume, SegmentLabel};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Save one axial slice (fixed z) of a volume to a grayscale PNG, scaling
/// the volume's intensity range to [0, 255].
pub fn save_slice_png(volume: &ScalarVolume, z: usize, path: &Path) -> Result<(), String> {
    if z >= volume.nz {
        return Err(format!(
            "slice index {z} out of range for volume with {} slices",
            volume.nz
        ));
    }
    ensure_parent_dir(path)?;
    let (lo, hi) = volume
        .intensity_range()
        .ok_or_else(|| "cannot export a slice of an empty volume".to_string())?;
    let span = (hi - lo).max(f32::EPSILON);
    let mut out = GrayImage::new(volume.nx as u32, volume.ny as u32);
    for y in 0..volume.ny {
        for x in 0..volume.nx {
            let v = ((volume.get(x, y, z) - lo) / span * 255.0).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save one axial slice of a label mask to a PNG (foreground white).
pub fn save_mask_slice_png(mask: &LabelMask, z: usize, path: &Path) -> Result<(), String> {
    if z >= mask.nz {
        return Err(format!(
            "slice index {z} out of range for mask with {} slices",
            mask.nz
        ));
    }
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(mask.nx as u32, mask.ny as u32);
    for y in 0..mask.ny {
        for x in 0..mask.nx {
            let v = match mask.get(x, y, z) {
                SegmentLabel::Foreground => 255u8,
                SegmentLabel::Background => 0u8,
            };
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
