//! Two-class labelled mask aligned with a source volume's voxel grid.
use serde::Serialize;

/// Class id carried by every voxel of a [`LabelMask`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum SegmentLabel {
    Background = 0,
    Foreground = 1,
}

impl SegmentLabel {
    /// Human-readable segment name, matching the seed naming.
    pub fn name(self) -> &'static str {
        match self {
            SegmentLabel::Background => "background",
            SegmentLabel::Foreground => "foreground",
        }
    }
}

/// Labelled voxel grid with the source volume's calibration attached.
///
/// Exactly two classes; the grid dimensions and spacing always match the
/// volume the mask was derived from.
#[derive(Clone, Debug)]
pub struct LabelMask {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    /// Voxel spacing per axis in millimetres (copied from the source volume)
    pub spacing_mm: [f64; 3],
    /// One class id per voxel, same layout as the source volume
    pub data: Vec<u8>,
}

impl LabelMask {
    /// Construct a mask of size `nx × ny × nz` filled with `Background`.
    pub fn new(nx: usize, ny: usize, nz: usize, spacing_mm: [f64; 3]) -> Self {
        Self {
            nx,
            ny,
            nz,
            spacing_mm,
            data: vec![SegmentLabel::Background as u8; nx * ny * nz],
        }
    }

    /// Convert (x, y, z) to a linear index into `data`.
    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.ny + y) * self.nx + x
    }

    /// Get the class at (x, y, z).
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> SegmentLabel {
        if self.data[self.idx(x, y, z)] == SegmentLabel::Foreground as u8 {
            SegmentLabel::Foreground
        } else {
            SegmentLabel::Background
        }
    }

    /// Set the class at (x, y, z).
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, label: SegmentLabel) {
        let i = self.idx(x, y, z);
        self.data[i] = label as u8;
    }

    /// Physical volume of one voxel in cubic millimetres.
    #[inline]
    pub fn voxel_volume_mm3(&self) -> f64 {
        self.spacing_mm[0] * self.spacing_mm[1] * self.spacing_mm[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_starts_all_background() {
        let mask = LabelMask::new(3, 3, 3, [1.0, 1.0, 1.0]);
        assert!(mask
            .data
            .iter()
            .all(|&v| v == SegmentLabel::Background as u8));
    }

    #[test]
    fn set_get_round_trip() {
        let mut mask = LabelMask::new(4, 4, 4, [1.0, 1.0, 1.0]);
        mask.set(1, 2, 3, SegmentLabel::Foreground);
        assert_eq!(mask.get(1, 2, 3), SegmentLabel::Foreground);
        assert_eq!(mask.get(0, 0, 0), SegmentLabel::Background);
    }
}
