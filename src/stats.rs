//! Physical statistics over labelled masks.
//!
//! Volumes are computed from voxel counts and the mask's millimetre
//! spacing; the reported unit is cubic centimetres (1 cc = 1000 mm³).
use crate::volume::{LabelMask, SegmentLabel};
use serde::Serialize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Physical statistics for one class of a labelled mask.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStatistics {
    pub voxel_count: usize,
    pub volume_mm3: f64,
    pub volume_cc: f64,
}

/// Count the voxels of `label` and convert to physical volume.
///
/// Deterministic given the mask and spacing; the other class never
/// contributes.
pub fn segment_statistics(mask: &LabelMask, label: SegmentLabel) -> SegmentStatistics {
    let wanted = label as u8;

    #[cfg(feature = "parallel")]
    let voxel_count = mask.data.par_iter().filter(|&&v| v == wanted).count();
    #[cfg(not(feature = "parallel"))]
    let voxel_count = mask.data.iter().filter(|&&v| v == wanted).count();

    let volume_mm3 = voxel_count as f64 * mask.voxel_volume_mm3();
    SegmentStatistics {
        voxel_count,
        volume_mm3,
        volume_cc: volume_mm3 / 1000.0,
    }
}
