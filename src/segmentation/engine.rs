//! Engine contract consumed by the acquisition pipeline.
use crate::error::AnalyzerError;
use crate::geometry::SeedGeometry;
use crate::volume::{LabelMask, ScalarVolume};

/// Labelled mask produced by one engine invocation, with timing attached.
#[derive(Clone, Debug)]
pub struct SegmentationResult {
    /// Two-class mask aligned to the source volume's voxel grid.
    pub mask: LabelMask,
    /// Wall-clock time the engine spent, milliseconds.
    pub elapsed_ms: f64,
}

/// Seeded two-class segmentation backend.
///
/// Contract: idempotent for identical inputs (no state carried between
/// calls), exactly two classes in the output, and the classes never merge.
/// Implementations must fail with `InvalidVolume` when the volume has no
/// voxel data and `SeedOutOfBounds` when a seed solid does not intersect
/// the voxel grid.
pub trait SegmentationEngine {
    fn segment(
        &self,
        volume: &ScalarVolume,
        seeds: &SeedGeometry,
        locality: f64,
    ) -> Result<SegmentationResult, AnalyzerError>;
}
