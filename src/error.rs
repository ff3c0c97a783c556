use thiserror::Error;

/// Errors surfaced by the acquisition/segmentation pipeline.
///
/// Every failed run reports exactly one of these through the completion
/// outcome; none are retried automatically. A failed segmentation usually
/// means the seeds landed on the wrong tissue, not a transient fault.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The target volume is unselected or carries no voxel data.
    #[error("input volume is invalid or has no voxel data")]
    InvalidVolume,
    /// Seed geometry was requested with fewer than two points.
    #[error("need at least 2 seed points (1 inside + 1 outside), got {got}")]
    InsufficientSeeds { got: usize },
    /// A seed solid does not intersect the volume's voxel grid.
    #[error("{which} seed markers do not intersect the volume bounds")]
    SeedOutOfBounds { which: &'static str },
    /// The segmentation engine failed for any other reason.
    #[error("segmentation failed: {0}")]
    SegmentationFailure(String),
}
