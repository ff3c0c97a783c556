use crate::diagnostics::TimingBreakdown;
use crate::segmentation::SegmentationResult;
use serde::Serialize;

/// Physical volume measurement for the foreground segment of one run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Implant volume in cubic centimetres.
    pub volume_cc: f64,
    /// Number of voxels labelled foreground.
    pub foreground_voxels: usize,
    /// End-to-end pipeline latency (geometry + segmentation + statistics).
    pub latency_ms: f64,
}

/// Everything a completed run hands back to the session controller.
///
/// The segmentation result is included so the caller can keep the labelled
/// mask for visualization; dropping it is equally fine.
#[derive(Clone, Debug)]
pub struct AnalysisOutput {
    pub measurement: Measurement,
    pub segmentation: SegmentationResult,
    pub timing: TimingBreakdown,
}
