//! Mutable per-run state, owned by the machine for one acquisition.
use super::stages::{Stage, TOTAL_PROTOCOL_POINTS};
use crate::volume::ScalarVolume;
use nalgebra::Point3;
use std::sync::Arc;

/// State of a single acquisition run. Created by `start`, discarded on
/// completion, cancellation, or volume change; never reused.
pub(crate) struct AcquisitionSession {
    /// The target volume; read-only for the whole run.
    pub volume: Arc<ScalarVolume>,
    /// Locality requested for this run, already clamped to [0, 1].
    pub locality: f64,
    /// Collected points in placement order; the first is the inside click.
    pub points: Vec<Point3<f64>>,
    /// Current stage; advances with the cumulative point count.
    pub stage: Stage,
}

impl AcquisitionSession {
    pub(crate) fn new(volume: Arc<ScalarVolume>, locality: f64) -> Self {
        Self {
            volume,
            locality,
            points: Vec::with_capacity(TOTAL_PROTOCOL_POINTS),
            stage: Stage::AwaitCenter,
        }
    }
}
