#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod acquisition;
pub mod error;
pub mod geometry;
pub mod host;
pub mod segmentation;
pub mod stats;
pub mod types;
pub mod volume;

// Supporting modules for the demo binaries and reporting.
pub mod config;
pub mod diagnostics;

// --- High-level re-exports -------------------------------------------------

// Main entry points: acquisition machine + outcome types.
pub use crate::acquisition::{AcquisitionParams, SeedAcquisition, Stage};
pub use crate::types::{AnalysisOutput, Measurement};

// Host seam consumed by the machine.
pub use crate::host::{IdleTask, SessionHost};

// Segmentation engine contract and the embedded implementation.
pub use crate::segmentation::{GrowFromSeeds, SegmentationEngine, SegmentationResult};

// Core data containers.
pub use crate::volume::{LabelMask, ScalarVolume, SegmentLabel};

// Seed geometry and statistics helpers that are generally useful.
pub use crate::error::AnalyzerError;
pub use crate::geometry::{build_seed_geometry, SeedGeometry, Sphere};
pub use crate::stats::{segment_statistics, SegmentStatistics};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::host::{IdleTask, SessionHost};
    pub use crate::volume::{LabelMask, ScalarVolume, SegmentLabel};
    pub use crate::{
        AcquisitionParams, AnalysisOutput, AnalyzerError, GrowFromSeeds, Measurement,
        SeedAcquisition, Stage,
    };
}
