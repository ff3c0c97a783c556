//! Configuration for one acquisition machine instance.
use crate::geometry::{BACKGROUND_SEED_RADIUS_MM, FOREGROUND_SEED_RADIUS_MM};

/// Machine-wide parameters. Radii are fixed marker sizes in millimetres,
/// independent of the volume; the per-run locality arrives with `start`.
#[derive(Clone, Copy, Debug)]
pub struct AcquisitionParams {
    /// Radius of the inside (foreground) marker sphere.
    pub foreground_radius_mm: f64,
    /// Radius of each outside (background) marker sphere.
    pub background_radius_mm: f64,
}

impl Default for AcquisitionParams {
    fn default() -> Self {
        Self {
            foreground_radius_mm: FOREGROUND_SEED_RADIUS_MM,
            background_radius_mm: BACKGROUND_SEED_RADIUS_MM,
        }
    }
}
