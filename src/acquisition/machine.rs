//! The acquisition orchestrator.
use super::options::AcquisitionParams;
use super::session::AcquisitionSession;
use super::stages::Stage;
use crate::diagnostics::TimingBreakdown;
use crate::error::AnalyzerError;
use crate::geometry::build_seed_geometry;
use crate::host::{IdleTask, SessionHost};
use crate::segmentation::{GrowFromSeeds, SegmentationEngine};
use crate::stats::segment_statistics;
use crate::types::{AnalysisOutput, Measurement};
use crate::volume::{ScalarVolume, SegmentLabel};
use log::{debug, info, warn};
use nalgebra::Point3;
use std::sync::Arc;
use std::time::Instant;

/// Seed-acquisition machine: consumes point-placement events, drives slice
/// navigation and guidance through a [`SessionHost`], and runs the
/// segmentation pipeline when the protocol completes.
///
/// Generic over the segmentation engine so tests and alternative backends
/// can be swapped in; defaults to the embedded [`GrowFromSeeds`].
pub struct SeedAcquisition<E = GrowFromSeeds> {
    engine: E,
    params: AcquisitionParams,
    session: Option<AcquisitionSession>,
    teardown_pending: bool,
}

impl SeedAcquisition<GrowFromSeeds> {
    /// Create a machine with the embedded grow-from-seeds engine.
    pub fn new(params: AcquisitionParams) -> Self {
        Self::with_engine(GrowFromSeeds::default(), params)
    }
}

impl<E: SegmentationEngine> SeedAcquisition<E> {
    /// Create a machine with a caller-supplied segmentation engine.
    pub fn with_engine(engine: E, params: AcquisitionParams) -> Self {
        Self {
            engine,
            params,
            session: None,
            teardown_pending: false,
        }
    }

    /// True while a session is interpreting placement events.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Stage of the active session, if any.
    pub fn stage(&self) -> Option<Stage> {
        self.session.as_ref().map(|s| s.stage)
    }

    /// Number of points collected by the active session.
    pub fn points_placed(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.points.len())
    }

    /// Arm a new acquisition run for `volume`.
    ///
    /// Any active session is cancelled first; at most one placement stream
    /// is ever being interpreted. Fails with `InvalidVolume` (and never
    /// arms) when the volume carries no voxel data.
    pub fn start<H: SessionHost>(
        &mut self,
        host: &mut H,
        volume: Arc<ScalarVolume>,
        locality: f64,
    ) -> Result<(), AnalyzerError> {
        if volume.is_empty() {
            return Err(AnalyzerError::InvalidVolume);
        }
        if self.session.is_some() {
            debug!("start requested while a session is active; cancelling the old one");
            self.cancel(host);
        }
        let locality = if (0.0..=1.0).contains(&locality) {
            locality
        } else {
            warn!("locality {locality} outside [0, 1]; clamping");
            locality.clamp(0.0, 1.0)
        };

        self.session = Some(AcquisitionSession::new(volume, locality));
        self.teardown_pending = false;
        host.enter_placement_mode();
        self.navigate_to_fraction(host, Stage::AwaitCenter.depth_fraction());
        host.set_status_text(&Stage::AwaitCenter.guidance(0));
        debug!("acquisition armed, locality {locality:.2}");
        Ok(())
    }

    /// Discard the active session without running the pipeline.
    ///
    /// Safe to call at any stage and when no session is active. Exits
    /// placement mode synchronously; cancellation never originates from
    /// inside the placement callback.
    pub fn cancel<H: SessionHost>(&mut self, host: &mut H) {
        if let Some(session) = self.session.take() {
            debug!(
                "acquisition cancelled at {:?} with {} points",
                session.stage,
                session.points.len()
            );
            host.set_status_text("");
            host.exit_placement_mode();
        }
    }

    /// Feed one committed point-placement event into the machine.
    ///
    /// Returns `Some` exactly once per run: the measurement on success, or
    /// the first error the pipeline hit. Events arriving with no active
    /// session are ignored.
    pub fn on_point_placed<H: SessionHost>(
        &mut self,
        host: &mut H,
        world: Point3<f64>,
    ) -> Option<Result<AnalysisOutput, AnalyzerError>> {
        let (placed, next, advanced) = {
            let Some(session) = self.session.as_mut() else {
                debug!("point event with no active session; ignoring");
                return None;
            };
            session.points.push(world);
            let placed = session.points.len();
            let next = Stage::for_count(placed);
            let advanced = next != session.stage;
            session.stage = next;
            (placed, next, advanced)
        };

        if !advanced {
            // No transition; refresh the remaining-click guidance only.
            host.set_status_text(&next.guidance(placed));
            return None;
        }

        self.navigate_to_fraction(host, next.depth_fraction());

        if next != Stage::Complete {
            host.set_status_text(&next.guidance(placed));
            return None;
        }

        // Final point: run the pipeline on the full sequence, then hand the
        // placement-mode teardown to the host's idle queue. The session is
        // released either way; no partial state survives a failure.
        host.set_status_text(&Stage::Complete.guidance(placed));
        let session = self.session.take()?;
        let outcome = self.run_pipeline(&session);
        match &outcome {
            Ok(output) => {
                host.set_status_text(&format!(
                    "Implant Volume: {:.2}",
                    output.measurement.volume_cc
                ));
            }
            Err(err) => {
                warn!("pipeline failed: {err}");
                host.set_status_text("");
            }
        }
        self.teardown_pending = true;
        host.schedule_idle(IdleTask::ExitPlacement);
        Some(outcome)
    }

    /// Execute a task previously scheduled on the host's idle queue.
    ///
    /// Runs at most once per completed session; repeated delivery of the
    /// same task is a no-op.
    pub fn run_idle<H: SessionHost>(&mut self, host: &mut H, task: IdleTask) {
        match task {
            IdleTask::ExitPlacement => {
                if self.teardown_pending {
                    self.teardown_pending = false;
                    host.exit_placement_mode();
                }
            }
        }
    }

    /// Map a depth fraction through the host's current bounds and navigate.
    /// Bounds are queried fresh on every call; they differ per volume.
    fn navigate_to_fraction<H: SessionHost>(&self, host: &mut H, fraction: f64) {
        let (lo, hi) = host.volume_bounds();
        host.navigate_to(fraction * (hi - lo) + lo);
    }

    fn run_pipeline(
        &self,
        session: &AcquisitionSession,
    ) -> Result<AnalysisOutput, AnalyzerError> {
        let total_start = Instant::now();
        info!(
            "processing started: {} seed points, locality {:.2}",
            session.points.len(),
            session.locality
        );

        let geometry_start = Instant::now();
        let geometry = build_seed_geometry(
            &session.points,
            self.params.foreground_radius_mm,
            self.params.background_radius_mm,
        )?;
        let geometry_ms = geometry_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "inside seed at {:?}, {} outside seeds",
            geometry.foreground.center,
            geometry.background.len()
        );

        let segmentation_start = Instant::now();
        let segmentation = self
            .engine
            .segment(&session.volume, &geometry, session.locality)?;
        let segmentation_ms = segmentation_start.elapsed().as_secs_f64() * 1000.0;

        let statistics_start = Instant::now();
        let stats = segment_statistics(&segmentation.mask, SegmentLabel::Foreground);
        let statistics_ms = statistics_start.elapsed().as_secs_f64() * 1000.0;

        let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        let mut timing = TimingBreakdown {
            total_ms,
            stages: Vec::new(),
        };
        timing.push("geometry", geometry_ms);
        timing.push("segmentation", segmentation_ms);
        timing.push("statistics", statistics_ms);

        info!("processing result: {:.2} cc", stats.volume_cc);
        Ok(AnalysisOutput {
            measurement: Measurement {
                volume_cc: stats.volume_cc,
                foreground_voxels: stats.voxel_count,
                latency_ms: total_ms,
            },
            segmentation,
            timing,
        })
    }
}
