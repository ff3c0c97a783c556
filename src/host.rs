//! Narrow seam between the acquisition machine and its host application.
//!
//! The host owns the actual UI: slice viewer, status label, point-placement
//! interaction mode. The machine only ever talks to it through this trait,
//! so a GUI, a scripted batch driver and a test mock are interchangeable.

/// Work the machine asks the host to run after the current event dispatch.
///
/// Tearing down placement infrastructure from inside its own point callback
/// is a re-entrancy hazard, so completion schedules the teardown here
/// instead. The host runs each scheduled task exactly once, after the
/// current dispatch finishes, by feeding it back through
/// [`SeedAcquisition::run_idle`](crate::SeedAcquisition::run_idle).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdleTask {
    /// Leave point-placement mode for the completed session.
    ExitPlacement,
}

/// Host capabilities consumed by the acquisition machine.
pub trait SessionHost {
    /// Physical bounds of the slice navigation axis for the active volume,
    /// millimetres. Queried at every stage transition, never cached.
    fn volume_bounds(&self) -> (f64, f64);

    /// Move the slice viewer to the given depth. Best-effort, no ack.
    fn navigate_to(&mut self, depth_mm: f64);

    /// Replace the guidance/result text. Fire-and-forget.
    fn set_status_text(&mut self, text: &str);

    /// Arm the host's point-placement interaction mode.
    fn enter_placement_mode(&mut self);

    /// Disarm the host's point-placement interaction mode.
    fn exit_placement_mode(&mut self);

    /// Run `task` once the current event dispatch has finished.
    fn schedule_idle(&mut self, task: IdleTask);
}
