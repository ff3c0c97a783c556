//! Table-driven stage order for the 14-point placement protocol.
use serde::Serialize;

/// Total number of seed points one completed run collects.
pub const TOTAL_PROTOCOL_POINTS: usize = 14;

/// Acquisition stage, in protocol order.
///
/// Derive order matters: later stages compare greater, which is what the
/// monotonicity checks rely on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Stage {
    /// Waiting for the single inside click at the volume centre.
    AwaitCenter,
    /// Outside clicks on the centre slice.
    Periphery1,
    /// One outside click near the low end of the navigation axis.
    Periphery2,
    /// Outside clicks at the lower quarter.
    Periphery3,
    /// Outside clicks at the upper quarter.
    Periphery4,
    /// Outside clicks near the high end.
    Periphery5,
    /// All points collected; the pipeline runs on entry.
    Complete,
}

struct StageRow {
    stage: Stage,
    /// Cumulative point count at which the stage is left.
    exit_count: usize,
    /// Normalized slice depth the host should show while the stage is active.
    depth_fraction: f64,
}

/// Acquisition stages in order. `Complete` is not listed; it is entered when
/// the final count is reached and resets navigation to the centre.
const STAGE_TABLE: [StageRow; 6] = [
    StageRow {
        stage: Stage::AwaitCenter,
        exit_count: 1,
        depth_fraction: 0.5,
    },
    StageRow {
        stage: Stage::Periphery1,
        exit_count: 5,
        depth_fraction: 0.5,
    },
    StageRow {
        stage: Stage::Periphery2,
        exit_count: 6,
        depth_fraction: 0.1,
    },
    StageRow {
        stage: Stage::Periphery3,
        exit_count: 9,
        depth_fraction: 0.25,
    },
    StageRow {
        stage: Stage::Periphery4,
        exit_count: 12,
        depth_fraction: 0.75,
    },
    StageRow {
        stage: Stage::Periphery5,
        exit_count: TOTAL_PROTOCOL_POINTS,
        depth_fraction: 0.9,
    },
];

impl Stage {
    /// The stage active after `placed` points: a non-decreasing step
    /// function of the count.
    pub fn for_count(placed: usize) -> Stage {
        for row in &STAGE_TABLE {
            if placed < row.exit_count {
                return row.stage;
            }
        }
        Stage::Complete
    }

    /// Cumulative count at which this stage is left; `None` for `Complete`.
    pub fn exit_count(self) -> Option<usize> {
        STAGE_TABLE
            .iter()
            .find(|row| row.stage == self)
            .map(|row| row.exit_count)
    }

    /// Normalized slice depth shown while the stage is active. `Complete`
    /// resets the view to the centre.
    pub fn depth_fraction(self) -> f64 {
        STAGE_TABLE
            .iter()
            .find(|row| row.stage == self)
            .map(|row| row.depth_fraction)
            .unwrap_or(0.5)
    }

    /// Guidance text for the status label, given the current count.
    pub fn guidance(self, placed: usize) -> String {
        match self {
            Stage::AwaitCenter => "Click INSIDE the center of the implant".to_string(),
            Stage::Complete => "Calculating implant volume...".to_string(),
            _ => {
                let remaining = self.exit_count().unwrap_or(placed).saturating_sub(placed);
                format!("Click OUTSIDE the implant {remaining} times")
            }
        }
    }
}
