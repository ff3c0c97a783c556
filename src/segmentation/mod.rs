//! Seeded two-class segmentation.
//!
//! The acquisition machine talks to segmentation through the narrow
//! [`SegmentationEngine`] trait: volume + seed solids + locality in, a
//! two-class labelled mask out. The embedded [`GrowFromSeeds`] engine
//! implements the contract with competitive seeded region growing:
//!
//! - Seed solids are rasterized onto the voxel grid; every covered voxel
//!   becomes a zero-cost seed for its class, and each class records the
//!   mean intensity of its seed voxels.
//! - Both classes then grow over the 6-connected voxel graph in best-first
//!   order. A voxel's cost is the accumulated intensity dissimilarity to
//!   the owning class's seed mean along the growth path; whichever class
//!   reaches a voxel at lower cost claims it.
//! - `locality` adds a travel penalty per millimetre of path, normalized
//!   against the volume's intensity range. At 0 the classes compete over
//!   the whole volume on intensity alone; at 1 a ~50 mm detour costs as
//!   much as a full-range intensity mismatch, pinning growth to the seeds.
//!
//! The engine is a pure function of its inputs: identical volume, seeds
//! and locality produce the identical mask, and the two classes can never
//! merge (every voxel carries exactly one label).

mod engine;
mod grow;

pub use engine::{SegmentationEngine, SegmentationResult};
pub use grow::GrowFromSeeds;

#[cfg(test)]
mod tests;
