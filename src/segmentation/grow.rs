use super::engine::{SegmentationEngine, SegmentationResult};
use crate::error::AnalyzerError;
use crate::geometry::{SeedGeometry, Sphere};
use crate::volume::{LabelMask, ScalarVolume, SegmentLabel};
use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

const NEIGH_OFFSETS: [(isize, isize, isize); 6] = [
    (-1, 0, 0),
    (1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
];

const UNCLAIMED: u8 = 0;
const FOREGROUND: u8 = 1;
const BACKGROUND: u8 = 2;

/// Embedded competitive seeded region-growing engine.
///
/// See the module docs for the algorithm. The single knob is the travel
/// cost per millimetre applied at `locality = 1`, expressed in normalized
/// intensity units (1.0 = the volume's full intensity range).
#[derive(Clone, Copy, Debug)]
pub struct GrowFromSeeds {
    pub locality_cost_per_mm: f32,
}

impl Default for GrowFromSeeds {
    fn default() -> Self {
        // 1/50: at locality 1, a 50 mm path costs a full-range mismatch.
        Self {
            locality_cost_per_mm: 0.02,
        }
    }
}

impl SegmentationEngine for GrowFromSeeds {
    fn segment(
        &self,
        volume: &ScalarVolume,
        seeds: &SeedGeometry,
        locality: f64,
    ) -> Result<SegmentationResult, AnalyzerError> {
        let start = Instant::now();
        if volume.is_empty() {
            return Err(AnalyzerError::InvalidVolume);
        }
        let locality = locality.clamp(0.0, 1.0);
        let mask = Grower::new(volume, seeds, locality, self.locality_cost_per_mm)?.grow();
        Ok(SegmentationResult {
            mask,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }
}

/// Queue entry: a tentative claim of `idx` by `label` at accumulated `cost`.
/// Total order (cost, then index, then label) keeps heap pops deterministic.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    cost: f32,
    idx: u32,
    label: u8,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.idx.cmp(&other.idx))
            .then_with(|| self.label.cmp(&other.label))
    }
}

struct Grower<'a> {
    volume: &'a ScalarVolume,
    /// Per-voxel class: `UNCLAIMED` until a wavefront claims it.
    labels: Vec<u8>,
    /// Voxels whose neighbours have already been offered.
    expanded: Vec<u8>,
    heap: BinaryHeap<std::cmp::Reverse<Candidate>>,
    /// Mean seed intensity per class, indexed by `label - 1`.
    class_mean: [f32; 2],
    /// Reciprocal of the volume's intensity span.
    inv_span: f32,
    /// Travel cost per millimetre of path, already scaled by locality.
    penalty_per_mm: f32,
}

impl<'a> Grower<'a> {
    fn new(
        volume: &'a ScalarVolume,
        seeds: &SeedGeometry,
        locality: f64,
        locality_cost_per_mm: f32,
    ) -> Result<Self, AnalyzerError> {
        let n = volume.len();
        let (lo, hi) = volume.intensity_range().ok_or(AnalyzerError::InvalidVolume)?;
        let span = (hi - lo).max(f32::EPSILON);

        let mut grower = Self {
            volume,
            labels: vec![UNCLAIMED; n],
            expanded: vec![0u8; n],
            heap: BinaryHeap::with_capacity(1024),
            class_mean: [0.0; 2],
            inv_span: 1.0 / span,
            penalty_per_mm: locality as f32 * locality_cost_per_mm,
        };

        let fg_seeds = grower.rasterize_sphere(&seeds.foreground, FOREGROUND);
        if fg_seeds == 0 {
            return Err(AnalyzerError::SeedOutOfBounds {
                which: SegmentLabel::Foreground.name(),
            });
        }
        let mut bg_seeds = 0usize;
        for sphere in &seeds.background {
            bg_seeds += grower.rasterize_sphere(sphere, BACKGROUND);
        }
        if bg_seeds == 0 {
            return Err(AnalyzerError::SeedOutOfBounds {
                which: SegmentLabel::Background.name(),
            });
        }
        debug!("seed voxels: {fg_seeds} foreground, {bg_seeds} background");

        grower.finalize_class_means(fg_seeds, bg_seeds);
        grower.push_seed_candidates();
        Ok(grower)
    }

    /// Mark every grid voxel whose centre lies inside `sphere`. Voxels
    /// already claimed by the other class keep their first label. Returns
    /// the number of voxels newly marked and accumulates their intensity
    /// into the class mean slot.
    fn rasterize_sphere(&mut self, sphere: &Sphere, label: u8) -> usize {
        let vol = self.volume;
        let Some((x0, x1)) = axis_range(sphere, 0, vol.nx, vol) else {
            return 0;
        };
        let Some((y0, y1)) = axis_range(sphere, 1, vol.ny, vol) else {
            return 0;
        };
        let Some((z0, z1)) = axis_range(sphere, 2, vol.nz, vol) else {
            return 0;
        };

        let mut marked = 0usize;
        let mut intensity_sum = 0.0f32;
        for z in z0..=z1 {
            for y in y0..=y1 {
                for x in x0..=x1 {
                    if !sphere.contains(&vol.voxel_center(x, y, z)) {
                        continue;
                    }
                    let idx = vol.idx(x, y, z);
                    if self.labels[idx] != UNCLAIMED {
                        continue;
                    }
                    self.labels[idx] = label;
                    intensity_sum += vol.data[idx];
                    marked += 1;
                }
            }
        }
        // Accumulate; converted to a mean once all spheres are rasterized.
        self.class_mean[(label - 1) as usize] += intensity_sum;
        marked
    }

    fn finalize_class_means(&mut self, fg_seeds: usize, bg_seeds: usize) {
        self.class_mean[(FOREGROUND - 1) as usize] /= fg_seeds as f32;
        self.class_mean[(BACKGROUND - 1) as usize] /= bg_seeds as f32;
        debug!(
            "seed intensity means: foreground {:.2}, background {:.2}",
            self.class_mean[0], self.class_mean[1]
        );
    }

    fn push_seed_candidates(&mut self) {
        for idx in 0..self.labels.len() {
            if self.labels[idx] != UNCLAIMED {
                self.heap.push(std::cmp::Reverse(Candidate {
                    cost: 0.0,
                    idx: idx as u32,
                    label: self.labels[idx],
                }));
            }
        }
    }

    /// Run both wavefronts to exhaustion and return the final mask.
    fn grow(mut self) -> LabelMask {
        let vol = self.volume;
        let (nx, ny, nz) = (vol.nx, vol.ny, vol.nz);
        let step_mm = [
            vol.spacing_mm[0] as f32,
            vol.spacing_mm[1] as f32,
            vol.spacing_mm[2] as f32,
        ];

        while let Some(std::cmp::Reverse(cand)) = self.heap.pop() {
            let idx = cand.idx as usize;
            if self.expanded[idx] != 0 {
                continue;
            }
            self.expanded[idx] = 1;
            if self.labels[idx] == UNCLAIMED {
                self.labels[idx] = cand.label;
            }
            let label = self.labels[idx];
            let mean = self.class_mean[(label - 1) as usize];

            let x = idx % nx;
            let y = (idx / nx) % ny;
            let z = idx / (nx * ny);
            for (axis, (dx, dy, dz)) in NEIGH_OFFSETS.iter().enumerate() {
                let xn = x as isize + dx;
                let yn = y as isize + dy;
                let zn = z as isize + dz;
                if xn < 0
                    || yn < 0
                    || zn < 0
                    || xn >= nx as isize
                    || yn >= ny as isize
                    || zn >= nz as isize
                {
                    continue;
                }
                let nidx = vol.idx(xn as usize, yn as usize, zn as usize);
                if self.labels[nidx] != UNCLAIMED {
                    continue;
                }
                let dissimilarity = (vol.data[nidx] - mean).abs() * self.inv_span;
                let travel = self.penalty_per_mm * step_mm[axis / 2];
                self.heap.push(std::cmp::Reverse(Candidate {
                    cost: cand.cost + dissimilarity + travel,
                    idx: nidx as u32,
                    label,
                }));
            }
        }

        let mut mask = LabelMask::new(nx, ny, nz, vol.spacing_mm);
        for (dst, &src) in mask.data.iter_mut().zip(&self.labels) {
            if src == FOREGROUND {
                *dst = SegmentLabel::Foreground as u8;
            }
        }
        mask
    }
}

/// Inclusive voxel index range along `axis` whose centres a sphere could
/// cover, clamped to the grid. `None` when the sphere misses the grid.
fn axis_range(sphere: &Sphere, axis: usize, n: usize, vol: &ScalarVolume) -> Option<(usize, usize)> {
    if n == 0 {
        return None;
    }
    let c = sphere.center[axis];
    let lo = ((c - sphere.radius_mm - vol.origin_mm[axis]) / vol.spacing_mm[axis])
        .ceil()
        .max(0.0);
    let hi = ((c + sphere.radius_mm - vol.origin_mm[axis]) / vol.spacing_mm[axis])
        .floor()
        .min((n - 1) as f64);
    (hi >= lo).then(|| (lo as usize, hi as usize))
}
