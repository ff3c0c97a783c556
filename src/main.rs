use implant_analyzer::geometry::{SeedGeometry, Sphere};
use implant_analyzer::segmentation::SegmentationEngine;
use implant_analyzer::stats::segment_statistics;
use implant_analyzer::volume::{ScalarVolume, SegmentLabel};
use implant_analyzer::GrowFromSeeds;
use nalgebra::Point3;

fn main() {
    // Demo stub: segments a bright 12 mm ball in a synthetic volume.
    let mut volume = ScalarVolume::new(40, 40, 40, [2.0, 2.0, 2.0], [0.0, 0.0, 0.0]);
    let center = Point3::new(40.0, 40.0, 40.0);
    for z in 0..volume.nz {
        for y in 0..volume.ny {
            for x in 0..volume.nx {
                let inside = (volume.voxel_center(x, y, z) - center).norm() <= 12.0;
                volume.set(x, y, z, if inside { 400.0 } else { 50.0 });
            }
        }
    }

    let seeds = SeedGeometry {
        foreground: Sphere {
            center,
            radius_mm: 5.0,
        },
        background: vec![Sphere {
            center: Point3::new(6.0, 6.0, 6.0),
            radius_mm: 3.0,
        }],
    };

    let engine = GrowFromSeeds::default();
    let result = engine.segment(&volume, &seeds, 0.0).expect("segmentation");
    let stats = segment_statistics(&result.mask, SegmentLabel::Foreground);
    println!(
        "volume={:.2}cc voxels={} latency_ms={:.3}",
        stats.volume_cc, stats.voxel_count, result.elapsed_ms
    );
}
