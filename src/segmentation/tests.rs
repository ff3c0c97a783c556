use super::*;
use crate::error::AnalyzerError;
use crate::geometry::{SeedGeometry, Sphere};
use crate::volume::{ScalarVolume, SegmentLabel};
use nalgebra::Point3;

/// 20 mm cube at 1 mm spacing with a bright ball (intensity 500 vs 60)
/// of radius `r` centred in the middle.
fn ball_phantom(r: f64) -> ScalarVolume {
    let mut vol = ScalarVolume::new(20, 20, 20, [1.0, 1.0, 1.0], [0.0, 0.0, 0.0]);
    let center = Point3::new(10.0, 10.0, 10.0);
    for z in 0..20 {
        for y in 0..20 {
            for x in 0..20 {
                let inside = (vol.voxel_center(x, y, z) - center).norm() <= r;
                vol.set(x, y, z, if inside { 500.0 } else { 60.0 });
            }
        }
    }
    vol
}

fn seeds_at(fg: Point3<f64>, bg: Point3<f64>, radius: f64) -> SeedGeometry {
    SeedGeometry {
        foreground: Sphere {
            center: fg,
            radius_mm: radius,
        },
        background: vec![Sphere {
            center: bg,
            radius_mm: radius,
        }],
    }
}

#[test]
fn bright_ball_is_recovered_exactly() {
    let vol = ball_phantom(5.0);
    let seeds = seeds_at(Point3::new(10.0, 10.0, 10.0), Point3::new(3.0, 3.0, 3.0), 2.0);
    let result = GrowFromSeeds::default().segment(&vol, &seeds, 0.0).unwrap();

    for z in 0..20 {
        for y in 0..20 {
            for x in 0..20 {
                let expect = if vol.get(x, y, z) > 250.0 {
                    SegmentLabel::Foreground
                } else {
                    SegmentLabel::Background
                };
                assert_eq!(
                    result.mask.get(x, y, z),
                    expect,
                    "wrong label at ({x}, {y}, {z})"
                );
            }
        }
    }
}

#[test]
fn identical_inputs_give_identical_masks() {
    let vol = ball_phantom(5.0);
    let seeds = seeds_at(Point3::new(10.0, 10.0, 10.0), Point3::new(3.0, 3.0, 3.0), 2.0);
    let engine = GrowFromSeeds::default();
    let a = engine.segment(&vol, &seeds, 0.3).unwrap();
    let b = engine.segment(&vol, &seeds, 0.3).unwrap();
    assert_eq!(a.mask.data, b.mask.data);
}

#[test]
fn both_classes_are_present_in_the_output() {
    let vol = ball_phantom(5.0);
    let seeds = seeds_at(Point3::new(10.0, 10.0, 10.0), Point3::new(3.0, 3.0, 3.0), 2.0);
    let result = GrowFromSeeds::default().segment(&vol, &seeds, 0.0).unwrap();
    let fg = result
        .mask
        .data
        .iter()
        .filter(|&&v| v == SegmentLabel::Foreground as u8)
        .count();
    assert!(fg > 0, "foreground class vanished");
    assert!(fg < result.mask.data.len(), "background class vanished");
}

#[test]
fn locality_splits_a_uniform_corridor_by_distance() {
    // Flat intensity: with locality the only cost is travel, so each seed
    // claims its own end of the corridor.
    let vol = ScalarVolume::new(60, 3, 3, [1.0, 1.0, 1.0], [0.0, 0.0, 0.0]);
    let seeds = seeds_at(Point3::new(5.0, 1.0, 1.0), Point3::new(55.0, 1.0, 1.0), 1.5);
    let result = GrowFromSeeds::default().segment(&vol, &seeds, 1.0).unwrap();
    assert_eq!(result.mask.get(10, 1, 1), SegmentLabel::Foreground);
    assert_eq!(result.mask.get(50, 1, 1), SegmentLabel::Background);
}

#[test]
fn empty_volume_is_rejected() {
    let vol = ScalarVolume::new(0, 0, 0, [1.0, 1.0, 1.0], [0.0, 0.0, 0.0]);
    let seeds = seeds_at(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0), 2.0);
    let err = GrowFromSeeds::default()
        .segment(&vol, &seeds, 0.0)
        .unwrap_err();
    assert!(matches!(err, AnalyzerError::InvalidVolume));
}

#[test]
fn seed_solids_must_intersect_the_grid() {
    let vol = ball_phantom(5.0);

    let fg_outside = seeds_at(Point3::new(500.0, 500.0, 500.0), Point3::new(3.0, 3.0, 3.0), 2.0);
    let err = GrowFromSeeds::default()
        .segment(&vol, &fg_outside, 0.0)
        .unwrap_err();
    assert!(matches!(
        err,
        AnalyzerError::SeedOutOfBounds {
            which: "foreground"
        }
    ));

    let bg_outside = seeds_at(
        Point3::new(10.0, 10.0, 10.0),
        Point3::new(-500.0, 0.0, 0.0),
        2.0,
    );
    let err = GrowFromSeeds::default()
        .segment(&vol, &bg_outside, 0.0)
        .unwrap_err();
    assert!(matches!(
        err,
        AnalyzerError::SeedOutOfBounds {
            which: "background"
        }
    ));
}
