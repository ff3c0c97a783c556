use implant_analyzer::volume::ScalarVolume;
use nalgebra::Point3;

/// Centre of the phantom implant: the canonical inside click.
pub const IMPLANT_CENTER: [f64; 3] = [90.54, -9.29, 16.15];
/// Phantom implant semi-axes, millimetres (≈352.6 cc ellipsoid).
pub const IMPLANT_SEMI_AXES: [f64; 3] = [44.0, 32.0, 59.8];

/// Two-level ellipsoid phantom shaped like the reference breast-implant
/// data set: bright implant (480) against darker tissue (70), 2 mm
/// isotropic spacing, grid covering all canonical seed positions.
pub fn implant_phantom() -> ScalarVolume {
    let mut vol = ScalarVolume::new(100, 60, 117, [2.0, 2.0, 2.0], [0.0, -80.0, -100.45]);
    let center = Point3::from(IMPLANT_CENTER);
    for z in 0..vol.nz {
        for y in 0..vol.ny {
            for x in 0..vol.nx {
                let q = ellipsoid_q(&vol.voxel_center(x, y, z), &center);
                vol.set(x, y, z, if q <= 1.0 { 480.0 } else { 70.0 });
            }
        }
    }
    vol
}

/// Ground truth for the phantom: physical volume (cc) of the voxels whose
/// centres fall inside the analytic ellipsoid.
pub fn phantom_discretized_cc(vol: &ScalarVolume) -> f64 {
    let center = Point3::from(IMPLANT_CENTER);
    let mut count = 0usize;
    for z in 0..vol.nz {
        for y in 0..vol.ny {
            for x in 0..vol.nx {
                if ellipsoid_q(&vol.voxel_center(x, y, z), &center) <= 1.0 {
                    count += 1;
                }
            }
        }
    }
    count as f64 * vol.voxel_volume_mm3() / 1000.0
}

fn ellipsoid_q(p: &Point3<f64>, center: &Point3<f64>) -> f64 {
    let d = p - center;
    (d.x / IMPLANT_SEMI_AXES[0]).powi(2)
        + (d.y / IMPLANT_SEMI_AXES[1]).powi(2)
        + (d.z / IMPLANT_SEMI_AXES[2]).powi(2)
}

/// The canonical 14-point acquisition sequence: one inside click, then 13
/// outside clicks over five slice strata.
pub fn protocol_points() -> Vec<Point3<f64>> {
    vec![
        Point3::new(90.54, -9.29, 16.15),
        Point3::new(103.62, 25.87, 16.15),
        Point3::new(152.69, 2.16, 16.15),
        Point3::new(86.45, -47.73, 16.15),
        Point3::new(16.94, 0.52, 16.15),
        Point3::new(70.09, 24.24, -77.13),
        Point3::new(83.18, -55.09, -42.15),
        Point3::new(155.96, -12.56, -42.15),
        Point3::new(71.73, 21.78, -42.15),
        Point3::new(83.99, 13.61, 74.45),
        Point3::new(132.24, -17.47, 74.45),
        Point3::new(43.92, -54.27, 74.45),
        Point3::new(79.09, -20.74, 109.43),
        Point3::new(81.54, -22.38, 109.43),
    ]
}
