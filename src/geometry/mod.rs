//! Seed marker geometry.
//!
//! Turns the ordered point sequence collected by the acquisition protocol
//! into solid marker spheres usable as segmentation seeds. The first point
//! is the single inside (foreground) marker; every later point marks
//! background tissue. Roles are positional, never stored per point.
//!
//! Marker radii are fixed configuration constants in millimetres,
//! independent of the volume's spacing or extent.
use crate::error::AnalyzerError;
use nalgebra::Point3;
use serde::Serialize;

/// Radius of the single foreground marker sphere, millimetres.
pub const FOREGROUND_SEED_RADIUS_MM: f64 = 5.0;
/// Radius of each background marker sphere, millimetres.
pub const BACKGROUND_SEED_RADIUS_MM: f64 = 3.0;

/// Solid sphere in world space.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sphere {
    pub center: Point3<f64>,
    pub radius_mm: f64,
}

impl Sphere {
    /// True when the world point lies inside or on the sphere.
    #[inline]
    pub fn contains(&self, p: &Point3<f64>) -> bool {
        (p - self.center).norm_squared() <= self.radius_mm * self.radius_mm
    }
}

/// Immutable seed solids derived from one completed point sequence.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedGeometry {
    /// Single solid centred on the inside click.
    pub foreground: Sphere,
    /// Union of solids centred on the outside clicks.
    pub background: Vec<Sphere>,
}

/// Build seed solids from an ordered point sequence.
///
/// Requires at least two points (one inside + one outside); the full
/// protocol always supplies 14, but the builder only checks its own
/// contract. Pure function of its input.
pub fn build_seed_geometry(
    points: &[Point3<f64>],
    foreground_radius_mm: f64,
    background_radius_mm: f64,
) -> Result<SeedGeometry, AnalyzerError> {
    if points.len() < 2 {
        return Err(AnalyzerError::InsufficientSeeds { got: points.len() });
    }
    let foreground = Sphere {
        center: points[0],
        radius_mm: foreground_radius_mm,
    };
    let background = points[1..]
        .iter()
        .map(|&center| Sphere {
            center,
            radius_mm: background_radius_mm,
        })
        .collect();
    Ok(SeedGeometry {
        foreground,
        background,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protocol_points() -> Vec<Point3<f64>> {
        (0..14)
            .map(|i| Point3::new(i as f64, 2.0 * i as f64, -(i as f64)))
            .collect()
    }

    #[test]
    fn first_point_becomes_foreground_sphere() {
        let points = protocol_points();
        let geo = build_seed_geometry(&points, FOREGROUND_SEED_RADIUS_MM, BACKGROUND_SEED_RADIUS_MM)
            .unwrap();
        assert_eq!(geo.foreground.center, points[0]);
        assert_eq!(geo.foreground.radius_mm, 5.0);
        assert_eq!(geo.background.len(), 13);
        for (sphere, src) in geo.background.iter().zip(&points[1..]) {
            assert_eq!(sphere.center, *src);
            assert_eq!(sphere.radius_mm, 3.0);
        }
    }

    #[test]
    fn fewer_than_two_points_is_rejected() {
        for n in 0..2usize {
            let points = protocol_points()[..n].to_vec();
            let err = build_seed_geometry(&points, 5.0, 3.0).unwrap_err();
            match err {
                AnalyzerError::InsufficientSeeds { got } => assert_eq!(got, n),
                other => panic!("expected InsufficientSeeds, got {other:?}"),
            }
        }
    }

    #[test]
    fn two_points_are_enough() {
        let points = protocol_points()[..2].to_vec();
        let geo = build_seed_geometry(&points, 5.0, 3.0).unwrap();
        assert_eq!(geo.background.len(), 1);
    }

    #[test]
    fn sphere_containment() {
        let s = Sphere {
            center: Point3::new(0.0, 0.0, 0.0),
            radius_mm: 2.0,
        };
        assert!(s.contains(&Point3::new(1.0, 1.0, 1.0)));
        assert!(s.contains(&Point3::new(2.0, 0.0, 0.0)));
        assert!(!s.contains(&Point3::new(2.1, 0.0, 0.0)));
    }
}
