/// Perspective projection of rotated 3D points onto the drawing plane
use nalgebra::{Point2, Point3};

use crate::transform::RotationState;

/// Default distance from the camera to the projection origin.
///
/// For the unit cube every rotated depth satisfies |z| <= sqrt(3), so with
/// this distance the perspective divisor never approaches zero.
pub const CAMERA_DISTANCE: f64 = 3.0;

/// Divisor magnitudes below this are treated as degenerate
const MIN_DIVISOR: f64 = 1e-9;

/// Stateless perspective projector.
///
/// Rotates a point about the X axis, then the Y axis, then applies a
/// perspective divide against the configured camera distance. Pure: the
/// output depends only on the point and the rotation angles.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    pub camera_distance: f64,
}

impl Projector {
    pub fn new(camera_distance: f64) -> Self {
        Self { camera_distance }
    }

    /// Project a 3D point to normalized 2D space under the given rotation.
    ///
    /// Returns `None` when the rotated depth lands on the camera plane and
    /// the perspective divisor vanishes. Unreachable for the built-in cube,
    /// but shapes extending past the camera distance can trigger it.
    pub fn project(&self, point: &Point3<f64>, rotation: &RotationState) -> Option<Point2<f64>> {
        let (x, y, z) = (point.x, point.y, point.z);

        // Rotation about X
        let (sin_x, cos_x) = rotation.x.sin_cos();
        let y1 = y * cos_x - z * sin_x;
        let z1 = z * cos_x + y * sin_x;

        // Rotation about Y
        let (sin_y, cos_y) = rotation.y.sin_cos();
        let x1 = x * cos_y - z1 * sin_y;
        let z2 = z1 * cos_y + x * sin_y;

        let divisor = self.camera_distance + z2;
        if divisor.abs() < MIN_DIVISOR {
            return None;
        }

        let perspective = self.camera_distance / divisor;
        Some(Point2::new(x1 * perspective, y1 * perspective))
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(CAMERA_DISTANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_projection_is_pure() {
        let projector = Projector::default();
        let point = Point3::new(0.3, -0.7, 0.9);
        let rotation = RotationState::new(1.1, 2.3);

        let first = projector.project(&point, &rotation).unwrap();
        for _ in 0..10 {
            let again = projector.project(&point, &rotation).unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_identity_rotation_is_pure_perspective() {
        let projector = Projector::default();
        let rotation = RotationState::zero();

        for point in crate::geometry::Wireframe::cube().vertices() {
            let projected = projector.project(point, &rotation).unwrap();
            let perspective = 3.0 / (3.0 + point.z);
            assert!((projected.x - point.x * perspective).abs() < 1e-9);
            assert!((projected.y - point.y * perspective).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unit_x_projects_onto_itself() {
        let projector = Projector::default();
        let projected = projector
            .project(&Point3::new(1.0, 0.0, 0.0), &RotationState::zero())
            .unwrap();
        assert!((projected.x - 1.0).abs() < 1e-9);
        assert!(projected.y.abs() < 1e-9);
    }

    #[test]
    fn test_quarter_turn_about_y() {
        let projector = Projector::default();
        let projected = projector
            .project(
                &Point3::new(0.0, 0.0, 1.0),
                &RotationState::new(0.0, FRAC_PI_2),
            )
            .unwrap();
        assert!((projected.x - -1.0).abs() < 1e-9);
        assert!(projected.y.abs() < 1e-9);
    }

    #[test]
    fn test_vanishing_divisor_is_rejected() {
        let projector = Projector::default();
        let projected = projector.project(&Point3::new(0.0, 0.0, -3.0), &RotationState::zero());
        assert!(projected.is_none());
    }
}
