//! Inside-out camera over the celestial sphere.
//!
//! The observer sits at the origin of the sphere; look and up are unit
//! vectors kept mutually perpendicular through every mutation, and
//! projection is a standard perspective transform onto the given screen.

use nalgebra::{Vector3, Vector4};

use crate::celestial::CelestialCoordinate;
use crate::math::{axis_angle_matrix, perspective_matrix, view_matrix};

const NEAR: f64 = 0.1;
const FAR: f64 = 100.0;

/// Below this length the north-perpendicular component is too short to
/// normalize safely; corresponds to looking within ~0.6 degrees of a pole.
const POLE_LIMIT: f64 = 0.01;

pub struct Camera {
    look: Vector3<f64>,
    up: Vector3<f64>,
    fov_y: f64,
}

impl Camera {
    pub fn new(fov_y: f64) -> Self {
        Self {
            look: Vector3::x(),
            up: Vector3::z(),
            fov_y,
        }
    }

    pub fn fov_y(&self) -> f64 {
        self.fov_y
    }

    pub fn set_fov(&mut self, fov_y: f64) {
        self.fov_y = fov_y;
    }

    pub fn zoom_fov(&mut self, factor: f64, min: f64, max: f64) {
        self.fov_y = (self.fov_y * factor).clamp(min, max);
    }

    /// Derived on demand so it can never go stale after a rotation.
    pub fn right_direction(&self) -> Vector3<f64> {
        self.look.cross(&self.up).normalize()
    }

    pub fn look_at(&mut self, coord: &CelestialCoordinate) {
        self.look = coord.to_direction();
        if !self.recompute_up() {
            // Staring straight at a pole: any perpendicular axis serves.
            self.up = Vector3::y();
        }
    }

    /// Applies the horizontal rotation about the current up axis first, so
    /// the right axis for the vertical rotation comes from the already
    /// yawed look direction.
    pub fn rotate(&mut self, horizontal: f64, vertical: f64) {
        self.look = (axis_angle_matrix(&self.up, horizontal) * self.look).normalize();
        let right = self.right_direction();
        self.look = (axis_angle_matrix(&right, vertical) * self.look).normalize();
        self.recompute_up();
    }

    pub fn current_coordinate(&self) -> CelestialCoordinate {
        CelestialCoordinate::from_direction(&self.look)
    }

    /// Projects a point to pixel coordinates, or `None` when it is not in
    /// front of the camera. `None` is the everyday outcome for roughly half
    /// the sky on any frame, not an error.
    pub fn project(&self, point: &Vector3<f64>, screen: (f32, f32)) -> Option<(f32, f32)> {
        debug_assert!(point.x.is_finite() && point.y.is_finite() && point.z.is_finite());
        if point.normalize().dot(&self.look) <= 0.0 {
            return None;
        }
        let (w, h) = (screen.0 as f64, screen.1 as f64);
        let view = view_matrix(&self.look, &self.up);
        let proj = perspective_matrix(self.fov_y, w / h, NEAR, FAR);
        let clip = proj * view * Vector4::new(point.x, point.y, point.z, 1.0);
        if clip.w.abs() < 1e-12 {
            return None;
        }
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        Some((
            ((ndc_x + 1.0) * w / 2.0) as f32,
            ((1.0 - ndc_y) * h / 2.0) as f32,
        ))
    }

    /// Re-derives up as the component of celestial north perpendicular to
    /// the look direction. Returns false, leaving up untouched, when the
    /// look direction is close enough to a pole for that component to
    /// vanish.
    fn recompute_up(&mut self) -> bool {
        let north = Vector3::z();
        let perp = north - self.look * north.dot(&self.look);
        if perp.norm() < POLE_LIMIT {
            return false;
        }
        self.up = perp.normalize();
        true
    }
}
