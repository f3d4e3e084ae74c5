//! Explicit matrix constructions for the camera.
//!
//! Axis-angle rotation plus the view and perspective matrices the
//! projection needs, written out element by element.

use nalgebra::{Matrix3, Matrix4, Vector3};

/// Rotation matrix about a unit axis, Rodrigues form.
pub fn axis_angle_matrix(axis: &Vector3<f64>, angle: f64) -> Matrix3<f64> {
    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);
    Matrix3::new(
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,
    )
}

/// View matrix for an observer at the origin looking along `look`.
pub fn view_matrix(look: &Vector3<f64>, up: &Vector3<f64>) -> Matrix4<f64> {
    let f = look.normalize();
    let s = f.cross(up).normalize();
    let u = s.cross(&f);
    Matrix4::new(
        s.x, s.y, s.z, 0.0,
        u.x, u.y, u.z, 0.0,
        -f.x, -f.y, -f.z, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Symmetric-frustum perspective matrix in GL clip-space conventions.
pub fn perspective_matrix(fov_y: f64, aspect: f64, near: f64, far: f64) -> Matrix4<f64> {
    let f = 1.0 / (fov_y / 2.0).tan();
    Matrix4::new(
        f / aspect, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, (far + near) / (near - far), 2.0 * far * near / (near - far),
        0.0, 0.0, -1.0, 0.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector4;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-12;

    fn assert_vec_close(a: Vector3<f64>, b: Vector3<f64>, tol: f64) {
        assert!((a - b).norm() < tol, "expected {a:?} ~= {b:?}");
    }

    #[test]
    fn axis_angle_quarter_turn_about_z() {
        let rot = axis_angle_matrix(&Vector3::z(), FRAC_PI_2);
        assert_vec_close(rot * Vector3::x(), Vector3::y(), EPS);
        assert_vec_close(rot * Vector3::y(), -Vector3::x(), EPS);
        assert_vec_close(rot * Vector3::z(), Vector3::z(), EPS);
    }

    #[test]
    fn axis_angle_preserves_length() {
        let axis = Vector3::new(1.0, 2.0, -0.5).normalize();
        let rot = axis_angle_matrix(&axis, 0.7);
        let v = Vector3::new(-3.0, 0.25, 1.5);
        assert!(((rot * v).norm() - v.norm()).abs() < EPS);
    }

    #[test]
    fn view_matrix_sends_look_to_negative_z() {
        let look = Vector3::new(1.0, 1.0, 0.0).normalize();
        let up = Vector3::z();
        let view = view_matrix(&look, &up);
        let v = view * Vector4::new(look.x, look.y, look.z, 1.0);
        assert!(v.x.abs() < EPS);
        assert!(v.y.abs() < EPS);
        assert!((v.z + 1.0).abs() < EPS);
    }

    #[test]
    fn perspective_center_ray_maps_to_origin() {
        let proj = perspective_matrix(1.0, 1.5, 0.1, 100.0);
        let clip = proj * Vector4::new(0.0, 0.0, -1.0, 1.0);
        assert!(clip.x.abs() < EPS);
        assert!(clip.y.abs() < EPS);
        assert!(clip.w > 0.0);
    }
}
