//! Projection-mode state and the two celestial-to-screen paths.
//!
//! `SkyView` wraps the camera with the accumulated 2D-map transform
//! (pan, zoom, rotation) and dispatches every gesture and projection to
//! whichever mode is active. Screen size is a per-call parameter, so a
//! resize takes effect on the very next frame.

use std::f64::consts::PI;

use crate::camera::Camera;
use crate::celestial::CelestialCoordinate;
use crate::config::ViewConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    Sphere3D,
    Stereographic2D,
}

pub struct SkyView {
    mode: ProjectionMode,
    camera: Camera,
    center_2d: CelestialCoordinate,
    /// Pan offset as fractions of the viewport, unbounded.
    pan: (f64, f64),
    zoom: f64,
    /// Map rotation in radians, wrapped into [0, 2pi).
    rotation: f64,
    auto_rotate: bool,
    gesture_active: bool,
    config: ViewConfig,
}

impl SkyView {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            mode: ProjectionMode::Sphere3D,
            camera: Camera::new(config.fov_default_deg.to_radians()),
            center_2d: CelestialCoordinate::new(0.0, 0.0),
            pan: (0.0, 0.0),
            zoom: 1.0,
            rotation: 0.0,
            auto_rotate: false,
            gesture_active: false,
            config,
        }
    }

    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    /// Flipping modes never touches the other mode's accumulated state.
    pub fn set_mode(&mut self, mode: ProjectionMode) {
        self.mode = mode;
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.config.zoom_min, self.config.zoom_max);
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    pub fn fov_deg(&self) -> f64 {
        self.camera.fov_y().to_degrees()
    }

    pub fn set_fov_deg(&mut self, deg: f64) {
        let clamped = deg.clamp(self.config.fov_min_deg, self.config.fov_max_deg);
        self.camera.set_fov(clamped.to_radians());
    }

    pub fn set_view_center(&mut self, coord: CelestialCoordinate) {
        match self.mode {
            ProjectionMode::Sphere3D => self.camera.look_at(&coord),
            ProjectionMode::Stereographic2D => {
                self.center_2d = coord;
                self.pan = (0.0, 0.0);
            }
        }
    }

    pub fn view_center(&self) -> CelestialCoordinate {
        match self.mode {
            ProjectionMode::Sphere3D => self.camera.current_coordinate(),
            ProjectionMode::Stereographic2D => self.center_2d,
        }
    }

    /// Drag deltas arrive as fractions of the viewport.
    pub fn drag(&mut self, dx: f64, dy: f64) {
        self.gesture_active = true;
        match self.mode {
            ProjectionMode::Sphere3D => {
                let fov = self.camera.fov_y();
                self.camera.rotate(dx * fov, dy * fov);
            }
            ProjectionMode::Stereographic2D => {
                self.pan.0 += dx;
                self.pan.1 += dy;
            }
        }
    }

    /// Relative pinch factor, 1.0 meaning no change.
    pub fn pinch(&mut self, scale: f64) {
        if !scale.is_finite() || scale <= 0.0 {
            return;
        }
        self.gesture_active = true;
        match self.mode {
            ProjectionMode::Sphere3D => {
                // Pinching out narrows the field of view.
                self.camera.zoom_fov(
                    1.0 / scale,
                    self.config.fov_min_deg.to_radians(),
                    self.config.fov_max_deg.to_radians(),
                );
            }
            ProjectionMode::Stereographic2D => {
                self.zoom = (self.zoom * scale).clamp(self.config.zoom_min, self.config.zoom_max);
            }
        }
    }

    /// Two-finger rotation; only the 2D map carries a rotation angle.
    pub fn rotate_by(&mut self, angle: f64) {
        self.gesture_active = true;
        if self.mode == ProjectionMode::Stereographic2D {
            self.rotation = wrap_angle(self.rotation + angle);
        }
    }

    /// Clears the in-progress marker; committed pan/zoom/rotation stay.
    pub fn end_gesture(&mut self) {
        self.gesture_active = false;
    }

    /// Advances the view by the fixed auto-rotation rate. Gestures take
    /// precedence: a tick during an active gesture is a no-op.
    pub fn tick_auto_rotation(&mut self) {
        if !self.auto_rotate || self.gesture_active {
            return;
        }
        match self.mode {
            ProjectionMode::Sphere3D => self.camera.rotate(self.config.auto_rotate_rate, 0.0),
            ProjectionMode::Stereographic2D => {
                self.rotation = wrap_angle(self.rotation + self.config.auto_rotate_rate);
            }
        }
    }

    pub fn project_star(
        &self,
        coord: &CelestialCoordinate,
        screen: (f32, f32),
    ) -> Option<(f32, f32)> {
        match self.mode {
            ProjectionMode::Sphere3D => self.camera.project(&coord.to_direction(), screen),
            ProjectionMode::Stereographic2D => self.project_stereographic(coord, screen),
        }
    }

    /// Azimuthal stereographic projection about the current 2D view
    /// center. Stars approaching the antipode of the center would map
    /// toward infinity; they are culled well before the singularity.
    fn project_stereographic(
        &self,
        coord: &CelestialCoordinate,
        screen: (f32, f32),
    ) -> Option<(f32, f32)> {
        let lam0 = self.center_2d.ra_deg.to_radians();
        let phi1 = self.center_2d.dec_deg.to_radians();
        let lam = coord.ra_deg.to_radians();
        let phi = coord.dec_deg.to_radians();

        let cos_c = phi1.sin() * phi.sin() + phi1.cos() * phi.cos() * (lam - lam0).cos();
        if cos_c.clamp(-1.0, 1.0).acos() > self.config.stereo_cull_deg.to_radians() {
            return None;
        }
        let denom = 1.0 + cos_c;
        if denom < 1e-9 {
            return None;
        }
        let k = 2.0 / denom;
        let x = k * phi.cos() * (lam - lam0).sin();
        let y = k * (phi1.cos() * phi.sin() - phi1.sin() * phi.cos() * (lam - lam0).cos());

        // Viewed from inside the sphere, right ascension grows toward
        // screen left, matching the 3D mode's handedness.
        let (w, h) = (screen.0 as f64, screen.1 as f64);
        let scale = self.zoom * w.min(h) / 4.0;
        let (sin_r, cos_r) = self.rotation.sin_cos();
        let xr = x * cos_r - y * sin_r;
        let yr = x * sin_r + y * cos_r;
        let px = w / 2.0 + self.pan.0 * w - scale * xr;
        let py = h / 2.0 + self.pan.1 * h - scale * yr;
        Some((px as f32, py as f32))
    }
}

fn wrap_angle(angle: f64) -> f64 {
    let mut wrapped = angle % (2.0 * PI);
    if wrapped < 0.0 {
        wrapped += 2.0 * PI;
    }
    wrapped
}
