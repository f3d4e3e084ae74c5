//! Viewer tuning knobs.
//!
//! Everything gesture- and rendering-related that is a judgement call
//! rather than math lives here, so the shell can expose or override it.

#[derive(Debug, Clone, Copy)]
pub struct ViewConfig {
    /// Maximum tap-to-star pixel distance that still selects the star.
    pub tap_threshold_px: f32,
    /// Margin around the viewport inside which 2D-mode stars stay tappable.
    pub overscan_px: f32,
    pub zoom_min: f64,
    pub zoom_max: f64,
    /// Auto-rotation advance per animation tick, radians.
    pub auto_rotate_rate: f64,
    pub fov_min_deg: f64,
    pub fov_max_deg: f64,
    pub fov_default_deg: f64,
    /// Angular separation from the 2D view center beyond which stars are
    /// culled, keeping clear of the stereographic singularity.
    pub stereo_cull_deg: f64,
    /// Twinkle phase advance per animation tick.
    pub twinkle_rate: f64,
    /// Relative radius modulation of the twinkle effect.
    pub twinkle_amount: f64,
    /// Pixel scale applied to the magnitude-derived star radius.
    pub star_scale: f64,
}

impl ViewConfig {
    pub fn new() -> Self {
        Self {
            tap_threshold_px: 25.0,
            overscan_px: 100.0,
            zoom_min: 0.2,
            zoom_max: 64.0,
            auto_rotate_rate: 0.0015,
            fov_min_deg: 10.0,
            fov_max_deg: 120.0,
            fov_default_deg: 60.0,
            stereo_cull_deg: 150.0,
            twinkle_rate: 0.08,
            twinkle_amount: 0.15,
            star_scale: 2.0,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new()
    }
}
