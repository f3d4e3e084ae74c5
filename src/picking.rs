//! Tap-to-star hit testing.

use crate::catalog::Star;
use crate::projection::{ProjectionMode, SkyView};

/// Finds the nearest candidate star within the configured tap threshold,
/// or `None` when the tap lands in empty sky. Candidates the active
/// projection cannot see are skipped: behind the camera in 3D, outside
/// the overscanned viewport in 2D. On an exact distance tie the first
/// candidate in iteration order wins.
pub fn pick_star<'a, I>(tap: (f32, f32), stars: I, view: &SkyView, screen: (f32, f32)) -> Option<u32>
where
    I: IntoIterator<Item = &'a Star>,
{
    let config = view.config();
    let threshold_sq = config.tap_threshold_px * config.tap_threshold_px;
    let mut best: Option<(f32, u32)> = None;
    for star in stars {
        let Some(pos) = view.project_star(&star.coordinate(), screen) else {
            continue;
        };
        if view.mode() == ProjectionMode::Stereographic2D
            && outside_overscan(pos, screen, config.overscan_px)
        {
            continue;
        }
        let dx = pos.0 - tap.0;
        let dy = pos.1 - tap.1;
        let dist_sq = dx * dx + dy * dy;
        if dist_sq < threshold_sq && best.map_or(true, |(nearest, _)| dist_sq < nearest) {
            best = Some((dist_sq, star.id));
        }
    }
    best.map(|(_, id)| id)
}

fn outside_overscan(pos: (f32, f32), screen: (f32, f32), margin: f32) -> bool {
    pos.0 < -margin || pos.1 < -margin || pos.0 > screen.0 + margin || pos.1 > screen.1 + margin
}
