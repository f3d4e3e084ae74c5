//! Per-frame draw-primitive computation.
//!
//! Projects the whole catalog through the active view once per frame and
//! hands the shell plain positions, radii and line endpoints. Nothing in
//! here touches the UI toolkit and nothing is cached between frames.

use std::collections::HashMap;

use crate::catalog::{Catalog, Constellation};
use crate::config::ViewConfig;
use crate::projection::SkyView;

pub struct ProjectedStar {
    pub id: u32,
    pub pos: (f32, f32),
    pub radius: f32,
}

pub struct SkyFrame {
    pub stars: Vec<ProjectedStar>,
    pub lines: Vec<((f32, f32), (f32, f32))>,
    pub labels: Vec<((f32, f32), String)>,
}

/// Display radius for a star of the given apparent magnitude. Brighter
/// stars (lower magnitude) come out larger; the magnitude term is capped
/// so faint stars bottom out at a small positive radius.
pub fn star_radius(magnitude: f64, config: &ViewConfig) -> f32 {
    ((3.5 - magnitude.min(3.0)) * config.star_scale) as f32
}

pub fn compute_frame(
    catalog: &Catalog,
    active: Option<&Constellation>,
    view: &SkyView,
    screen: (f32, f32),
    twinkle_phase: Option<f64>,
) -> SkyFrame {
    let config = view.config();
    let mut frame = SkyFrame {
        stars: Vec::with_capacity(catalog.stars.len()),
        lines: Vec::new(),
        labels: Vec::new(),
    };

    let mut positions: HashMap<u32, (f32, f32)> = HashMap::with_capacity(catalog.stars.len());
    for star in &catalog.stars {
        let Some(pos) = view.project_star(&star.coordinate(), screen) else {
            continue;
        };
        positions.insert(star.id, pos);
        let mut radius = star_radius(star.magnitude, config);
        if let Some(phase) = twinkle_phase {
            // Offset by id so the field does not pulse in unison.
            let flicker = 1.0 + config.twinkle_amount * (phase + star.id as f64 * 1.7).sin();
            radius *= flicker as f32;
        }
        frame.stars.push(ProjectedStar {
            id: star.id,
            pos,
            radius,
        });
    }

    let constellations: &[Constellation] = match active {
        Some(cons) => std::slice::from_ref(cons),
        None => &catalog.constellations,
    };
    for cons in constellations {
        for &(a, b) in &cons.lines {
            if let (Some(&pa), Some(&pb)) = (positions.get(&a), positions.get(&b)) {
                frame.lines.push((pa, pb));
            }
        }
    }

    if let Some(cons) = active {
        for star in catalog.constellation_stars(cons) {
            if let Some(&pos) = positions.get(&star.id) {
                frame.labels.push((pos, star.name.clone()));
            }
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Constellation, Star};
    use crate::celestial::CelestialCoordinate;
    use crate::config::ViewConfig;
    use crate::projection::SkyView;

    const SCREEN: (f32, f32) = (800.0, 600.0);

    fn star(id: u32, ra: f64, dec: f64, magnitude: f64) -> Star {
        Star {
            id,
            name: format!("star-{id}"),
            magnitude,
            ra_deg: ra,
            dec_deg: dec,
            spectral_type: None,
            distance_ly: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_parts(
            vec![
                star(1, 0.0, 0.0, 0.5),
                star(2, 5.0, 5.0, 2.0),
                star(3, 180.0, 0.0, 1.0),
            ],
            vec![
                Constellation {
                    name: "Front".to_string(),
                    lines: vec![(1, 2)],
                },
                Constellation {
                    name: "Split".to_string(),
                    lines: vec![(1, 3)],
                },
            ],
        )
    }

    fn view_at_origin() -> SkyView {
        let mut view = SkyView::new(ViewConfig::new());
        view.set_view_center(CelestialCoordinate::new(0.0, 0.0));
        view
    }

    #[test]
    fn radius_grows_with_brightness_and_never_negative() {
        let config = ViewConfig::new();
        assert!(star_radius(0.0, &config) > star_radius(2.0, &config));
        // The cap keeps even very faint stars at a small positive size.
        assert_eq!(star_radius(3.5, &config), star_radius(9.9, &config));
        assert!(star_radius(9.9, &config) > 0.0);
    }

    #[test]
    fn behind_camera_stars_are_dropped() {
        let catalog = catalog();
        let frame = compute_frame(&catalog, None, &view_at_origin(), SCREEN, None);
        let ids: Vec<u32> = frame.stars.iter().map(|s| s.id).collect();
        assert!(ids.contains(&1) && ids.contains(&2));
        assert!(!ids.contains(&3));
    }

    #[test]
    fn line_needs_both_endpoints_visible() {
        let catalog = catalog();
        let frame = compute_frame(&catalog, None, &view_at_origin(), SCREEN, None);
        // "Front" connects two visible stars, "Split" reaches behind the
        // camera and must be dropped.
        assert_eq!(frame.lines.len(), 1);
    }

    #[test]
    fn active_constellation_restricts_lines_and_adds_labels() {
        let catalog = catalog();
        let active = &catalog.constellations[1];
        let frame = compute_frame(&catalog, Some(active), &view_at_origin(), SCREEN, None);
        assert!(frame.lines.is_empty());
        // Only the visible member gets a label.
        assert_eq!(frame.labels.len(), 1);
        assert_eq!(frame.labels[0].1, "star-1");
    }

    #[test]
    fn twinkle_stays_within_configured_band() {
        let catalog = catalog();
        let view = view_at_origin();
        let config = view.config();
        let base = star_radius(0.5, config);
        for step in 0..50 {
            let phase = step as f64 * 0.37;
            let frame = compute_frame(&catalog, None, &view, SCREEN, Some(phase));
            let star = frame.stars.iter().find(|s| s.id == 1).unwrap();
            let bound = base * (config.twinkle_amount as f32) + 1e-4;
            assert!((star.radius - base).abs() <= bound);
        }
    }
}
