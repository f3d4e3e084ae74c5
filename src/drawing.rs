//! Sky panel painting and gesture translation.
//!
//! Converts egui pointer and multi-touch input into the view's gesture
//! calls, then paints the frame primitives back through the painter.
//! Positions coming out of the core are pixels relative to the panel
//! origin.

use eframe::egui;

use crate::catalog::Catalog;
use crate::picking::pick_star;
use crate::projection::SkyView;
use crate::render::{self, SkyFrame};

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(5, 7, 16);
const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(62, 88, 142);
const LABEL_COLOR: egui::Color32 = egui::Color32::from_rgb(170, 178, 194);
const HIGHLIGHT: egui::Color32 = egui::Color32::from_rgb(255, 214, 90);

pub(crate) fn sky_panel(
    ui: &mut egui::Ui,
    view: &mut SkyView,
    catalog: &Catalog,
    active: Option<usize>,
    selected: &mut Option<u32>,
    twinkle_phase: Option<f64>,
) {
    let (rect, response) =
        ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
    if rect.width() < 1.0 || rect.height() < 1.0 {
        return;
    }
    let screen = (rect.width(), rect.height());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, BACKGROUND);

    if response.dragged() {
        let delta = response.drag_delta();
        view.drag(
            (delta.x / rect.width()) as f64,
            (delta.y / rect.height()) as f64,
        );
    }
    if response.hovered() {
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll != 0.0 {
            view.pinch(1.0 + scroll as f64 * 0.001);
        }
        if let Some(touch) = ui.input(|i| i.multi_touch()) {
            view.pinch(touch.zoom_delta as f64);
            view.rotate_by(touch.rotation_delta as f64);
        }
    }
    let touching = ui.input(|i| i.multi_touch()).is_some();
    if !response.dragged() && !touching {
        view.end_gesture();
    }

    let active_cons = active.and_then(|i| catalog.constellations.get(i));
    let frame = render::compute_frame(catalog, active_cons, view, screen, twinkle_phase);
    paint_frame(&painter, rect, catalog, &frame, *selected);

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let tap = (pos.x - rect.min.x, pos.y - rect.min.y);
            *selected = match active_cons {
                Some(cons) => pick_star(tap, catalog.constellation_stars(cons), view, screen),
                None => pick_star(tap, catalog.stars.iter(), view, screen),
            };
        }
    }
}

fn paint_frame(
    painter: &egui::Painter,
    rect: egui::Rect,
    catalog: &Catalog,
    frame: &SkyFrame,
    selected: Option<u32>,
) {
    for (a, b) in &frame.lines {
        painter.line_segment(
            [to_pos(rect, *a), to_pos(rect, *b)],
            egui::Stroke::new(1.0, LINE_COLOR),
        );
    }
    for star in &frame.stars {
        let color = catalog
            .star(star.id)
            .map_or(egui::Color32::WHITE, |s| spectral_color(s.spectral_type.as_deref()));
        painter.circle_filled(to_pos(rect, star.pos), star.radius, color);
    }
    if let Some(id) = selected {
        if let Some(star) = frame.stars.iter().find(|s| s.id == id) {
            painter.circle_stroke(
                to_pos(rect, star.pos),
                star.radius + 5.0,
                egui::Stroke::new(1.5, HIGHLIGHT),
            );
        }
    }
    for (pos, text) in &frame.labels {
        let galley =
            painter.layout_no_wrap(text.clone(), egui::FontId::proportional(11.0), LABEL_COLOR);
        let text_pos = to_pos(rect, *pos) + egui::vec2(7.0, -galley.size().y / 2.0);
        painter.galley(text_pos, galley, LABEL_COLOR);
    }
}

fn to_pos(rect: egui::Rect, p: (f32, f32)) -> egui::Pos2 {
    egui::pos2(rect.min.x + p.0, rect.min.y + p.1)
}

/// Rough blackbody tint from the first letter of the spectral class.
fn spectral_color(spectral: Option<&str>) -> egui::Color32 {
    match spectral.and_then(|s| s.chars().next()) {
        Some('O') | Some('B') => egui::Color32::from_rgb(170, 191, 255),
        Some('A') => egui::Color32::from_rgb(213, 224, 255),
        Some('F') => egui::Color32::from_rgb(249, 245, 255),
        Some('G') => egui::Color32::from_rgb(255, 237, 227),
        Some('K') => egui::Color32::from_rgb(255, 218, 181),
        Some('M') => egui::Color32::from_rgb(255, 187, 123),
        _ => egui::Color32::WHITE,
    }
}
