//! Side-panel settings UI for projection, animation, and selection.

use eframe::egui;
use nalgebra::Vector3;

use crate::app::App;
use crate::catalog::{Catalog, CatalogLoadState, Constellation};
use crate::celestial::CelestialCoordinate;
use crate::projection::ProjectionMode;

impl App {
    pub(crate) fn show_settings(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Projection").strong());
        let mut mode = self.view.mode();
        ui.horizontal(|ui| {
            ui.selectable_value(&mut mode, ProjectionMode::Sphere3D, "3D sphere");
            ui.selectable_value(&mut mode, ProjectionMode::Stereographic2D, "2D map");
        });
        if mode != self.view.mode() {
            self.view.set_mode(mode);
        }

        match self.view.mode() {
            ProjectionMode::Sphere3D => {
                let config = *self.view.config();
                let mut fov = self.view.fov_deg();
                ui.horizontal(|ui| {
                    ui.label("FOV:");
                    if ui
                        .add(
                            egui::DragValue::new(&mut fov)
                                .speed(0.5)
                                .range(config.fov_min_deg..=config.fov_max_deg)
                                .suffix("\u{00b0}"),
                        )
                        .changed()
                    {
                        self.view.set_fov_deg(fov);
                    }
                });
            }
            ProjectionMode::Stereographic2D => {
                let config = *self.view.config();
                let mut zoom = self.view.zoom();
                ui.horizontal(|ui| {
                    ui.label("Zoom:");
                    if ui
                        .add(
                            egui::DragValue::new(&mut zoom)
                                .speed(0.05)
                                .range(config.zoom_min..=config.zoom_max),
                        )
                        .changed()
                    {
                        self.view.set_zoom(zoom);
                    }
                });
                ui.label(format!(
                    "Rotation: {:.0}\u{00b0}",
                    self.view.rotation().to_degrees()
                ));
            }
        }

        let center = self.view.view_center();
        ui.label(format!(
            "Center: {} / {}",
            center.format_ra(),
            center.format_dec()
        ));
        if ui.button("Reset view").clicked() {
            self.view.set_view_center(CelestialCoordinate::new(0.0, 0.0));
        }

        let mut auto = self.view.auto_rotate();
        if ui.checkbox(&mut auto, "Auto-rotate").changed() {
            self.view.set_auto_rotate(auto);
        }
        ui.checkbox(&mut self.twinkle_enabled, "Twinkle");

        ui.separator();
        ui.label(egui::RichText::new("Constellation").strong());
        if let CatalogLoadState::Loaded(catalog) = &self.catalog {
            let current = self
                .active_constellation
                .and_then(|i| catalog.constellations.get(i))
                .map_or("All", |c| c.name.as_str())
                .to_string();
            let previous = self.active_constellation;
            egui::ComboBox::from_id_salt("constellation_select")
                .selected_text(current)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.active_constellation, None, "All");
                    for (i, cons) in catalog.constellations.iter().enumerate() {
                        ui.selectable_value(&mut self.active_constellation, Some(i), &cons.name);
                    }
                });
            if self.active_constellation != previous {
                if let Some(cons) = self
                    .active_constellation
                    .and_then(|i| catalog.constellations.get(i))
                {
                    if let Some(center) = constellation_center(catalog, cons) {
                        self.view.set_view_center(center);
                    }
                }
            }

            ui.separator();
            ui.label(egui::RichText::new("Selected star").strong());
            match self.selected_star.and_then(|id| catalog.star(id)) {
                Some(star) => {
                    ui.label(&star.name);
                    ui.label(format!("Magnitude: {:.2}", star.magnitude));
                    let coord = star.coordinate();
                    ui.label(format!("RA {}", coord.format_ra()));
                    ui.label(format!("Dec {}", coord.format_dec()));
                    if let Some(spectral) = &star.spectral_type {
                        ui.label(format!("Spectral type: {spectral}"));
                    }
                    if let Some(distance) = star.distance_ly {
                        ui.label(format!("Distance: {distance:.0} ly"));
                    }
                }
                None => {
                    ui.label("Tap a star to select it.");
                }
            }
        }
    }
}

/// Mean direction of the constellation's member stars, mapped back to a
/// coordinate. `None` when the members cancel out.
fn constellation_center(catalog: &Catalog, cons: &Constellation) -> Option<CelestialCoordinate> {
    let stars = catalog.constellation_stars(cons);
    if stars.is_empty() {
        return None;
    }
    let mut sum = Vector3::zeros();
    for star in &stars {
        sum += star.coordinate().to_direction();
    }
    if sum.norm() < 1e-9 {
        return None;
    }
    Some(CelestialCoordinate::from_direction(&sum.normalize()))
}
