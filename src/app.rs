//! Application shell and eframe integration.
//!
//! Owns the view state and drives the per-frame tick: twinkle phase,
//! auto-rotation, panel layout, and selection plumbing. Everything runs
//! on the UI thread; gesture callbacks and the tick never overlap.

use std::f64::consts::PI;

use eframe::egui;

use crate::catalog::{Catalog, CatalogLoadState};
use crate::celestial::CelestialCoordinate;
use crate::config::ViewConfig;
use crate::drawing;
use crate::projection::SkyView;

pub(crate) struct App {
    pub(crate) view: SkyView,
    pub(crate) catalog: CatalogLoadState,
    pub(crate) active_constellation: Option<usize>,
    pub(crate) selected_star: Option<u32>,
    pub(crate) twinkle_enabled: bool,
    pub(crate) twinkle_phase: f64,
    pub(crate) show_side_panel: bool,
}

impl Default for App {
    fn default() -> Self {
        let mut view = SkyView::new(ViewConfig::new());
        // Open on Orion.
        view.set_view_center(CelestialCoordinate::from_ra_hours(5.6, 0.0));
        Self {
            view,
            catalog: Catalog::builtin(),
            active_constellation: None,
            selected_star: None,
            twinkle_enabled: true,
            twinkle_phase: 0.0,
            show_side_panel: true,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.twinkle_enabled {
            let rate = self.view.config().twinkle_rate;
            self.twinkle_phase = (self.twinkle_phase + rate) % (2.0 * PI);
        }
        self.view.tick_auto_rotation();
        ctx.request_repaint();

        if self.show_side_panel {
            egui::SidePanel::left("settings_panel")
                .resizable(true)
                .default_width(220.0)
                .show(ctx, |ui| {
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.strong("Sky Viz");
                        if ui.small_button("hide").clicked() {
                            self.show_side_panel = false;
                        }
                    });
                    ui.separator();
                    egui::ScrollArea::vertical().show(ui, |ui| self.show_settings(ui));
                });
        } else {
            egui::Area::new(egui::Id::new("settings_btn"))
                .fixed_pos(egui::pos2(6.0, 6.0))
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    if ui.button("settings").clicked() {
                        self.show_side_panel = true;
                    }
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| match &self.catalog {
                CatalogLoadState::Loaded(catalog) => {
                    drawing::sky_panel(
                        ui,
                        &mut self.view,
                        catalog,
                        self.active_constellation,
                        &mut self.selected_star,
                        self.twinkle_enabled.then_some(self.twinkle_phase),
                    );
                }
                CatalogLoadState::Failed(err) => {
                    ui.centered_and_justified(|ui| {
                        ui.label(format!("Star catalog failed to load: {err}"));
                    });
                }
            });
    }
}
