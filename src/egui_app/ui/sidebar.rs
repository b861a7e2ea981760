use std::time::Instant;

use eframe::egui::{self, Frame, Margin, RichText};

use super::EguiApp;
use super::gauge;
use super::style;

impl EguiApp {
    pub(super) fn render_sidebar(&mut self, ctx: &egui::Context, now: Instant) {
        let palette = style::palette();
        egui::SidePanel::left("sidebar")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::same(10)),
            )
            .exact_width(230.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    if let Some(tex) = self.logo_texture(ctx) {
                        ui.image((tex.id(), egui::vec2(56.0, 56.0)));
                        ui.add_space(4.0);
                    }
                    ui.label(RichText::new("Vigil").color(palette.accent).size(20.0));
                    ui.label(RichText::new("Unified AI risk score").color(palette.text_muted));
                });
                ui.add_space(6.0);

                let score = self.controller.risk_score();
                gauge::render_gauge(ui, score);
                let band = self.controller.risk_band();
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(format!("{} risk", band.label()))
                            .color(style::band_color(band)),
                    );
                });

                ui.add_space(10.0);
                ui.separator();
                ui.label(RichText::new("Navigation").color(palette.text_muted));
                ui.add_space(4.0);
                for section in crate::egui_app::state::Section::ALL {
                    let selected = self.controller.ui.section.0 == section;
                    if ui.selectable_label(selected, section.label()).clicked() {
                        self.controller.select_section(section, now);
                    }
                }
            });
    }
}
