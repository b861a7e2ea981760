use eframe::egui::{self, RichText, Ui};

use super::EguiApp;
use super::style;
use crate::governance;

impl EguiApp {
    pub(super) fn render_governance(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading(RichText::new("Responsible AI controls").color(palette.accent));
        ui.add_space(8.0);

        for item in governance::CHECKLIST {
            ui.label(
                RichText::new(format!("[x] {}", item.label)).color(palette.text_primary),
            );
        }

        ui.add_space(12.0);
        if ui.button("Generate compliance report").clicked() {
            self.controller.show_compliance_report();
        }

        if self.controller.ui.governance.report_visible {
            ui.add_space(8.0);
            egui::Grid::new("compliance_grid")
                .striped(true)
                .min_col_width(140.0)
                .show(ui, |ui| {
                    ui.label(RichText::new("Category").color(palette.text_muted));
                    ui.label(RichText::new("Status").color(palette.text_muted));
                    ui.end_row();
                    for row in governance::compliance_report() {
                        ui.label(row.category);
                        ui.label(RichText::new(row.status).color(palette.band_green));
                        ui.end_row();
                    }
                });
        }
    }
}
