use eframe::egui::{RichText, Ui};

use super::EguiApp;
use super::ml_panel::{metric_card, upload_error};
use super::style;

impl EguiApp {
    pub(super) fn render_llm_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading(RichText::new("LLM system monitoring").color(palette.accent));
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Upload LLM logs CSV").clicked() {
                self.controller.pick_logs_file();
            }
            ui.label(
                RichText::new("Requires latency and tokens columns")
                    .color(palette.text_muted)
                    .small(),
            );
        });
        ui.add_space(8.0);

        if let Some(error) = self.controller.ui.llm.error.clone() {
            upload_error(ui, &error);
            return;
        }
        let Some(summary) = self.controller.ui.llm.summary.clone() else {
            ui.label(RichText::new("No logs uploaded yet").color(palette.text_muted));
            return;
        };

        ui.label(
            RichText::new(format!("{} ({} rows)", summary.file_name, summary.rows))
                .color(palette.text_muted)
                .small(),
        );
        ui.add_space(6.0);
        ui.columns(2, |columns| {
            metric_card(&mut columns[0], "Avg latency", &summary.avg_latency);
            metric_card(&mut columns[1], "Avg tokens", &summary.avg_tokens);
        });
    }
}
