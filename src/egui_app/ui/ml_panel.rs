use eframe::egui::{self, Align2, FontId, Frame, Margin, Pos2, Rect, RichText, Ui};

use super::EguiApp;
use super::style;
use crate::egui_app::state::MlReportView;

impl EguiApp {
    pub(super) fn render_ml_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading(RichText::new("Traditional ML monitoring").color(palette.accent));
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Upload ML predictions CSV").clicked() {
                self.controller.pick_predictions_file();
            }
            ui.label(
                RichText::new("Requires actual and predicted columns")
                    .color(palette.text_muted)
                    .small(),
            );
        });
        ui.add_space(8.0);

        if let Some(error) = self.controller.ui.ml.error.clone() {
            upload_error(ui, &error);
            return;
        }
        let Some(report) = self.controller.ui.ml.report.clone() else {
            ui.label(RichText::new("No predictions uploaded yet").color(palette.text_muted));
            return;
        };

        ui.label(
            RichText::new(format!("{} ({} rows)", report.file_name, report.rows))
                .color(palette.text_muted)
                .small(),
        );
        ui.add_space(6.0);
        ui.columns(4, |columns| {
            for (column, metric) in columns.iter_mut().zip(&report.metrics) {
                metric_card(column, metric.label, &metric.text);
            }
        });

        ui.add_space(12.0);
        ui.label(RichText::new("ML performance").color(palette.text_primary));
        render_metric_bars(ui, &report);

        if !report.bias.is_empty() {
            ui.add_space(12.0);
            ui.label(RichText::new("Bias by group").color(palette.text_primary));
            ui.label(
                RichText::new("Mean predicted value per group; illustrative only")
                    .color(palette.text_muted)
                    .small(),
            );
            ui.add_space(4.0);
            egui::Grid::new("bias_grid")
                .striped(true)
                .min_col_width(120.0)
                .show(ui, |ui| {
                    ui.label(RichText::new("Group").color(palette.text_muted));
                    ui.label(RichText::new("Mean predicted").color(palette.text_muted));
                    ui.end_row();
                    for (group, mean) in &report.bias {
                        ui.label(group);
                        ui.label(format!("{mean:.3}"));
                        ui.end_row();
                    }
                });
        }
    }
}

/// Four vertical bars, one per headline metric, scaled to `[0, 1]`.
fn render_metric_bars(ui: &mut Ui, report: &MlReportView) {
    let palette = style::palette();
    let desired = egui::vec2(ui.available_width().min(480.0), 140.0);
    let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, style::card_fill());

    let count = report.metrics.len() as f32;
    let slot = rect.width() / count;
    let bar_width = slot * 0.5;
    let label_height = 18.0;
    let plot_height = rect.height() - label_height - 6.0;

    for (index, metric) in report.metrics.iter().enumerate() {
        let center_x = rect.left() + slot * (index as f32 + 0.5);
        let bar_height = plot_height * metric.value as f32;
        let bar = Rect::from_min_max(
            Pos2::new(center_x - bar_width / 2.0, rect.top() + 4.0 + plot_height - bar_height),
            Pos2::new(center_x + bar_width / 2.0, rect.top() + 4.0 + plot_height),
        );
        painter.rect_filled(bar, 0.0, palette.accent);
        painter.text(
            Pos2::new(center_x, rect.bottom() - label_height / 2.0),
            Align2::CENTER_CENTER,
            metric.label,
            FontId::proportional(12.0),
            palette.text_muted,
        );
    }
}

pub(super) fn metric_card(ui: &mut Ui, label: &str, value: &str) {
    let palette = style::palette();
    Frame::new()
        .fill(style::card_fill())
        .stroke(style::section_stroke())
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(label).color(palette.text_muted).small());
            ui.label(RichText::new(value).color(palette.text_primary).size(20.0));
        });
}

pub(super) fn upload_error(ui: &mut Ui, error: &str) {
    let palette = style::palette();
    Frame::new()
        .fill(style::card_fill())
        .stroke(egui::Stroke::new(1.0, palette.alert))
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.label(RichText::new(error).color(palette.alert));
        });
}
