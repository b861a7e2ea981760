use eframe::egui::{self, Frame, Margin, Pos2, RichText, Shape, Stroke, Ui};

use super::EguiApp;
use super::ml_panel::metric_card;
use super::style;
use crate::stream::STREAM_POINTS;

impl EguiApp {
    pub(super) fn render_overview(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading(RichText::new("Enterprise AI system status").color(palette.accent));
        ui.add_space(8.0);

        let snapshot = self.controller.snapshot().clone();
        ui.columns(4, |columns| {
            metric_card(&mut columns[0], "System status", snapshot.status_label);
            metric_card(
                &mut columns[1],
                "Models monitored",
                &snapshot.models_monitored.to_string(),
            );
            metric_card(
                &mut columns[2],
                "Compliance score",
                &format!("{}%", snapshot.compliance_pct),
            );
            metric_card(
                &mut columns[3],
                "AI confidence",
                &format!("{}%", snapshot.confidence_pct),
            );
        });

        ui.add_space(8.0);
        ui.label(
            RichText::new(format!(
                "Last AI compliance audit: {} (status: PASSED)",
                snapshot.audit_stamp
            ))
            .color(palette.text_muted),
        );

        ui.add_space(8.0);
        ui.add(
            egui::ProgressBar::new(self.controller.health_fraction())
                .text(format!("Overall system health: {}%", snapshot.health_pct)),
        );

        ui.add_space(16.0);
        ui.heading(RichText::new("Live risk streaming").color(palette.accent));
        ui.add_space(4.0);
        self.render_stream_chart(ui);

        ui.add_space(16.0);
        ui.heading(RichText::new("System architecture").color(palette.accent));
        ui.add_space(4.0);
        architecture_placeholder(ui);
    }

    fn render_stream_chart(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let points = self.controller.stream_points().to_vec();
        let desired = egui::vec2(ui.available_width(), 150.0);
        let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, style::card_fill());

        // Horizontal guides at 25/50/75.
        for guide in [0.25, 0.5, 0.75] {
            let y = rect.bottom() - rect.height() * guide;
            painter.line_segment(
                [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
                Stroke::new(1.0, palette.bg_tertiary),
            );
        }

        if points.len() >= 2 {
            let step = rect.width() / (STREAM_POINTS - 1) as f32;
            let positions: Vec<Pos2> = points
                .iter()
                .enumerate()
                .map(|(index, value)| {
                    Pos2::new(
                        rect.left() + index as f32 * step,
                        rect.bottom() - rect.height() * (*value as f32 / 100.0),
                    )
                })
                .collect();
            painter.add(Shape::line(positions, Stroke::new(2.0, palette.accent)));
        }

        let caption = if self.controller.stream_running() {
            format!("Streaming ({} of {STREAM_POINTS} samples)", points.len())
        } else {
            format!("Stream complete ({STREAM_POINTS} samples)")
        };
        ui.label(RichText::new(caption).color(palette.text_muted).small());
    }
}

fn architecture_placeholder(ui: &mut Ui) {
    let palette = style::palette();
    Frame::new()
        .fill(style::card_fill())
        .stroke(style::section_stroke())
        .inner_margin(Margin::same(24))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Ingestion -> Model fleet -> Evaluation -> Governance")
                        .color(palette.text_primary),
                );
                ui.label(
                    RichText::new("Architecture diagram placeholder")
                        .color(palette.text_muted)
                        .small(),
                );
            });
        });
}
