use std::f32::consts::PI;

use eframe::egui::{Align2, FontId, Pos2, Sense, Stroke, Ui, Vec2};

use super::style;
use crate::risk::RiskBand;

const ARC_STEPS: usize = 60;
const ARC_THICKNESS: f32 = 10.0;

/// Painter-drawn semicircular gauge, banded green/yellow/red over 0-100.
pub(super) fn render_gauge(ui: &mut Ui, score: f64) {
    let palette = style::palette();
    let desired = Vec2::new(ui.available_width().min(220.0), 120.0);
    let (rect, _) = ui.allocate_exact_size(desired, Sense::hover());
    let painter = ui.painter_at(rect);

    let center = Pos2::new(rect.center().x, rect.bottom() - 12.0);
    let radius = (rect.width() * 0.5 - ARC_THICKNESS).min(rect.height() - 30.0);

    for step in 0..ARC_STEPS {
        let f0 = step as f32 / ARC_STEPS as f32;
        let f1 = (step + 1) as f32 / ARC_STEPS as f32;
        let band = RiskBand::for_score(f64::from(f0 * 100.0));
        painter.line_segment(
            [
                arc_point(center, radius, arc_angle(f0)),
                arc_point(center, radius, arc_angle(f1)),
            ],
            Stroke::new(ARC_THICKNESS, style::band_color(band)),
        );
    }

    let needle_fraction = (score / 100.0).clamp(0.0, 1.0) as f32;
    let needle_tip = arc_point(center, radius - ARC_THICKNESS, arc_angle(needle_fraction));
    painter.line_segment([center, needle_tip], Stroke::new(2.0, palette.text_primary));
    painter.circle_filled(center, 3.0, palette.text_primary);

    painter.text(
        Pos2::new(center.x, center.y - radius * 0.4),
        Align2::CENTER_CENTER,
        format!("{score:.0}"),
        FontId::proportional(24.0),
        palette.accent,
    );
}

fn arc_angle(fraction: f32) -> f32 {
    PI + fraction * PI
}

fn arc_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + Vec2::new(angle.cos(), angle.sin()) * radius
}
