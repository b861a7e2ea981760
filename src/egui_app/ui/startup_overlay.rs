use std::time::Instant;

use eframe::egui::{
    self, Align2, Area, Color32, Frame, Id, LayerId, Order, ProgressBar, RichText, Stroke,
};

use super::EguiApp;
use super::style;

impl EguiApp {
    /// Modal overlay shown while the post-login initialization phase runs.
    pub(super) fn render_startup_overlay(&mut self, ctx: &egui::Context, now: Instant) {
        let palette = style::palette();
        let rect = ctx.viewport_rect();
        let backdrop_id = Id::new("startup_backdrop");
        let painter = ctx.layer_painter(LayerId::new(Order::Tooltip, backdrop_id));
        painter.rect_filled(rect, 0.0, Color32::from_rgba_premultiplied(0, 0, 0, 160));
        Area::new(backdrop_id.with("blocker"))
            .order(Order::Tooltip)
            .fixed_pos(rect.min)
            .show(ctx, |ui| {
                ui.allocate_rect(rect, egui::Sense::click_and_drag());
            });

        Area::new(Id::new("startup_overlay"))
            .order(Order::Tooltip)
            .constrain(true)
            .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                Frame::window(&ctx.style())
                    .fill(style::card_fill())
                    .stroke(Stroke::new(1.0, palette.panel_outline))
                    .show(ui, |ui| {
                        ui.vertical(|ui| {
                            ui.heading(
                                RichText::new("Initializing AI monitoring systems")
                                    .color(palette.text_primary),
                            );
                            ui.add_space(8.0);
                            ui.add(
                                ProgressBar::new(self.controller.startup_fraction(now))
                                    .desired_width(280.0)
                                    .animate(true),
                            );
                        });
                    });
            });
    }
}
