use std::time::Instant;

use eframe::egui::{self, Key, RichText, TextEdit};

use super::EguiApp;
use super::style;

impl EguiApp {
    pub(super) fn render_login_screen(&mut self, ctx: &egui::Context, now: Instant) {
        let palette = style::palette();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(ui.available_height() * 0.25);
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new("Vigil").color(palette.accent).size(28.0));
                ui.label(RichText::new("AI observability login").color(palette.text_muted));
                ui.add_space(16.0);

                let form = &mut self.controller.ui.login;
                ui.add(
                    TextEdit::singleline(&mut form.username)
                        .hint_text("Username")
                        .desired_width(240.0),
                );
                ui.add_space(6.0);
                ui.add(
                    TextEdit::singleline(&mut form.password)
                        .hint_text("Password")
                        .password(true)
                        .desired_width(240.0),
                );
                ui.add_space(10.0);

                let submit_key = ui.input(|i| i.key_pressed(Key::Enter));
                if ui.button("Log in").clicked() || submit_key {
                    self.controller.submit_login(now);
                }
                if let Some(error) = self.controller.ui.login.error.as_deref() {
                    ui.add_space(8.0);
                    ui.label(RichText::new(error).color(palette.alert));
                }
            });
        });
    }
}
