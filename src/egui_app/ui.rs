//! egui renderer for the dashboard UI.

mod chrome;
mod gauge;
mod governance_panel;
mod llm_panel;
mod login_screen;
mod ml_panel;
mod overview_panel;
mod sidebar;
mod startup_overlay;
pub mod style;

use std::time::{Duration, Instant};

use eframe::egui::{self, TextureHandle, Vec2};

use crate::egui_app::controller::EguiController;
use crate::egui_app::state::Section;

/// Smallest window the layout still fits in.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(900.0, 600.0);

const LOGO_BYTES: &[u8] = include_bytes!("../../assets/logo.png");

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
    logo_tex: Option<TextureHandle>,
}

impl EguiApp {
    /// Create the app around a fresh controller.
    pub fn new() -> Self {
        Self {
            controller: EguiController::new(),
            visuals_set: false,
            logo_tex: None,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn logo_texture(&mut self, ctx: &egui::Context) -> Option<&TextureHandle> {
        if self.logo_tex.is_none() {
            let image = image::load_from_memory(LOGO_BYTES).ok()?.to_rgba8();
            let size = [image.width() as usize, image.height() as usize];
            let color = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
            self.logo_tex =
                Some(ctx.load_texture("sidebar_logo", color, egui::TextureOptions::LINEAR));
        }
        self.logo_tex.as_ref()
    }

    fn render_section(&mut self, ui: &mut egui::Ui) {
        match self.controller.ui.section.0 {
            Section::Overview => self.render_overview(ui),
            Section::TraditionalMl => self.render_ml_panel(ui),
            Section::LlmSystems => self.render_llm_panel(ui),
            Section::Governance => self.render_governance(ui),
        }
    }
}

impl Default for EguiApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        let now = Instant::now();
        self.controller.tick(now);

        if !self.controller.is_authenticated() {
            self.render_login_screen(ctx, now);
            return;
        }

        self.render_top_bar(ctx);
        self.render_status(ctx);
        self.render_sidebar(ctx, now);

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.controller.alert_active() {
                self.render_alert_banner(ui);
                ui.add_space(8.0);
            }
            egui::ScrollArea::vertical()
                .id_salt("section_scroll")
                .show(ui, |ui| {
                    self.render_section(ui);
                });
        });

        if self.controller.startup_active() {
            self.render_startup_overlay(ctx, now);
        }

        // The stream and the startup phase advance between interactions.
        if self.controller.startup_active() || self.controller.stream_running() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
