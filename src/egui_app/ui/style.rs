//! Palette and visuals for the dashboard's dark theme.

use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::risk::RiskBand;

/// Named colors used across the renderer.
#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub alert: Color32,
    pub band_green: Color32,
    pub band_yellow: Color32,
    pub band_red: Color32,
}

/// The dashboard palette, a near-black blue dark theme.
pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(14, 17, 23),
        bg_secondary: Color32::from_rgb(28, 31, 38),
        bg_tertiary: Color32::from_rgb(42, 46, 56),
        panel_outline: Color32::from_rgb(48, 54, 66),
        text_primary: Color32::from_rgb(198, 205, 214),
        text_muted: Color32::from_rgb(138, 146, 158),
        accent: Color32::from_rgb(0, 200, 255),
        alert: Color32::from_rgb(255, 75, 75),
        band_green: Color32::from_rgb(70, 160, 90),
        band_yellow: Color32::from_rgb(205, 170, 60),
        band_red: Color32::from_rgb(200, 70, 60),
    }
}

/// Apply the palette to egui's dark visuals.
pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent;
    visuals.extreme_bg_color = palette.bg_secondary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.alert;
    visuals.warn_fg_color = palette.band_yellow;
    visuals.selection.bg_fill = palette.bg_tertiary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rectilinear(&mut visuals.widgets.inactive, palette);
    set_rectilinear(&mut visuals.widgets.hovered, palette);
    set_rectilinear(&mut visuals.widgets.active, palette);
    set_rectilinear(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_rectilinear(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::ZERO;
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_secondary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Stroke used around panel sections.
pub fn section_stroke() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}

/// Fill for metric cards and chart backgrounds.
pub fn card_fill() -> Color32 {
    palette().bg_secondary
}

/// Gauge and chart color for a risk band.
pub fn band_color(band: RiskBand) -> Color32 {
    let palette = palette();
    match band {
        RiskBand::Green => palette.band_green,
        RiskBand::Yellow => palette.band_yellow,
        RiskBand::Red => palette.band_red,
    }
}

/// Tone of a footer status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    /// Nothing happening.
    Idle,
    /// A timed phase is running.
    Busy,
    /// Last operation succeeded.
    Info,
    /// Something non-fatal needs attention.
    Warning,
    /// Last operation failed.
    Error,
}

impl StatusTone {
    /// Badge label for the tone.
    pub fn label(self) -> &'static str {
        match self {
            StatusTone::Idle => "Idle",
            StatusTone::Busy => "Working",
            StatusTone::Info => "Info",
            StatusTone::Warning => "Warning",
            StatusTone::Error => "Error",
        }
    }
}

/// Badge color for a status tone.
pub fn status_badge_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Idle => Color32::from_rgb(42, 42, 42),
        StatusTone::Busy => Color32::from_rgb(31, 139, 255),
        StatusTone::Info => Color32::from_rgb(64, 140, 112),
        StatusTone::Warning => Color32::from_rgb(205, 170, 60),
        StatusTone::Error => Color32::from_rgb(200, 70, 60),
    }
}
