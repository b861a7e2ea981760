#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based Vigil dashboard.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use egui::viewport::IconData;
use vigil::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use vigil::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(1280.0, 800.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Vigil",
        native_options,
        Box::new(|_cc| Ok(Box::new(EguiApp::new()))),
    )?;
    Ok(())
}

fn load_app_icon() -> Option<IconData> {
    let icon = decode_icon(include_bytes!("../assets/logo.png"));
    if icon.is_none() {
        eprintln!("Failed to decode logo.png for window icon.");
    }
    icon
}

/// Convert raw embedded bytes into icon-friendly RGBA data.
fn decode_icon(bytes: &[u8]) -> Option<IconData> {
    let image = image::load_from_memory(bytes).ok()?.to_rgba8();
    let (width, height) = image.dimensions();
    Some(IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_icon_decodes() {
        assert!(decode_icon(include_bytes!("../assets/logo.png")).is_some());
    }
}
