//! egui user interface: render state, controller and renderer.
/// Controller bridging dashboard logic to the UI.
pub mod controller;
/// Plain render-model types.
pub mod state;
/// The eframe renderer.
pub mod ui;
/// Conversions from domain reports to render models.
pub mod view_model;
