//! Library exports for reuse in benchmarks and tests.
/// Application directory helpers.
pub mod app_dirs;
/// Logging setup.
pub mod logging;
/// Login gate.
pub mod session;
/// Synthetic risk scoring.
pub mod risk;
/// Poll-driven startup and stream timing.
pub mod stream;
/// CSV table parsing and metric computation.
pub mod analysis;
/// Static governance content.
pub mod governance;
/// Shared egui UI modules.
pub mod egui_app;
