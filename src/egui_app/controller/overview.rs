use super::EguiController;

impl EguiController {
    /// Health bar fraction in `[0, 1]`.
    pub fn health_fraction(&self) -> f32 {
        self.snapshot.health_pct as f32 / 100.0
    }
}
