use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Status shown before any interaction.
    pub fn idle() -> Self {
        Self {
            text: "Log in to start monitoring".into(),
            badge_label: StatusTone::Idle.label().into(),
            badge_color: style::status_badge_color(StatusTone::Idle),
        }
    }
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self::idle()
    }
}
