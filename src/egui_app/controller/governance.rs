use super::EguiController;
use crate::egui_app::ui::style::StatusTone;

impl EguiController {
    /// Reveal the fixed compliance report table.
    pub fn show_compliance_report(&mut self) {
        self.ui.governance.report_visible = true;
        self.set_status("Compliance report generated", StatusTone::Info);
    }
}
