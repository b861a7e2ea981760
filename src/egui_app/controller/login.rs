use std::time::Instant;

use super::EguiController;
use crate::egui_app::ui::style::StatusTone;
use crate::stream::StartupPhase;

impl EguiController {
    /// Submit the login form.
    ///
    /// Success clears the form, starts the initialization phase and redraws
    /// the synthetic figures; failure leaves the inputs in place with an
    /// inline error, exactly one of which is shown at a time.
    pub fn submit_login(&mut self, now: Instant) {
        let result = self
            .session
            .attempt_login(&self.ui.login.username, &self.ui.login.password);
        match result {
            Ok(()) => {
                self.ui.login.error = None;
                self.ui.login.password.clear();
                self.startup = Some(StartupPhase::begin(now));
                self.refresh_risk();
                self.set_status("Initializing monitoring systems", StatusTone::Busy);
                tracing::info!(user = %self.ui.login.username, "login accepted");
            }
            Err(error) => {
                self.ui.login.error = Some(error.to_string());
                tracing::warn!(%error, "login rejected");
            }
        }
    }
}
