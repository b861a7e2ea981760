//! Controller bridging dashboard logic to the egui UI.
//!
//! All mutation flows through the controller so the renderer stays a dumb
//! view of [`UiState`] and every operation here is unit-testable without a
//! window.

mod governance;
mod login;
mod overview;
mod uploads;

#[cfg(test)]
mod tests;

use std::time::Instant;

use crate::egui_app::state::*;
use crate::egui_app::ui::style::StatusTone;
use crate::risk::{self, RiskBand, SystemSnapshot};
use crate::session::Session;
use crate::stream::{RiskStream, StartupPhase};

/// Maintains dashboard state and bridges core logic to the egui UI.
pub struct EguiController {
    /// Render model consumed by the UI each frame.
    pub ui: UiState,
    session: Session,
    risk_score: f64,
    snapshot: SystemSnapshot,
    stream: RiskStream,
    startup: Option<StartupPhase>,
}

impl EguiController {
    /// Create a controller with a fresh risk draw and an idle stream.
    pub fn new() -> Self {
        let risk_score = risk::next_score();
        Self {
            ui: UiState::default(),
            session: Session::default(),
            snapshot: SystemSnapshot::generate(risk_score),
            stream: RiskStream::start(Instant::now()),
            startup: None,
            risk_score,
        }
    }

    /// Whether the login gate has been passed.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Advance time-driven state; called once per rendered frame.
    pub fn tick(&mut self, now: Instant) {
        if let Some(phase) = self.startup
            && phase.is_complete(now)
        {
            self.startup = None;
            // Re-armed here, not at login: the overlay's elapsed time must
            // not count toward the stream cadence.
            self.stream.restart(now);
            self.set_status("Monitoring active", StatusTone::Info);
        }
        if self.startup.is_none() && self.ui.section.0 == Section::Overview {
            self.stream.tick(now);
        }
    }

    /// Change the selected section, redrawing the synthetic figures.
    ///
    /// A fresh risk draw happens per navigation; re-entering the overview
    /// restarts the live stream.
    pub fn select_section(&mut self, section: Section, now: Instant) {
        if self.ui.section.0 == section {
            return;
        }
        self.ui.section = SectionState(section);
        self.refresh_risk();
        if section == Section::Overview {
            self.stream.restart(now);
        }
        tracing::debug!(section = section.label(), "section selected");
    }

    /// Current risk score in `[20, 95]`.
    pub fn risk_score(&self) -> f64 {
        self.risk_score
    }

    /// Gauge band for the current score.
    pub fn risk_band(&self) -> RiskBand {
        RiskBand::for_score(self.risk_score)
    }

    /// Whether the critical alert banner should show.
    pub fn alert_active(&self) -> bool {
        risk::alert_active(self.risk_score)
    }

    /// Synthetic overview figures for the current draw.
    pub fn snapshot(&self) -> &SystemSnapshot {
        &self.snapshot
    }

    /// Live stream points accumulated so far.
    pub fn stream_points(&self) -> &[f64] {
        self.stream.points()
    }

    /// Whether the live stream is still producing points.
    pub fn stream_running(&self) -> bool {
        !self.stream.is_complete()
    }

    /// Whether the post-login initialization overlay should show.
    pub fn startup_active(&self) -> bool {
        self.startup.is_some()
    }

    /// Initialization progress in `[0, 1]`.
    pub fn startup_fraction(&self, now: Instant) -> f32 {
        self.startup
            .map(|phase| phase.fraction(now))
            .unwrap_or(1.0)
    }

    fn refresh_risk(&mut self) {
        self.risk_score = risk::next_score();
        self.snapshot = SystemSnapshot::generate(self.risk_score);
    }

    /// Update the footer badge and message.
    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.badge_label = tone.label().into();
        self.ui.status.badge_color = crate::egui_app::ui::style::status_badge_color(tone);
    }
}

impl Default for EguiController {
    fn default() -> Self {
        Self::new()
    }
}
