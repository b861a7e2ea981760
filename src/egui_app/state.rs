//! Shared state types for the egui UI.
//!
//! Plain data the renderer reads and the controller writes. Domain values
//! (session, risk engine, stream) stay on the controller; these structs only
//! carry what a frame needs to draw.

mod login;
mod panels;
mod status;

pub use login::*;
pub use panels::*;
pub use status::*;

/// Navigation sections offered in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    /// System status cards and the live risk stream.
    Overview,
    /// Classification-metrics upload panel.
    TraditionalMl,
    /// Latency/token upload panel.
    LlmSystems,
    /// Static responsible-AI content.
    Governance,
}

impl Section {
    /// Sections in sidebar order.
    pub const ALL: [Section; 4] = [
        Section::Overview,
        Section::TraditionalMl,
        Section::LlmSystems,
        Section::Governance,
    ];

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Overview => "Dashboard Overview",
            Section::TraditionalMl => "Traditional ML",
            Section::LlmSystems => "LLM Systems",
            Section::Governance => "Governance",
        }
    }
}

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Footer status badge and message.
    pub status: StatusBarState,
    /// Login form contents and inline error.
    pub login: LoginFormState,
    /// Currently selected navigation section.
    pub section: SectionState,
    /// Traditional ML panel results.
    pub ml: MlPanelState,
    /// LLM Systems panel results.
    pub llm: LlmPanelState,
    /// Governance panel toggles.
    pub governance: GovernanceState,
}

/// Wrapper so [`UiState`] can derive `Default` with a fixed landing section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionState(pub Section);

impl Default for SectionState {
    fn default() -> Self {
        Self(Section::Overview)
    }
}
