/// One labeled metric shown as a card or bar.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricView {
    /// Display name.
    pub label: &'static str,
    /// Value in `[0, 1]`.
    pub value: f64,
    /// Pre-formatted display text.
    pub text: String,
}

/// Rendered results of a predictions upload.
#[derive(Clone, Debug, PartialEq)]
pub struct MlReportView {
    /// Name of the uploaded file.
    pub file_name: String,
    /// Accuracy, precision, recall and F1, in display order.
    pub metrics: Vec<MetricView>,
    /// Mean predicted value per group, sorted by group label.
    pub bias: Vec<(String, f64)>,
    /// Number of scored rows.
    pub rows: usize,
}

/// Traditional ML panel state.
#[derive(Clone, Debug, Default)]
pub struct MlPanelState {
    /// Last successful report, if any.
    pub report: Option<MlReportView>,
    /// Visible error from the last failed upload.
    pub error: Option<String>,
}

/// Rendered results of a log upload.
#[derive(Clone, Debug, PartialEq)]
pub struct LlmSummaryView {
    /// Name of the uploaded file.
    pub file_name: String,
    /// Mean latency, two decimals, unit as uploaded.
    pub avg_latency: String,
    /// Mean token count, truncated to an integer.
    pub avg_tokens: String,
    /// Number of summarized rows.
    pub rows: usize,
}

/// LLM Systems panel state.
#[derive(Clone, Debug, Default)]
pub struct LlmPanelState {
    /// Last successful summary, if any.
    pub summary: Option<LlmSummaryView>,
    /// Visible error from the last failed upload.
    pub error: Option<String>,
}

/// Governance panel state.
#[derive(Clone, Debug, Default)]
pub struct GovernanceState {
    /// Whether the compliance report table is shown.
    pub report_visible: bool,
}
