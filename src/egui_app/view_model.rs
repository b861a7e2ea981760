//! Helpers to convert domain reports into egui-facing view structs.

use crate::analysis::{ClassificationReport, LogSummary};
use crate::egui_app::state::{LlmSummaryView, MetricView, MlReportView};

/// Format a unit-interval metric the way the dashboard displays it.
pub fn format_metric(value: f64) -> String {
    format!("{value:.2}")
}

/// Build the Traditional ML panel view from a report.
pub fn ml_report_view(report: &ClassificationReport, file_name: &str) -> MlReportView {
    let metrics = [
        ("Accuracy", report.accuracy),
        ("Precision", report.precision),
        ("Recall", report.recall),
        ("F1", report.f1),
    ]
    .into_iter()
    .map(|(label, value)| MetricView {
        label,
        value,
        text: format_metric(value),
    })
    .collect();
    MlReportView {
        file_name: file_name.to_string(),
        metrics,
        bias: report
            .bias_by_group
            .as_ref()
            .map(|bias| bias.iter().map(|(k, v)| (k.clone(), *v)).collect())
            .unwrap_or_default(),
        rows: report.rows,
    }
}

/// Build the LLM Systems panel view from a summary.
///
/// Token averages are truncated toward zero and shown as integers.
pub fn llm_summary_view(summary: &LogSummary, file_name: &str) -> LlmSummaryView {
    LlmSummaryView {
        file_name: file_name.to_string(),
        avg_latency: format!("{:.2}", summary.avg_latency),
        avg_tokens: format!("{}", summary.avg_tokens.trunc() as i64),
        rows: summary.rows,
    }
}

/// Display label for an uploaded file path.
pub fn upload_display_name(path: &std::path::Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Table;
    use std::io::Cursor;
    use std::path::Path;

    #[test]
    fn ml_view_orders_and_formats_metrics() {
        let table =
            Table::from_reader(Cursor::new("actual,predicted\n1,1\n0,0\n1,0\n1,1\n")).unwrap();
        let report = ClassificationReport::from_table(&table).unwrap();
        let view = ml_report_view(&report, "preds.csv");
        let labels: Vec<&str> = view.metrics.iter().map(|m| m.label).collect();
        assert_eq!(labels, ["Accuracy", "Precision", "Recall", "F1"]);
        assert_eq!(view.metrics[0].text, "0.75");
        assert_eq!(view.metrics[2].text, "0.67");
        assert!(view.bias.is_empty());
    }

    #[test]
    fn llm_view_truncates_token_average() {
        let table = Table::from_reader(Cursor::new("latency,tokens\n100,10\n200,21\n")).unwrap();
        let summary = LogSummary::from_table(&table).unwrap();
        let view = llm_summary_view(&summary, "logs.csv");
        assert_eq!(view.avg_latency, "150.00");
        assert_eq!(view.avg_tokens, "15");
    }

    #[test]
    fn upload_names_fall_back_to_the_full_path() {
        assert_eq!(upload_display_name(Path::new("/tmp/preds.csv")), "preds.csv");
    }
}
