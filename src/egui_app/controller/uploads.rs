use std::path::Path;

use rfd::FileDialog;

use super::EguiController;
use crate::analysis::classification::GROUP_COLUMN;
use crate::analysis::{ClassificationReport, LogSummary, Table};
use crate::egui_app::ui::style::StatusTone;
use crate::egui_app::view_model;

impl EguiController {
    /// Open a file dialog for the Traditional ML panel.
    pub fn pick_predictions_file(&mut self) {
        if let Some(path) = csv_dialog("Upload ML predictions CSV").pick_file() {
            self.load_predictions_from(&path);
        }
    }

    /// Open a file dialog for the LLM Systems panel.
    pub fn pick_logs_file(&mut self) {
        if let Some(path) = csv_dialog("Upload LLM logs CSV").pick_file() {
            self.load_logs_from(&path);
        }
    }

    /// Score a predictions CSV and publish the result to the ML panel.
    ///
    /// Failures replace the panel's previous report with a visible error;
    /// nothing outside the panel is touched.
    pub fn load_predictions_from(&mut self, path: &Path) {
        let name = view_model::upload_display_name(path);
        let report = Table::from_path(path)
            .map_err(|error| error.to_string())
            .and_then(|table| {
                ClassificationReport::from_table(&table)
                    .map(|report| (report, table.column(GROUP_COLUMN).is_some()))
                    .map_err(|error| error.to_string())
            });
        match report {
            Ok((report, has_groups)) => {
                tracing::info!(file = %name, rows = report.rows, "predictions scored");
                let bias_skipped = has_groups && report.bias_by_group.is_none();
                self.ui.ml.report = Some(view_model::ml_report_view(&report, &name));
                self.ui.ml.error = None;
                if bias_skipped {
                    self.set_status(
                        format!(
                            "Scored {} prediction row(s); bias skipped, predicted is not numeric",
                            report.rows
                        ),
                        StatusTone::Warning,
                    );
                } else {
                    self.set_status(
                        format!("Scored {} prediction row(s)", report.rows),
                        StatusTone::Info,
                    );
                }
            }
            Err(error) => {
                tracing::warn!(file = %name, %error, "predictions upload rejected");
                self.ui.ml.report = None;
                self.ui.ml.error = Some(error.clone());
                self.set_status(error, StatusTone::Error);
            }
        }
    }

    /// Summarize a logs CSV and publish the result to the LLM panel.
    pub fn load_logs_from(&mut self, path: &Path) {
        let name = view_model::upload_display_name(path);
        let summary = Table::from_path(path)
            .map_err(|error| error.to_string())
            .and_then(|table| LogSummary::from_table(&table).map_err(|error| error.to_string()));
        match summary {
            Ok(summary) => {
                tracing::info!(file = %name, rows = summary.rows, "logs summarized");
                self.ui.llm.summary = Some(view_model::llm_summary_view(&summary, &name));
                self.ui.llm.error = None;
                self.set_status(
                    format!("Summarized {} log row(s)", summary.rows),
                    StatusTone::Info,
                );
            }
            Err(error) => {
                tracing::warn!(file = %name, %error, "logs upload rejected");
                self.ui.llm.summary = None;
                self.ui.llm.error = Some(error.clone());
                self.set_status(error, StatusTone::Error);
            }
        }
    }
}

fn csv_dialog(title: &str) -> FileDialog {
    FileDialog::new()
        .set_title(title)
        .add_filter("csv", &["csv"])
}
