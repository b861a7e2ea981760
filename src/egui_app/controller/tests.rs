use std::path::PathBuf;
use std::time::Instant;

use tempfile::TempDir;

use super::*;
use crate::stream::{STARTUP_DURATION, STREAM_INTERVAL, STREAM_POINTS};

fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn logged_in_controller(now: Instant) -> EguiController {
    let mut controller = EguiController::new();
    controller.ui.login.username = "ops".into();
    controller.ui.login.password = "secret".into();
    controller.submit_login(now);
    controller.tick(now + STARTUP_DURATION);
    controller
}

#[test]
fn rejected_login_keeps_input_and_reports_inline() {
    let mut controller = EguiController::new();
    controller.ui.login.username = "ops".into();
    controller.submit_login(Instant::now());
    assert!(!controller.is_authenticated());
    assert_eq!(controller.ui.login.error.as_deref(), Some("Enter a password"));
    assert_eq!(controller.ui.login.username, "ops");
}

#[test]
fn accepted_login_starts_initialization() {
    let now = Instant::now();
    let mut controller = EguiController::new();
    controller.ui.login.username = "ops".into();
    controller.ui.login.password = "secret".into();
    controller.submit_login(now);
    assert!(controller.is_authenticated());
    assert!(controller.startup_active());
    assert!(controller.ui.login.error.is_none());
    assert!(controller.ui.login.password.is_empty());
}

#[test]
fn initialization_clears_after_its_duration() {
    let now = Instant::now();
    let mut controller = EguiController::new();
    controller.ui.login.username = "ops".into();
    controller.ui.login.password = "secret".into();
    controller.submit_login(now);
    controller.tick(now + STARTUP_DURATION / 2);
    assert!(controller.startup_active());
    controller.tick(now + STARTUP_DURATION);
    assert!(!controller.startup_active());
    assert_eq!(controller.startup_fraction(now + STARTUP_DURATION), 1.0);
}

#[test]
fn stream_is_empty_when_initialization_finishes() {
    let now = Instant::now();
    let mut controller = EguiController::new();
    controller.ui.login.username = "ops".into();
    controller.ui.login.password = "secret".into();
    controller.submit_login(now);
    controller.tick(now + STARTUP_DURATION);
    assert!(controller.stream_points().is_empty());
    controller.tick(now + STARTUP_DURATION + STREAM_INTERVAL);
    assert_eq!(controller.stream_points().len(), 1);
}

#[test]
fn stream_fills_while_overview_is_selected() {
    let now = Instant::now();
    let mut controller = logged_in_controller(now);
    assert_eq!(controller.ui.section.0, Section::Overview);
    controller.tick(now + STARTUP_DURATION + STREAM_INTERVAL * 100);
    assert_eq!(controller.stream_points().len(), STREAM_POINTS);
    assert!(!controller.stream_running());
}

#[test]
fn leaving_and_reentering_overview_restarts_the_stream() {
    let now = Instant::now();
    let mut controller = logged_in_controller(now);
    let filled = now + STARTUP_DURATION + STREAM_INTERVAL * 100;
    controller.tick(filled);
    controller.select_section(Section::Governance, filled);
    controller.select_section(Section::Overview, filled);
    assert!(controller.stream_points().is_empty());
    assert!(controller.stream_running());
}

#[test]
fn stream_does_not_advance_outside_the_overview() {
    let now = Instant::now();
    let mut controller = logged_in_controller(now);
    let before = controller.stream_points().len();
    controller.select_section(Section::LlmSystems, now + STARTUP_DURATION);
    controller.tick(now + STARTUP_DURATION + STREAM_INTERVAL * 100);
    assert_eq!(controller.stream_points().len(), before);
}

#[test]
fn risk_score_stays_in_range_across_navigation() {
    let now = Instant::now();
    let mut controller = logged_in_controller(now);
    for section in [
        Section::TraditionalMl,
        Section::Overview,
        Section::Governance,
        Section::Overview,
    ] {
        controller.select_section(section, now);
        assert!((20.0..=95.0).contains(&controller.risk_score()));
    }
}

#[test]
fn predictions_upload_renders_metrics() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "preds.csv", "actual,predicted\n1,1\n0,0\n1,0\n1,1\n");
    let mut controller = EguiController::new();
    controller.load_predictions_from(&path);
    let report = controller.ui.ml.report.as_ref().unwrap();
    assert_eq!(report.file_name, "preds.csv");
    assert_eq!(report.metrics[0].text, "0.75");
    assert_eq!(report.metrics[1].text, "1.00");
    assert!(controller.ui.ml.error.is_none());
}

#[test]
fn predictions_upload_with_missing_column_shows_the_error() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "preds.csv", "actual,score\n1,0.9\n");
    let mut controller = EguiController::new();
    controller.load_predictions_from(&path);
    assert!(controller.ui.ml.report.is_none());
    let error = controller.ui.ml.error.as_deref().unwrap();
    assert!(error.contains("predicted"), "unexpected error: {error}");
    assert_eq!(controller.ui.status.badge_label, "Error");
}

#[test]
fn ragged_predictions_upload_names_the_line() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "preds.csv", "actual,predicted\n1,1\n1\n");
    let mut controller = EguiController::new();
    controller.load_predictions_from(&path);
    let error = controller.ui.ml.error.as_deref().unwrap();
    assert!(error.contains("line 3"), "unexpected error: {error}");
}

#[test]
fn failed_upload_replaces_an_earlier_report() {
    let dir = TempDir::new().unwrap();
    let good = write_csv(&dir, "good.csv", "actual,predicted\n1,1\n");
    let bad = write_csv(&dir, "bad.csv", "actual\n1\n");
    let mut controller = EguiController::new();
    controller.load_predictions_from(&good);
    assert!(controller.ui.ml.report.is_some());
    controller.load_predictions_from(&bad);
    assert!(controller.ui.ml.report.is_none());
    assert!(controller.ui.ml.error.is_some());
}

#[test]
fn skipped_bias_block_downgrades_the_status_to_a_warning() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "preds.csv",
        "actual,predicted,group\ncat,cat,emea\ndog,cat,apac\n",
    );
    let mut controller = EguiController::new();
    controller.load_predictions_from(&path);
    let report = controller.ui.ml.report.as_ref().unwrap();
    assert!(report.bias.is_empty());
    assert_eq!(controller.ui.status.badge_label, "Warning");
    assert!(controller.ui.status.text.contains("bias skipped"));
}

#[test]
fn logs_upload_renders_averages() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "logs.csv", "latency,tokens\n100,10\n200,20\n");
    let mut controller = EguiController::new();
    controller.load_logs_from(&path);
    let summary = controller.ui.llm.summary.as_ref().unwrap();
    assert_eq!(summary.avg_latency, "150.00");
    assert_eq!(summary.avg_tokens, "15");
    assert_eq!(summary.rows, 2);
}

#[test]
fn logs_upload_failure_is_scoped_to_its_panel() {
    let dir = TempDir::new().unwrap();
    let preds = write_csv(&dir, "preds.csv", "actual,predicted\n1,1\n");
    let logs = write_csv(&dir, "logs.csv", "latency\n100\n");
    let mut controller = EguiController::new();
    controller.load_predictions_from(&preds);
    controller.load_logs_from(&logs);
    assert!(controller.ui.ml.report.is_some());
    assert!(controller.ui.llm.summary.is_none());
    assert!(controller.ui.llm.error.as_deref().unwrap().contains("tokens"));
}

#[test]
fn compliance_report_is_hidden_until_requested() {
    let mut controller = EguiController::new();
    assert!(!controller.ui.governance.report_visible);
    controller.show_compliance_report();
    assert!(controller.ui.governance.report_visible);
}
