//! Classification metrics for uploaded prediction tables.
//!
//! Accuracy, precision, recall and F1 over `actual`/`predicted` label
//! columns. Binary tables (labels drawn from `{0, 1}`) score the positive
//! class; anything else falls back to macro averaging. A zero denominator
//! always yields 0.0 rather than an error, so degenerate uploads still
//! render.

use std::collections::{BTreeMap, BTreeSet};

use super::MetricsError;
use super::table::Table;

/// Ground-truth label column.
pub const ACTUAL_COLUMN: &str = "actual";
/// Model-output label column.
pub const PREDICTED_COLUMN: &str = "predicted";
/// Optional subgroup column used for the bias indicator.
pub const GROUP_COLUMN: &str = "group";

const POSITIVE_LABEL: &str = "1";
const NEGATIVE_LABEL: &str = "0";

/// Metric report rendered by the Traditional ML panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationReport {
    /// Fraction of rows where `predicted == actual`.
    pub accuracy: f64,
    /// Positive-class (binary) or macro-averaged precision.
    pub precision: f64,
    /// Positive-class (binary) or macro-averaged recall.
    pub recall: f64,
    /// Harmonic mean of precision and recall, or macro-averaged F1.
    pub f1: f64,
    /// Mean predicted value per `group` label, when a `group` column exists
    /// and `predicted` is numeric. Illustrative only, not a fairness test.
    pub bias_by_group: Option<BTreeMap<String, f64>>,
    /// Number of scored rows.
    pub rows: usize,
}

impl ClassificationReport {
    /// Score a prediction table.
    ///
    /// Requires `actual` and `predicted` columns; everything else in the
    /// table is ignored apart from the optional `group` column.
    pub fn from_table(table: &Table) -> Result<Self, MetricsError> {
        let columns = table.columns(&[ACTUAL_COLUMN, PREDICTED_COLUMN])?;
        let (actual, predicted) = (columns[0], columns[1]);
        if actual.is_empty() {
            return Err(MetricsError::Empty);
        }

        let matches = actual
            .iter()
            .zip(predicted)
            .filter(|(a, p)| a == p)
            .count();
        let accuracy = matches as f64 / actual.len() as f64;

        let (precision, recall, f1) = if is_binary(actual, predicted) {
            scores_for_class(actual, predicted, POSITIVE_LABEL)
        } else {
            macro_scores(actual, predicted)
        };

        Ok(Self {
            accuracy,
            precision,
            recall,
            f1,
            bias_by_group: bias_by_group(table),
            rows: actual.len(),
        })
    }
}

fn is_binary(actual: &[String], predicted: &[String]) -> bool {
    actual
        .iter()
        .chain(predicted)
        .all(|label| label == POSITIVE_LABEL || label == NEGATIVE_LABEL)
}

/// Precision/recall/F1 for one class, with zero denominators scoring 0.0.
fn scores_for_class(actual: &[String], predicted: &[String], class: &str) -> (f64, f64, f64) {
    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut fn_ = 0usize;
    for (a, p) in actual.iter().zip(predicted) {
        match (a == class, p == class) {
            (true, true) => tp += 1,
            (false, true) => fp += 1,
            (true, false) => fn_ += 1,
            (false, false) => {}
        }
    }
    let precision = ratio(tp, tp + fp);
    let recall = ratio(tp, tp + fn_);
    let f1 = if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };
    (precision, recall, f1)
}

/// Unweighted mean of per-class scores over every observed label.
fn macro_scores(actual: &[String], predicted: &[String]) -> (f64, f64, f64) {
    let classes: BTreeSet<&str> = actual.iter().chain(predicted).map(String::as_str).collect();
    let count = classes.len() as f64;
    let mut totals = (0.0, 0.0, 0.0);
    for class in classes {
        let (precision, recall, f1) = scores_for_class(actual, predicted, class);
        totals.0 += precision;
        totals.1 += recall;
        totals.2 += f1;
    }
    (totals.0 / count, totals.1 / count, totals.2 / count)
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Mean predicted value per group, in sorted group order.
///
/// Returns `None` when the table has no `group` column or `predicted` does
/// not coerce to numbers; the four headline metrics still render without
/// the bias block.
fn bias_by_group(table: &Table) -> Option<BTreeMap<String, f64>> {
    let groups = table.column(GROUP_COLUMN)?;
    let predicted = table.numeric_column(PREDICTED_COLUMN).ok()?;
    let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for (group, value) in groups.iter().zip(predicted) {
        let entry = sums.entry(group.clone()).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }
    Some(
        sums.into_iter()
            .map(|(group, (sum, count))| (group, sum / count as f64))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn table(text: &str) -> Table {
        Table::from_reader(Cursor::new(text.to_string())).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn binary_example_matches_hand_computed_scores() {
        let table = table("actual,predicted\n1,1\n0,0\n1,0\n1,1\n");
        let report = ClassificationReport::from_table(&table).unwrap();
        assert!(close(report.accuracy, 0.75));
        assert!(close(report.precision, 1.0));
        assert!(close(report.recall, 2.0 / 3.0));
        assert!(close(report.f1, 0.8));
        assert_eq!(report.rows, 4);
    }

    #[test]
    fn metrics_stay_in_unit_interval() {
        let table = table("actual,predicted\n1,0\n0,1\n1,1\n0,0\n1,0\n");
        let report = ClassificationReport::from_table(&table).unwrap();
        for value in [report.accuracy, report.precision, report.recall, report.f1] {
            assert!((0.0..=1.0).contains(&value), "out of range: {value}");
        }
    }

    #[test]
    fn no_predicted_positives_scores_zero_precision() {
        let table = table("actual,predicted\n1,0\n1,0\n0,0\n");
        let report = ClassificationReport::from_table(&table).unwrap();
        assert_eq!(report.precision, 0.0);
        assert_eq!(report.f1, 0.0);
    }

    #[test]
    fn no_actual_positives_scores_zero_recall() {
        let table = table("actual,predicted\n0,1\n0,0\n");
        let report = ClassificationReport::from_table(&table).unwrap();
        assert_eq!(report.recall, 0.0);
    }

    #[test]
    fn missing_predicted_column_is_a_validation_error() {
        let table = table("actual,score\n1,0.9\n");
        let err = ClassificationReport::from_table(&table).unwrap_err();
        match err {
            MetricsError::Validation(validation) => {
                assert_eq!(validation.missing, ["predicted"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_table_is_rejected() {
        let table = table("actual,predicted\n");
        assert!(matches!(
            ClassificationReport::from_table(&table),
            Err(MetricsError::Empty)
        ));
    }

    #[test]
    fn categorical_labels_use_macro_averaging() {
        // Perfect predictions: every per-class score is 1.
        let table = table("actual,predicted\ncat,cat\ndog,dog\nbird,bird\n");
        let report = ClassificationReport::from_table(&table).unwrap();
        assert!(close(report.accuracy, 1.0));
        assert!(close(report.precision, 1.0));
        assert!(close(report.recall, 1.0));
        assert!(close(report.f1, 1.0));
    }

    #[test]
    fn macro_average_counts_unpredicted_classes_as_zero() {
        // "bird" never appears in predictions: its precision and recall are 0.
        let table = table("actual,predicted\ncat,cat\nbird,cat\n");
        let report = ClassificationReport::from_table(&table).unwrap();
        // cat: precision 1/2, recall 1; bird: 0, 0.
        assert!(close(report.precision, 0.25));
        assert!(close(report.recall, 0.5));
    }

    #[test]
    fn bias_by_group_means_predicted_per_group() {
        let table = table("actual,predicted,group\n1,1,a\n0,0,a\n1,1,b\n");
        let report = ClassificationReport::from_table(&table).unwrap();
        let bias = report.bias_by_group.unwrap();
        assert!(close(bias["a"], 0.5));
        assert!(close(bias["b"], 1.0));
    }

    #[test]
    fn bias_block_is_omitted_without_group_column() {
        let table = table("actual,predicted\n1,1\n");
        let report = ClassificationReport::from_table(&table).unwrap();
        assert!(report.bias_by_group.is_none());
    }

    #[test]
    fn bias_block_is_omitted_for_non_numeric_predictions() {
        let table = table("actual,predicted,group\ncat,cat,a\ndog,cat,b\n");
        let report = ClassificationReport::from_table(&table).unwrap();
        assert!(report.bias_by_group.is_none());
    }
}
