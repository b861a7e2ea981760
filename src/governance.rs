//! Static responsible-AI content for the governance section.
//!
//! Nothing here is computed; the checklist and the report are fixed copy
//! the dashboard displays on demand.

/// One governance control shown in the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    /// Control name.
    pub label: &'static str,
}

/// Responsible-AI controls, in display order.
pub const CHECKLIST: [ChecklistItem; 4] = [
    ChecklistItem {
        label: "Bias monitoring",
    },
    ChecklistItem {
        label: "Hallucination monitoring",
    },
    ChecklistItem {
        label: "Risk governance",
    },
    ChecklistItem {
        label: "Audit transparency",
    },
];

/// One row of the on-demand compliance report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRow {
    /// Audited category.
    pub category: &'static str,
    /// Fixed status value.
    pub status: &'static str,
}

/// Produce the fixed four-row compliance report.
pub fn compliance_report() -> [ReportRow; 4] {
    [
        ReportRow {
            category: "ML Reliability",
            status: "OK",
        },
        ReportRow {
            category: "LLM Safety",
            status: "OK",
        },
        ReportRow {
            category: "Bias",
            status: "OK",
        },
        ReportRow {
            category: "Audit",
            status: "OK",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_has_four_passing_rows() {
        let report = compliance_report();
        assert_eq!(report.len(), 4);
        assert!(report.iter().all(|row| row.status == "OK"));
        assert_eq!(report[0].category, "ML Reliability");
    }
}
