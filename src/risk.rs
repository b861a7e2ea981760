//! Synthetic risk scoring for the demo dashboard.
//!
//! Scores are uniform random draws with no history or smoothing; they exist
//! to feed the gauge, the alert banner and the overview cards. Nothing here
//! measures real risk.

use rand::Rng;
use std::ops::RangeInclusive;
use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};

/// Range every risk score is drawn from.
pub const SCORE_RANGE: RangeInclusive<f64> = 20.0..=95.0;

/// Scores strictly above this fire the critical alert banner.
pub const ALERT_THRESHOLD: f64 = 80.0;

/// Gauge band for a risk score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskBand {
    /// `[0, 40)`
    Green,
    /// `[40, 70)`
    Yellow,
    /// `[70, 100]`
    Red,
}

impl RiskBand {
    /// Bucket a score into its gauge band.
    pub fn for_score(score: f64) -> Self {
        if score < 40.0 {
            Self::Green
        } else if score < 70.0 {
            Self::Yellow
        } else {
            Self::Red
        }
    }

    /// Short label used in the sidebar and status bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Green => "Low",
            Self::Yellow => "Elevated",
            Self::Red => "High",
        }
    }
}

/// Draw the next risk score from the process RNG.
pub fn next_score() -> f64 {
    sample_score(&mut rand::rng())
}

/// Draw a risk score from a caller-supplied RNG (seedable in tests).
pub fn sample_score<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(SCORE_RANGE)
}

/// Whether a score should trigger the critical alert banner.
pub fn alert_active(score: f64) -> bool {
    score > ALERT_THRESHOLD
}

/// Synthetic overview figures regenerated on every dashboard refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSnapshot {
    /// `STABLE` below a score of 60, `MONITORING` at or above.
    pub status_label: &'static str,
    /// Pretend fleet size, 12-20.
    pub models_monitored: u32,
    /// Pretend compliance percentage, 90-98.
    pub compliance_pct: u32,
    /// Pretend confidence percentage, 92-99.
    pub confidence_pct: u32,
    /// Overall health percentage, 85-99, drives the health bar.
    pub health_pct: u32,
    /// Local timestamp shown next to the audit line.
    pub audit_stamp: String,
}

impl SystemSnapshot {
    /// Generate a snapshot for a score using the process RNG.
    pub fn generate(score: f64) -> Self {
        Self::generate_with(score, &mut rand::rng())
    }

    /// Generate a snapshot from a caller-supplied RNG.
    pub fn generate_with<R: Rng + ?Sized>(score: f64, rng: &mut R) -> Self {
        Self {
            status_label: if score < 60.0 { "STABLE" } else { "MONITORING" },
            models_monitored: rng.random_range(12..=20),
            compliance_pct: rng.random_range(90..=98),
            confidence_pct: rng.random_range(92..=99),
            health_pct: rng.random_range(85..=99),
            audit_stamp: audit_stamp(),
        }
    }
}

fn audit_stamp() -> String {
    const STAMP_FORMAT: &[FormatItem<'_>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(STAMP_FORMAT)
        .unwrap_or_else(|_| String::from("unknown"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn scores_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let score = sample_score(&mut rng);
            assert!((20.0..=95.0).contains(&score), "score out of range: {score}");
        }
    }

    #[test]
    fn scores_span_the_full_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let scores: Vec<f64> = (0..10_000).map(|_| sample_score(&mut rng)).collect();
        assert!(scores.iter().any(|s| *s < 25.0));
        assert!(scores.iter().any(|s| *s > 90.0));
    }

    #[test]
    fn bands_split_at_forty_and_seventy() {
        assert_eq!(RiskBand::for_score(0.0), RiskBand::Green);
        assert_eq!(RiskBand::for_score(39.9), RiskBand::Green);
        assert_eq!(RiskBand::for_score(40.0), RiskBand::Yellow);
        assert_eq!(RiskBand::for_score(69.9), RiskBand::Yellow);
        assert_eq!(RiskBand::for_score(70.0), RiskBand::Red);
        assert_eq!(RiskBand::for_score(100.0), RiskBand::Red);
    }

    #[test]
    fn alert_fires_strictly_above_threshold() {
        assert!(!alert_active(80.0));
        assert!(alert_active(80.1));
    }

    #[test]
    fn snapshot_figures_stay_in_their_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let snapshot = SystemSnapshot::generate_with(50.0, &mut rng);
            assert!((12..=20).contains(&snapshot.models_monitored));
            assert!((90..=98).contains(&snapshot.compliance_pct));
            assert!((92..=99).contains(&snapshot.confidence_pct));
            assert!((85..=99).contains(&snapshot.health_pct));
        }
    }

    #[test]
    fn status_label_tracks_score() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            SystemSnapshot::generate_with(59.9, &mut rng).status_label,
            "STABLE"
        );
        assert_eq!(
            SystemSnapshot::generate_with(60.0, &mut rng).status_label,
            "MONITORING"
        );
    }
}
