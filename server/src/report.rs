//! Statistics snapshot assembled from the pipeline's validation report.
//!
//! The report is plain text, one `Label: value` per line. Lines are matched
//! by keyword and only the recognised metrics overlay the built-in defaults;
//! everything else in the file is ignored.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use std::path::Path;

use fuelmap_client::net::types::{FireDamage, StatisticsSnapshot};

/// File name of the validation report inside the reports directory.
pub const VALIDATION_REPORT: &str = "validation_results.txt";

/// Errors produced while reading the validation report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("report read failed: {0}")]
    Read(#[from] std::io::Error),
    #[error("unparsable {field} value: {value:?}")]
    Value { field: &'static str, value: String },
}

/// Figures served before the pipeline has produced a report.
#[must_use]
pub fn default_snapshot() -> StatisticsSnapshot {
    StatisticsSnapshot {
        improvement_pct: 38.1,
        enhanced_correlation: 0.58,
        baseline_correlation: 0.42,
        detection_rate: 73.2,
        sample_size: 45_892,
        fire_size_acres: 341_735,
        fire_damage_usd: FireDamage::Label("4 billion".into()),
        fire_name: Some("Hermits Peak-Calf Canyon Fire".into()),
        fire_year: Some(2022),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Metric {
    Baseline,
    Enhanced,
    Improvement,
    SampleSize,
    DetectionRate,
}

impl Metric {
    fn classify(line: &str) -> Option<Self> {
        if line.contains("Baseline Correlation") && line.contains("Pearson") {
            Some(Self::Baseline)
        } else if line.contains("Enhanced Correlation") && line.contains("Pearson") {
            Some(Self::Enhanced)
        } else if line.contains("Relative Improvement") {
            Some(Self::Improvement)
        } else if line.contains("Sample Size") {
            Some(Self::SampleSize)
        } else if line.contains("Detection Rate") {
            Some(Self::DetectionRate)
        } else {
            None
        }
    }

    fn field(self) -> &'static str {
        match self {
            Self::Baseline => "baseline_correlation",
            Self::Enhanced => "enhanced_correlation",
            Self::Improvement => "improvement_pct",
            Self::SampleSize => "sample_size",
            Self::DetectionRate => "detection_rate",
        }
    }

    fn apply(self, raw: &str, snapshot: &mut StatisticsSnapshot) -> Result<(), ReportError> {
        let bad = || ReportError::Value { field: self.field(), value: raw.to_owned() };
        // Values may carry a trailing unit word ("52,117 pixels").
        let token = |text: &str| text.split_whitespace().next().unwrap_or_default().replace([',', '%'], "");
        let float = |text: &str| token(text).parse::<f64>().ok().filter(|v| v.is_finite());
        match self {
            Self::Baseline => snapshot.baseline_correlation = float(raw).ok_or_else(bad)?,
            Self::Enhanced => snapshot.enhanced_correlation = float(raw).ok_or_else(bad)?,
            Self::Improvement => snapshot.improvement_pct = float(raw).ok_or_else(bad)?,
            Self::DetectionRate => snapshot.detection_rate = float(raw).ok_or_else(bad)?,
            Self::SampleSize => snapshot.sample_size = token(raw).parse::<u64>().map_err(|_| bad())?,
        }
        Ok(())
    }
}

/// Overlay every recognised metric in `text` onto `snapshot`.
///
/// A line whose value does not parse leaves that field untouched; the
/// failures are returned so the caller can log them.
pub fn parse_validation_report(text: &str, snapshot: &mut StatisticsSnapshot) -> Vec<ReportError> {
    let mut errors = Vec::new();
    for line in text.lines() {
        let Some(metric) = Metric::classify(line) else {
            continue;
        };
        let Some((_, value)) = line.split_once(':') else {
            continue;
        };
        if let Err(e) = metric.apply(value, snapshot) {
            errors.push(e);
        }
    }
    errors
}

/// Build the snapshot served by `/api/stats` from `reports_dir`.
///
/// A missing report yields the defaults silently; an unreadable report or a
/// bad value is logged and the affected fields keep their defaults.
pub async fn load_stats(reports_dir: &Path) -> StatisticsSnapshot {
    let mut snapshot = default_snapshot();
    let path = reports_dir.join(VALIDATION_REPORT);

    let text = match tokio::fs::read_to_string(&path).await {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return snapshot,
        Err(e) => {
            let error = ReportError::from(e);
            tracing::warn!(path = %path.display(), %error, "validation report unreadable; using defaults");
            return snapshot;
        }
    };

    for error in parse_validation_report(&text, &mut snapshot) {
        tracing::warn!(path = %path.display(), %error, "validation report value ignored");
    }
    snapshot
}
