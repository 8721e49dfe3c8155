//! Display text derived from one statistics snapshot.
//!
//! Every panel reads from the same [`StatsView`], and a new snapshot rebuilds
//! the whole view; no panel is ever updated on its own.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::net::types::{FireDamage, StatisticsSnapshot};
use crate::util::format::{fixed, group_amount, group_thousands, signed_percent, whole_percent};

/// Text shown in a value slot before the snapshot arrives.
pub const PENDING_VALUE: &str = "—";

/// One headline figure in the page header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadlineStat {
    pub value: String,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonPanel {
    pub baseline_correlation: String,
    pub enhanced_correlation: String,
    pub improvement: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataPanel {
    pub sample_size: String,
    pub baseline_correlation: String,
    pub enhanced_correlation: String,
    pub improvement: String,
    pub detection_rate: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirePanel {
    pub fire_name: String,
    pub fire_year: String,
    pub fire_size: String,
    pub fire_damage: String,
}

/// Formatted text for every statistics region on the live dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsView {
    pub header: [HeadlineStat; 3],
    pub comparison: ComparisonPanel,
    pub data: DataPanel,
    pub fire: FirePanel,
}

impl StatsView {
    pub fn from_snapshot(stats: &StatisticsSnapshot) -> Self {
        let improvement = signed_percent(stats.improvement_pct);
        let enhanced = fixed(stats.enhanced_correlation, 2);
        let baseline = fixed(stats.baseline_correlation, 2);
        let detection = whole_percent(stats.detection_rate);

        Self {
            header: [
                HeadlineStat { value: improvement.clone(), label: "Improvement" },
                HeadlineStat { value: enhanced.clone(), label: "Correlation" },
                HeadlineStat { value: detection.clone(), label: "Detection Rate" },
            ],
            comparison: ComparisonPanel {
                baseline_correlation: baseline.clone(),
                enhanced_correlation: enhanced.clone(),
                improvement: improvement.clone(),
            },
            data: DataPanel {
                sample_size: format!("{} pixels", group_thousands(stats.sample_size)),
                baseline_correlation: baseline,
                enhanced_correlation: enhanced,
                improvement,
                detection_rate: detection,
            },
            fire: FirePanel {
                fire_name: stats.fire_name.clone().unwrap_or_else(|| PENDING_VALUE.to_owned()),
                fire_year: stats.fire_year.map_or_else(|| PENDING_VALUE.to_owned(), |y| y.to_string()),
                fire_size: format!("{} acres", group_thousands(stats.fire_size_acres)),
                fire_damage: format_damage(&stats.fire_damage_usd),
            },
        }
    }

    /// Every slot showing [`PENDING_VALUE`].
    pub fn pending() -> Self {
        let p = || PENDING_VALUE.to_owned();
        Self {
            header: [
                HeadlineStat { value: p(), label: "Improvement" },
                HeadlineStat { value: p(), label: "Correlation" },
                HeadlineStat { value: p(), label: "Detection Rate" },
            ],
            comparison: ComparisonPanel { baseline_correlation: p(), enhanced_correlation: p(), improvement: p() },
            data: DataPanel {
                sample_size: p(),
                baseline_correlation: p(),
                enhanced_correlation: p(),
                improvement: p(),
                detection_rate: p(),
            },
            fire: FirePanel { fire_name: p(), fire_year: p(), fire_size: p(), fire_damage: p() },
        }
    }
}

impl Default for StatsView {
    fn default() -> Self {
        Self::pending()
    }
}

/// `$4,000,000,000` for amounts, `$4 billion` for labels.
pub fn format_damage(damage: &FireDamage) -> String {
    match damage {
        FireDamage::Amount(value) => format!("${}", group_amount(*value)),
        FireDamage::Label(label) => format!("${}", label.trim()),
    }
}

/// Statistics regions plus fetch status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsState {
    pub view: StatsView,
    pub loaded: bool,
    pub error: Option<String>,
}

impl StatsState {
    /// Rebuild every region from `snapshot`.
    pub fn apply(&mut self, snapshot: &StatisticsSnapshot) {
        self.view = StatsView::from_snapshot(snapshot);
        self.loaded = true;
        self.error = None;
    }

    /// Record a failed fetch; the regions keep whatever they showed.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}
