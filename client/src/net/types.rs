//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server serializes these exact types, so the JSON schema of
//! `/api/stats`, `/api/maps` and `/api/health` has one definition.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One entry of `GET /api/maps`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEntry {
    /// File stem, e.g. `hermits_peak_comparison_map`. Unique key.
    pub name: String,
    /// Path the map artifact is served from.
    pub url: String,
    /// File name including extension. Older hosts omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Estimated fire damage: a dollar amount or a pre-worded label such as
/// `"4 billion"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FireDamage {
    Amount(f64),
    Label(String),
}

/// Validation statistics published by the analysis pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    /// Relative improvement of the enhanced map over the baseline, in percent.
    pub improvement_pct: f64,
    /// Pearson correlation of the enhanced fuel map with burn severity.
    pub enhanced_correlation: f64,
    /// Pearson correlation of the LANDFIRE baseline with burn severity.
    pub baseline_correlation: f64,
    /// Share of high-severity pixels flagged as high hazard, in percent.
    pub detection_rate: f64,
    /// Number of pixels in the validation sample.
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub sample_size: u64,
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub fire_size_acres: u64,
    pub fire_damage_usd: FireDamage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fire_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fire_year: Option<u16>,
}

/// Body of `GET /api/health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub maps_dir_exists: bool,
    #[serde(default)]
    pub reports_dir_exists: bool,
    #[serde(default)]
    pub presentation_dir_exists: bool,
}

impl HealthReport {
    /// Status string the server reports when it is serving normally.
    pub const HEALTHY: &'static str = "healthy";

    pub fn is_healthy(&self) -> bool {
        self.status == Self::HEALTHY
    }
}

fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
