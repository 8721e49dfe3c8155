use super::*;

// =============================================================
// MapEntry
// =============================================================

#[test]
fn map_entry_parses_minimal_listing() {
    let entries: Vec<MapEntry> =
        serde_json::from_str(r#"[{"name":"hermits_peak_interactive_map","url":"/maps/hermits_peak_interactive_map.html"}]"#)
            .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "hermits_peak_interactive_map");
    assert_eq!(entries[0].url, "/maps/hermits_peak_interactive_map.html");
    assert_eq!(entries[0].filename, None);
}

#[test]
fn map_entry_keeps_filename_when_present() {
    let entry: MapEntry = serde_json::from_str(r#"{"name":"a","url":"/maps/a.html","filename":"a.html"}"#).unwrap();
    assert_eq!(entry.filename.as_deref(), Some("a.html"));
}

#[test]
fn map_entry_rejects_missing_url() {
    assert!(serde_json::from_str::<MapEntry>(r#"{"name":"a"}"#).is_err());
}

// =============================================================
// StatisticsSnapshot
// =============================================================

#[test]
fn snapshot_parses_original_host_payload() {
    let json = r#"{
        "fire_name": "Hermits Peak-Calf Canyon Fire",
        "fire_year": 2022,
        "fire_size_acres": 341735,
        "fire_damage_usd": "4 billion",
        "baseline_correlation": 0.42,
        "enhanced_correlation": 0.58,
        "improvement_pct": 38.1,
        "sample_size": 45892,
        "detection_rate": 73.2
    }"#;
    let stats: StatisticsSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(stats.sample_size, 45_892);
    assert_eq!(stats.fire_size_acres, 341_735);
    assert_eq!(stats.fire_damage_usd, FireDamage::Label("4 billion".into()));
    assert_eq!(stats.fire_year, Some(2022));
    assert!((stats.improvement_pct - 38.1).abs() < f64::EPSILON);
}

#[test]
fn snapshot_accepts_numeric_damage_and_float_counts() {
    let json = r#"{
        "improvement_pct": 43.2,
        "enhanced_correlation": 0.81,
        "baseline_correlation": 0.56,
        "detection_rate": 77.0,
        "sample_size": 1200.0,
        "fire_size_acres": 341735,
        "fire_damage_usd": 4000000000
    }"#;
    let stats: StatisticsSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(stats.sample_size, 1200);
    assert_eq!(stats.fire_damage_usd, FireDamage::Amount(4_000_000_000.0));
    assert_eq!(stats.fire_name, None);
}

#[test]
fn snapshot_rejects_fractional_sample_size() {
    let json = r#"{
        "improvement_pct": 1.0, "enhanced_correlation": 0.1, "baseline_correlation": 0.1,
        "detection_rate": 1.0, "sample_size": 12.5, "fire_size_acres": 1, "fire_damage_usd": 1
    }"#;
    assert!(serde_json::from_str::<StatisticsSnapshot>(json).is_err());
}

#[test]
fn snapshot_rejects_negative_acreage() {
    let json = r#"{
        "improvement_pct": 1.0, "enhanced_correlation": 0.1, "baseline_correlation": 0.1,
        "detection_rate": 1.0, "sample_size": 12, "fire_size_acres": -1, "fire_damage_usd": 1
    }"#;
    assert!(serde_json::from_str::<StatisticsSnapshot>(json).is_err());
}

// =============================================================
// HealthReport
// =============================================================

#[test]
fn health_report_checks_status_string_only() {
    let healthy: HealthReport = serde_json::from_str(r#"{"status":"healthy"}"#).unwrap();
    assert!(healthy.is_healthy());
    assert!(!healthy.maps_dir_exists);

    let degraded: HealthReport = serde_json::from_str(r#"{"status":"degraded","maps_dir_exists":true}"#).unwrap();
    assert!(!degraded.is_healthy());
    assert!(degraded.maps_dir_exists);
}
