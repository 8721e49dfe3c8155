use super::*;

const SAMPLE_REPORT: &str = "\
VALIDATION RESULTS
==================
Sample Size: 52,117 pixels
Baseline Correlation (Pearson): 0.3912
Baseline Correlation (Spearman): 0.3500
Enhanced Correlation (Pearson): 0.6021
Enhanced Correlation (Spearman): 0.5800
Relative Improvement: 53.9%
High Severity Detection Rate: 81.4%
";

#[test]
fn defaults_describe_hermits_peak() {
    let snapshot = default_snapshot();
    assert_eq!(snapshot.fire_name.as_deref(), Some("Hermits Peak-Calf Canyon Fire"));
    assert_eq!(snapshot.fire_year, Some(2022));
    assert_eq!(snapshot.fire_size_acres, 341_735);
    assert_eq!(snapshot.fire_damage_usd, FireDamage::Label("4 billion".into()));
    assert_eq!(snapshot.sample_size, 45_892);
}

#[test]
fn report_overlays_recognised_metrics() {
    let mut snapshot = default_snapshot();
    let errors = parse_validation_report(SAMPLE_REPORT, &mut snapshot);
    assert!(errors.is_empty());
    assert_eq!(snapshot.sample_size, 52_117);
    assert!((snapshot.baseline_correlation - 0.3912).abs() < 1e-9);
    assert!((snapshot.enhanced_correlation - 0.6021).abs() < 1e-9);
    assert!((snapshot.improvement_pct - 53.9).abs() < 1e-9);
    assert!((snapshot.detection_rate - 81.4).abs() < 1e-9);
}

#[test]
fn spearman_lines_do_not_override_pearson() {
    let mut snapshot = default_snapshot();
    parse_validation_report("Baseline Correlation (Spearman): 0.99\n", &mut snapshot);
    assert!((snapshot.baseline_correlation - 0.42).abs() < 1e-9);
}

#[test]
fn fire_context_is_never_taken_from_report() {
    let mut snapshot = default_snapshot();
    parse_validation_report(SAMPLE_REPORT, &mut snapshot);
    assert_eq!(snapshot.fire_size_acres, 341_735);
    assert_eq!(snapshot.fire_name.as_deref(), Some("Hermits Peak-Calf Canyon Fire"));
}

#[test]
fn bad_value_keeps_default_and_is_reported() {
    let mut snapshot = default_snapshot();
    let errors = parse_validation_report("Sample Size: lots\nRelative Improvement: 12.5%\n", &mut snapshot);
    assert_eq!(errors.len(), 1);
    assert!(matches!(&errors[0], ReportError::Value { field: "sample_size", .. }));
    assert_eq!(snapshot.sample_size, 45_892);
    assert!((snapshot.improvement_pct - 12.5).abs() < 1e-9);
}

#[test]
fn lines_without_colon_are_skipped() {
    let mut snapshot = default_snapshot();
    let errors = parse_validation_report("Relative Improvement 99%\n", &mut snapshot);
    assert!(errors.is_empty());
    assert_eq!(snapshot, default_snapshot());
}

#[tokio::test]
async fn load_stats_without_report_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(load_stats(dir.path()).await, default_snapshot());
}

#[tokio::test]
async fn load_stats_reads_report_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(VALIDATION_REPORT), SAMPLE_REPORT).unwrap();
    let snapshot = load_stats(dir.path()).await;
    assert_eq!(snapshot.sample_size, 52_117);
    assert!((snapshot.detection_rate - 81.4).abs() < 1e-9);
}
