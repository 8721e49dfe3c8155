use super::*;

#[test]
fn endpoints_match_server_routes() {
    assert_eq!(STATS_ENDPOINT, "/api/stats");
    assert_eq!(MAPS_ENDPOINT, "/api/maps");
    assert_eq!(HEALTH_ENDPOINT, "/api/health");
}

#[test]
fn decode_json_parses_empty_listing() {
    let maps: Vec<MapEntry> = decode_json("[]").unwrap();
    assert!(maps.is_empty());
}

#[test]
fn decode_json_reports_parse_failure() {
    let err = decode_json::<Vec<MapEntry>>("<html>not json</html>").unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
    assert!(!err.is_network());
}

#[test]
fn decode_json_rejects_object_where_array_expected() {
    let err = decode_json::<Vec<MapEntry>>(r#"{"name":"a","url":"b"}"#).unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
}

#[test]
fn log_health_only_accepts_healthy_status() {
    let ok = Ok(HealthReport {
        status: "healthy".into(),
        maps_dir_exists: true,
        reports_dir_exists: true,
        presentation_dir_exists: true,
    });
    assert!(log_health(&ok));

    let degraded = Ok(HealthReport {
        status: "starting".into(),
        maps_dir_exists: false,
        reports_dir_exists: false,
        presentation_dir_exists: false,
    });
    assert!(!log_health(&degraded));

    assert!(!log_health(&Err(FetchError::Network("offline".into()))));
}

#[test]
fn ssr_stubs_report_unavailable() {
    let stats = block_on_ready(fetch_stats());
    assert_eq!(stats, Err(FetchError::Unavailable));
    let maps = block_on_ready(fetch_maps());
    assert_eq!(maps, Err(FetchError::Unavailable));
    let doc = block_on_ready(fetch_document("/maps/01_overview.html"));
    assert_eq!(doc, Err(FetchError::Unavailable));
    assert!(!block_on_ready(check_health()));
}

/// Drive a future that never suspends; the non-hydrate stubs complete immediately.
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future unexpectedly pending"),
    }
}
