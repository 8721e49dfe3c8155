use super::*;

#[test]
fn from_status_accepts_success_range() {
    assert_eq!(FetchError::from_status(200), None);
    assert_eq!(FetchError::from_status(204), None);
    assert_eq!(FetchError::from_status(299), None);
}

#[test]
fn from_status_rejects_everything_else() {
    assert_eq!(FetchError::from_status(404), Some(FetchError::Status(404)));
    assert_eq!(FetchError::from_status(500), Some(FetchError::Status(500)));
    assert_eq!(FetchError::from_status(304), Some(FetchError::Status(304)));
}

#[test]
fn network_and_status_count_as_network_failures() {
    assert!(FetchError::Network("offline".into()).is_network());
    assert!(FetchError::Status(502).is_network());
    assert!(!FetchError::Parse("eof".into()).is_network());
    assert!(!FetchError::Unavailable.is_network());
}

#[test]
fn display_includes_detail() {
    assert_eq!(FetchError::Status(503).to_string(), "request failed: 503");
    assert_eq!(FetchError::Network("offline".into()).to_string(), "network error: offline");
    assert_eq!(FetchError::Parse("expected value".into()).to_string(), "parse error: expected value");
}
