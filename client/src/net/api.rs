//! REST API helpers for the dashboard endpoints and map artifacts.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`FetchError::Unavailable`] since these
//! requests are only issued from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper is a single GET with no retry. Callers receive a typed
//! [`FetchError`] and turn it into an in-place placeholder.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::FetchError;
#[cfg(any(test, feature = "hydrate"))]
use super::types::HealthReport;
use super::types::{MapEntry, StatisticsSnapshot};

pub const STATS_ENDPOINT: &str = "/api/stats";
pub const MAPS_ENDPOINT: &str = "/api/maps";
pub const HEALTH_ENDPOINT: &str = "/api/health";

#[cfg(any(test, feature = "hydrate"))]
fn decode_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))
}

/// GET `url` and return the body text of a 2xx response.
#[cfg(feature = "hydrate")]
async fn get_text(url: &str) -> Result<String, FetchError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if let Some(err) = FetchError::from_status(resp.status()) {
        return Err(err);
    }
    resp.text().await.map_err(|e| FetchError::Parse(e.to_string()))
}

/// Fetch the validation statistics from `/api/stats`.
///
/// # Errors
///
/// Returns a [`FetchError`] if the request fails or the body is not a snapshot.
pub async fn fetch_stats() -> Result<StatisticsSnapshot, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_text(STATS_ENDPOINT).await?;
        decode_json(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unavailable)
    }
}

/// Fetch the generated-map listing from `/api/maps`.
///
/// # Errors
///
/// Returns a [`FetchError`] if the request fails or the body is not a JSON array of entries.
pub async fn fetch_maps() -> Result<Vec<MapEntry>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_text(MAPS_ENDPOINT).await?;
        decode_json(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unavailable)
    }
}

/// Fetch the raw text of a map document for fragment extraction.
///
/// # Errors
///
/// Returns a [`FetchError`] if the request is rejected or answered with a non-success status.
pub async fn fetch_document(url: &str) -> Result<String, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        get_text(url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(FetchError::Unavailable)
    }
}

/// Probe `/api/health` and log the outcome. The result is informational only.
pub async fn check_health() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let report = match get_text(HEALTH_ENDPOINT).await {
            Ok(body) => decode_json::<HealthReport>(&body),
            Err(e) => Err(e),
        };
        log_health(&report)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn log_health(report: &Result<HealthReport, FetchError>) -> bool {
    match report {
        Ok(report) if report.is_healthy() => {
            leptos::logging::log!("health check: {}", report.status);
            true
        }
        Ok(report) => {
            leptos::logging::warn!("health check: unexpected status {}", report.status);
            false
        }
        Err(e) => {
            leptos::logging::error!("health check failed: {e}");
            false
        }
    }
}
