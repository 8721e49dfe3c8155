//! JSON endpoints consumed by the dashboard.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::path::Path;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use fuelmap_client::net::types::{HealthReport, MapEntry, StatisticsSnapshot};

use crate::report;
use crate::state::AppState;

/// URL prefix the maps directory is served under.
pub const MAPS_MOUNT: &str = "/maps";

/// `GET /api/stats` — current validation statistics.
pub async fn get_stats(State(state): State<AppState>) -> Json<StatisticsSnapshot> {
    Json(report::load_stats(state.reports_dir()).await)
}

/// `GET /api/maps` — every generated `*.html` map, sorted by file name.
pub async fn list_maps(State(state): State<AppState>) -> Json<Vec<MapEntry>> {
    Json(scan_maps(state.maps_dir()).await)
}

/// `GET /api/health` — liveness plus which output directories exist.
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: HealthReport::HEALTHY.to_owned(),
        maps_dir_exists: is_dir(state.maps_dir()).await,
        reports_dir_exists: is_dir(state.reports_dir()).await,
        presentation_dir_exists: is_dir(state.presentation_dir()).await,
    })
}

/// Fallback for unmatched `/api/*` paths.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": "Not found" })))
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path).await.is_ok_and(|m| m.is_dir())
}

/// List map documents in `dir`. A missing or unreadable directory is empty.
pub async fn scan_maps(dir: &Path) -> Vec<MapEntry> {
    let mut read_dir = match tokio::fs::read_dir(dir).await {
        Ok(rd) => rd,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(dir = %dir.display(), error = %e, "maps directory unreadable");
            }
            return Vec::new();
        }
    };

    let mut filenames = Vec::new();
    loop {
        match read_dir.next_entry().await {
            Ok(Some(entry)) => {
                let is_file = entry.file_type().await.is_ok_and(|t| t.is_file());
                let Ok(filename) = entry.file_name().into_string() else {
                    continue;
                };
                if is_file && is_map_document(&filename) {
                    filenames.push(filename);
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "maps directory scan interrupted");
                break;
            }
        }
    }

    filenames.sort();
    filenames.into_iter().map(map_entry).collect()
}

fn is_map_document(filename: &str) -> bool {
    Path::new(filename).extension().is_some_and(|ext| ext == "html") && filename.len() > ".html".len()
}

fn map_entry(filename: String) -> MapEntry {
    let name = filename.strip_suffix(".html").unwrap_or(&filename).to_owned();
    let url = format!("{MAPS_MOUNT}/{}", urlencoding::encode(&filename));
    MapEntry { name, url, filename: Some(filename) }
}
