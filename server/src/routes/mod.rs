//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the JSON API, the pipeline's output directories as
//! static files, and the Leptos SSR dashboard. The live dashboard is at `/`
//! and the presentation gallery at `/gallery`.

pub mod api;

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// URL prefix the slide images are served under.
pub const PRESENTATION_MOUNT: &str = "/presentation";

/// JSON API plus the static output directories.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let maps = ServeDir::new(state.maps_dir());
    let presentation = ServeDir::new(state.presentation_dir());

    Router::new()
        .route("/api/stats", get(api::get_stats))
        .route("/api/maps", get(api::list_maps))
        .route("/api/health", get(api::health))
        .route("/api/{*rest}", get(api::not_found))
        .nest_service(api::MAPS_MOUNT, maps)
        .nest_service(PRESENTATION_MOUNT, presentation)
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes + static outputs + Leptos SSR pages.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(fuelmap_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || fuelmap_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Hydration bundle (WASM, JS, CSS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
