mod config;
mod report;
mod routes;
mod state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    let port = config.port;
    tracing::info!(
        maps_dir = %config.maps_dir.display(),
        reports_dir = %config.reports_dir.display(),
        presentation_dir = %config.presentation_dir.display(),
        "output directories"
    );

    let state = state::AppState::new(config);
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "fuelmap listening");
    axum::serve(listener, app).await?;
    Ok(())
}
