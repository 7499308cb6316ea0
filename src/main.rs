mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    let directory = services::seed::load(config.seed_path.as_deref())?;
    if directory.is_empty() {
        tracing::warn!("activity directory is empty");
    }
    tracing::info!(activities = directory.len(), "activity directory initialized");

    let state = state::AppState::new(directory);
    let app = routes::app(state, &config.static_dir);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, static_dir = %config.static_dir.display(), "mergington activities listening");
    axum::serve(listener, app).await?;
    Ok(())
}
