use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::{Res, api, config::Config, info, spotify::SpotifyClient, success};

/// Builds the service router around a shared Spotify client.
///
/// CORS is open to every origin so browser frontends on any host can call the
/// validator directly.
pub fn router(client: SpotifyClient) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/validate-playlist", post(api::validate_playlist))
        .layer(Extension(client))
        .layer(CorsLayer::permissive())
}

/// Binds the configured address and serves until Ctrl+C is received.
pub async fn start_api_server(config: Config) -> Res<()> {
    let addr = config.server_addr()?;
    let client = SpotifyClient::new(&config)?;
    let app = router(client);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Validation server running on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    success!("Validation server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("Caught CTRL+C signal, shutting down");
}
