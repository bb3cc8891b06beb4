use std::net::SocketAddr;

use axum::{Extension, Router, routing::get};

use crate::{
    api::{self, SharedStore},
    info,
    spotify::extremes::EXTREME_TRACKS_PATH,
};

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route(EXTREME_TRACKS_PATH, get(api::extreme_tracks))
        .layer(Extension(store))
}

/// Serves the extremes service until Ctrl-C.
pub async fn start_api_server(store: SharedStore, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Extremes service listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(store))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
}
