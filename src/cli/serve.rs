use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    config, error, info, management::ExtremesStore, server::start_api_server, success,
};

pub async fn serve() {
    let addr = match config::server_addr() {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    // the service only answers lookups; `extremes set` owns every write
    let store = match ExtremesStore::open_read_only(config::extremes_path()).await {
        Ok(store) => store,
        Err(e) => error!("Cannot open extremes store. Err: {}", e),
    };
    info!(
        "Loaded {} features from {}",
        store.len(),
        store.path().display()
    );

    if let Err(e) = start_api_server(Arc::new(RwLock::new(store)), addr).await {
        error!("Extremes service stopped. Err: {}", e);
    }

    success!("Extremes service shut down");
}
