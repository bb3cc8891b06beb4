use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::api::SharedStore;

pub async fn health(Extension(store): Extension<SharedStore>) -> Json<Value> {
    let features = store.read().await.len();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "features": features
    }))
}
