use axum::{
    Extension,
    extract::Query,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::Json,
};
use serde::Deserialize;

use crate::{api::SharedStore, types::ExtremeTracksResponse};

#[derive(Debug, Deserialize)]
pub struct ExtremeTracksQuery {
    pub feature: String,
    /// Accepted for compatibility with existing callers; it does not change the answer.
    #[serde(default)]
    pub limit: Option<u32>,
}

/// `GET /api/getExtremeTracks?feature=<f>&limit=<n>`
///
/// Answers `{ "<feature>": { "highest": …, "lowest": … } }`, or `{}` when the
/// store has nothing for the feature. Requests without a bearer token get 401.
pub async fn extreme_tracks(
    headers: HeaderMap,
    Query(query): Query<ExtremeTracksQuery>,
    Extension(store): Extension<SharedStore>,
) -> Result<Json<ExtremeTracksResponse>, StatusCode> {
    if !has_bearer_token(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let store = store.read().await;
    let mut res = ExtremeTracksResponse::new();
    if let Some(extremes) = store.get(&query.feature) {
        res.insert(query.feature.clone(), extremes.clone());
    }

    log::debug!(
        "Extremes lookup feature={} limit={:?} found={}",
        query.feature,
        query.limit,
        !res.is_empty()
    );
    Ok(Json(res))
}

fn has_bearer_token(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| !token.trim().is_empty())
}
