use crate::{
    errors::ApiError,
    playlist::TrackCatalog,
    types::{SelectionRequest, Track},
    utils,
};

/// Selects up to `request.limit` distinct track ids for a feature.
///
/// The result is built from, in order of precedence:
/// 1. the selected track, if `selected_track_id` is given (always first),
/// 2. the feature's highest then lowest track, if the feature is stored,
/// 3. recommendations seeded by those two tracks, filling the remaining slots.
///
/// Duplicates are dropped keeping the earliest occurrence, then the list is
/// cut to `limit`. This means a small limit can push seed tracks out in favour
/// of the selected track.
///
/// # External calls
///
/// - the extremes lookup, unless `limit` is 0
/// - recommendations, only when the seeds leave free slots
/// - the selected track lookup, only when an id is given
///
/// # Errors
///
/// Every failed call aborts the selection. A feature without stored extremes
/// is not an error; it just contributes no seeds.
pub async fn select_tracks<C: TrackCatalog>(
    catalog: &C,
    request: &SelectionRequest,
) -> Result<Vec<String>, ApiError> {
    if request.feature.trim().is_empty() {
        return Err(ApiError::InvalidArgument(
            "feature must not be empty".to_string(),
        ));
    }

    if request.limit == 0 {
        return Ok(Vec::new());
    }

    let seeds: Vec<Track> = match catalog
        .feature_extremes(&request.feature, request.limit)
        .await?
    {
        Some(extremes) => vec![extremes.highest, extremes.lowest],
        None => {
            log::debug!("No extremes stored for feature {}", request.feature);
            Vec::new()
        }
    };

    let remaining = request.limit.saturating_sub(seeds.len());
    let recommended = if remaining > 0 {
        let seed_ids: Vec<String> = seeds.iter().map(|t| t.id.clone()).collect();
        catalog.recommendations(&seed_ids, remaining).await?
    } else {
        Vec::new()
    };

    let selected = match request
        .selected_track_id
        .as_deref()
        .filter(|id| !id.is_empty())
    {
        Some(id) => Some(catalog.track(id).await?),
        None => None,
    };

    let ids = pick_track_ids(seeds, recommended, selected, request.limit);
    log::debug!("Final tracks list: {:?}", ids);
    Ok(ids)
}

/// Orders, deduplicates and truncates already fetched tracks.
///
/// `selected` goes first, then `seeds`, then `recommended`.
pub fn pick_track_ids(
    seeds: Vec<Track>,
    recommended: Vec<Track>,
    selected: Option<Track>,
    limit: usize,
) -> Vec<String> {
    let mut tracks: Vec<Track> = Vec::with_capacity(seeds.len() + recommended.len() + 1);
    tracks.extend(selected);
    tracks.extend(seeds);
    tracks.extend(recommended);

    utils::remove_duplicate_tracks(&mut tracks);
    tracks.truncate(limit);
    tracks.into_iter().map(|t| t.id).collect()
}
