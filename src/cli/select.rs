use crate::{
    error,
    playlist::select_tracks,
    spotify::SpotifyClient,
    success,
    types::SelectionRequest,
    utils, warning,
};

pub async fn select(feature: String, limit: usize, track: Option<String>) {
    let client = SpotifyClient::from_env().await;
    let ids = run_selection(&client, feature.clone(), limit, track).await;

    if ids.is_empty() {
        warning!("No tracks selected for feature {}", feature);
        return;
    }

    success!("Selected {} tracks for feature {}", ids.len(), feature);
    for (i, id) in ids.iter().enumerate() {
        println!("{:>3}. {}", i + 1, id);
    }
}

/// Runs the selector behind a spinner; exits on failure.
pub(crate) async fn run_selection(
    client: &SpotifyClient,
    feature: String,
    limit: usize,
    track: Option<String>,
) -> Vec<String> {
    let request = SelectionRequest {
        feature: feature.clone(),
        limit,
        selected_track_id: track,
    };

    let pb = utils::spinner(format!("Selecting tracks for feature {}...", feature));
    let result = select_tracks(client, &request).await;
    pb.finish_and_clear();

    match result {
        Ok(ids) => ids,
        Err(e) => error!("Cannot select tracks for feature {}. Err: {}", feature, e),
    }
}
