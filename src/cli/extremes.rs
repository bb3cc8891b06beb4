use tabled::Table;

use crate::{
    config, error,
    management::ExtremesStore,
    spotify::SpotifyClient,
    success,
    types::{ExtremesTableRow, FeatureExtremes, Track},
    utils, warning,
};

pub async fn set_extremes(feature: String, highest: String, lowest: String) {
    let mut store = open_store().await;
    let client = SpotifyClient::from_env().await;

    let pb = utils::spinner(format!("Resolving extremes for feature {}...", feature));
    let resolved = resolve_pair(&client, &highest, &lowest).await;
    pb.finish_and_clear();

    let extremes = match resolved {
        Ok(extremes) => extremes,
        Err(e) => error!("Cannot resolve tracks for feature {}. Err: {}", feature, e),
    };

    store.set(feature.clone(), extremes);
    if let Err(e) = store.close().await {
        error!("Failed to save extremes store. Err: {}", e);
    }

    success!("Stored extremes for feature {}", feature);
}

pub async fn remove_extremes(feature: String) {
    let mut store = open_store().await;

    if store.remove(&feature).is_none() {
        warning!("No extremes stored for feature {}", feature);
        return;
    }

    if let Err(e) = store.close().await {
        error!("Failed to save extremes store. Err: {}", e);
    }
    success!("Removed extremes for feature {}", feature);
}

pub async fn list_extremes() {
    let store = open_store().await;

    if store.is_empty() {
        warning!("No extremes stored in {}", store.path().display());
        return;
    }

    let table_rows: Vec<ExtremesTableRow> = store
        .features()
        .map(|(feature, extremes)| ExtremesTableRow {
            feature: feature.clone(),
            highest: describe(&extremes.highest),
            lowest: describe(&extremes.lowest),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}

async fn open_store() -> ExtremesStore {
    match ExtremesStore::open(config::extremes_path()).await {
        Ok(store) => store,
        Err(e) => error!("Cannot open extremes store. Err: {}", e),
    }
}

async fn resolve_pair(
    client: &SpotifyClient,
    highest: &str,
    lowest: &str,
) -> Result<FeatureExtremes, crate::errors::ApiError> {
    let highest = client.get_track(highest).await?;
    let lowest = client.get_track(lowest).await?;
    Ok(FeatureExtremes { highest, lowest })
}

fn describe(track: &Track) -> String {
    if track.name.is_empty() {
        return track.id.clone();
    }
    let artists = track.artist_names();
    if artists.is_empty() {
        format!("{} ({})", track.name, track.id)
    } else {
        format!("{} - {} ({})", track.name, artists, track.id)
    }
}
