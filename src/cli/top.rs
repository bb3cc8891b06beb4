use tabled::Table;

use crate::{error, spotify::SpotifyClient, types::TrackTableRow, utils, warning};

pub async fn top(limit: u32) {
    let client = SpotifyClient::from_env().await;

    let pb = utils::spinner("Fetching top tracks...");
    let result = client.get_top_tracks(limit).await;
    pb.finish_and_clear();

    let tracks = match result {
        Ok(tracks) => tracks,
        Err(e) => error!("Failed to load top tracks. Err: {}", e),
    };

    if tracks.is_empty() {
        warning!("Spotify returned no top tracks");
        return;
    }

    let table_rows: Vec<TrackTableRow> = tracks
        .iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            rank: i + 1,
            name: t.name.clone(),
            artists: t.artist_names(),
            album: t.album.as_ref().map(|a| a.name.clone()).unwrap_or_default(),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
