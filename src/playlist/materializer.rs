use crate::{
    errors::ApiError,
    playlist::PlaylistApi,
    types::{CreatePlaylistRequest, Playlist},
    utils,
};

pub const DESCRIPTION_FEATURE_PLAYLIST: &str = "Playlist created based on audio features";
pub const DESCRIPTION_TEMPORARY_PLAYLIST: &str = "Temporary playlist created by your app";

/// Spotify's cap on URIs per append request.
pub const MAX_URIS_PER_REQUEST: usize = 100;

/// Creates a private playlist named `name` holding `track_ids` in order.
///
/// # Process
///
/// 1. Resolve the current user
/// 2. Create a private, non-collaborative playlist
/// 3. If Spotify returned an id, append the tracks as `spotify:track:<id>` URIs
///
/// # Errors
///
/// Any failed call is returned as is. When the append fails the playlist
/// created in step 2 stays behind, empty; nothing is rolled back.
pub async fn create_playlist<A: PlaylistApi>(
    api: &A,
    track_ids: &[String],
    name: &str,
) -> Result<Playlist, ApiError> {
    materialize(
        api,
        utils::to_track_uris(track_ids),
        name,
        DESCRIPTION_FEATURE_PLAYLIST,
    )
    .await
}

/// Same as [`create_playlist`] with the temporary playlist description.
pub async fn create_temporary_playlist<A: PlaylistApi>(
    api: &A,
    track_ids: &[String],
    name: &str,
) -> Result<Playlist, ApiError> {
    materialize(
        api,
        utils::to_track_uris(track_ids),
        name,
        DESCRIPTION_TEMPORARY_PLAYLIST,
    )
    .await
}

/// Copies every track of `source_playlist_id` into a new playlist.
///
/// Without a `name` the copy takes the source playlist's name. The source is
/// read completely before anything is created, so a source that cannot be
/// read leaves no trace.
pub async fn copy_playlist<A: PlaylistApi>(
    api: &A,
    source_playlist_id: &str,
    name: Option<&str>,
) -> Result<Playlist, ApiError> {
    let uris = read_playlist_uris(api, source_playlist_id).await?;
    let name = match name {
        Some(name) => name.to_string(),
        None => api.playlist(source_playlist_id).await?.name,
    };
    materialize(api, uris, &name, DESCRIPTION_FEATURE_PLAYLIST).await
}

/// Collects the track URIs of a playlist across all pages.
///
/// Items without a track are skipped. A track without a URI falls back to
/// the `spotify:track:<id>` form of its id.
pub async fn read_playlist_uris<A: PlaylistApi>(
    api: &A,
    playlist_id: &str,
) -> Result<Vec<String>, ApiError> {
    let mut uris = Vec::new();
    let mut offset = 0;

    loop {
        let page = api.playlist_tracks(playlist_id, offset).await?;
        let count = page.items.len();

        uris.extend(
            page.items
                .into_iter()
                .filter_map(|item| item.track)
                .filter_map(|track| match track.uri {
                    Some(uri) if !uri.is_empty() => Some(uri),
                    _ => track
                        .id
                        .filter(|id| !id.is_empty())
                        .map(|id| utils::to_track_uri(&id)),
                }),
        );

        if page.next.is_none() || count == 0 {
            break;
        }
        offset += count;
    }

    log::debug!("Read {} tracks from playlist {}", uris.len(), playlist_id);
    Ok(uris)
}

async fn materialize<A: PlaylistApi>(
    api: &A,
    uris: Vec<String>,
    name: &str,
    description: &str,
) -> Result<Playlist, ApiError> {
    log::debug!("Creating playlist: {}", name);
    log::debug!("Track URIs: {:?}", uris);

    let user = api.current_user().await?;
    log::debug!("User ID: {}", user.id);

    let request = CreatePlaylistRequest {
        name: name.to_string(),
        description: description.to_string(),
        public: false,
        collaborative: false,
    };
    let playlist = api.create_playlist(&user.id, &request).await?;

    if playlist.id.is_empty() {
        log::debug!("Spotify returned no playlist id for {}, skipping tracks", name);
        return Ok(playlist);
    }

    for chunk in uris.chunks(MAX_URIS_PER_REQUEST) {
        let snapshot_id = api.add_tracks(&playlist.id, chunk).await?;
        log::debug!(
            "Added {} tracks to {} (snapshot {})",
            chunk.len(),
            playlist.id,
            snapshot_id
        );
    }

    Ok(playlist)
}
