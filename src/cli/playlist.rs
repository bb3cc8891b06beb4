use crate::{
    cli::select::run_selection,
    error, info,
    playlist::{copy_playlist, create_playlist, create_temporary_playlist},
    spotify::SpotifyClient,
    success,
    types::Playlist,
    utils, warning,
};

pub async fn playlist(
    feature: String,
    name: Option<String>,
    limit: usize,
    track: Option<String>,
    temporary: bool,
) {
    let client = SpotifyClient::from_env().await;

    let playlist_name = match name {
        Some(name) => name,
        None if temporary => utils::generate_temporary_playlist_id(),
        None => format!("{} extremes", feature),
    };

    let ids = run_selection(&client, feature.clone(), limit, track).await;
    if ids.is_empty() {
        warning!("No tracks selected for feature {}, creating empty playlist", feature);
    }

    info!("Create playlist {} with {} tracks", playlist_name, ids.len());

    let pb = utils::spinner(format!("Creating playlist {}...", playlist_name));
    let result = if temporary {
        create_temporary_playlist(&client, &ids, &playlist_name).await
    } else {
        create_playlist(&client, &ids, &playlist_name).await
    };
    pb.finish_and_clear();

    match result {
        Ok(playlist) => report_created(&playlist),
        Err(e) => error!("Failed to create playlist {}. Err: {}", playlist_name, e),
    }
}

pub async fn copy(source: String, name: Option<String>) {
    let client = SpotifyClient::from_env().await;

    match &name {
        Some(name) => info!("Copy playlist {} into {}", source, name),
        None => info!("Copy playlist {} under its own name", source),
    }

    let pb = utils::spinner(format!("Copying playlist {}...", source));
    let result = copy_playlist(&client, &source, name.as_deref()).await;
    pb.finish_and_clear();

    match result {
        Ok(playlist) => report_created(&playlist),
        Err(e) => error!("Failed to copy playlist {}. Err: {}", source, e),
    }
}

fn report_created(playlist: &Playlist) {
    if playlist.id.is_empty() {
        warning!(
            "Playlist {} was created without an id, no tracks were added",
            playlist.name
        );
        return;
    }

    success!("Playlist {} created ({})", playlist.name, playlist.id);
}
