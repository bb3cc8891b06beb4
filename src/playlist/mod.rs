//! Track selection and playlist materialization.
//!
//! [`select_tracks`] turns a feature name into an ordered, duplicate-free list
//! of track ids; [`create_playlist`] and friends turn such a list into a real
//! Spotify playlist. Both are written against the small capability traits
//! below rather than against [`crate::spotify::SpotifyClient`] directly.

use std::future::Future;

use crate::{
    errors::ApiError,
    types::{CreatePlaylistRequest, CurrentUser, FeatureExtremes, Playlist, PlaylistTracksResponse, Track},
};

mod materializer;
mod selector;

pub use materializer::{
    DESCRIPTION_FEATURE_PLAYLIST, DESCRIPTION_TEMPORARY_PLAYLIST, MAX_URIS_PER_REQUEST,
    copy_playlist, create_playlist, create_temporary_playlist, read_playlist_uris,
};
pub use selector::{pick_track_ids, select_tracks};

/// Where the selector gets its tracks from.
pub trait TrackCatalog {
    /// Highest and lowest track for `feature`, or `None` if nothing is stored.
    fn feature_extremes(
        &self,
        feature: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Option<FeatureExtremes>, ApiError>> + Send;

    fn recommendations(
        &self,
        seed_ids: &[String],
        count: usize,
    ) -> impl Future<Output = Result<Vec<Track>, ApiError>> + Send;

    fn track(&self, id: &str) -> impl Future<Output = Result<Track, ApiError>> + Send;
}

/// Playlist operations the materializer needs.
pub trait PlaylistApi {
    fn current_user(&self) -> impl Future<Output = Result<CurrentUser, ApiError>> + Send;

    fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> impl Future<Output = Result<Playlist, ApiError>> + Send;

    /// Appends at most [`MAX_URIS_PER_REQUEST`] URIs; returns the new snapshot id.
    fn add_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> impl Future<Output = Result<String, ApiError>> + Send;

    /// Playlist metadata; the materializer only reads the name.
    fn playlist(&self, playlist_id: &str) -> impl Future<Output = Result<Playlist, ApiError>> + Send;

    fn playlist_tracks(
        &self,
        playlist_id: &str,
        offset: usize,
    ) -> impl Future<Output = Result<PlaylistTracksResponse, ApiError>> + Send;
}
