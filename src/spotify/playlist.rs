use crate::{
    errors::ApiError,
    playlist::PlaylistApi,
    spotify::SpotifyClient,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest, CurrentUser,
        Playlist, PlaylistTracksResponse,
    },
};

/// Largest page Spotify serves for playlist items.
pub const PLAYLIST_PAGE_SIZE: usize = 100;

impl SpotifyClient {
    pub async fn get_current_user(&self) -> Result<CurrentUser, ApiError> {
        self.get(self.api_endpoint(&["me"], &[])?).await
    }

    /// Creates a playlist owned by `user_id`.
    ///
    /// # Returns
    ///
    /// The playlist as Spotify reports it. The id may be empty if Spotify
    /// answered 2xx without one; callers must check before appending.
    pub async fn create_user_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<Playlist, ApiError> {
        let url = self.api_endpoint(&["users", user_id, "playlists"], &[])?;
        self.post(url, request).await
    }

    /// Appends track URIs to a playlist in a single request.
    ///
    /// Spotify rejects more than 100 URIs per request; batching is up to the caller.
    pub async fn append_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<String, ApiError> {
        let url = self.api_endpoint(&["playlists", playlist_id, "tracks"], &[])?;
        let body = AddTrackToPlaylistRequest {
            uris: uris.to_vec(),
        };
        let res = self.post::<AddTrackToPlaylistResponse, _>(url, &body).await?;
        Ok(res.snapshot_id)
    }

    pub async fn get_playlist(&self, playlist_id: &str) -> Result<Playlist, ApiError> {
        self.get(self.api_endpoint(&["playlists", playlist_id], &[])?).await
    }

    /// Reads one page of playlist items starting at `offset`.
    pub async fn get_playlist_tracks(
        &self,
        playlist_id: &str,
        offset: usize,
    ) -> Result<PlaylistTracksResponse, ApiError> {
        let url = self.api_endpoint(
            &["playlists", playlist_id, "tracks"],
            &[
                ("offset", offset.to_string()),
                ("limit", PLAYLIST_PAGE_SIZE.to_string()),
            ],
        )?;
        self.get(url).await
    }
}

impl PlaylistApi for SpotifyClient {
    async fn current_user(&self) -> Result<CurrentUser, ApiError> {
        self.get_current_user().await
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<Playlist, ApiError> {
        self.create_user_playlist(user_id, request).await
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<String, ApiError> {
        self.append_tracks(playlist_id, uris).await
    }

    async fn playlist(&self, playlist_id: &str) -> Result<Playlist, ApiError> {
        self.get_playlist(playlist_id).await
    }

    async fn playlist_tracks(
        &self,
        playlist_id: &str,
        offset: usize,
    ) -> Result<PlaylistTracksResponse, ApiError> {
        self.get_playlist_tracks(playlist_id, offset).await
    }
}
