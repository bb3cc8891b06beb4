use crate::{
    errors::ApiError,
    playlist::TrackCatalog,
    spotify::SpotifyClient,
    types::{FeatureExtremes, RecommendationsResponse, TopTracksResponse, Track},
};

impl SpotifyClient {
    /// Retrieves a single track by its Spotify id.
    pub async fn get_track(&self, id: &str) -> Result<Track, ApiError> {
        self.get(self.api_endpoint(&["tracks", id], &[])?).await
    }

    /// Requests `count` recommendations seeded by the given track ids.
    ///
    /// The seeds are sent comma-joined in the order given. Spotify may return
    /// fewer tracks than asked for; the caller gets whatever came back.
    ///
    /// # Arguments
    ///
    /// * `seed_ids` - Track ids biasing the recommendation (Spotify accepts up to 5)
    /// * `count` - Number of tracks to request
    pub async fn get_recommendations(
        &self,
        seed_ids: &[String],
        count: usize,
    ) -> Result<Vec<Track>, ApiError> {
        let url = self.api_endpoint(
            &["recommendations"],
            &[("limit", count.to_string()), ("seed_tracks", seed_ids.join(","))],
        )?;
        let res = self.get::<RecommendationsResponse>(url).await?;
        Ok(res.tracks)
    }

    /// Retrieves the current user's most played tracks.
    pub async fn get_top_tracks(&self, limit: u32) -> Result<Vec<Track>, ApiError> {
        let url = self.api_endpoint(&["me", "top", "tracks"], &[("limit", limit.to_string())])?;
        let res = self.get::<TopTracksResponse>(url).await?;
        Ok(res.items)
    }
}

impl TrackCatalog for SpotifyClient {
    async fn feature_extremes(
        &self,
        feature: &str,
        limit: usize,
    ) -> Result<Option<FeatureExtremes>, ApiError> {
        self.get_feature_extremes(feature, limit).await
    }

    async fn recommendations(&self, seed_ids: &[String], count: usize) -> Result<Vec<Track>, ApiError> {
        self.get_recommendations(seed_ids, count).await
    }

    async fn track(&self, id: &str) -> Result<Track, ApiError> {
        self.get_track(id).await
    }
}
