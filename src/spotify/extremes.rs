use crate::{
    errors::ApiError,
    spotify::SpotifyClient,
    types::{ExtremeTracksResponse, FeatureExtremes},
};

pub const EXTREME_TRACKS_PATH: &str = "/api/getExtremeTracks";
const EXTREME_TRACKS_SEGMENTS: [&str; 2] = ["api", "getExtremeTracks"];

impl SpotifyClient {
    /// Looks up the highest and lowest track stored for `feature`.
    ///
    /// Calls the extremes service with the same bearer credential used for
    /// Spotify. A feature the service does not know yields `Ok(None)`; any
    /// non-2xx answer is an error.
    pub async fn get_feature_extremes(
        &self,
        feature: &str,
        limit: usize,
    ) -> Result<Option<FeatureExtremes>, ApiError> {
        let url = self.extremes_endpoint(
            &EXTREME_TRACKS_SEGMENTS,
            &[("feature", feature.to_string()), ("limit", limit.to_string())],
        )?;

        let mut res = self.get::<ExtremeTracksResponse>(url).await?;
        log::debug!("Tracks from extremes service: {:?}", res);
        Ok(res.remove(feature))
    }
}
