//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API and to the local
//! extremes service. It is the only place in featlist that performs HTTP
//! requests: every call goes through [`SpotifyClient::request`], which attaches
//! the bearer credential, serializes the body and turns non-2xx answers into
//! [`ApiError::UpstreamRequestFailed`].
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Server)
//!          ↓
//! Selection / Materialization (crate::playlist)
//!          ↓
//! Spotify Integration Layer
//!     ├── Tracks (single track, recommendations, top tracks)
//!     ├── Playlists (current user, create, append, read)
//!     └── Extremes (internal /api/getExtremeTracks lookup)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## API Coverage
//!
//! ### User Data
//! - `GET /me` - Current user profile, needed for playlist creation
//! - `GET /me/top/tracks` - The user's top tracks
//!
//! ### Tracks
//! - `GET /tracks/{id}` - A single track
//! - `GET /recommendations` - Recommendations seeded by track ids
//!
//! ### Playlist Operations
//! - `POST /users/{user_id}/playlists` - Create new playlists
//! - `POST /playlists/{playlist_id}/tracks` - Add tracks to playlists
//! - `GET /playlists/{playlist_id}` - Playlist metadata (name of a copy source)
//! - `GET /playlists/{playlist_id}/tracks` - Read playlist items page by page
//!
//! ### Internal
//! - `GET /api/getExtremeTracks` - Highest/lowest track per audio feature
//!
//! Ids are always passed as separate path segments to
//! [`SpotifyClient::api_endpoint`], which percent-encodes each one.
//!
//! ## Error Handling
//!
//! Nothing here retries. A missing credential fails before any I/O, a non-2xx
//! response carries its status code and reason phrase, and transport or JSON
//! decoding problems surface as [`ApiError::Http`].
//!
//! ## Credentials
//!
//! The client is constructed with a [`CredentialProvider`] and consults it on
//! every request, so a provider backed by a token cache always hands out the
//! token that is current at call time.

use std::sync::Arc;

use reqwest::{Client, Method, Url, header::CONTENT_TYPE};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    config,
    errors::ApiError,
    management::{self, CredentialProvider},
};

pub mod extremes;
pub mod playlist;
pub mod tracks;

pub struct SpotifyClient {
    http: Client,
    api_url: String,
    extremes_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl SpotifyClient {
    pub fn new(
        api_url: impl Into<String>,
        extremes_url: impl Into<String>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            extremes_url: extremes_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// Builds a client from the environment and the configured credential source.
    pub async fn from_env() -> Self {
        let credentials: Arc<dyn CredentialProvider> = Arc::from(management::credentials().await);
        Self::new(config::spotify_apiurl(), config::extremes_apiurl(), credentials)
    }

    /// Spotify Web API URL made of `segments` and query `params`.
    ///
    /// Each segment is percent-encoded on its own, so an id containing `/`
    /// or `?` stays a single path segment.
    pub fn api_endpoint(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<Url, ApiError> {
        build_url(&self.api_url, segments, params)
    }

    /// Extremes service URL made of `segments` and query `params`.
    pub fn extremes_endpoint(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<Url, ApiError> {
        build_url(&self.extremes_url, segments, params)
    }

    /// Sends one authenticated JSON request and decodes the JSON answer.
    ///
    /// # Errors
    ///
    /// - [`ApiError::MissingCredential`] when the provider has no token; no
    ///   request is sent in that case
    /// - [`ApiError::UpstreamRequestFailed`] for any non-2xx status
    /// - [`ApiError::Http`] for transport and decoding failures
    pub async fn request<T, B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let token = self
            .credentials
            .bearer_token()
            .ok_or(ApiError::MissingCredential)?;

        log::debug!("{} {}", method, url);
        let mut request = self
            .http
            .request(method, url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UpstreamRequestFailed {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }

    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::GET, url, None).await
    }

    pub async fn post<T, B>(&self, url: Url, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, url, Some(body)).await
    }
}

fn build_url(base: &str, segments: &[&str], params: &[(&str, String)]) -> Result<Url, ApiError> {
    let mut url =
        Url::parse(base).map_err(|e| ApiError::InvalidArgument(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidArgument(format!("{base} cannot carry a path")))?
        .pop_if_empty()
        .extend(segments);
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params);
    }
    Ok(url)
}
