//! Configuration management for the feature playlist CLI.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including API base URLs, the access token override, the local
//! extremes service address and the location of the extremes store.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, net::SocketAddr, path::PathBuf, str::FromStr};

use crate::errors::ConfigError;

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_EXTREMES_API_URL: &str = "http://127.0.0.1:8888";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `featlist/.env`. A missing file is not an error:
/// every setting can also come from the process environment.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/featlist/.env`
/// - macOS: `~/Library/Application Support/featlist/.env`
/// - Windows: `%LOCALAPPDATA%/featlist/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The data directory cannot be created
/// - The `.env` file exists but cannot be read or parsed
pub async fn load_env() -> Result<(), ConfigError> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| ConfigError::Env(e.to_string()))?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| ConfigError::Env(e.to_string()))?;
    }
    Ok(())
}

/// Root of everything the application keeps on disk.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("featlist");
    path
}

/// Returns the address the local extremes service binds to.
///
/// Reads `SERVER_ADDRESS`, falling back to `127.0.0.1:8888`.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when the value is not a socket address.
pub fn server_addr() -> Result<SocketAddr, ConfigError> {
    let raw = env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string());
    SocketAddr::from_str(&raw).map_err(|e| ConfigError::Invalid {
        name: "SERVER_ADDRESS",
        reason: e.to_string(),
    })
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, falling back to `https://api.spotify.com/v1`.
/// Trailing slashes are stripped so endpoint paths can be appended directly.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Returns the base URL of the service answering `/api/getExtremeTracks`.
pub fn extremes_apiurl() -> String {
    env::var("EXTREMES_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_EXTREMES_API_URL.to_string())
}

/// Returns the access token override, if one is configured.
///
/// When `SPOTIFY_ACCESS_TOKEN` is set and non-empty it takes precedence over
/// the cached token file.
pub fn access_token() -> Option<String> {
    env::var("SPOTIFY_ACCESS_TOKEN")
        .ok()
        .filter(|token| !token.trim().is_empty())
}

/// Location of the extremes store document.
pub fn extremes_path() -> PathBuf {
    match env::var("FEATLIST_EXTREMES_PATH") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => data_dir().join("store/extremes.json"),
    }
}

/// Location of the token cache written by whatever tool performed the login.
pub fn token_path() -> PathBuf {
    data_dir().join("cache/token.json")
}
