use std::path::PathBuf;

use chrono::Utc;

use crate::{config, types::Token};

/// Supplies the bearer token attached to every outbound request.
///
/// Returning `None` means no usable credential exists; the requester turns
/// that into `ApiError::MissingCredential` without touching the network.
pub trait CredentialProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// A fixed token, typically taken from `SPOTIFY_ACCESS_TOKEN`.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        StaticToken(token.into())
    }
}

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        let token = self.0.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }
}

pub struct TokenManager {
    token: Option<Token>,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token: Some(token) }
    }

    /// A manager without any token; every lookup reports a missing credential.
    pub fn empty() -> Self {
        TokenManager { token: None }
    }

    pub async fn load() -> Result<Self, String> {
        Self::load_from(config::token_path()).await
    }

    pub async fn load_from(path: PathBuf) -> Result<Self, String> {
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token: Some(token) })
    }

    fn is_expired(token: &Token) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= token.obtained_at.saturating_add(token.expires_in)
    }
}

impl CredentialProvider for TokenManager {
    fn bearer_token(&self) -> Option<String> {
        match &self.token {
            Some(token) if !token.access_token.is_empty() && !Self::is_expired(token) => {
                Some(token.access_token.clone())
            }
            _ => None,
        }
    }
}

/// Picks the credential source: the environment override wins over the cache.
pub async fn credentials() -> Box<dyn CredentialProvider> {
    if let Some(token) = config::access_token() {
        log::debug!("Using access token from SPOTIFY_ACCESS_TOKEN");
        return Box::new(StaticToken::new(token));
    }

    match TokenManager::load().await {
        Ok(manager) => Box::new(manager),
        Err(e) => {
            log::debug!("No cached token available: {}", e);
            Box::new(TokenManager::empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(access_token: &str, obtained_at: u64, expires_in: u64) -> Token {
        Token {
            access_token: access_token.to_string(),
            refresh_token: String::new(),
            scope: String::new(),
            expires_in,
            obtained_at,
        }
    }

    #[test]
    fn static_token_rejects_blank_values() {
        assert_eq!(StaticToken::new("abc").bearer_token().as_deref(), Some("abc"));
        assert!(StaticToken::new("   ").bearer_token().is_none());
    }

    #[test]
    fn expired_token_counts_as_missing() {
        let now = Utc::now().timestamp() as u64;
        let fresh = TokenManager::new(token("fresh", now, 3600));
        let stale = TokenManager::new(token("stale", now - 7200, 3600));

        assert_eq!(fresh.bearer_token().as_deref(), Some("fresh"));
        assert!(stale.bearer_token().is_none());
        assert!(TokenManager::empty().bearer_token().is_none());
    }
}
