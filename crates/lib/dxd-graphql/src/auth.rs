//! OAuth2 client-credentials token acquisition for the outbound transport.
//!
//! The token cache is a transport collaborator concern: the content tools
//! themselves stay stateless and never see credentials.

use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

/// Tokens are refreshed this long before their reported expiry.
const REFRESH_SKEW: Duration = Duration::from_secs(30);
/// Assumed lifetime when the token endpoint omits `expires_in`.
const DEFAULT_TOKEN_TTL_SECS: u64 = 300;

#[derive(Debug)]
pub enum AuthError {
    Network(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(message) => write!(f, "token request failed: {message}"),
            Self::Status(status) => write!(f, "token endpoint returned status {status}"),
            Self::Decode(message) => write!(f, "invalid token response: {message}"),
        }
    }
}

impl Error for AuthError {}

/// Client-credentials grant against a configured token endpoint, with an
/// in-memory cached token refreshed ahead of expiry.
pub struct TokenProvider {
    http: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    cached: RwLock<Option<CachedToken>>,
}

#[derive(Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

impl TokenProvider {
    #[must_use]
    pub fn new(
        http: reqwest::Client,
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            http,
            token_url: token_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            cached: RwLock::new(None),
        }
    }

    /// Returns a bearer token, fetching a fresh one when the cached token is
    /// missing or expired.
    ///
    /// # Errors
    /// Returns an error if the token endpoint is unreachable, rejects the
    /// credentials, or responds with an unparseable body.
    pub async fn bearer_token(&self) -> Result<String, AuthError> {
        if let Some(token) = self.cached_token().await {
            return Ok(token);
        }

        let fresh = self.fetch_token().await?;
        let access_token = fresh.access_token.clone();
        *self.cached.write().await = Some(fresh);
        Ok(access_token)
    }

    async fn cached_token(&self) -> Option<String> {
        let guard = self.cached.read().await;
        guard
            .as_ref()
            .filter(|token| token.expires_at > Instant::now())
            .map(|token| token.access_token.clone())
    }

    async fn fetch_token(&self) -> Result<CachedToken, AuthError> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|err| AuthError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Status(status.as_u16()));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|err| AuthError::Decode(err.to_string()))?;

        let ttl = Duration::from_secs(body.expires_in.unwrap_or(DEFAULT_TOKEN_TTL_SECS));
        debug!(ttl_secs = ttl.as_secs(), "obtained access token");
        Ok(CachedToken {
            access_token: body.access_token,
            expires_at: Instant::now() + ttl.saturating_sub(REFRESH_SKEW),
        })
    }
}
