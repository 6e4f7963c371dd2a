//! Production `DiscordApi` backed by Discord's HTTP API.

use async_trait::async_trait;
use oauth2::{AuthorizationCode, RequestTokenError, TokenResponse};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serenity::all::{GuildInfo, User};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::discord::DiscordApi,
    state::OAuth2Client,
};

/// Discord API client using the application's OAuth2 credentials.
///
/// The code exchange goes through the `oauth2` client, user-scoped reads are plain
/// bearer-authenticated `reqwest` calls deserialized into Serenity models.
pub struct DiscordRestClient {
    http_client: reqwest::Client,
    oauth_client: OAuth2Client,
    api_base_url: String,
}

impl DiscordRestClient {
    /// Creates a new DiscordRestClient.
    ///
    /// # Arguments
    /// - `http_client` - HTTP client with redirects disabled
    /// - `oauth_client` - OAuth2 client configured for Discord
    /// - `api_base_url` - Discord API base URL, e.g. `https://discord.com/api/v10`
    pub fn new(
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        api_base_url: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Performs a bearer-authenticated GET against the Discord API.
    ///
    /// # Returns
    /// - `Ok(T)` - Deserialized response body
    /// - `Err(AppError::AuthErr(TokenInvalid))` - Discord answered 401
    /// - `Err(AppError::ReqwestErr(_))` - Transport error, other error status, or bad body
    async fn get<T: DeserializeOwned>(
        &self,
        token: &oauth2::AccessToken,
        path: &str,
    ) -> Result<T, AppError> {
        let response = self
            .http_client
            .get(format!("{}{}", self.api_base_url, path))
            .bearer_auth(token.secret())
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(AuthError::TokenInvalid.into());
        }

        Ok(response.error_for_status()?.json::<T>().await?)
    }
}

#[async_trait]
impl DiscordApi for DiscordRestClient {
    async fn exchange_code(&self, code: String) -> Result<oauth2::AccessToken, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(&self.http_client)
            .await
            .map_err(|err| match err {
                RequestTokenError::ServerResponse(response) => {
                    AppError::AuthErr(AuthError::CodeExchangeFailed(response.to_string()))
                }
                other => AppError::DiscordUnavailable(other.to_string()),
            })?;

        Ok(token.access_token().clone())
    }

    async fn fetch_user(&self, token: &oauth2::AccessToken) -> Result<User, AppError> {
        self.get(token, "/users/@me").await
    }

    async fn fetch_guilds(&self, token: &oauth2::AccessToken) -> Result<Vec<GuildInfo>, AppError> {
        self.get(token, "/users/@me/guilds").await
    }
}
