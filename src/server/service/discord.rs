//! Discord REST API access on behalf of a logged-in user.
//!
//! `DiscordApi` is the seam between the application and Discord: the production
//! implementation lives in `rest`, tests substitute an in-memory mock. `DiscordService`
//! converts the raw Serenity objects into the projections the renderer consumes.

use async_trait::async_trait;
use oauth2::AccessToken;
use serenity::all::{GuildInfo, User};

use crate::server::{
    error::AppError,
    model::discord::{GuildSummary, UserProfile},
};

pub mod rest;

#[cfg(test)]
pub mod mock;

/// Operations the application performs against Discord with a user's OAuth2 token.
///
/// Implementations map failures onto `AppError`:
/// - rejected authorization code → `AuthError::CodeExchangeFailed`
/// - rejected access token → `AuthError::TokenInvalid`
/// - Discord unreachable or misbehaving → `AppError::ReqwestErr` / `AppError::DiscordUnavailable`
#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// Exchanges an OAuth2 authorization code for an access token.
    async fn exchange_code(&self, code: String) -> Result<AccessToken, AppError>;

    /// Fetches the user the token belongs to (`GET /users/@me`).
    async fn fetch_user(&self, token: &AccessToken) -> Result<User, AppError>;

    /// Fetches the guilds the token's user is a member of (`GET /users/@me/guilds`).
    async fn fetch_guilds(&self, token: &AccessToken) -> Result<Vec<GuildInfo>, AppError>;
}

/// Service building display projections from live Discord data.
///
/// Nothing is cached: every call goes to Discord so pages always reflect the
/// user's current state.
pub struct DiscordService<'a> {
    discord: &'a dyn DiscordApi,
}

impl<'a> DiscordService<'a> {
    /// Creates a new DiscordService instance.
    ///
    /// # Arguments
    /// - `discord` - Discord API implementation
    ///
    /// # Returns
    /// - `DiscordService` - New service instance
    pub fn new(discord: &'a dyn DiscordApi) -> Self {
        Self { discord }
    }

    /// Fetches the logged-in user's profile.
    ///
    /// # Arguments
    /// - `token` - Access token of the session
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - The user's current profile
    /// - `Err(AppError::AuthErr(TokenInvalid))` - Token expired or revoked
    /// - `Err(AppError::ReqwestErr(_))` - Discord unreachable
    pub async fn fetch_user(&self, token: &AccessToken) -> Result<UserProfile, AppError> {
        let user = self.discord.fetch_user(token).await?;

        Ok(UserProfile::from_serenity(&user))
    }

    /// Fetches all guilds the logged-in user is a member of.
    ///
    /// Guilds are returned in the order Discord lists them.
    ///
    /// # Arguments
    /// - `token` - Access token of the session
    ///
    /// # Returns
    /// - `Ok(Vec<GuildSummary>)` - The user's guilds
    /// - `Err(AppError::AuthErr(TokenInvalid))` - Token expired or revoked
    /// - `Err(AppError::ReqwestErr(_))` - Discord unreachable
    pub async fn fetch_guilds(&self, token: &AccessToken) -> Result<Vec<GuildSummary>, AppError> {
        let guilds = self.discord.fetch_guilds(token).await?;

        Ok(guilds.iter().map(GuildSummary::from_serenity).collect())
    }

    /// Fetches a single guild of the logged-in user.
    ///
    /// A user token cannot read arbitrary guilds, so the guild is looked up in the
    /// user's own guild list.
    ///
    /// # Arguments
    /// - `token` - Access token of the session
    /// - `guild_id` - Discord ID of the requested guild
    ///
    /// # Returns
    /// - `Ok(GuildSummary)` - The requested guild
    /// - `Err(AppError::NotFound(_))` - The user is not a member of the guild
    /// - `Err(AppError::AuthErr(TokenInvalid))` - Token expired or revoked
    pub async fn fetch_guild(
        &self,
        token: &AccessToken,
        guild_id: u64,
    ) -> Result<GuildSummary, AppError> {
        let guilds = self.discord.fetch_guilds(token).await?;

        guilds
            .iter()
            .find(|guild| guild.id.get() == guild_id)
            .map(GuildSummary::from_serenity)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Server {} was not found, or you are not a member of it.",
                    guild_id
                ))
            })
    }
}
