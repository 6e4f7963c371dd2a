//! In-memory `DiscordApi` used by tests.

use std::collections::HashMap;

use async_trait::async_trait;
use oauth2::AccessToken;
use serenity::all::{GuildInfo, User};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::discord::DiscordApi,
};

/// Discord stand-in with a fixed set of valid codes and tokens.
///
/// - `exchange_code` succeeds only for registered codes
/// - a token is valid iff a user is registered for it
/// - `unreachable()` makes every call fail as if Discord were down
#[derive(Default)]
pub struct MockDiscord {
    codes: HashMap<String, String>,
    users: HashMap<String, User>,
    guilds: HashMap<String, Vec<GuildInfo>>,
    unreachable: bool,
}

impl MockDiscord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `code` and exchanges it for `token`.
    pub fn with_code(mut self, code: &str, token: &str) -> Self {
        self.codes.insert(code.to_string(), token.to_string());
        self
    }

    /// Makes `token` valid and owned by `user`.
    pub fn with_user(mut self, token: &str, user: User) -> Self {
        self.users.insert(token.to_string(), user);
        self
    }

    /// Sets the guild list returned for `token`.
    pub fn with_guilds(mut self, token: &str, guilds: Vec<GuildInfo>) -> Self {
        self.guilds.insert(token.to_string(), guilds);
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    fn check_reachable(&self) -> Result<(), AppError> {
        if self.unreachable {
            return Err(AppError::DiscordUnavailable("connection refused".to_string()));
        }
        Ok(())
    }

    fn user_for(&self, token: &AccessToken) -> Result<&User, AppError> {
        self.users
            .get(token.secret())
            .ok_or(AppError::AuthErr(AuthError::TokenInvalid))
    }
}

#[async_trait]
impl DiscordApi for MockDiscord {
    async fn exchange_code(&self, code: String) -> Result<AccessToken, AppError> {
        self.check_reachable()?;

        self.codes
            .get(&code)
            .map(|token| AccessToken::new(token.clone()))
            .ok_or_else(|| AuthError::CodeExchangeFailed("invalid_grant".to_string()).into())
    }

    async fn fetch_user(&self, token: &AccessToken) -> Result<User, AppError> {
        self.check_reachable()?;

        self.user_for(token).cloned()
    }

    async fn fetch_guilds(&self, token: &AccessToken) -> Result<Vec<GuildInfo>, AppError> {
        self.check_reachable()?;
        self.user_for(token)?;

        Ok(self.guilds.get(token.secret()).cloned().unwrap_or_default())
    }
}
