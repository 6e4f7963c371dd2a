//! Shared fixtures for the backend's tests.

use std::sync::Arc;

use axum::http::{header, HeaderMap, HeaderValue};
use axum_extra::extract::cookie::CookieJar;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::{Config, SessionSettings},
    service::discord::{mock::MockDiscord, DiscordApi},
    startup,
    state::AppState,
};

/// Configuration pointing at Discord's real endpoints with dummy credentials.
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        discord_client_id: "979906554188939264".to_string(),
        discord_client_secret: "secret".to_string(),
        discord_redirect_url: "https://dashboard.example/auth".to_string(),
        discord_bot_permissions: "516020358208".to_string(),
        discord_auth_url: "https://discord.com/oauth2/authorize".to_string(),
        discord_token_url: "https://discord.com/api/oauth2/token".to_string(),
        discord_api_base_url: "https://discord.com/api/v10".to_string(),
        bind_address: "127.0.0.1:0".to_string(),
        static_dir: "static".to_string(),
        session: SessionSettings::default(),
    }
}

/// Application state over the given database and Discord mock.
pub fn test_state(db: &DatabaseConnection, discord: MockDiscord) -> AppState {
    let config = test_config();
    let discord: Arc<dyn DiscordApi> = Arc::new(discord);

    AppState::new(
        db.clone(),
        discord,
        startup::setup_oauth_client(&config).unwrap(),
        config.session,
        startup::build_invite_url(&config).unwrap(),
    )
}

/// Cookie jar as parsed from a request's `Cookie` header.
pub fn jar_with(cookie_header: &str) -> CookieJar {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_str(cookie_header).unwrap());
    CookieJar::from_headers(&headers)
}
