use chrono::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DISCORD_API_BASE_URL: &str = "https://discord.com/api/v10";

/// Permission bits requested when inviting the bot to a server.
const DEFAULT_BOT_PERMISSIONS: &str = "516020358208";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_SESSION_TTL_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,
    pub discord_bot_permissions: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,
    pub discord_api_base_url: String,

    pub bind_address: String,
    pub static_dir: String,

    pub session: SessionSettings,
}

/// Lifetime and cookie attributes of a login session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionSettings {
    /// How long a login record stays valid after the OAuth callback stored it.
    pub ttl: Duration,
    /// Whether cookies carry the `Secure` attribute.
    pub secure_cookies: bool,
}

impl SessionSettings {
    /// `Max-Age` for the `session_id` cookie, matching the server-side TTL.
    pub fn cookie_max_age(&self) -> time::Duration {
        time::Duration::seconds(self.ttl.num_seconds())
    }

    /// Records created before this instant are expired.
    pub fn expiry_cutoff(&self, now: chrono::DateTime<chrono::Utc>) -> chrono::DateTime<chrono::Utc> {
        now - self.ttl
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            ttl: Duration::days(DEFAULT_SESSION_TTL_DAYS),
            secure_cookies: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let discord_redirect_url = required("DISCORD_REDIRECT_URL")?;

        let ttl_days = match optional("SESSION_TTL_DAYS") {
            Some(value) => parse_positive_days(&value)?,
            None => DEFAULT_SESSION_TTL_DAYS,
        };

        let secure_cookies = match optional("COOKIE_SECURE") {
            Some(value) => parse_bool("COOKIE_SECURE", &value)?,
            None => discord_redirect_url.starts_with("https://"),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url,
            discord_bot_permissions: optional("DISCORD_BOT_PERMISSIONS")
                .unwrap_or_else(|| DEFAULT_BOT_PERMISSIONS.to_string()),
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            discord_api_base_url: DISCORD_API_BASE_URL.to_string(),
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            static_dir: optional("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            session: SessionSettings {
                ttl: Duration::days(ttl_days),
                secure_cookies,
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_positive_days(value: &str) -> Result<i64, ConfigError> {
    match value.trim().parse::<i64>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "SESSION_TTL_DAYS".to_string(),
            value: value.to_string(),
        }),
    }
}
