use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use url::Url;

use crate::server::{config::Config, error::AppError, state::OAuth2Client};

/// Scopes the bot is invited with.
const BOT_SCOPES: &str = "bot applications.commands";

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for Discord API requests.
///
/// Redirects are disabled so a token request can never be forwarded to another host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr(_))` - TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for Discord from configuration.
///
/// # Arguments
/// - `config` - Application configuration with Discord credentials and endpoints
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorization and token endpoints set
/// - `Err(AppError::UrlErr(_))` - A configured URL is malformed
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.discord_auth_url.clone())?)
        .set_token_uri(TokenUrl::new(config.discord_token_url.clone())?)
        .set_redirect_uri(RedirectUrl::new(config.discord_redirect_url.clone())?);

    Ok(client)
}

/// Builds the URL that adds the bot to a Discord server.
///
/// # Arguments
/// - `config` - Application configuration with client ID and bot permissions
///
/// # Returns
/// - `Ok(Url)` - Bot installation URL
/// - `Err(AppError::UrlErr(_))` - The configured authorization URL is malformed
pub fn build_invite_url(config: &Config) -> Result<Url, AppError> {
    let url = Url::parse_with_params(
        &config.discord_auth_url,
        &[
            ("client_id", config.discord_client_id.as_str()),
            ("permissions", config.discord_bot_permissions.as_str()),
            ("scope", BOT_SCOPES),
        ],
    )?;

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::fixture::test_config;

    #[test]
    fn invite_url_requests_bot_scopes() {
        let url = build_invite_url(&test_config()).unwrap();

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(url.host_str(), Some("discord.com"));
        assert!(pairs.contains(&("client_id".to_string(), "979906554188939264".to_string())));
        assert!(pairs.contains(&("permissions".to_string(), "516020358208".to_string())));
        assert!(pairs.contains(&("scope".to_string(), "bot applications.commands".to_string())));
    }

    #[test]
    fn rejects_malformed_redirect_url() {
        let mut config = test_config();
        config.discord_redirect_url = "not a url".to_string();

        assert!(matches!(
            setup_oauth_client(&config),
            Err(AppError::UrlErr(_))
        ));
    }
}
