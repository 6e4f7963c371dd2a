use chrono::Utc;
use dioxus_logger::tracing;
use oauth2::{AccessToken, CsrfToken, Scope};
use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{
    config::SessionSettings,
    data::login::LoginRepository,
    error::{auth::AuthError, AppError},
    model::login::SessionState,
    service::discord::DiscordApi,
    state::OAuth2Client,
};

/// Scopes requested on Discord's consent screen.
const LOGIN_SCOPES: [&str; 2] = ["identify", "guilds"];

/// Service for the Discord OAuth2 login lifecycle.
///
/// Ties the browser's `session_id` cookie to the access token obtained from Discord:
/// builds the consent URL, exchanges the callback code, resolves the session state of
/// incoming requests, and ends sessions on logout.
pub struct AuthService<'a> {
    /// Database connection for login records.
    pub db: &'a DatabaseConnection,
    /// Discord API used for the authorization code exchange.
    pub discord: &'a dyn DiscordApi,
    /// OAuth2 client for building the consent URL.
    pub oauth_client: &'a OAuth2Client,
    /// Session lifetime settings.
    pub session: SessionSettings,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `discord` - Discord API implementation
    /// - `oauth_client` - Reference to the configured OAuth2 client
    /// - `session` - Session lifetime settings
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        discord: &'a dyn DiscordApi,
        oauth_client: &'a OAuth2Client,
        session: SessionSettings,
    ) -> Self {
        Self {
            db,
            discord,
            oauth_client,
            session,
        }
    }

    fn login_repo(&self) -> LoginRepository<'a> {
        LoginRepository::new(self.db, self.session.expiry_cutoff(Utc::now()))
    }

    /// Generates the Discord OAuth2 consent URL with CSRF protection.
    ///
    /// Requests the `identify` and `guilds` scopes. Returns both the URL and the CSRF
    /// token embedded in its `state` parameter for callback validation.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Tuple containing the authorization URL and CSRF state token
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(LOGIN_SCOPES.iter().map(|scope| Scope::new(scope.to_string())))
            .url();

        (authorize_url, csrf_state)
    }

    /// Resolves where the request stands in the login lifecycle.
    ///
    /// # Arguments
    /// - `session_id` - Value of the `session_id` cookie, if one was sent
    ///
    /// # Returns
    /// - `Ok(SessionState::Anonymous)` - No cookie
    /// - `Ok(SessionState::Unauthenticated { .. })` - Cookie without a live login record
    /// - `Ok(SessionState::Authenticated { .. })` - Cookie mapped to a stored token
    /// - `Err(AppError::DbErr(_))` - Session store unavailable
    pub async fn resolve_session(&self, session_id: Option<&str>) -> Result<SessionState, AppError> {
        let Some(session_id) = session_id else {
            return Ok(SessionState::Anonymous);
        };

        let state = match self.login_repo().get_token(session_id).await? {
            Some(token) => SessionState::Authenticated {
                session_id: session_id.to_string(),
                token,
            },
            None => SessionState::Unauthenticated {
                session_id: session_id.to_string(),
            },
        };

        Ok(state)
    }

    /// Completes the login for a session after Discord's OAuth2 callback.
    ///
    /// Exchanges the authorization code for an access token and stores it for the
    /// session, replacing any previous login of the same session.
    ///
    /// # Arguments
    /// - `session_id` - Value of the `session_id` cookie
    /// - `authorization_code` - OAuth2 authorization code from Discord callback
    ///
    /// # Returns
    /// - `Ok(AccessToken)` - The token now stored for the session
    /// - `Err(AppError::AuthErr(CodeExchangeFailed))` - Discord rejected the code
    /// - `Err(AppError::DiscordUnavailable(_))` - Token endpoint unreachable
    /// - `Err(AppError::DbErr(_))` - Failed to store the login record
    pub async fn register_login(
        &self,
        session_id: &str,
        authorization_code: String,
    ) -> Result<AccessToken, AppError> {
        let token = self.discord.exchange_code(authorization_code).await?;

        self.login_repo().put(session_id, &token).await?;

        tracing::debug!("Stored Discord login for a session");

        Ok(token)
    }

    /// Ends the login of a session.
    ///
    /// The cookie itself stays with the client; the session simply has no login
    /// record anymore. Logging out a session that is not logged in is not an error.
    ///
    /// # Arguments
    /// - `session_id` - Value of the `session_id` cookie
    ///
    /// # Returns
    /// - `Ok(())` - Login record removed or already absent
    /// - `Err(AppError::DbErr(_))` - Session store unavailable
    pub async fn logout(&self, session_id: &str) -> Result<(), AppError> {
        self.login_repo().delete(session_id).await?;
        Ok(())
    }

    /// Deletes the session's login record when Discord rejected its token.
    ///
    /// The session falls back to the logged-out state, so the next `/login` starts a
    /// fresh consent. Other errors are returned untouched.
    ///
    /// # Arguments
    /// - `session_id` - Value of the `session_id` cookie
    /// - `err` - Error returned by a Discord call made with the session's token
    ///
    /// # Returns
    /// - `AppError` - The original error
    pub async fn discard_rejected_login(&self, session_id: &str, err: AppError) -> AppError {
        if let AppError::AuthErr(AuthError::TokenInvalid) = err {
            match self.logout(session_id).await {
                Ok(()) => tracing::info!("Removed login whose Discord token was rejected"),
                Err(delete_err) => {
                    tracing::error!("Failed to remove rejected login: {}", delete_err)
                }
            }
        }

        err
    }
}
