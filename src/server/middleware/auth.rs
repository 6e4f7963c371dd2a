use axum_extra::extract::cookie::CookieJar;

use crate::server::{
    error::AppError, middleware::session::AuthSession, model::login::SessionState,
    service::auth::AuthService, state::AppState,
};

/// Resolves a request's `session_id` cookie against the login table.
///
/// Every route that depends on the login state calls `resolve()` once and branches on the
/// returned `SessionState`.
pub struct AuthGuard<'a> {
    state: &'a AppState,
    jar: &'a CookieJar,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, jar: &'a CookieJar) -> Self {
        Self { state, jar }
    }

    /// Determines the session state of the request.
    ///
    /// # Returns
    /// - `Ok(SessionState)` - Anonymous, unauthenticated or authenticated session
    /// - `Err(AppError::DbErr(_))` - Session store unavailable
    pub async fn resolve(&self) -> Result<SessionState, AppError> {
        let session_id = AuthSession::new(self.jar, self.state.session).session_id();

        AuthService::new(
            &self.state.db,
            self.state.discord.as_ref(),
            &self.state.oauth_client,
            self.state.session,
        )
        .resolve_session(session_id.as_deref())
        .await
    }
}
