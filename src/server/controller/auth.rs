use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use dioxus_logger::tracing;
use serde::Deserialize;

use crate::server::{
    error::AppError,
    middleware::{
        auth::AuthGuard,
        session::{AuthSession, CsrfSession},
    },
    model::login::SessionState,
    service::auth::AuthService,
    state::AppState,
};

/// Query parameters of Discord's OAuth2 redirect back to `/auth`.
///
/// # Fields
/// - `code` - Authorization code used to exchange for an access token
/// - `state` - CSRF protection token that must match the `oauth_state` cookie
/// - `error` - Set instead of `code` when the user declined the consent screen
#[derive(Deserialize)]
pub struct CallbackParams {
    /// Authorization code from Discord for token exchange.
    pub code: Option<String>,
    /// CSRF state token to be validated against the cookie value.
    pub state: Option<String>,
    /// OAuth2 error code, e.g. `access_denied`.
    pub error: Option<String>,
}

pub(crate) fn auth_service(state: &AppState) -> AuthService<'_> {
    AuthService::new(
        &state.db,
        state.discord.as_ref(),
        &state.oauth_client,
        state.session,
    )
}

/// Redirects to Discord's consent screen.
///
/// A fresh CSRF token is stored in the `oauth_state` cookie of `jar`. The session
/// cookie in `jar`, if any, is left as is.
pub(crate) fn consent_redirect(state: &AppState, jar: CookieJar) -> Response {
    let (url, csrf_token) = auth_service(state).login_url();

    let jar = CsrfSession::new(&jar, state.session).set_token(csrf_token.secret().to_string());

    (jar, Redirect::temporary(url.as_str())).into_response()
}

/// GET /login - Start or resume a login
///
/// # Returns
/// - `307 /dashboard` - The session is already logged in
/// - `307 <consent URL>` - Otherwise; a new `session_id` cookie is issued
pub async fn login(State(state): State<AppState>, jar: CookieJar) -> Result<Response, AppError> {
    if let SessionState::Authenticated { .. } = AuthGuard::new(&state, &jar).resolve().await? {
        return Ok(Redirect::temporary("/dashboard").into_response());
    }

    let (jar, _session_id) = AuthSession::new(&jar, state.session).issue();

    Ok(consent_redirect(&state, jar))
}

/// GET /auth - Discord OAuth2 callback
///
/// Exchanges the authorization code and stores the token for the session.
///
/// # Returns
/// - `307 /dashboard` - Login stored
/// - `307 /` - No session cookie, or the user declined the consent screen
/// - `400 Bad Request` - CSRF state mismatch or Discord rejected the code
/// - `502 Bad Gateway` - Discord unreachable
pub async fn callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<CallbackParams>,
) -> Result<Response, AppError> {
    let Some(session_id) = AuthSession::new(&jar, state.session).session_id() else {
        return Ok(Redirect::temporary("/").into_response());
    };

    let Some(code) = params.code else {
        tracing::info!(
            "OAuth2 callback without code: {}",
            params.error.as_deref().unwrap_or("no error given")
        );
        return Ok(Redirect::temporary("/").into_response());
    };

    let csrf = CsrfSession::new(&jar, state.session);
    csrf.validate(params.state.as_deref())?;

    auth_service(&state).register_login(&session_id, code).await?;

    Ok((csrf.clear(), Redirect::temporary("/dashboard")).into_response())
}

/// GET /logout - End the session's login
///
/// The `session_id` cookie is kept; the next request re-enters the logged-out state.
///
/// # Returns
/// - `307 /home` - Login record removed (or already absent)
/// - `307 /` - No session cookie
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Result<Redirect, AppError> {
    let Some(session_id) = AuthSession::new(&jar, state.session).session_id() else {
        return Ok(Redirect::temporary("/"));
    };

    auth_service(&state).logout(&session_id).await?;

    Ok(Redirect::temporary("/home"))
}

/// GET /invite - Redirect to the bot installation URL
pub async fn invite(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(state.invite_url.as_str())
}
