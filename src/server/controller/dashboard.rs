use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::server::{
    controller::auth::{auth_service, consent_redirect},
    error::AppError,
    middleware::auth::AuthGuard,
    model::login::SessionState,
    render,
    service::discord::DiscordService,
    state::AppState,
};

/// GET /dashboard - The logged-in user's tag and guild list
///
/// User and guilds are fetched live from Discord on every request.
///
/// # Returns
/// - `200 OK`: HTML dashboard
/// - `307 /`: No session cookie
/// - `307 <consent URL>`: Session cookie without a login
/// - `401 Unauthorized`: Discord rejected the stored token; the login is removed
/// - `502 Bad Gateway`: Discord unreachable
pub async fn dashboard(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let session = AuthGuard::new(&state, &jar).resolve().await?;
    let (session_id, token) = match session {
        SessionState::Anonymous => return Ok(Redirect::temporary("/").into_response()),
        SessionState::Unauthenticated { .. } => return Ok(consent_redirect(&state, jar)),
        SessionState::Authenticated { session_id, token } => (session_id, token),
    };

    let discord_service = DiscordService::new(state.discord.as_ref());
    let fetched = tokio::try_join!(
        discord_service.fetch_user(&token),
        discord_service.fetch_guilds(&token)
    );

    let (user, guilds) = match fetched {
        Ok(fetched) => fetched,
        Err(err) => {
            return Err(auth_service(&state)
                .discard_rejected_login(&session_id, err)
                .await)
        }
    };

    Ok(Html(render::render_dashboard(&user, &guilds)).into_response())
}
