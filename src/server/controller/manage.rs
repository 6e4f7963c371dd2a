use axum::{
    extract::{Path, State},
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

/// GET /manage/{guild_id} - Management page of one of the user's guilds
///
/// # Path Parameters
/// - `guild_id`: Discord guild ID (u64)
///
/// # Returns
/// - `200 OK`: HTML management page
/// - `307 /`: No session cookie
/// - `307 <consent URL>`: Session cookie without a login
/// - `400 Bad Request`: `guild_id` is not a number
/// - `404 Not Found`: The user is not a member of the guild
/// - `401 Unauthorized`: Discord rejected the stored token; the login is removed
pub async fn manage(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(guild_id): Path<u64>,
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
        discord_service.fetch_guild(&token, guild_id)
    );

    let (user, guild) = match fetched {
        Ok(fetched) => fetched,
        Err(err) => {
            return Err(auth_service(&state)
                .discard_rejected_login(&session_id, err)
                .await)
        }
    };

    Ok(Html(render::render_manage_page(&user, &guild)).into_response())
}
